use super::*;

#[test]
fn test_error_display_includes_file_and_code() {
    let diag = Diagnostic::error(
        "src/Program.vb",
        "OnErrorGoToStatement not implemented!",
        diagnostic_codes::UNIMPLEMENTED_CONSTRUCT,
    );
    assert!(diag.is_error());
    assert_eq!(
        diag.to_string(),
        "src/Program.vb: error VBC1001: OnErrorGoToStatement not implemented!"
    );
}

#[test]
fn test_batch_level_diagnostic_omits_file() {
    let diag = Diagnostic::error(
        "",
        "no translatable units found",
        diagnostic_codes::NO_TRANSLATABLE_UNITS,
    );
    assert_eq!(
        diag.to_string(),
        "error VBC1000: no translatable units found"
    );
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning("a.vb", "dropped", diagnostic_codes::DROPPED_MODIFIER);
    assert!(!diag.is_error());
}
