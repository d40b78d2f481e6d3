use super::*;

#[test]
fn test_apostrophe_comment_becomes_line_comment() {
    assert_eq!(convert_comment("' counts items"), "// counts items");
}

#[test]
fn test_doc_comment_keeps_triple_slash() {
    assert_eq!(
        convert_comment("''' <summary>Adds</summary>"),
        "/// <summary>Adds</summary>"
    );
}

#[test]
fn test_rem_comment_is_case_insensitive() {
    assert_eq!(convert_comment("REM old style"), "// old style");
    assert_eq!(convert_comment("rem"), "//");
}

#[test]
fn test_rem_prefix_of_identifier_is_not_a_comment_keyword() {
    assert_eq!(convert_comment("remainder"), "// remainder");
}

#[test]
fn test_trivia_convert_rewrites_leading_and_trailing() {
    let trivia = Trivia {
        leading: vec!["' first".to_string(), "' second".to_string()],
        trailing: Some("' after".to_string()),
    };
    let converted = trivia.convert();
    assert_eq!(converted.leading, vec!["// first", "// second"]);
    assert_eq!(converted.trailing.as_deref(), Some("// after"));
}

#[test]
fn test_trivia_deserializes_with_missing_fields() {
    let trivia: Trivia = serde_json::from_str("{}").unwrap();
    assert!(trivia.is_empty());
}
