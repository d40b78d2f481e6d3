use super::*;
use vbconv_common::diagnostics::diagnostic_codes;
use vbconv_syntax::{BlockKind, StatementKind, SyntaxBuilder};

fn unit(path: &str, tree: vb::CompilationUnit) -> TranslationUnit {
    TranslationUnit {
        path: path.to_string(),
        tree,
        semantics: SemanticTable::new(),
    }
}

fn widget(b: &SyntaxBuilder, body: Vec<vb::Statement>) -> vb::CompilationUnit {
    b.compilation_unit(vec![b.class("Widget", vec![b.sub("Run", Vec::new(), body)])])
}

#[test]
fn empty_batch_is_an_error() {
    let error = convert_batch(&[], &ConvertOptions::default()).unwrap_err();
    assert_eq!(error, BatchError::NoUnits);
    assert_eq!(error.code(), diagnostic_codes::NO_TRANSLATABLE_UNITS);
}

#[test]
fn output_follows_input_order() {
    let b = SyntaxBuilder::new();
    let units: Vec<TranslationUnit> = (0..16)
        .map(|i| unit(&format!("File{i}.vb"), widget(&b, Vec::new())))
        .collect();
    let output = convert_batch(&units, &ConvertOptions::default()).unwrap();
    assert!(output.is_success());
    let paths: Vec<&str> = output.converted.iter().map(|(path, _)| path.as_str()).collect();
    let expected: Vec<String> = (0..16).map(|i| format!("File{i}.vb")).collect();
    assert_eq!(paths, expected);
}

#[test]
fn failing_unit_does_not_stop_the_others() {
    let b = SyntaxBuilder::new();
    let goto = b.stmt(StatementKind::GoTo {
        label: "Retry".to_string(),
    });
    let units = vec![
        unit("Good.vb", widget(&b, Vec::new())),
        unit("Bad.vb", widget(&b, vec![goto])),
        unit("AlsoGood.vb", widget(&b, Vec::new())),
    ];
    let output = convert_batch(&units, &ConvertOptions::default()).unwrap();

    assert!(!output.is_success());
    assert_eq!(output.converted.len(), 2);
    assert_eq!(output.converted[0].0, "Good.vb");
    assert_eq!(output.converted[1].0, "AlsoGood.vb");
    assert_eq!(
        output.failures,
        vec![UnitFailure {
            path: "Bad.vb".to_string(),
            error: ConversionError::unimplemented("GoToStatement"),
        }]
    );
}

#[test]
fn failure_diagnostic_names_file_and_kind() {
    let failure = UnitFailure {
        path: "Bad.vb".to_string(),
        error: ConversionError::unsupported("ExitStatement", "Exit Try has no C# form"),
    };
    let diagnostic = failure.to_diagnostic();
    assert!(diagnostic.is_error());
    assert_eq!(diagnostic.code, diagnostic_codes::UNSUPPORTED_CONSTRUCT);
    assert_eq!(
        diagnostic.to_string(),
        "Bad.vb: error VBC1002: ExitStatement not supported: Exit Try has no C# form"
    );
}

#[test]
fn converted_text_uses_configured_indent() {
    let b = SyntaxBuilder::new();
    let body = vec![b.stmt(StatementKind::Exit {
        block: BlockKind::Sub,
    })];
    let units = vec![unit("Widget.vb", widget(&b, body))];
    let options = ConvertOptions {
        indent_width: 2,
        ..ConvertOptions::default()
    };
    let output = convert_batch(&units, &options).unwrap();
    let (_, code) = &output.converted[0];
    assert!(code.contains("\n  public void Run()\n  {\n    return;\n  }"), "{code}");
}

#[test]
fn convert_unit_returns_the_tree() {
    let b = SyntaxBuilder::new();
    let tree = widget(&b, Vec::new());
    let converted = convert_unit(&tree, &SemanticTable::new(), &ConvertOptions::default()).unwrap();
    assert_eq!(converted.members.len(), 1);
}
