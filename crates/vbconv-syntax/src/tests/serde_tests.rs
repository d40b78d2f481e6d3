use super::*;

#[test]
fn test_statement_json_uses_kind_tag_and_defaults() {
    let json = r#"{
        "id": 7,
        "kind": "Return",
        "expression": { "kind": "Literal", "id": 8, "value": { "type": "Numeric", "value": "42" } }
    }"#;
    let stmt: Statement = serde_json::from_str(json).unwrap();
    assert_eq!(stmt.id, NodeId(7));
    assert!(stmt.trivia.is_empty());
    let StatementKind::Return {
        expression: Some(Expr::Literal { value, .. }),
    } = stmt.kind
    else {
        panic!("expected return with literal");
    };
    assert_eq!(value, LiteralValue::Numeric("42".to_string()));
}

#[test]
fn test_unit_statement_kinds_deserialize() {
    let stmt: Statement = serde_json::from_str(r#"{ "id": 1, "kind": "Stop" }"#).unwrap();
    assert_eq!(stmt.kind, StatementKind::Stop);
}

#[test]
fn test_declaration_round_trips_through_json() {
    let b = SyntaxBuilder::new();
    let unit = b.compilation_unit(vec![b.class(
        "Widget",
        vec![b.sub("Run", vec![], vec![b.stmt(StatementKind::End)])],
    )]);
    let json = serde_json::to_string(&unit).unwrap();
    let back: CompilationUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, unit);
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result: Result<Statement, _> =
        serde_json::from_str(r#"{ "id": 1, "kind": "NoSuchStatement" }"#);
    assert!(result.is_err());
}
