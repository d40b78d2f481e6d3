use super::*;
use crate::statements::StatementKind;

#[test]
fn test_ids_are_unique_and_increasing() {
    let b = SyntaxBuilder::new();
    let first = b.next_id();
    let second = b.next_id();
    assert!(second > first);
    let expr = b.ident("x");
    assert!(expr.id() > second);
}

#[test]
fn test_dotted_name_builds_left_nested_qualified_name() {
    let b = SyntaxBuilder::new();
    let name = b.name("System.Collections.Generic");
    let Name::Qualified { left, right, .. } = name else {
        panic!("expected qualified name");
    };
    assert_eq!(right.identifier, "Generic");
    assert_eq!(left.last_identifier(), "Collections");
}

#[test]
fn test_global_prefix_builds_global_name() {
    let b = SyntaxBuilder::new();
    let Name::Qualified { left, .. } = b.name("Global.System") else {
        panic!("expected qualified name");
    };
    assert!(matches!(*left, Name::Global { .. }));
}

#[test]
fn test_dim_builds_single_declarator() {
    let b = SyntaxBuilder::new();
    let stmt = b.dim("x", Some(b.predefined(PredefinedType::Integer)), Some(b.int(1)));
    let StatementKind::LocalDeclaration {
        modifiers,
        declarators,
    } = &stmt.kind
    else {
        panic!("expected local declaration");
    };
    assert_eq!(modifiers, &vec![Modifier::Dim]);
    assert_eq!(declarators.len(), 1);
    assert_eq!(declarators[0].names[0].identifier, "x");
    assert_eq!(stmt.kind_name(), "LocalDeclarationStatement");
}

#[test]
fn test_escaped_identifier_is_unescaped() {
    let b = SyntaxBuilder::new();
    assert_eq!(b.simple_name("[Class]").unescaped(), "Class");
    assert_eq!(b.simple_name("Plain").unescaped(), "Plain");
}
