use super::*;
use vbconv_semantic::{ParameterSymbol, SemanticTable, SymbolKind, TypeKind};
use vbconv_syntax::SyntaxBuilder;

fn method(name: &str, parameters: Vec<ParameterSymbol>) -> Symbol {
    Symbol::new(name, SymbolKind::Method).with_parameters(parameters)
}

#[test]
fn resolve_prefers_bound_symbol() {
    let mut table = SemanticTable::new();
    table.set_symbol(NodeId(1), method("Run", Vec::new()));
    let helper = SemanticHelper::new(&table);
    assert_eq!(helper.resolve_symbol(NodeId(1)).unwrap().name, "Run");
    assert!(helper.resolve_symbol(NodeId(2)).is_none());
}

#[test]
fn single_candidate_collapses() {
    let mut table = SemanticTable::new();
    table.set_candidates(NodeId(1), vec![method("Only", Vec::new())]);
    table.set_candidates(
        NodeId(2),
        vec![method("A", Vec::new()), method("B", Vec::new())],
    );
    let helper = SemanticHelper::new(&table);
    assert_eq!(helper.resolve_symbol(NodeId(1)).unwrap().name, "Only");
    assert!(helper.resolve_symbol(NodeId(2)).is_none());
}

#[test]
fn passing_kind_by_position_and_name() {
    let table = SemanticTable::new();
    let helper = SemanticHelper::new(&table);
    let callee = method(
        "Swap",
        vec![
            ParameterSymbol::new("left", RefKind::Ref),
            ParameterSymbol::new("result", RefKind::Out),
            ParameterSymbol::new("count", RefKind::None),
        ],
    );
    assert_eq!(
        helper.parameter_passing_kind(&callee, 0, None),
        ParameterPassing::ByReference
    );
    assert_eq!(
        helper.parameter_passing_kind(&callee, 1, None),
        ParameterPassing::Out
    );
    assert_eq!(
        helper.parameter_passing_kind(&callee, 2, Some("LEFT")),
        ParameterPassing::ByReference
    );
    assert_eq!(
        helper.parameter_passing_kind(&callee, 7, None),
        ParameterPassing::ByValue
    );
}

#[test]
fn excess_param_array_arguments_are_by_value() {
    let table = SemanticTable::new();
    let helper = SemanticHelper::new(&table);
    let mut values = ParameterSymbol::new("values", RefKind::None);
    values.is_params = true;
    let callee = method("Sum", vec![values]);
    for position in 0..3 {
        assert_eq!(
            helper.parameter_passing_kind(&callee, position, None),
            ParameterPassing::ByValue
        );
    }
}

#[test]
fn element_access_detection() {
    let table = SemanticTable::new();
    let helper = SemanticHelper::new(&table);

    let mut indexer = Symbol::new("Item", SymbolKind::Property);
    indexer.is_indexer = true;
    assert!(helper.is_indexer_or_array_access(Some(&indexer), None));

    let int = TypeSymbol::special(SpecialType::Int32);
    let array_field =
        Symbol::new("values", SymbolKind::Field).with_type(TypeSymbol::array(int.clone()));
    assert!(helper.is_indexer_or_array_access(None, Some(&array_field)));

    let array_method =
        Symbol::new("GetValues", SymbolKind::Method).with_type(TypeSymbol::array(int));
    assert!(!helper.is_indexer_or_array_access(None, Some(&array_method)));
    assert!(!helper.is_indexer_or_array_access(None, None));
}

#[test]
fn names_in_scope_ignore_case() {
    let mut table = SemanticTable::new();
    table.add_names_in_scope(NodeId(3), ["Counter"]);
    let helper = SemanticHelper::new(&table);
    assert!(helper.is_name_in_scope(NodeId(3), "counter"));
    assert!(!helper.is_name_in_scope(NodeId(3), "other"));
}

#[test]
fn predefined_type_syntax_needs_no_model() {
    let table = SemanticTable::new();
    let helper = SemanticHelper::new(&table);
    let b = SyntaxBuilder::new();
    let ty = helper
        .type_of_syntax(&b.predefined(vbconv_syntax::PredefinedType::Integer))
        .unwrap();
    assert_eq!(ty.special, Some(SpecialType::Int32));
    assert!(helper.type_of_syntax(&b.named_type("Customer")).is_none());
}

#[test]
fn enclosing_body_return_types() {
    let int = TypeSymbol::special(SpecialType::Int32);
    let function = EnclosingBody::Function {
        return_type: Some(int.clone()),
    };
    assert_eq!(function.return_type(), Some(&int));
    assert!(function.returns_value());

    let sub_lambda = EnclosingBody::Lambda { return_type: None };
    assert!(sub_lambda.return_type().is_none());
    assert!(!sub_lambda.returns_value());

    let getter = EnclosingBody::Getter {
        property_type: Some(TypeSymbol::named("Widget", TypeKind::Class)),
    };
    assert_eq!(getter.return_type().unwrap().display_name, "Widget");
    assert!(EnclosingBody::Setter.return_type().is_none());
}
