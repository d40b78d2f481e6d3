use super::*;
use vbconv_syntax::Modifier as M;

fn keywords(modifiers: &[M], context: TokenContext) -> Vec<&'static str> {
    convert_modifiers(modifiers, context)
        .expect("modifiers convert")
        .iter()
        .map(|m| m.keyword())
        .collect()
}

#[test]
fn class_members_default_to_public() {
    assert_eq!(keywords(&[], TokenContext::MemberInClass), vec!["public"]);
    assert_eq!(
        keywords(&[M::Private, M::Shared], TokenContext::MemberInClass),
        vec!["private", "static"]
    );
}

#[test]
fn fields_keep_private_default() {
    assert!(keywords(&[M::Dim], TokenContext::VariableOrConst).is_empty());
    assert_eq!(
        keywords(&[M::Public, M::Shared, M::ReadOnly], TokenContext::VariableOrConst),
        vec!["public", "static", "readonly"]
    );
}

#[test]
fn read_only_is_dropped_outside_fields() {
    assert_eq!(
        keywords(&[M::Public, M::ReadOnly], TokenContext::MemberInClass),
        vec!["public"]
    );
}

#[test]
fn module_members_become_static() {
    assert_eq!(
        keywords(&[M::Friend], TokenContext::MemberInModule),
        vec!["internal", "static"]
    );
    assert_eq!(
        keywords(&[M::Public, M::Shared], TokenContext::MemberInModule),
        vec!["public", "static"]
    );
    assert_eq!(
        keywords(&[M::Const], TokenContext::MemberInModule),
        vec!["public", "const"]
    );
}

#[test]
fn interface_members_drop_visibility() {
    assert!(keywords(&[M::Public], TokenContext::MemberInInterface).is_empty());
    assert_eq!(
        keywords(&[M::Shadows], TokenContext::MemberInInterface),
        vec!["new"]
    );
}

#[test]
fn sealed_is_not_duplicated() {
    assert_eq!(
        keywords(&[M::NotInheritable, M::NotOverridable], TokenContext::Global),
        vec!["sealed"]
    );
}

#[test]
fn protected_friend_keeps_both_keywords() {
    assert_eq!(
        keywords(&[M::Protected, M::Friend, M::Overridable], TokenContext::MemberInClass),
        vec!["protected", "internal", "virtual"]
    );
}

#[test]
fn static_locals_are_unsupported() {
    let err = convert_modifiers(&[M::Static], TokenContext::Local).unwrap_err();
    assert!(matches!(err, ConversionError::Unsupported { .. }));
}

#[test]
fn binary_operator_table() {
    use vbconv_csharp::BinaryOperator as C;
    use vbconv_syntax::BinaryOperator as B;

    let cases = [
        (B::Concatenate, C::Add),
        (B::IntegerDivide, C::Divide),
        (B::Modulo, C::Modulo),
        (B::Is, C::Equals),
        (B::IsNot, C::NotEquals),
        (B::And, C::BitwiseAnd),
        (B::AndAlso, C::LogicalAnd),
        (B::OrElse, C::LogicalOr),
        (B::Xor, C::ExclusiveOr),
    ];
    for (source, expected) in cases {
        assert_eq!(
            convert_binary_operator(source).unwrap(),
            BinaryMapping::Operator(expected),
            "{source:?}"
        );
    }
    assert_eq!(convert_binary_operator(B::Power).unwrap(), BinaryMapping::Power);
    assert!(convert_binary_operator(B::Like).is_err());
}

#[test]
fn assignment_operator_table() {
    use vbconv_csharp::AssignmentOperator as C;
    use vbconv_syntax::AssignmentOperator as A;

    assert_eq!(convert_assignment_operator(A::Concatenate).unwrap(), C::Add);
    assert_eq!(convert_assignment_operator(A::IntegerDivide).unwrap(), C::Divide);
    let err = convert_assignment_operator(A::Power).unwrap_err();
    assert!(err.to_string().contains("not supported"));
}

#[test]
fn date_has_no_keyword() {
    assert_eq!(
        convert_predefined_type(vbconv_syntax::PredefinedType::Date),
        vbconv_csharp::TypeSyntax::named("System.DateTime")
    );
    assert_eq!(
        convert_predefined_type(vbconv_syntax::PredefinedType::Single),
        vbconv_csharp::TypeSyntax::Predefined(vbconv_csharp::PredefinedType::Float)
    );
}

#[test]
fn identifiers_escape_destination_keywords() {
    assert_eq!(convert_identifier("[Class]"), "Class");
    assert_eq!(convert_identifier("[lock]"), "@lock");
    assert_eq!(convert_identifier("base"), "@base");
    assert_eq!(convert_identifier("count"), "count");
}

#[test]
fn numeric_literals() {
    assert_eq!(convert_numeric_literal("42").unwrap(), "42");
    assert_eq!(convert_numeric_literal("&HFF").unwrap(), "0xFF");
    assert_eq!(convert_numeric_literal("&hffL").unwrap(), "0xFFL");
    assert_eq!(convert_numeric_literal("&O17").unwrap(), "15");
    assert_eq!(convert_numeric_literal("&B101").unwrap(), "0b101");
    assert_eq!(convert_numeric_literal("1.5D").unwrap(), "1.5M");
    assert_eq!(convert_numeric_literal("2.5!").unwrap(), "2.5F");
    assert_eq!(convert_numeric_literal("3R").unwrap(), "3D");
    assert_eq!(convert_numeric_literal("10UI").unwrap(), "10U");
    assert_eq!(convert_numeric_literal("10UL").unwrap(), "10UL");
    assert_eq!(convert_numeric_literal("7S").unwrap(), "7");
    assert_eq!(convert_numeric_literal("7%").unwrap(), "7");
    assert!(convert_numeric_literal("&O19").is_err());
}
