use super::*;
use vbconv_semantic::TypeKind;

#[test]
fn integral_types_map_to_convert_methods() {
    assert_eq!(
        conversion_method(SpecialType::Int32),
        Some("System.Convert.ToInt32")
    );
    assert_eq!(
        conversion_method(SpecialType::UInt64),
        Some("System.Convert.ToUInt64")
    );
}

#[test]
fn object_and_void_have_no_method() {
    assert_eq!(conversion_method(SpecialType::Object), None);
    assert_eq!(conversion_method(SpecialType::Void), None);
}

#[test]
fn lookup_requires_a_special_type() {
    let named = TypeSymbol::named("Customer", TypeKind::Class);
    assert_eq!(conversion_method_for(&named), None);
    assert_eq!(
        conversion_method_for(&TypeSymbol::special(SpecialType::Double)),
        Some("System.Convert.ToDouble")
    );
}

#[test]
fn predefined_keywords_name_special_types() {
    assert_eq!(special_type_of(PredefinedType::Integer), SpecialType::Int32);
    assert_eq!(special_type_of(PredefinedType::Date), SpecialType::DateTime);
    assert_eq!(special_type_of(PredefinedType::Single), SpecialType::Single);
}

#[test]
fn table_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| conversion_method(SpecialType::String)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some("System.Convert.ToString"));
    }
}
