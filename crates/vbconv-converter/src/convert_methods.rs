//! Conversion-method lookup.
//!
//! Source conversion operators (`CInt`, `CType(x, Double)`) coerce values
//! more liberally than a destination cast: they parse strings and round
//! floating-point values. Where the runtime offers an equivalent
//! `System.Convert` method, the converter calls it instead of casting.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use vbconv_semantic::{SpecialType, TypeSymbol};
use vbconv_syntax::PredefinedType;

/// Value conversions only; encodings such as `ToBase64String` are excluded.
static CONVERSION_METHODS: Lazy<FxHashMap<SpecialType, &'static str>> = Lazy::new(|| {
    [
        (SpecialType::Boolean, "System.Convert.ToBoolean"),
        (SpecialType::Byte, "System.Convert.ToByte"),
        (SpecialType::Char, "System.Convert.ToChar"),
        (SpecialType::DateTime, "System.Convert.ToDateTime"),
        (SpecialType::Decimal, "System.Convert.ToDecimal"),
        (SpecialType::Double, "System.Convert.ToDouble"),
        (SpecialType::Int16, "System.Convert.ToInt16"),
        (SpecialType::Int32, "System.Convert.ToInt32"),
        (SpecialType::Int64, "System.Convert.ToInt64"),
        (SpecialType::SByte, "System.Convert.ToSByte"),
        (SpecialType::Single, "System.Convert.ToSingle"),
        (SpecialType::String, "System.Convert.ToString"),
        (SpecialType::UInt16, "System.Convert.ToUInt16"),
        (SpecialType::UInt32, "System.Convert.ToUInt32"),
        (SpecialType::UInt64, "System.Convert.ToUInt64"),
    ]
    .into_iter()
    .collect()
});

/// Qualified conversion method for exactly this special type.
pub fn conversion_method(special: SpecialType) -> Option<&'static str> {
    CONVERSION_METHODS.get(&special).copied()
}

/// Conversion method for a semantic type; only special types have one.
pub fn conversion_method_for(ty: &TypeSymbol) -> Option<&'static str> {
    ty.special.and_then(conversion_method)
}

/// Special type named by a predefined type keyword.
pub fn special_type_of(keyword: PredefinedType) -> SpecialType {
    match keyword {
        PredefinedType::Boolean => SpecialType::Boolean,
        PredefinedType::Byte => SpecialType::Byte,
        PredefinedType::SByte => SpecialType::SByte,
        PredefinedType::Char => SpecialType::Char,
        PredefinedType::Date => SpecialType::DateTime,
        PredefinedType::Decimal => SpecialType::Decimal,
        PredefinedType::Double => SpecialType::Double,
        PredefinedType::Single => SpecialType::Single,
        PredefinedType::Short => SpecialType::Int16,
        PredefinedType::UShort => SpecialType::UInt16,
        PredefinedType::Integer => SpecialType::Int32,
        PredefinedType::UInteger => SpecialType::UInt32,
        PredefinedType::Long => SpecialType::Int64,
        PredefinedType::ULong => SpecialType::UInt64,
        PredefinedType::Object => SpecialType::Object,
        PredefinedType::String => SpecialType::String,
    }
}

#[cfg(test)]
#[path = "tests/convert_methods_tests.rs"]
mod tests;
