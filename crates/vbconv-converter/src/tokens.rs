//! Token and modifier mapping.
//!
//! Pure functions from source tokens to destination tokens. Modifiers depend
//! on where they appear, so modifier conversion takes a [`TokenContext`]:
//! the same `Public` is kept on a class member, dropped on an interface
//! member, and synthesized on a module member that omitted it.

use crate::error::{ConversionError, ConversionResult};
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use vbconv_csharp as cs;
use vbconv_syntax as vb;
use vbconv_syntax::node::unescape_identifier;

/// Syntactic position a modifier list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenContext {
    /// Top-level and nested type declarations other than modules/interfaces.
    Global,
    InterfaceOrModule,
    /// Members whose container kind does not affect their modifiers.
    Member,
    MemberInClass,
    MemberInInterface,
    MemberInModule,
    MemberInStruct,
    /// Fields and constants.
    VariableOrConst,
    /// Local declarations.
    Local,
}

impl TokenContext {
    /// Member context for declarations directly inside a type block.
    pub fn for_container(kind: vb::TypeBlockKind) -> Self {
        match kind {
            vb::TypeBlockKind::Class => TokenContext::MemberInClass,
            vb::TypeBlockKind::Module => TokenContext::MemberInModule,
            vb::TypeBlockKind::Interface => TokenContext::MemberInInterface,
            vb::TypeBlockKind::Structure => TokenContext::MemberInStruct,
        }
    }

    /// Source members default to public; destination members default to
    /// private, so the visibility has to be spelled out.
    fn defaults_to_public(self) -> bool {
        matches!(
            self,
            TokenContext::Member
                | TokenContext::MemberInClass
                | TokenContext::MemberInModule
                | TokenContext::MemberInStruct
        )
    }
}

// =============================================================================
// Modifiers
// =============================================================================

/// Convert a modifier list. Duplicates produced by the mapping (both
/// `NotOverridable` and `NotInheritable` become `sealed`) are collapsed.
pub fn convert_modifiers(
    modifiers: &[vb::Modifier],
    context: TokenContext,
) -> ConversionResult<cs::Modifiers> {
    let mut converted = cs::Modifiers::new();
    let has_visibility = modifiers.iter().any(|m| m.is_visibility());
    if context.defaults_to_public() && !has_visibility {
        converted.push(cs::Modifier::Public);
    }

    for &modifier in modifiers {
        if context == TokenContext::MemberInInterface && modifier.is_visibility() {
            continue;
        }
        if let Some(token) = convert_modifier(modifier, context)?
            && !converted.contains(&token)
        {
            converted.push(token);
        }
    }

    if context == TokenContext::MemberInModule
        && !converted.contains(&cs::Modifier::Static)
        && !converted.contains(&cs::Modifier::Const)
    {
        converted.push(cs::Modifier::Static);
    }
    Ok(converted)
}

/// Convert one modifier; `None` means it has no destination spelling and is
/// dropped without changing meaning.
pub fn convert_modifier(
    modifier: vb::Modifier,
    context: TokenContext,
) -> ConversionResult<Option<cs::Modifier>> {
    use vb::Modifier as M;

    let token = match modifier {
        M::Public => cs::Modifier::Public,
        M::Private => cs::Modifier::Private,
        M::Protected => cs::Modifier::Protected,
        M::Friend => cs::Modifier::Internal,
        M::Shared => cs::Modifier::Static,
        M::Shadows => cs::Modifier::New,
        M::Overridable => cs::Modifier::Virtual,
        M::Overrides => cs::Modifier::Override,
        M::NotOverridable | M::NotInheritable => cs::Modifier::Sealed,
        M::MustOverride | M::MustInherit => cs::Modifier::Abstract,
        M::Partial => cs::Modifier::Partial,
        M::Async => cs::Modifier::Async,
        M::Widening => cs::Modifier::Implicit,
        M::Narrowing => cs::Modifier::Explicit,
        M::Const => cs::Modifier::Const,
        M::ByRef => cs::Modifier::Ref,
        M::ParamArray => cs::Modifier::Params,
        M::ReadOnly if context == TokenContext::VariableOrConst => cs::Modifier::Readonly,
        M::Static => {
            return Err(ConversionError::unsupported(
                "StaticKeyword",
                "static local variables have no C# equivalent",
            ));
        }
        M::ReadOnly
        | M::WriteOnly
        | M::Dim
        | M::ByVal
        | M::Optional
        | M::Overloads
        | M::Iterator
        | M::Default
        | M::WithEvents
        | M::Custom
        | M::Key => return Ok(None),
    };
    Ok(Some(token))
}

// =============================================================================
// Operators
// =============================================================================

/// Destination form of a binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryMapping {
    Operator(cs::BinaryOperator),
    /// `a ^ b` has no operator; it becomes `Math.Pow(a, b)`.
    Power,
}

pub fn convert_binary_operator(operator: vb::BinaryOperator) -> ConversionResult<BinaryMapping> {
    use cs::BinaryOperator as C;
    use vb::BinaryOperator as B;

    let op = match operator {
        B::Add | B::Concatenate => C::Add,
        B::Subtract => C::Subtract,
        B::Multiply => C::Multiply,
        B::Divide | B::IntegerDivide => C::Divide,
        B::Modulo => C::Modulo,
        B::Power => return Ok(BinaryMapping::Power),
        B::LeftShift => C::LeftShift,
        B::RightShift => C::RightShift,
        B::Equals | B::Is => C::Equals,
        B::NotEquals | B::IsNot => C::NotEquals,
        B::LessThan => C::LessThan,
        B::LessThanOrEqual => C::LessThanOrEqual,
        B::GreaterThan => C::GreaterThan,
        B::GreaterThanOrEqual => C::GreaterThanOrEqual,
        B::And => C::BitwiseAnd,
        B::Or => C::BitwiseOr,
        B::Xor => C::ExclusiveOr,
        B::AndAlso => C::LogicalAnd,
        B::OrElse => C::LogicalOr,
        B::Like => {
            return Err(ConversionError::unsupported(
                "LikeExpression",
                "pattern matching with Like has no C# operator",
            ));
        }
    };
    Ok(BinaryMapping::Operator(op))
}

pub fn convert_assignment_operator(
    operator: vb::AssignmentOperator,
) -> ConversionResult<cs::AssignmentOperator> {
    use cs::AssignmentOperator as C;
    use vb::AssignmentOperator as A;

    Ok(match operator {
        A::Simple => C::Simple,
        A::Add | A::Concatenate => C::Add,
        A::Subtract => C::Subtract,
        A::Multiply => C::Multiply,
        A::Divide | A::IntegerDivide => C::Divide,
        A::LeftShift => C::LeftShift,
        A::RightShift => C::RightShift,
        A::Power => {
            return Err(ConversionError::unsupported(
                "ExponentiateAssignmentStatement",
                "^= has no C# compound assignment",
            ));
        }
    })
}

/// Operator token of an `Operator` declaration. `CType` is handled by the
/// conversion-operator rule and is rejected here.
pub fn convert_overloadable_operator(
    operator: vb::OverloadableOperator,
) -> ConversionResult<cs::OperatorToken> {
    use cs::OperatorToken as T;
    use vb::OverloadableOperator as O;

    Ok(match operator {
        O::Plus | O::Concatenate => T::Plus,
        O::Minus => T::Minus,
        O::Multiply => T::Multiply,
        O::Divide | O::IntegerDivide => T::Divide,
        O::Modulo => T::Modulo,
        O::Equals => T::Equals,
        O::NotEquals => T::NotEquals,
        O::LessThan => T::LessThan,
        O::LessThanOrEqual => T::LessThanOrEqual,
        O::GreaterThan => T::GreaterThan,
        O::GreaterThanOrEqual => T::GreaterThanOrEqual,
        O::And => T::BitwiseAnd,
        O::Or => T::BitwiseOr,
        O::Xor => T::ExclusiveOr,
        O::Not => T::LogicalNot,
        O::LeftShift => T::LeftShift,
        O::RightShift => T::RightShift,
        O::IsTrue => T::True,
        O::IsFalse => T::False,
        O::Power | O::Like | O::CType => {
            return Err(ConversionError::unsupported(
                "OperatorStatement",
                format!("operator {operator:?} has no C# overload"),
            ));
        }
    })
}

// =============================================================================
// Types and identifiers
// =============================================================================

pub fn convert_predefined_type(keyword: vb::PredefinedType) -> cs::TypeSyntax {
    match predefined_keyword(keyword) {
        Some(predefined) => cs::TypeSyntax::Predefined(predefined),
        None => cs::TypeSyntax::named("System.DateTime"),
    }
}

/// Destination keyword for a predefined type; `Date` has none.
pub fn predefined_keyword(keyword: vb::PredefinedType) -> Option<cs::PredefinedType> {
    use cs::PredefinedType as C;
    use vb::PredefinedType as P;

    Some(match keyword {
        P::Boolean => C::Bool,
        P::Byte => C::Byte,
        P::SByte => C::SByte,
        P::Char => C::Char,
        P::Decimal => C::Decimal,
        P::Double => C::Double,
        P::Single => C::Float,
        P::Short => C::Short,
        P::UShort => C::UShort,
        P::Integer => C::Int,
        P::UInteger => C::UInt,
        P::Long => C::Long,
        P::ULong => C::ULong,
        P::Object => C::Object,
        P::String => C::String,
        P::Date => return None,
    })
}

static CSHARP_KEYWORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
        "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
        "virtual", "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
});

pub fn is_csharp_keyword(text: &str) -> bool {
    CSHARP_KEYWORDS.contains(text)
}

/// Drop source bracket escaping and add `@` where the name is a
/// destination keyword: `[Class]` stays `Class`, `[lock]` becomes `@lock`.
pub fn convert_identifier(text: &str) -> String {
    let unescaped = unescape_identifier(text);
    if is_csharp_keyword(unescaped) {
        format!("@{unescaped}")
    } else {
        unescaped.to_string()
    }
}

// =============================================================================
// Numeric literals
// =============================================================================

/// Integer type suffixes, longest first.
const INTEGER_SUFFIXES: &[&str] = &["UL", "US", "UI", "L", "S", "I", "%", "&"];

/// Suffixes that may follow a decimal literal, longest first.
const DECIMAL_SUFFIXES: &[&str] = &[
    "UL", "US", "UI", "L", "S", "I", "D", "F", "R", "%", "&", "@", "!", "#",
];

fn split_suffix<'t>(text: &'t str, suffixes: &[&'static str]) -> (&'t str, &'static str) {
    for &suffix in suffixes {
        if let Some(digits) = text.strip_suffix(suffix)
            && !digits.is_empty()
        {
            return (digits, suffix);
        }
    }
    (text, "")
}

fn destination_suffix(suffix: &str) -> &'static str {
    match suffix {
        "UL" => "UL",
        "UI" => "U",
        "L" | "&" => "L",
        "D" | "@" => "M",
        "F" | "!" => "F",
        "R" | "#" => "D",
        // Short and Integer have no suffix of their own.
        _ => "",
    }
}

/// Rewrite numeric literal text: `&HFF` to `0xFF`, `&O17` to `15`, `&B101`
/// to `0b101`, and type characters to destination suffixes (`1D` to `1M`).
pub fn convert_numeric_literal(text: &str) -> ConversionResult<String> {
    let upper = text.trim().to_ascii_uppercase();

    if let Some(rest) = upper.strip_prefix("&H") {
        let (digits, suffix) = split_suffix(rest, INTEGER_SUFFIXES);
        return Ok(format!("0x{digits}{}", destination_suffix(suffix)));
    }
    if let Some(rest) = upper.strip_prefix("&B") {
        let (digits, suffix) = split_suffix(rest, INTEGER_SUFFIXES);
        return Ok(format!("0b{digits}{}", destination_suffix(suffix)));
    }
    if let Some(rest) = upper.strip_prefix("&O") {
        let (digits, suffix) = split_suffix(rest, INTEGER_SUFFIXES);
        let value = u64::from_str_radix(&digits.replace('_', ""), 8).map_err(|_| {
            ConversionError::unsupported("NumericLiteral", format!("malformed octal literal {text}"))
        })?;
        return Ok(format!("{value}{}", destination_suffix(suffix)));
    }

    let (digits, suffix) = split_suffix(&upper, DECIMAL_SUFFIXES);
    Ok(format!("{digits}{}", destination_suffix(suffix)))
}

#[cfg(test)]
#[path = "tests/tokens_tests.rs"]
mod tests;
