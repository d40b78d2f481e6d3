//! Names, type syntax, modifiers, attributes, and type parameters.

use crate::expressions::Argument;
use crate::node::{NodeId, SimpleName};
use serde::{Deserialize, Serialize};

/// Keyword types of the source language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredefinedType {
    Boolean,
    Byte,
    SByte,
    Char,
    Date,
    Decimal,
    Double,
    Single,
    Short,
    UShort,
    Integer,
    UInteger,
    Long,
    ULong,
    Object,
    String,
}

impl PredefinedType {
    /// Keyword text as written in source.
    pub fn keyword(self) -> &'static str {
        match self {
            PredefinedType::Boolean => "Boolean",
            PredefinedType::Byte => "Byte",
            PredefinedType::SByte => "SByte",
            PredefinedType::Char => "Char",
            PredefinedType::Date => "Date",
            PredefinedType::Decimal => "Decimal",
            PredefinedType::Double => "Double",
            PredefinedType::Single => "Single",
            PredefinedType::Short => "Short",
            PredefinedType::UShort => "UShort",
            PredefinedType::Integer => "Integer",
            PredefinedType::UInteger => "UInteger",
            PredefinedType::Long => "Long",
            PredefinedType::ULong => "ULong",
            PredefinedType::Object => "Object",
            PredefinedType::String => "String",
        }
    }
}

/// A possibly qualified name: `System.Collections.Generic.List(Of T)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Name {
    Simple(SimpleName),
    Qualified {
        id: NodeId,
        left: Box<Name>,
        right: SimpleName,
    },
    /// The `Global` namespace keyword, only valid as the leftmost part.
    Global { id: NodeId },
}

impl Name {
    pub fn id(&self) -> NodeId {
        match self {
            Name::Simple(simple) => simple.id,
            Name::Qualified { id, .. } | Name::Global { id } => *id,
        }
    }

    /// Rightmost identifier, without escaping.
    pub fn last_identifier(&self) -> &str {
        match self {
            Name::Simple(simple) => simple.unescaped(),
            Name::Qualified { right, .. } => right.unescaped(),
            Name::Global { .. } => "Global",
        }
    }
}

/// Type syntax as written in declarations, casts, and `As` clauses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeSyntax {
    Predefined {
        id: NodeId,
        keyword: PredefinedType,
    },
    Named {
        name: Name,
    },
    /// `T()` or `T(,)`: each entry of `ranks` is the dimension count of one
    /// rank specifier, outermost first.
    Array {
        id: NodeId,
        element: Box<TypeSyntax>,
        ranks: Vec<u32>,
    },
    /// `T?` or `Nullable(Of T)` written with the suffix.
    Nullable {
        id: NodeId,
        element: Box<TypeSyntax>,
    },
}

impl TypeSyntax {
    pub fn id(&self) -> NodeId {
        match self {
            TypeSyntax::Predefined { id, .. }
            | TypeSyntax::Array { id, .. }
            | TypeSyntax::Nullable { id, .. } => *id,
            TypeSyntax::Named { name } => name.id(),
        }
    }
}

/// Declaration and parameter modifiers of the source language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Friend,
    Shared,
    Shadows,
    Overloads,
    Overridable,
    Overrides,
    NotOverridable,
    MustOverride,
    MustInherit,
    NotInheritable,
    ReadOnly,
    WriteOnly,
    Partial,
    Default,
    WithEvents,
    Widening,
    Narrowing,
    Const,
    Dim,
    Static,
    ByVal,
    ByRef,
    Optional,
    ParamArray,
    Async,
    Iterator,
    Custom,
    Key,
}

impl Modifier {
    /// Keyword text as written in source.
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "Public",
            Modifier::Private => "Private",
            Modifier::Protected => "Protected",
            Modifier::Friend => "Friend",
            Modifier::Shared => "Shared",
            Modifier::Shadows => "Shadows",
            Modifier::Overloads => "Overloads",
            Modifier::Overridable => "Overridable",
            Modifier::Overrides => "Overrides",
            Modifier::NotOverridable => "NotOverridable",
            Modifier::MustOverride => "MustOverride",
            Modifier::MustInherit => "MustInherit",
            Modifier::NotInheritable => "NotInheritable",
            Modifier::ReadOnly => "ReadOnly",
            Modifier::WriteOnly => "WriteOnly",
            Modifier::Partial => "Partial",
            Modifier::Default => "Default",
            Modifier::WithEvents => "WithEvents",
            Modifier::Widening => "Widening",
            Modifier::Narrowing => "Narrowing",
            Modifier::Const => "Const",
            Modifier::Dim => "Dim",
            Modifier::Static => "Static",
            Modifier::ByVal => "ByVal",
            Modifier::ByRef => "ByRef",
            Modifier::Optional => "Optional",
            Modifier::ParamArray => "ParamArray",
            Modifier::Async => "Async",
            Modifier::Iterator => "Iterator",
            Modifier::Custom => "Custom",
            Modifier::Key => "Key",
        }
    }

    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Private | Modifier::Protected | Modifier::Friend
        )
    }
}

/// `<...>` attribute block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeList {
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: NodeId,
    #[serde(default)]
    pub target: Option<AttributeTarget>,
    pub name: Name,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeTarget {
    Assembly,
    Module,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variance {
    In,
    Out,
}

/// `(Of In T As {Class, New})`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub id: NodeId,
    pub identifier: String,
    #[serde(default)]
    pub variance: Option<Variance>,
    #[serde(default)]
    pub constraints: Vec<TypeConstraint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeConstraint {
    New,
    Class,
    Structure,
    Type { ty: TypeSyntax },
}
