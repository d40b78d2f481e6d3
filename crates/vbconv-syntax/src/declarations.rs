//! Compilation units, namespaces, types, and members.

use crate::expressions::{Expr, MethodKind};
use crate::node::NodeId;
use crate::statements::{AsClause, Statement, VariableDeclarator};
use crate::types::{AttributeList, Modifier, Name, TypeParameter, TypeSyntax};
use serde::{Deserialize, Serialize};
use vbconv_common::Trivia;

/// Root of one translation unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub id: NodeId,
    #[serde(default)]
    pub imports: Vec<ImportsClause>,
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub members: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ImportsClause {
    /// `Imports System.Text` or `Imports SB = System.Text.StringBuilder`
    Simple {
        #[serde(default)]
        alias: Option<String>,
        name: Name,
    },
    /// `Imports <xmlns:ns="...">`
    XmlNamespace { text: String },
}

/// A declaration together with its attached comments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub id: NodeId,
    #[serde(flatten)]
    pub kind: DeclarationKind,
    #[serde(default)]
    pub trivia: Trivia,
}

impl Declaration {
    pub fn new(id: NodeId, kind: DeclarationKind) -> Self {
        Declaration {
            id,
            kind,
            trivia: Trivia::default(),
        }
    }

    pub fn with_trivia(mut self, trivia: Trivia) -> Self {
        self.trivia = trivia;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DeclarationKind {
    Namespace {
        name: Name,
        #[serde(default)]
        members: Vec<Declaration>,
    },
    Type(TypeBlock),
    Enum(EnumBlock),
    Delegate(DelegateDeclaration),
    Field(FieldDeclaration),
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Operator(OperatorDeclaration),
    Event(EventDeclaration),
    /// `Declare Function ... Lib "..."`
    ExternalMethod {
        identifier: String,
        library: String,
    },
}

impl DeclarationKind {
    /// Syntax kind name, used in conversion failure messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DeclarationKind::Namespace { .. } => "NamespaceBlock",
            DeclarationKind::Type(block) => match block.kind {
                TypeBlockKind::Class => "ClassBlock",
                TypeBlockKind::Module => "ModuleBlock",
                TypeBlockKind::Structure => "StructureBlock",
                TypeBlockKind::Interface => "InterfaceBlock",
            },
            DeclarationKind::Enum(_) => "EnumBlock",
            DeclarationKind::Delegate(_) => "DelegateStatement",
            DeclarationKind::Field(_) => "FieldDeclaration",
            DeclarationKind::Property(_) => "PropertyBlock",
            DeclarationKind::Method(_) => "MethodBlock",
            DeclarationKind::Constructor(_) => "ConstructorBlock",
            DeclarationKind::Operator(_) => "OperatorBlock",
            DeclarationKind::Event(_) => "EventStatement",
            DeclarationKind::ExternalMethod { .. } => "DeclareStatement",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeBlockKind {
    Class,
    Module,
    Structure,
    Interface,
}

/// `Class`, `Module`, `Structure`, or `Interface` block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeBlock {
    #[serde(rename = "block")]
    pub kind: TypeBlockKind,
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub identifier: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub inherits: Vec<TypeSyntax>,
    #[serde(default)]
    pub implements: Vec<TypeSyntax>,
    #[serde(default)]
    pub members: Vec<Declaration>,
}

/// `As T` with optional attributes on the clause itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleAsClause {
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    pub ty: TypeSyntax,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumBlock {
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub identifier: String,
    #[serde(default)]
    pub underlying_type: Option<SimpleAsClause>,
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub id: NodeId,
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    pub identifier: String,
    #[serde(default)]
    pub initializer: Option<Expr>,
    #[serde(default)]
    pub trivia: Trivia,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DelegateDeclaration {
    #[serde(rename = "method_kind")]
    pub kind: MethodKind,
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub identifier: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub as_clause: Option<SimpleAsClause>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorKind {
    Get,
    Set,
    AddHandler,
    RemoveHandler,
    RaiseEvent,
}

/// `Get`/`Set`/`AddHandler`/`RemoveHandler`/`RaiseEvent` block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Accessor {
    pub id: NodeId,
    pub kind: AccessorKind,
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub trivia: Trivia,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub identifier: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub as_clause: Option<AsClause>,
    #[serde(default)]
    pub initializer: Option<Expr>,
    /// `None` for auto-implemented properties.
    #[serde(default)]
    pub accessors: Option<Vec<Accessor>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    #[serde(rename = "method_kind")]
    pub kind: MethodKind,
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub identifier: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub as_clause: Option<SimpleAsClause>,
    /// `None` for interface members and `MustOverride` methods.
    #[serde(default)]
    pub body: Option<Vec<Statement>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub body: Vec<Statement>,
}

/// Operator tokens that may be overloaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverloadableOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    IntegerDivide,
    Modulo,
    Power,
    Concatenate,
    Like,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    And,
    Or,
    Xor,
    Not,
    LeftShift,
    RightShift,
    IsTrue,
    IsFalse,
    /// Conversion operator; `Widening`/`Narrowing` decides the form.
    CType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperatorDeclaration {
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub operator: OverloadableOperator,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub as_clause: Option<SimpleAsClause>,
    #[serde(default)]
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDeclaration {
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub identifier: String,
    /// Parameters of an event declared without a handler type.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// `As Handler` clause.
    #[serde(default)]
    pub as_type: Option<TypeSyntax>,
    /// Accessor blocks of a `Custom Event`.
    #[serde(default)]
    pub accessors: Option<Vec<Accessor>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: NodeId,
    #[serde(default)]
    pub attributes: Vec<AttributeList>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub identifier: String,
    /// `x?` suffix.
    #[serde(default)]
    pub nullable: bool,
    /// `x()` suffix.
    #[serde(default)]
    pub array_ranks: Vec<u32>,
    #[serde(default)]
    pub as_type: Option<TypeSyntax>,
    #[serde(default)]
    pub default: Option<Expr>,
}
