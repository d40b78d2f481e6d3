//! Expression syntax.

use crate::node::{NodeId, SimpleName};
use crate::statements::Statement;
use crate::declarations::Parameter;
use crate::types::{Modifier, PredefinedType, TypeSyntax};
use serde::{Deserialize, Serialize};

/// Literal token values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum LiteralValue {
    /// `Nothing`: the untyped null literal.
    Nothing,
    Boolean(bool),
    /// Numeric literal text as written, including base prefix and type
    /// suffix (`&HFF`, `10L`, `1.5D`).
    Numeric(String),
    /// String value with source escaping (`""`) already removed.
    String(String),
    Char(char),
    /// Date literal contents between the `#` delimiters.
    Date(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    IntegerDivide,
    Modulo,
    Power,
    Concatenate,
    LeftShift,
    RightShift,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Is,
    IsNot,
    Like,
    And,
    Or,
    Xor,
    AndAlso,
    OrElse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    AddressOf,
}

/// `CType`, `DirectCast`, `TryCast`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastKind {
    CType,
    DirectCast,
    TryCast,
}

/// Intrinsic conversion functions (`CInt(x)`, `CStr(x)`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredefinedCastKeyword {
    CBool,
    CByte,
    CChar,
    CDate,
    CDbl,
    CDec,
    CInt,
    CLng,
    CObj,
    CSByte,
    CShort,
    CSng,
    CStr,
    CUInt,
    CULng,
    CUShort,
}

impl PredefinedCastKeyword {
    /// The keyword type the conversion produces.
    pub fn target_type(self) -> PredefinedType {
        match self {
            PredefinedCastKeyword::CBool => PredefinedType::Boolean,
            PredefinedCastKeyword::CByte => PredefinedType::Byte,
            PredefinedCastKeyword::CChar => PredefinedType::Char,
            PredefinedCastKeyword::CDate => PredefinedType::Date,
            PredefinedCastKeyword::CDbl => PredefinedType::Double,
            PredefinedCastKeyword::CDec => PredefinedType::Decimal,
            PredefinedCastKeyword::CInt => PredefinedType::Integer,
            PredefinedCastKeyword::CLng => PredefinedType::Long,
            PredefinedCastKeyword::CObj => PredefinedType::Object,
            PredefinedCastKeyword::CSByte => PredefinedType::SByte,
            PredefinedCastKeyword::CShort => PredefinedType::Short,
            PredefinedCastKeyword::CSng => PredefinedType::Single,
            PredefinedCastKeyword::CStr => PredefinedType::String,
            PredefinedCastKeyword::CUInt => PredefinedType::UInteger,
            PredefinedCastKeyword::CULng => PredefinedType::ULong,
            PredefinedCastKeyword::CUShort => PredefinedType::UShort,
        }
    }
}

/// `Sub` or `Function`: used by methods, delegates, and lambdas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    Sub,
    Function,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Argument {
    Simple {
        id: NodeId,
        /// `name:=` for named arguments.
        #[serde(default)]
        name: Option<String>,
        expression: Expr,
    },
    /// An omitted positional argument: `Foo(, 2)`.
    Omitted { id: NodeId },
}

impl Argument {
    pub fn id(&self) -> NodeId {
        match self {
            Argument::Simple { id, .. } | Argument::Omitted { id } => *id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum InterpolatedContent {
    /// Literal text as written, with `""` and `{{`/`}}` escaping intact.
    Text { text: String },
    Interpolation {
        id: NodeId,
        expression: Box<Expr>,
        #[serde(default)]
        alignment: Option<Box<Expr>>,
        #[serde(default)]
        format: Option<String>,
    },
}

/// `{a, b, c}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionInitializer {
    pub id: NodeId,
    #[serde(default)]
    pub initializers: Vec<Expr>,
}

/// `.Name = value` inside `New T With { ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldInitializer {
    pub id: NodeId,
    pub name: String,
    pub expression: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ObjectInitializer {
    /// `New T From {a, b}`
    Collection { initializer: CollectionInitializer },
    /// `New T With {.A = a}`
    Members { fields: Vec<FieldInitializer> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LambdaBody {
    /// Single-line `Function(x) x + 1`.
    Expression { expression: Box<Expr> },
    /// Single-line `Sub(x) Console.WriteLine(x)`.
    Statement { statement: Box<Statement> },
    /// Multi-line lambda.
    Block { statements: Vec<Statement> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpr {
    pub id: NodeId,
    #[serde(rename = "method_kind")]
    pub kind: MethodKind,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub as_clause: Option<TypeSyntax>,
    pub body: LambdaBody,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expr {
    Literal {
        id: NodeId,
        value: LiteralValue,
    },
    InterpolatedString {
        id: NodeId,
        contents: Vec<InterpolatedContent>,
    },
    /// Identifier or generic name in expression position.
    Name(SimpleName),
    /// The `Global` keyword as the receiver of a member access.
    Global {
        id: NodeId,
    },
    /// Keyword type as a receiver: `Integer.MaxValue`.
    PredefinedType {
        id: NodeId,
        keyword: PredefinedType,
    },
    Me {
        id: NodeId,
    },
    MyBase {
        id: NodeId,
    },
    MyClass {
        id: NodeId,
    },
    /// `a.b`, or `.b` with no receiver inside `With` blocks and
    /// null-conditional chains.
    MemberAccess {
        id: NodeId,
        #[serde(default)]
        expression: Option<Box<Expr>>,
        name: SimpleName,
    },
    /// `a?.b`
    ConditionalAccess {
        id: NodeId,
        expression: Box<Expr>,
        when_not_null: Box<Expr>,
    },
    /// `f(a)`: also element access, since the source syntax does not
    /// distinguish the two.
    Invocation {
        id: NodeId,
        expression: Box<Expr>,
        #[serde(default)]
        arguments: Vec<Argument>,
    },
    ObjectCreation {
        id: NodeId,
        ty: TypeSyntax,
        /// `None` when the argument list is omitted: `New Foo`.
        #[serde(default)]
        arguments: Option<Vec<Argument>>,
        #[serde(default)]
        initializer: Option<ObjectInitializer>,
    },
    /// `New T(bound) {}` or `New T() {a, b}`.
    ArrayCreation {
        id: NodeId,
        element_type: TypeSyntax,
        /// Upper bounds (inclusive) of the first rank, when given.
        #[serde(default)]
        bounds: Option<Vec<Argument>>,
        /// Additional rank specifiers after the bounds: `New T(2)() {}`.
        #[serde(default)]
        rank_specifiers: Vec<u32>,
        initializer: CollectionInitializer,
    },
    CollectionInitializer(CollectionInitializer),
    Binary {
        id: NodeId,
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        id: NodeId,
        operator: UnaryOperator,
        operand: Box<Expr>,
    },
    Parenthesized {
        id: NodeId,
        expression: Box<Expr>,
    },
    /// `If(a, b)`
    BinaryConditional {
        id: NodeId,
        first: Box<Expr>,
        second: Box<Expr>,
    },
    /// `If(c, a, b)`
    TernaryConditional {
        id: NodeId,
        condition: Box<Expr>,
        when_true: Box<Expr>,
        when_false: Box<Expr>,
    },
    Cast {
        id: NodeId,
        #[serde(rename = "cast_kind")]
        kind: CastKind,
        expression: Box<Expr>,
        ty: TypeSyntax,
    },
    PredefinedCast {
        id: NodeId,
        keyword: PredefinedCastKeyword,
        expression: Box<Expr>,
    },
    /// `TypeOf x Is T` / `TypeOf x IsNot T`
    TypeOf {
        id: NodeId,
        expression: Box<Expr>,
        ty: TypeSyntax,
        #[serde(default)]
        is_not: bool,
    },
    GetType {
        id: NodeId,
        ty: TypeSyntax,
    },
    NameOf {
        id: NodeId,
        argument: Box<Expr>,
    },
    Await {
        id: NodeId,
        expression: Box<Expr>,
    },
    Lambda(Box<LambdaExpr>),
    /// `New With {.A = 1}`
    AnonymousObjectCreation {
        id: NodeId,
        fields: Vec<FieldInitializer>,
    },
    /// LINQ query syntax, kept as text.
    Query {
        id: NodeId,
        text: String,
    },
    /// XML literal, kept as text.
    XmlLiteral {
        id: NodeId,
        text: String,
    },
}

impl Expr {
    pub fn id(&self) -> NodeId {
        match self {
            Expr::Literal { id, .. }
            | Expr::InterpolatedString { id, .. }
            | Expr::Global { id }
            | Expr::PredefinedType { id, .. }
            | Expr::Me { id }
            | Expr::MyBase { id }
            | Expr::MyClass { id }
            | Expr::MemberAccess { id, .. }
            | Expr::ConditionalAccess { id, .. }
            | Expr::Invocation { id, .. }
            | Expr::ObjectCreation { id, .. }
            | Expr::ArrayCreation { id, .. }
            | Expr::Binary { id, .. }
            | Expr::Unary { id, .. }
            | Expr::Parenthesized { id, .. }
            | Expr::BinaryConditional { id, .. }
            | Expr::TernaryConditional { id, .. }
            | Expr::Cast { id, .. }
            | Expr::PredefinedCast { id, .. }
            | Expr::TypeOf { id, .. }
            | Expr::GetType { id, .. }
            | Expr::NameOf { id, .. }
            | Expr::Await { id, .. }
            | Expr::AnonymousObjectCreation { id, .. }
            | Expr::Query { id, .. }
            | Expr::XmlLiteral { id, .. } => *id,
            Expr::Name(name) => name.id,
            Expr::CollectionInitializer(init) => init.id,
            Expr::Lambda(lambda) => lambda.id,
        }
    }

    /// Syntax kind name, used in conversion failure messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Literal { .. } => "LiteralExpression",
            Expr::InterpolatedString { .. } => "InterpolatedStringExpression",
            Expr::Name(name) if name.is_generic() => "GenericName",
            Expr::Name(_) => "IdentifierName",
            Expr::Global { .. } => "GlobalName",
            Expr::PredefinedType { .. } => "PredefinedType",
            Expr::Me { .. } => "MeExpression",
            Expr::MyBase { .. } => "MyBaseExpression",
            Expr::MyClass { .. } => "MyClassExpression",
            Expr::MemberAccess { .. } => "MemberAccessExpression",
            Expr::ConditionalAccess { .. } => "ConditionalAccessExpression",
            Expr::Invocation { .. } => "InvocationExpression",
            Expr::ObjectCreation { .. } => "ObjectCreationExpression",
            Expr::ArrayCreation { .. } => "ArrayCreationExpression",
            Expr::CollectionInitializer(_) => "CollectionInitializer",
            Expr::Binary { .. } => "BinaryExpression",
            Expr::Unary { .. } => "UnaryExpression",
            Expr::Parenthesized { .. } => "ParenthesizedExpression",
            Expr::BinaryConditional { .. } => "BinaryConditionalExpression",
            Expr::TernaryConditional { .. } => "TernaryConditionalExpression",
            Expr::Cast { kind: CastKind::CType, .. } => "CTypeExpression",
            Expr::Cast { kind: CastKind::DirectCast, .. } => "DirectCastExpression",
            Expr::Cast { kind: CastKind::TryCast, .. } => "TryCastExpression",
            Expr::PredefinedCast { .. } => "PredefinedCastExpression",
            Expr::TypeOf { .. } => "TypeOfExpression",
            Expr::GetType { .. } => "GetTypeExpression",
            Expr::NameOf { .. } => "NameOfExpression",
            Expr::Await { .. } => "AwaitExpression",
            Expr::Lambda(_) => "LambdaExpression",
            Expr::AnonymousObjectCreation { .. } => "AnonymousObjectCreationExpression",
            Expr::Query { .. } => "QueryExpression",
            Expr::XmlLiteral { .. } => "XmlLiteralExpression",
        }
    }

    /// Whether this is the untyped `Nothing` literal.
    pub fn is_nothing(&self) -> bool {
        matches!(
            self,
            Expr::Literal {
                value: LiteralValue::Nothing,
                ..
            }
        )
    }
}
