//! Destination syntax tree.
//!
//! The converter builds this tree bottom-up and hands it to
//! [`CSharpPrinter`](crate::CSharpPrinter), which owns all formatting. Nodes
//! carry no positions: the printed layout is always the normalized one.
//!
//! # Structure
//!
//! - [`CompilationUnit`] holds usings, assembly attributes, and members.
//! - [`Member`] covers namespaces, types, and type members.
//! - [`Statement`] and [`Expr`] cover executable code.
//! - Comments ride along as `Commented` wrapper variants so that nodes
//!   without comments stay plain.

use smallvec::SmallVec;
use vbconv_common::Trivia;

/// Modifier lists are short; most declarations carry one or two.
pub type Modifiers = SmallVec<[Modifier; 4]>;

// =============================================================================
// Names and types
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredefinedType {
    Bool,
    Byte,
    SByte,
    Char,
    Decimal,
    Double,
    Float,
    Int,
    UInt,
    Long,
    ULong,
    Object,
    Short,
    UShort,
    String,
    Void,
}

impl PredefinedType {
    pub fn keyword(self) -> &'static str {
        match self {
            PredefinedType::Bool => "bool",
            PredefinedType::Byte => "byte",
            PredefinedType::SByte => "sbyte",
            PredefinedType::Char => "char",
            PredefinedType::Decimal => "decimal",
            PredefinedType::Double => "double",
            PredefinedType::Float => "float",
            PredefinedType::Int => "int",
            PredefinedType::UInt => "uint",
            PredefinedType::Long => "long",
            PredefinedType::ULong => "ulong",
            PredefinedType::Object => "object",
            PredefinedType::Short => "short",
            PredefinedType::UShort => "ushort",
            PredefinedType::String => "string",
            PredefinedType::Void => "void",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Name {
    Identifier(String),
    Generic {
        identifier: String,
        type_arguments: Vec<TypeSyntax>,
    },
    Qualified {
        left: Box<Name>,
        right: Box<Name>,
    },
    /// `global::System`
    AliasQualified { alias: String, name: Box<Name> },
}

impl Name {
    pub fn id(identifier: impl Into<String>) -> Self {
        Name::Identifier(identifier.into())
    }

    /// Parse a dotted name: `"System.Diagnostics"`.
    pub fn dotted(text: &str) -> Self {
        let mut parts = text.split('.');
        let mut name = Name::id(parts.next().unwrap_or_default());
        for part in parts {
            name = Name::Qualified {
                left: Box::new(name),
                right: Box::new(Name::id(part)),
            };
        }
        name
    }
}

/// One `[...]` rank specifier. Sizes are `None` when omitted.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayRank {
    pub sizes: Vec<Option<Expr>>,
}

impl ArrayRank {
    /// Rank specifier without sizes: `[]`, `[,]`.
    pub fn omitted(dimensions: u32) -> Self {
        ArrayRank {
            sizes: (0..dimensions.max(1)).map(|_| None).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeSyntax {
    Predefined(PredefinedType),
    Named(Name),
    Array {
        element: Box<TypeSyntax>,
        ranks: Vec<ArrayRank>,
    },
    Nullable(Box<TypeSyntax>),
    /// Inferred local type: `var`.
    Var,
}

impl TypeSyntax {
    pub fn named(dotted: &str) -> Self {
        TypeSyntax::Named(Name::dotted(dotted))
    }

    pub fn void() -> Self {
        TypeSyntax::Predefined(PredefinedType::Void)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeSyntax::Predefined(PredefinedType::Void))
    }

    /// Single-rank array of this type.
    pub fn array_of(self) -> Self {
        TypeSyntax::Array {
            element: Box::new(self),
            ranks: vec![ArrayRank::omitted(1)],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Static,
    Abstract,
    Virtual,
    Override,
    Sealed,
    Readonly,
    Const,
    New,
    Partial,
    Async,
    Implicit,
    Explicit,
    Extern,
    Ref,
    Out,
    Params,
    Event,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Internal => "internal",
            Modifier::Static => "static",
            Modifier::Abstract => "abstract",
            Modifier::Virtual => "virtual",
            Modifier::Override => "override",
            Modifier::Sealed => "sealed",
            Modifier::Readonly => "readonly",
            Modifier::Const => "const",
            Modifier::New => "new",
            Modifier::Partial => "partial",
            Modifier::Async => "async",
            Modifier::Implicit => "implicit",
            Modifier::Explicit => "explicit",
            Modifier::Extern => "extern",
            Modifier::Ref => "ref",
            Modifier::Out => "out",
            Modifier::Params => "params",
            Modifier::Event => "event",
        }
    }

    pub fn is_accessibility(self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Private | Modifier::Protected | Modifier::Internal
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeTarget {
    Assembly,
    Module,
    Return,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttributeArgument {
    /// `Name = value`
    pub name_equals: Option<String>,
    pub expression: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub name: Name,
    pub arguments: Vec<AttributeArgument>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttributeList {
    pub target: Option<AttributeTarget>,
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variance {
    In,
    Out,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeParameter {
    pub variance: Option<Variance>,
    pub identifier: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeConstraint {
    Class,
    Struct,
    /// `new()`
    Constructor,
    Type(TypeSyntax),
}

/// `where T : class, new()`
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintClause {
    pub type_parameter: String,
    pub constraints: Vec<TypeConstraint>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    /// `None` only for implicitly typed lambda parameters.
    pub ty: Option<TypeSyntax>,
    pub identifier: String,
    pub default: Option<Expr>,
}

impl Parameter {
    pub fn new(ty: Option<TypeSyntax>, identifier: impl Into<String>) -> Self {
        Parameter {
            attributes: Vec::new(),
            modifiers: Modifiers::new(),
            ty,
            identifier: identifier.into(),
            default: None,
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    /// Numeric literal text in destination syntax.
    Numeric(String),
    /// String value; the printer escapes it.
    String(String),
    Char(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    LeftShift,
    RightShift,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
    LogicalAnd,
    LogicalOr,
    Coalesce,
}

impl BinaryOperator {
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::ExclusiveOr => "^",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::Coalesce => "??",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentOperator {
    Simple,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    LeftShift,
    RightShift,
    And,
    Or,
    ExclusiveOr,
}

impl AssignmentOperator {
    pub fn token(self) -> &'static str {
        match self {
            AssignmentOperator::Simple => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Subtract => "-=",
            AssignmentOperator::Multiply => "*=",
            AssignmentOperator::Divide => "/=",
            AssignmentOperator::Modulo => "%=",
            AssignmentOperator::LeftShift => "<<=",
            AssignmentOperator::RightShift => ">>=",
            AssignmentOperator::And => "&=",
            AssignmentOperator::Or => "|=",
            AssignmentOperator::ExclusiveOr => "^=",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixOperator {
    Plus,
    Minus,
    LogicalNot,
    BitwiseNot,
    Increment,
    Decrement,
}

impl PrefixOperator {
    pub fn token(self) -> &'static str {
        match self {
            PrefixOperator::Plus => "+",
            PrefixOperator::Minus => "-",
            PrefixOperator::LogicalNot => "!",
            PrefixOperator::BitwiseNot => "~",
            PrefixOperator::Increment => "++",
            PrefixOperator::Decrement => "--",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostfixOperator {
    Increment,
    Decrement,
}

impl PostfixOperator {
    pub fn token(self) -> &'static str {
        match self {
            PostfixOperator::Increment => "++",
            PostfixOperator::Decrement => "--",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentRefKind {
    Ref,
    Out,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    /// `name: value`
    pub name_colon: Option<String>,
    pub ref_kind: Option<ArgumentRefKind>,
    pub expression: Expr,
}

impl Argument {
    pub fn new(expression: Expr) -> Self {
        Argument {
            name_colon: None,
            ref_kind: None,
            expression,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitializerKind {
    /// `new List<int> { 1, 2 }`
    Collection,
    /// `new Point { X = 1 }`
    Object,
    /// `new int[] { 1, 2 }` or `int[] a = { 1, 2 }`
    Array,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Initializer {
    pub kind: InitializerKind,
    pub expressions: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InterpolatedContent {
    /// Literal text with `{{`/`}}` escaping intact.
    Text(String),
    Interpolation {
        expression: Box<Expr>,
        alignment: Option<Box<Expr>>,
        format: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum LambdaParameters {
    /// `x => ...`
    Simple(String),
    /// `(x, y) => ...`, `(int x) => ...`
    List(Vec<Parameter>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LambdaBody {
    Expression(Box<Expr>),
    Block(Vec<Statement>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    InterpolatedString(Vec<InterpolatedContent>),
    Identifier(String),
    Generic {
        identifier: String,
        type_arguments: Vec<TypeSyntax>,
    },
    /// Keyword type as a receiver: `int.MaxValue`.
    PredefinedType(PredefinedType),
    /// `global::Name`
    AliasQualified {
        alias: String,
        name: String,
    },
    This,
    Base,
    MemberAccess {
        expression: Box<Expr>,
        name: String,
        type_arguments: Vec<TypeSyntax>,
    },
    /// `.Name` inside a conditional access.
    MemberBinding {
        name: String,
    },
    /// `a?.b`
    ConditionalAccess {
        expression: Box<Expr>,
        when_not_null: Box<Expr>,
    },
    Invocation {
        expression: Box<Expr>,
        arguments: Vec<Argument>,
    },
    ElementAccess {
        expression: Box<Expr>,
        arguments: Vec<Argument>,
    },
    ObjectCreation {
        ty: TypeSyntax,
        /// `None` prints `()` only when there is no initializer.
        arguments: Option<Vec<Argument>>,
        initializer: Option<Initializer>,
    },
    ArrayCreation {
        ty: TypeSyntax,
        initializer: Option<Initializer>,
    },
    /// `new[] { a, b }`
    ImplicitArrayCreation(Initializer),
    /// Bare initializer, only valid as a variable initializer.
    Initializer(Initializer),
    /// `new { A = 1 }`
    AnonymousObjectCreation(Vec<(String, Expr)>),
    Binary {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Box<Expr>,
    },
    Assignment {
        left: Box<Expr>,
        operator: AssignmentOperator,
        right: Box<Expr>,
    },
    PrefixUnary {
        operator: PrefixOperator,
        operand: Box<Expr>,
    },
    PostfixUnary {
        operand: Box<Expr>,
        operator: PostfixOperator,
    },
    Conditional {
        condition: Box<Expr>,
        when_true: Box<Expr>,
        when_false: Box<Expr>,
    },
    Cast {
        ty: TypeSyntax,
        expression: Box<Expr>,
    },
    As {
        expression: Box<Expr>,
        ty: TypeSyntax,
    },
    Is {
        expression: Box<Expr>,
        ty: TypeSyntax,
    },
    TypeOf(TypeSyntax),
    Default(TypeSyntax),
    Parenthesized(Box<Expr>),
    Lambda {
        is_async: bool,
        parameters: LambdaParameters,
        body: LambdaBody,
    },
    Await(Box<Expr>),
    /// `expr /* comment */`
    Commented {
        expression: Box<Expr>,
        comment: String,
    },
}

impl Expr {
    pub fn id(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn null() -> Self {
        Expr::Literal(Literal::Null)
    }

    pub fn number(text: impl Into<String>) -> Self {
        Expr::Literal(Literal::Numeric(text.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn member(expression: Expr, name: impl Into<String>) -> Self {
        Expr::MemberAccess {
            expression: Box::new(expression),
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Member access chain from a dotted path: `"System.Environment.Exit"`.
    pub fn dotted(path: &str) -> Self {
        let mut parts = path.split('.');
        let mut expr = Expr::id(parts.next().unwrap_or_default());
        for part in parts {
            expr = Expr::member(expr, part);
        }
        expr
    }

    pub fn call(expression: Expr, arguments: Vec<Expr>) -> Self {
        Expr::Invocation {
            expression: Box::new(expression),
            arguments: arguments.into_iter().map(Argument::new).collect(),
        }
    }

    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn assign(left: Expr, operator: AssignmentOperator, right: Expr) -> Self {
        Expr::Assignment {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn prefix(operator: PrefixOperator, operand: Expr) -> Self {
        Expr::PrefixUnary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn paren(self) -> Self {
        Expr::Parenthesized(Box::new(self))
    }

    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        Expr::Commented {
            expression: Box::new(self),
            comment: comment.into(),
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclarator {
    pub identifier: String,
    pub initializer: Option<Expr>,
}

/// `int a = 1, b`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclaration {
    pub ty: TypeSyntax,
    pub variables: Vec<VariableDeclarator>,
}

impl VariableDeclaration {
    pub fn single(ty: TypeSyntax, identifier: impl Into<String>, initializer: Option<Expr>) -> Self {
        VariableDeclaration {
            ty,
            variables: vec![VariableDeclarator {
                identifier: identifier.into(),
                initializer,
            }],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SwitchLabel {
    Case(Expr),
    Default,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchSection {
    pub labels: Vec<SwitchLabel>,
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatchDeclaration {
    pub ty: TypeSyntax,
    pub identifier: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatchClause {
    pub declaration: Option<CatchDeclaration>,
    /// `when (filter)`
    pub filter: Option<Expr>,
    pub block: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    LocalDeclaration {
        modifiers: Modifiers,
        declaration: VariableDeclaration,
    },
    Expression(Expr),
    Block(Vec<Statement>),
    Return(Option<Expr>),
    YieldReturn(Expr),
    YieldBreak,
    Break,
    Continue,
    Throw(Option<Expr>),
    If {
        condition: Expr,
        statement: Box<Statement>,
        else_clause: Option<Box<Statement>>,
    },
    For {
        declaration: Option<VariableDeclaration>,
        initializers: Vec<Expr>,
        condition: Option<Expr>,
        incrementors: Vec<Expr>,
        statement: Box<Statement>,
    },
    ForEach {
        ty: TypeSyntax,
        identifier: String,
        expression: Expr,
        statement: Box<Statement>,
    },
    While {
        condition: Expr,
        statement: Box<Statement>,
    },
    Do {
        statement: Box<Statement>,
        condition: Expr,
    },
    Switch {
        expression: Expr,
        sections: Vec<SwitchSection>,
    },
    Try {
        block: Vec<Statement>,
        catches: Vec<CatchClause>,
        finally: Option<Vec<Statement>>,
    },
    Lock {
        expression: Expr,
        statement: Box<Statement>,
    },
    Using {
        declaration: Option<VariableDeclaration>,
        expression: Option<Expr>,
        statement: Box<Statement>,
    },
    Empty,
    Commented {
        trivia: Trivia,
        statement: Box<Statement>,
    },
}

impl Statement {
    pub fn expr(expression: Expr) -> Self {
        Statement::Expression(expression)
    }

    pub fn local(ty: TypeSyntax, identifier: impl Into<String>, initializer: Option<Expr>) -> Self {
        Statement::LocalDeclaration {
            modifiers: Modifiers::new(),
            declaration: VariableDeclaration::single(ty, identifier, initializer),
        }
    }

    /// Attach comments, leaving the statement unwrapped when there are none.
    pub fn with_trivia(self, trivia: Trivia) -> Self {
        if trivia.is_empty() {
            self
        } else {
            Statement::Commented {
                trivia,
                statement: Box::new(self),
            }
        }
    }

    /// The statement with any comment wrapper removed.
    pub fn unwrap_comments(&self) -> &Statement {
        match self {
            Statement::Commented { statement, .. } => statement.unwrap_comments(),
            other => other,
        }
    }

    /// Control never reaches the statement that follows.
    pub fn is_jump(&self) -> bool {
        matches!(
            self.unwrap_comments(),
            Statement::Return(_)
                | Statement::YieldBreak
                | Statement::Break
                | Statement::Continue
                | Statement::Throw(_)
        )
    }
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKeyword {
    Class,
    Struct,
    Interface,
}

impl TypeKeyword {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKeyword::Class => "class",
            TypeKeyword::Struct => "struct",
            TypeKeyword::Interface => "interface",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeDeclaration {
    pub keyword: TypeKeyword,
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub identifier: String,
    pub type_parameters: Vec<TypeParameter>,
    pub base_list: Vec<TypeSyntax>,
    pub constraints: Vec<ConstraintClause>,
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumMemberDeclaration {
    pub attributes: Vec<AttributeList>,
    pub identifier: String,
    pub value: Option<Expr>,
    pub trivia: Trivia,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub identifier: String,
    pub base_type: Option<TypeSyntax>,
    pub members: Vec<EnumMemberDeclaration>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DelegateDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub return_type: TypeSyntax,
    pub identifier: String,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<Parameter>,
    pub constraints: Vec<ConstraintClause>,
}

/// Field or event field: `private int x;`, `public event Handler Changed;`
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub declaration: VariableDeclaration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
    Add,
    Remove,
}

impl AccessorKind {
    pub fn keyword(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Add => "add",
            AccessorKind::Remove => "remove",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    /// `None` for auto-implemented accessors (`get;`).
    pub body: Option<Vec<Statement>>,
}

impl Accessor {
    pub fn auto(kind: AccessorKind) -> Self {
        Accessor {
            kind,
            attributes: Vec::new(),
            modifiers: Modifiers::new(),
            body: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub ty: TypeSyntax,
    pub identifier: String,
    pub accessors: Vec<Accessor>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub ty: TypeSyntax,
    pub identifier: String,
    pub accessors: Vec<Accessor>,
    pub initializer: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndexerDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub ty: TypeSyntax,
    pub parameters: Vec<Parameter>,
    pub accessors: Vec<Accessor>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub return_type: TypeSyntax,
    pub identifier: String,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<Parameter>,
    pub constraints: Vec<ConstraintClause>,
    /// `None` prints `;` (interface and abstract members).
    pub body: Option<Vec<Statement>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstructorInitializerKind {
    Base,
    This,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstructorInitializer {
    pub kind: ConstructorInitializerKind,
    pub arguments: Vec<Argument>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstructorDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub initializer: Option<ConstructorInitializer>,
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DestructorDeclaration {
    pub attributes: Vec<AttributeList>,
    pub identifier: String,
    pub body: Vec<Statement>,
}

/// Overloadable operator tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorToken {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
    LogicalNot,
    LeftShift,
    RightShift,
    True,
    False,
}

impl OperatorToken {
    pub fn token(self) -> &'static str {
        match self {
            OperatorToken::Plus => "+",
            OperatorToken::Minus => "-",
            OperatorToken::Multiply => "*",
            OperatorToken::Divide => "/",
            OperatorToken::Modulo => "%",
            OperatorToken::Equals => "==",
            OperatorToken::NotEquals => "!=",
            OperatorToken::LessThan => "<",
            OperatorToken::LessThanOrEqual => "<=",
            OperatorToken::GreaterThan => ">",
            OperatorToken::GreaterThanOrEqual => ">=",
            OperatorToken::BitwiseAnd => "&",
            OperatorToken::BitwiseOr => "|",
            OperatorToken::ExclusiveOr => "^",
            OperatorToken::LogicalNot => "!",
            OperatorToken::LeftShift => "<<",
            OperatorToken::RightShift => ">>",
            OperatorToken::True => "true",
            OperatorToken::False => "false",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperatorDeclaration {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub return_type: TypeSyntax,
    pub operator: OperatorToken,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Statement>,
}

/// `public static implicit operator T(U value)`
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionOperatorDeclaration {
    pub attributes: Vec<AttributeList>,
    /// Includes `implicit` or `explicit`.
    pub modifiers: Modifiers,
    pub ty: TypeSyntax,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsingDirective {
    pub alias: Option<String>,
    pub name: Name,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    Namespace { name: Name, members: Vec<Member> },
    Type(TypeDeclaration),
    Enum(EnumDeclaration),
    Delegate(DelegateDeclaration),
    Field(FieldDeclaration),
    EventField(FieldDeclaration),
    Event(EventDeclaration),
    Property(PropertyDeclaration),
    Indexer(IndexerDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Destructor(DestructorDeclaration),
    Operator(OperatorDeclaration),
    ConversionOperator(ConversionOperatorDeclaration),
    Commented { trivia: Trivia, member: Box<Member> },
}

impl Member {
    /// Attach comments, leaving the member unwrapped when there are none.
    pub fn with_trivia(self, trivia: Trivia) -> Self {
        if trivia.is_empty() {
            self
        } else {
            Member::Commented {
                trivia,
                member: Box::new(self),
            }
        }
    }

    /// The member with any comment wrapper removed.
    pub fn unwrap_comments(&self) -> &Member {
        match self {
            Member::Commented { member, .. } => member.unwrap_comments(),
            other => other,
        }
    }

    /// Single-line members are printed without blank lines between them.
    pub fn is_single_line(&self) -> bool {
        match self.unwrap_comments() {
            Member::Field(_) | Member::EventField(_) | Member::Delegate(_) => true,
            Member::Method(method) => method.body.is_none(),
            Member::Property(property) => property.accessors.iter().all(|a| a.body.is_none()),
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompilationUnit {
    pub usings: Vec<UsingDirective>,
    pub attributes: Vec<AttributeList>,
    pub members: Vec<Member>,
}
