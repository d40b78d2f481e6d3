//! Executable statements inside method, accessor, and lambda bodies.

use crate::expressions::{Argument, BinaryOperator, Expr};
use crate::node::{NodeId, SimpleName};
use crate::types::{AttributeList, Modifier, TypeSyntax};
use serde::{Deserialize, Serialize};
use vbconv_common::Trivia;

/// A statement together with its attached comments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub id: NodeId,
    #[serde(flatten)]
    pub kind: StatementKind,
    #[serde(default)]
    pub trivia: Trivia,
}

impl Statement {
    pub fn new(id: NodeId, kind: StatementKind) -> Self {
        Statement {
            id,
            kind,
            trivia: Trivia::default(),
        }
    }

    pub fn with_trivia(mut self, trivia: Trivia) -> Self {
        self.trivia = trivia;
        self
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.kind_name()
    }
}

/// The construct an `Exit` or `Continue` statement refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Sub,
    Function,
    Property,
    Operator,
    Do,
    For,
    While,
    Select,
    Try,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Simple,
    Add,
    Subtract,
    Multiply,
    Divide,
    IntegerDivide,
    Power,
    Concatenate,
    LeftShift,
    RightShift,
}

/// A declared name with its per-name decorations: `a?`, `b(5)`, `c()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModifiedIdentifier {
    pub id: NodeId,
    pub identifier: String,
    #[serde(default)]
    pub nullable: bool,
    /// Inclusive upper bounds: `a(5)`.
    #[serde(default)]
    pub array_bounds: Option<Vec<Argument>>,
    /// Rank specifiers without bounds: `a()`, `a(,)`.
    #[serde(default)]
    pub array_ranks: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AsClause {
    /// `As T`
    Simple {
        #[serde(default)]
        attributes: Vec<AttributeList>,
        ty: TypeSyntax,
    },
    /// `As New T(...)`: the creation expression initializes the variable.
    New { creation: Expr },
}

/// `a, b As Integer = 1`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub names: Vec<ModifiedIdentifier>,
    #[serde(default)]
    pub as_clause: Option<AsClause>,
    #[serde(default)]
    pub initializer: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElseIfBlock {
    pub condition: Expr,
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub trivia: Trivia,
}

/// Loop control variable of `For` / `For Each`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ForControl {
    /// `For i As Integer = ...`: declares a new variable.
    Declarator { declarator: VariableDeclarator },
    /// `For i = ...`: an existing (or implicitly declared) variable.
    Variable { expression: Expr },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CaseClause {
    /// `Case 1`
    Simple { value: Expr },
    /// `Case Is > 5`
    Relational {
        operator: BinaryOperator,
        value: Expr,
    },
    /// `Case 1 To 5`
    Range { lower: Expr, upper: Expr },
    /// `Case Else`
    Else,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseBlock {
    pub clauses: Vec<CaseClause>,
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub trivia: Trivia,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatchBlock {
    pub id: NodeId,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub as_type: Option<TypeSyntax>,
    /// `When` filter.
    #[serde(default)]
    pub filter: Option<Expr>,
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub trivia: Trivia,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum UsingResource {
    Expression { expression: Expr },
    Variables { declarators: Vec<VariableDeclarator> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopConditionKind {
    While,
    Until,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopCondition {
    pub kind: LoopConditionKind,
    pub condition: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StatementKind {
    LocalDeclaration {
        modifiers: Vec<Modifier>,
        declarators: Vec<VariableDeclarator>,
    },
    Expression {
        expression: Expr,
    },
    /// `Call Foo()`
    Call {
        expression: Expr,
    },
    Assignment {
        operator: AssignmentOperator,
        left: Expr,
        right: Expr,
    },
    Return {
        #[serde(default)]
        expression: Option<Expr>,
    },
    Exit {
        block: BlockKind,
    },
    Continue {
        block: BlockKind,
    },
    Throw {
        #[serde(default)]
        expression: Option<Expr>,
    },
    Yield {
        expression: Expr,
    },
    RaiseEvent {
        name: SimpleName,
        #[serde(default)]
        arguments: Vec<Argument>,
    },
    AddHandler {
        event: Expr,
        handler: Expr,
    },
    RemoveHandler {
        event: Expr,
        handler: Expr,
    },
    /// `If c Then a : b Else d`
    SingleLineIf {
        condition: Expr,
        statements: Vec<Statement>,
        #[serde(default)]
        else_statements: Option<Vec<Statement>>,
    },
    MultiLineIf {
        condition: Expr,
        #[serde(default)]
        statements: Vec<Statement>,
        #[serde(default)]
        else_if_blocks: Vec<ElseIfBlock>,
        #[serde(default)]
        else_statements: Option<Vec<Statement>>,
    },
    For {
        control: ForControl,
        from: Expr,
        to: Expr,
        #[serde(default)]
        step: Option<Expr>,
        #[serde(default)]
        statements: Vec<Statement>,
    },
    ForEach {
        control: ForControl,
        expression: Expr,
        #[serde(default)]
        statements: Vec<Statement>,
    },
    Select {
        expression: Expr,
        case_blocks: Vec<CaseBlock>,
    },
    With {
        expression: Expr,
        #[serde(default)]
        statements: Vec<Statement>,
    },
    Try {
        #[serde(default)]
        statements: Vec<Statement>,
        #[serde(default)]
        catch_blocks: Vec<CatchBlock>,
        #[serde(default)]
        finally_statements: Option<Vec<Statement>>,
    },
    SyncLock {
        expression: Expr,
        #[serde(default)]
        statements: Vec<Statement>,
    },
    Using {
        resource: UsingResource,
        #[serde(default)]
        statements: Vec<Statement>,
    },
    While {
        condition: Expr,
        #[serde(default)]
        statements: Vec<Statement>,
    },
    /// `Do [While|Until c] ... Loop [While|Until c]`
    DoLoop {
        #[serde(default)]
        top_condition: Option<LoopCondition>,
        #[serde(default)]
        bottom_condition: Option<LoopCondition>,
        #[serde(default)]
        statements: Vec<Statement>,
    },
    Stop,
    End,
    OnErrorGoTo {
        label: String,
    },
    OnErrorResumeNext,
    Resume {
        #[serde(default)]
        label: Option<String>,
    },
    ReDim {
        preserve: bool,
        clauses: Vec<Expr>,
    },
    Erase {
        expressions: Vec<Expr>,
    },
    GoTo {
        label: String,
    },
    Label {
        label: String,
    },
}

impl StatementKind {
    /// Syntax kind name, used in conversion failure messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            StatementKind::LocalDeclaration { .. } => "LocalDeclarationStatement",
            StatementKind::Expression { .. } => "ExpressionStatement",
            StatementKind::Call { .. } => "CallStatement",
            StatementKind::Assignment { .. } => "AssignmentStatement",
            StatementKind::Return { .. } => "ReturnStatement",
            StatementKind::Exit { .. } => "ExitStatement",
            StatementKind::Continue { .. } => "ContinueStatement",
            StatementKind::Throw { .. } => "ThrowStatement",
            StatementKind::Yield { .. } => "YieldStatement",
            StatementKind::RaiseEvent { .. } => "RaiseEventStatement",
            StatementKind::AddHandler { .. } => "AddHandlerStatement",
            StatementKind::RemoveHandler { .. } => "RemoveHandlerStatement",
            StatementKind::SingleLineIf { .. } => "SingleLineIfStatement",
            StatementKind::MultiLineIf { .. } => "MultiLineIfBlock",
            StatementKind::For { .. } => "ForBlock",
            StatementKind::ForEach { .. } => "ForEachBlock",
            StatementKind::Select { .. } => "SelectBlock",
            StatementKind::With { .. } => "WithBlock",
            StatementKind::Try { .. } => "TryBlock",
            StatementKind::SyncLock { .. } => "SyncLockBlock",
            StatementKind::Using { .. } => "UsingBlock",
            StatementKind::While { .. } => "WhileBlock",
            StatementKind::DoLoop { .. } => "DoLoopBlock",
            StatementKind::Stop => "StopStatement",
            StatementKind::End => "EndStatement",
            StatementKind::OnErrorGoTo { .. } => "OnErrorGoToStatement",
            StatementKind::OnErrorResumeNext => "OnErrorResumeNextStatement",
            StatementKind::Resume { .. } => "ResumeStatement",
            StatementKind::ReDim { .. } => "ReDimStatement",
            StatementKind::Erase { .. } => "EraseStatement",
            StatementKind::GoTo { .. } => "GoToStatement",
            StatementKind::Label { .. } => "LabelStatement",
        }
    }
}
