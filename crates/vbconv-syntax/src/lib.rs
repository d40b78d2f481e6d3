//! Source syntax tree for vbconv.
//!
//! The tree is produced by an external front-end and is read-only for the
//! converter. Every production of the source grammar is one variant of a
//! tagged union; nodes that the semantic model can answer questions about
//! carry a [`NodeId`].
//!
//! All node types derive `serde` traits so that a front-end can hand a tree to
//! the driver as JSON. [`SyntaxBuilder`] is the programmatic factory used by
//! front-ends written in Rust and by tests.

pub mod node;
pub use node::{NodeId, SimpleName};

pub mod types;
pub use types::{
    Attribute, AttributeList, AttributeTarget, Modifier, Name, PredefinedType, TypeConstraint,
    TypeParameter, TypeSyntax, Variance,
};

pub mod expressions;
pub use expressions::{
    Argument, BinaryOperator, CastKind, CollectionInitializer, Expr, FieldInitializer,
    InterpolatedContent, LambdaBody, LambdaExpr, LiteralValue, MethodKind, ObjectInitializer,
    PredefinedCastKeyword, UnaryOperator,
};

pub mod statements;
pub use statements::{
    AsClause, AssignmentOperator, BlockKind, CaseBlock, CaseClause, CatchBlock, ElseIfBlock,
    ForControl, LoopCondition, LoopConditionKind, ModifiedIdentifier, Statement, StatementKind,
    UsingResource, VariableDeclarator,
};

pub mod declarations;
pub use declarations::{
    Accessor, AccessorKind, CompilationUnit, ConstructorDeclaration, Declaration,
    DeclarationKind, DelegateDeclaration, EnumBlock, EnumMember, EventDeclaration,
    FieldDeclaration, ImportsClause, MethodDeclaration, OperatorDeclaration,
    OverloadableOperator, Parameter, PropertyDeclaration, SimpleAsClause, TypeBlock,
    TypeBlockKind,
};

pub mod builder;
pub use builder::SyntaxBuilder;

pub use vbconv_common::Trivia;

#[cfg(test)]
#[path = "tests/serde_tests.rs"]
mod serde_tests;
