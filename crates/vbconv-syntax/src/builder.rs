//! Programmatic construction of source trees.
//!
//! `SyntaxBuilder` hands out fresh [`NodeId`]s and wraps the verbose struct
//! literals of the tree in short helper constructors, the same way the
//! destination tree offers `id`/`call`/`prop` shortcuts.

use crate::declarations::{
    CompilationUnit, Declaration, DeclarationKind, MethodDeclaration, Parameter, SimpleAsClause,
    TypeBlock, TypeBlockKind,
};
use crate::expressions::{
    Argument, BinaryOperator, Expr, LambdaBody, LambdaExpr, LiteralValue, MethodKind,
    UnaryOperator,
};
use crate::node::{NodeId, SimpleName};
use crate::statements::{AsClause, ModifiedIdentifier, Statement, StatementKind, VariableDeclarator};
use crate::types::{Modifier, Name, PredefinedType, TypeSyntax};
use std::cell::Cell;

/// Factory for source nodes with unique ids.
pub struct SyntaxBuilder {
    next: Cell<u32>,
}

impl Default for SyntaxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxBuilder {
    pub fn new() -> Self {
        SyntaxBuilder { next: Cell::new(1) }
    }

    /// Allocate a fresh node id.
    pub fn next_id(&self) -> NodeId {
        let id = self.next.get();
        self.next.set(id + 1);
        NodeId(id)
    }

    // =========================================================================
    // Names and types
    // =========================================================================

    pub fn simple_name(&self, identifier: &str) -> SimpleName {
        SimpleName {
            id: self.next_id(),
            identifier: identifier.to_string(),
            type_arguments: Vec::new(),
        }
    }

    pub fn generic_name(&self, identifier: &str, type_arguments: Vec<TypeSyntax>) -> SimpleName {
        SimpleName {
            id: self.next_id(),
            identifier: identifier.to_string(),
            type_arguments,
        }
    }

    /// Build a possibly dotted name: `"System.Collections"`.
    pub fn name(&self, dotted: &str) -> Name {
        let mut parts = dotted.split('.');
        let first = parts.next().unwrap_or_default();
        let mut name = if first == "Global" {
            Name::Global { id: self.next_id() }
        } else {
            Name::Simple(self.simple_name(first))
        };
        for part in parts {
            name = Name::Qualified {
                id: self.next_id(),
                left: Box::new(name),
                right: self.simple_name(part),
            };
        }
        name
    }

    pub fn predefined(&self, keyword: PredefinedType) -> TypeSyntax {
        TypeSyntax::Predefined {
            id: self.next_id(),
            keyword,
        }
    }

    pub fn named_type(&self, dotted: &str) -> TypeSyntax {
        TypeSyntax::Named {
            name: self.name(dotted),
        }
    }

    pub fn generic_type(&self, identifier: &str, type_arguments: Vec<TypeSyntax>) -> TypeSyntax {
        TypeSyntax::Named {
            name: Name::Simple(self.generic_name(identifier, type_arguments)),
        }
    }

    pub fn array_type(&self, element: TypeSyntax) -> TypeSyntax {
        TypeSyntax::Array {
            id: self.next_id(),
            element: Box::new(element),
            ranks: vec![1],
        }
    }

    pub fn nullable_type(&self, element: TypeSyntax) -> TypeSyntax {
        TypeSyntax::Nullable {
            id: self.next_id(),
            element: Box::new(element),
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn ident(&self, identifier: &str) -> Expr {
        Expr::Name(self.simple_name(identifier))
    }

    pub fn literal(&self, value: LiteralValue) -> Expr {
        Expr::Literal {
            id: self.next_id(),
            value,
        }
    }

    pub fn int(&self, value: i64) -> Expr {
        self.literal(LiteralValue::Numeric(value.to_string()))
    }

    pub fn string(&self, value: &str) -> Expr {
        self.literal(LiteralValue::String(value.to_string()))
    }

    pub fn boolean(&self, value: bool) -> Expr {
        self.literal(LiteralValue::Boolean(value))
    }

    pub fn nothing(&self) -> Expr {
        self.literal(LiteralValue::Nothing)
    }

    pub fn me(&self) -> Expr {
        Expr::Me { id: self.next_id() }
    }

    pub fn my_base(&self) -> Expr {
        Expr::MyBase { id: self.next_id() }
    }

    pub fn member(&self, receiver: Expr, name: &str) -> Expr {
        Expr::MemberAccess {
            id: self.next_id(),
            expression: Some(Box::new(receiver)),
            name: self.simple_name(name),
        }
    }

    /// `.name` with no receiver.
    pub fn implicit_member(&self, name: &str) -> Expr {
        Expr::MemberAccess {
            id: self.next_id(),
            expression: None,
            name: self.simple_name(name),
        }
    }

    pub fn arg(&self, expression: Expr) -> Argument {
        Argument::Simple {
            id: self.next_id(),
            name: None,
            expression,
        }
    }

    pub fn named_arg(&self, name: &str, expression: Expr) -> Argument {
        Argument::Simple {
            id: self.next_id(),
            name: Some(name.to_string()),
            expression,
        }
    }

    /// Invocation with positional arguments.
    pub fn invoke(&self, target: Expr, args: Vec<Expr>) -> Expr {
        let arguments = args.into_iter().map(|a| self.arg(a)).collect();
        self.invoke_with(target, arguments)
    }

    pub fn invoke_with(&self, target: Expr, arguments: Vec<Argument>) -> Expr {
        Expr::Invocation {
            id: self.next_id(),
            expression: Box::new(target),
            arguments,
        }
    }

    pub fn binary(&self, operator: BinaryOperator, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            id: self.next_id(),
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(&self, operator: UnaryOperator, operand: Expr) -> Expr {
        Expr::Unary {
            id: self.next_id(),
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn paren(&self, expression: Expr) -> Expr {
        Expr::Parenthesized {
            id: self.next_id(),
            expression: Box::new(expression),
        }
    }

    pub fn new_object(&self, ty: TypeSyntax, args: Option<Vec<Expr>>) -> Expr {
        Expr::ObjectCreation {
            id: self.next_id(),
            ty,
            arguments: args.map(|args| args.into_iter().map(|a| self.arg(a)).collect()),
            initializer: None,
        }
    }

    /// Single-line `Function(params) body` lambda.
    pub fn lambda_function(&self, parameters: Vec<Parameter>, body: Expr) -> Expr {
        Expr::Lambda(Box::new(LambdaExpr {
            id: self.next_id(),
            kind: MethodKind::Function,
            modifiers: Vec::new(),
            parameters,
            as_clause: None,
            body: LambdaBody::Expression {
                expression: Box::new(body),
            },
        }))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn stmt(&self, kind: StatementKind) -> Statement {
        Statement::new(self.next_id(), kind)
    }

    pub fn expr_stmt(&self, expression: Expr) -> Statement {
        self.stmt(StatementKind::Expression { expression })
    }

    pub fn modified_identifier(&self, identifier: &str) -> ModifiedIdentifier {
        ModifiedIdentifier {
            id: self.next_id(),
            identifier: identifier.to_string(),
            nullable: false,
            array_bounds: None,
            array_ranks: Vec::new(),
        }
    }

    pub fn declarator(
        &self,
        identifier: &str,
        ty: Option<TypeSyntax>,
        initializer: Option<Expr>,
    ) -> VariableDeclarator {
        VariableDeclarator {
            names: vec![self.modified_identifier(identifier)],
            as_clause: ty.map(|ty| AsClause::Simple {
                attributes: Vec::new(),
                ty,
            }),
            initializer,
        }
    }

    /// `Dim name As ty = initializer`
    pub fn dim(&self, identifier: &str, ty: Option<TypeSyntax>, initializer: Option<Expr>) -> Statement {
        self.stmt(StatementKind::LocalDeclaration {
            modifiers: vec![Modifier::Dim],
            declarators: vec![self.declarator(identifier, ty, initializer)],
        })
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub fn param(&self, identifier: &str, ty: Option<TypeSyntax>) -> Parameter {
        Parameter {
            id: self.next_id(),
            attributes: Vec::new(),
            modifiers: Vec::new(),
            identifier: identifier.to_string(),
            nullable: false,
            array_ranks: Vec::new(),
            as_type: ty,
            default: None,
        }
    }

    pub fn decl(&self, kind: DeclarationKind) -> Declaration {
        Declaration::new(self.next_id(), kind)
    }

    pub fn type_block(&self, kind: TypeBlockKind, identifier: &str, members: Vec<Declaration>) -> Declaration {
        self.decl(DeclarationKind::Type(TypeBlock {
            kind,
            attributes: Vec::new(),
            modifiers: Vec::new(),
            identifier: identifier.to_string(),
            type_parameters: Vec::new(),
            inherits: Vec::new(),
            implements: Vec::new(),
            members,
        }))
    }

    pub fn class(&self, identifier: &str, members: Vec<Declaration>) -> Declaration {
        self.type_block(TypeBlockKind::Class, identifier, members)
    }

    pub fn method(
        &self,
        kind: MethodKind,
        identifier: &str,
        parameters: Vec<Parameter>,
        return_type: Option<TypeSyntax>,
        body: Vec<Statement>,
    ) -> Declaration {
        self.decl(DeclarationKind::Method(MethodDeclaration {
            kind,
            attributes: Vec::new(),
            modifiers: Vec::new(),
            identifier: identifier.to_string(),
            type_parameters: Vec::new(),
            parameters,
            as_clause: return_type.map(|ty| SimpleAsClause {
                attributes: Vec::new(),
                ty,
            }),
            body: Some(body),
        }))
    }

    pub fn sub(&self, identifier: &str, parameters: Vec<Parameter>, body: Vec<Statement>) -> Declaration {
        self.method(MethodKind::Sub, identifier, parameters, None, body)
    }

    pub fn compilation_unit(&self, members: Vec<Declaration>) -> CompilationUnit {
        CompilationUnit {
            id: self.next_id(),
            imports: Vec::new(),
            attributes: Vec::new(),
            members,
        }
    }
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
