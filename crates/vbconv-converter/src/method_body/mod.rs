//! Statement visitor.
//!
//! A `MethodBodyVisitor` converts the statements of exactly one executable
//! body: a method, accessor, constructor, operator, or multi-line lambda.
//! The nodes visitor creates one per body, so per-body state (the iterator
//! flag and the body kind that `Return`/`Exit` leave) never leaks into a
//! nested lambda. Expressions are handed back to the [`NodesVisitor`], which
//! also owns the implicit-receiver stack and the recursion guard.
//!
//! # Module Organization
//!
//! - `mod.rs`: dispatch, declarations, jumps, `If`, events
//! - `loops`: `For`, `For Each`, `While`, `Do ... Loop`
//! - `blocks`: `Select Case`, `With`, `Try`, `SyncLock`, `Using`

use crate::error::{ConversionError, ConversionResult};
use crate::nodes::{
    DeclaratorSite, NodesVisitor, UNKNOWN_NOTHING_COMMENT, attach_statement_trivia,
    symbol_type_syntax,
};
use crate::semantic::EnclosingBody;
use crate::tokens::{TokenContext, convert_assignment_operator, convert_identifier, convert_modifiers};
use vbconv_common::Trivia;
use vbconv_csharp as cs;
use vbconv_syntax as vb;

mod blocks;
mod loops;

pub struct MethodBodyVisitor<'v, 'a> {
    nodes: &'v mut NodesVisitor<'a>,
    body: EnclosingBody,
    is_iterator: bool,
    /// Loops and `Select` blocks enclosing the current statement, innermost last.
    breakables: Vec<vb::BlockKind>,
}

impl<'v, 'a> MethodBodyVisitor<'v, 'a> {
    pub fn new(nodes: &'v mut NodesVisitor<'a>, body: EnclosingBody, is_iterator: bool) -> Self {
        MethodBodyVisitor {
            nodes,
            body,
            is_iterator,
            breakables: Vec::new(),
        }
    }

    pub fn convert_statements(&mut self, statements: &[vb::Statement]) -> ConversionResult<Vec<cs::Statement>> {
        let mut converted = Vec::with_capacity(statements.len());
        for statement in statements {
            converted.extend(self.convert_statement(statement)?);
        }
        Ok(converted)
    }

    /// Convert one statement. Most produce exactly one; a local declaration
    /// whose names have different types produces one per type.
    pub fn convert_statement(&mut self, statement: &vb::Statement) -> ConversionResult<Vec<cs::Statement>> {
        self.nodes.enter(statement.kind_name())?;
        let result = self.convert_statement_kind(statement);
        self.nodes.leave();
        Ok(attach_statement_trivia(result?, &statement.trivia))
    }

    fn convert_statement_kind(&mut self, statement: &vb::Statement) -> ConversionResult<Vec<cs::Statement>> {
        use vb::StatementKind as K;

        let converted = match &statement.kind {
            K::LocalDeclaration {
                modifiers,
                declarators,
            } => return self.convert_local_declaration(modifiers, declarators),
            K::Expression { expression } | K::Call { expression } => {
                cs::Statement::expr(self.convert_expression_statement(expression)?)
            }
            K::Assignment {
                operator,
                left,
                right,
            } => cs::Statement::expr(cs::Expr::assign(
                self.nodes.convert_expr(left)?,
                convert_assignment_operator(*operator)?,
                self.nodes.convert_expr(right)?,
            )),
            K::Return { expression } => self.convert_return(expression.as_ref())?,
            K::Exit { block } => self.convert_exit(*block)?,
            K::Continue { block } => self.convert_continue(*block)?,
            K::Throw { expression } => cs::Statement::Throw(self.convert_optional(expression.as_ref())?),
            K::Yield { expression } => cs::Statement::YieldReturn(self.nodes.convert_expr(expression)?),
            K::RaiseEvent { name, arguments } => self.convert_raise_event(name, arguments)?,
            K::AddHandler { event, handler } => {
                self.convert_handler(event, handler, cs::AssignmentOperator::Add)?
            }
            K::RemoveHandler { event, handler } => {
                self.convert_handler(event, handler, cs::AssignmentOperator::Subtract)?
            }
            K::SingleLineIf {
                condition,
                statements,
                else_statements,
            } => self.convert_if(condition, statements, &[], else_statements.as_deref())?,
            K::MultiLineIf {
                condition,
                statements,
                else_if_blocks,
                else_statements,
            } => self.convert_if(condition, statements, else_if_blocks, else_statements.as_deref())?,
            K::For {
                control,
                from,
                to,
                step,
                statements,
            } => self.convert_for(statement.id, control, from, to, step.as_ref(), statements)?,
            K::ForEach {
                control,
                expression,
                statements,
            } => self.convert_for_each(control, expression, statements)?,
            K::While {
                condition,
                statements,
            } => self.convert_while(condition, statements)?,
            K::DoLoop {
                top_condition,
                bottom_condition,
                statements,
            } => self.convert_do_loop(top_condition.as_ref(), bottom_condition.as_ref(), statements)?,
            K::Select {
                expression,
                case_blocks,
            } => self.convert_select(expression, case_blocks)?,
            K::With { expression, statements } => self.convert_with(statement, expression, statements)?,
            K::Try {
                statements,
                catch_blocks,
                finally_statements,
            } => self.convert_try(statements, catch_blocks, finally_statements.as_deref())?,
            K::SyncLock {
                expression,
                statements,
            } => cs::Statement::Lock {
                expression: self.nodes.convert_expr(expression)?,
                statement: Box::new(self.convert_block(statements)?),
            },
            K::Using { resource, statements } => self.convert_using(resource, statements)?,
            K::Stop => cs::Statement::expr(cs::Expr::call(
                cs::Expr::dotted("System.Diagnostics.Debugger.Break"),
                Vec::new(),
            )),
            K::End => cs::Statement::expr(cs::Expr::call(
                cs::Expr::dotted("System.Environment.Exit"),
                vec![cs::Expr::number("0")],
            )),
            K::OnErrorGoTo { .. }
            | K::OnErrorResumeNext
            | K::Resume { .. }
            | K::ReDim { .. }
            | K::Erase { .. }
            | K::GoTo { .. }
            | K::Label { .. } => {
                return Err(ConversionError::unimplemented(statement.kind_name()));
            }
        };
        Ok(vec![converted])
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    fn convert_optional(&mut self, expression: Option<&vb::Expr>) -> ConversionResult<Option<cs::Expr>> {
        expression.map(|expr| self.nodes.convert_expr(expr)).transpose()
    }

    /// Convert the body of a loop or `Select` with `kind` as the innermost
    /// jump target.
    fn within_breakable<T>(
        &mut self,
        kind: vb::BlockKind,
        convert: impl FnOnce(&mut Self) -> ConversionResult<T>,
    ) -> ConversionResult<T> {
        self.breakables.push(kind);
        let result = convert(self);
        self.breakables.pop();
        result
    }

    /// Statements of a nested block, always braced.
    fn convert_block(&mut self, statements: &[vb::Statement]) -> ConversionResult<cs::Statement> {
        Ok(cs::Statement::Block(self.convert_statements(statements)?))
    }

    /// Statements of a nested block as an embedded statement: a single
    /// statement stays unbraced unless it declares a variable.
    fn convert_embedded(&mut self, statements: &[vb::Statement]) -> ConversionResult<cs::Statement> {
        Ok(embedded(self.convert_statements(statements)?))
    }

    // =========================================================================
    // Declarations and expressions
    // =========================================================================

    fn convert_local_declaration(
        &mut self,
        modifiers: &[vb::Modifier],
        declarators: &[vb::VariableDeclarator],
    ) -> ConversionResult<Vec<cs::Statement>> {
        let converted_modifiers = convert_modifiers(modifiers, TokenContext::Local)?;
        let site = if modifiers.contains(&vb::Modifier::Const) {
            DeclaratorSite::Constant
        } else {
            DeclaratorSite::Local
        };
        let mut statements = Vec::new();
        for declarator in declarators {
            for declaration in self.nodes.split_variable_declarations(declarator, site)? {
                statements.push(cs::Statement::LocalDeclaration {
                    modifiers: converted_modifiers.clone(),
                    declaration,
                });
            }
        }
        Ok(statements)
    }

    /// A method named without parentheses as a whole statement is a call.
    fn convert_expression_statement(&mut self, expression: &vb::Expr) -> ConversionResult<cs::Expr> {
        let converted = self.nodes.convert_expr(expression)?;
        let is_bare_name = matches!(
            converted,
            cs::Expr::Identifier(_)
                | cs::Expr::Generic { .. }
                | cs::Expr::MemberAccess { .. }
                | cs::Expr::MemberBinding { .. }
        );
        let is_method = self
            .nodes
            .semantic()
            .resolve_symbol(expression.id())
            .is_some_and(|symbol| symbol.is_method());
        if is_bare_name && is_method {
            return Ok(cs::Expr::Invocation {
                expression: Box::new(converted),
                arguments: Vec::new(),
            });
        }
        Ok(converted)
    }

    // =========================================================================
    // Jumps
    // =========================================================================

    fn convert_return(&mut self, expression: Option<&vb::Expr>) -> ConversionResult<cs::Statement> {
        match expression {
            None if self.is_iterator => Ok(cs::Statement::YieldBreak),
            None => Ok(cs::Statement::Return(None)),
            Some(expression) => Ok(cs::Statement::Return(Some(self.nodes.convert_expr(expression)?))),
        }
    }

    /// `break` leaves only the innermost loop or switch, so an `Exit` that
    /// targets anything further out has no C# form.
    fn convert_exit(&self, block: vb::BlockKind) -> ConversionResult<cs::Statement> {
        match block {
            vb::BlockKind::Do | vb::BlockKind::For | vb::BlockKind::While | vb::BlockKind::Select => {
                match self.breakables.last() {
                    Some(&innermost) if innermost == block => Ok(cs::Statement::Break),
                    Some(&innermost) => Err(ConversionError::unsupported(
                        "ExitStatement",
                        format!(
                            "Exit {} would only leave the enclosing {}",
                            block_keyword(block),
                            block_keyword(innermost)
                        ),
                    )),
                    None => Err(ConversionError::unsupported(
                        "ExitStatement",
                        format!("Exit {} is not inside a {} block", block_keyword(block), block_keyword(block)),
                    )),
                }
            }
            vb::BlockKind::Try => Err(ConversionError::unsupported(
                "ExitTryStatement",
                "C# has no statement that leaves only a try block",
            )),
            vb::BlockKind::Sub
            | vb::BlockKind::Function
            | vb::BlockKind::Property
            | vb::BlockKind::Operator => self.leave_body(),
        }
    }

    /// `continue` skips enclosing switches and resumes the innermost loop,
    /// which must be the one the statement names.
    fn convert_continue(&self, block: vb::BlockKind) -> ConversionResult<cs::Statement> {
        let innermost_loop = self
            .breakables
            .iter()
            .rev()
            .find(|kind| **kind != vb::BlockKind::Select);
        match innermost_loop {
            Some(&innermost) if innermost == block => Ok(cs::Statement::Continue),
            Some(&innermost) => Err(ConversionError::unsupported(
                "ContinueStatement",
                format!(
                    "Continue {} would resume the enclosing {} loop",
                    block_keyword(block),
                    block_keyword(innermost)
                ),
            )),
            None => Err(ConversionError::unsupported(
                "ContinueStatement",
                format!("Continue {} is not inside a loop", block_keyword(block)),
            )),
        }
    }

    /// Leave the body early. A body that returns a value returns the
    /// default of its return type, since the source's implicit result
    /// variable is never assigned on this path.
    fn leave_body(&self) -> ConversionResult<cs::Statement> {
        if self.is_iterator {
            return Ok(cs::Statement::YieldBreak);
        }
        if !self.body.returns_value() {
            return Ok(cs::Statement::Return(None));
        }
        let value = match self.body.return_type() {
            None => cs::Expr::null().with_comment(UNKNOWN_NOTHING_COMMENT),
            Some(ty) if ty.is_reference_type => cs::Expr::null(),
            Some(ty) if ty.is_error() || !ty.can_be_referenced_by_name => {
                return Err(ConversionError::unsupported(
                    "ExitStatement",
                    format!("the default value of {} cannot be written", ty.display_name),
                ));
            }
            Some(ty) => cs::Expr::Default(symbol_type_syntax(ty)),
        };
        Ok(cs::Statement::Return(Some(value)))
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// `RaiseEvent E(a)` becomes `E?.Invoke(a)`: raising an event without
    /// handlers does nothing.
    fn convert_raise_event(
        &mut self,
        name: &vb::SimpleName,
        arguments: &[vb::Argument],
    ) -> ConversionResult<cs::Statement> {
        let arguments = self.nodes.convert_arguments(arguments, None)?;
        Ok(cs::Statement::expr(cs::Expr::ConditionalAccess {
            expression: Box::new(cs::Expr::id(convert_identifier(&name.identifier))),
            when_not_null: Box::new(cs::Expr::Invocation {
                expression: Box::new(cs::Expr::MemberBinding {
                    name: "Invoke".to_string(),
                }),
                arguments,
            }),
        }))
    }

    fn convert_handler(
        &mut self,
        event: &vb::Expr,
        handler: &vb::Expr,
        operator: cs::AssignmentOperator,
    ) -> ConversionResult<cs::Statement> {
        Ok(cs::Statement::expr(cs::Expr::assign(
            self.nodes.convert_expr(event)?,
            operator,
            self.nodes.convert_expr(handler)?,
        )))
    }

    // =========================================================================
    // If
    // =========================================================================

    /// `If ... ElseIf ... Else` becomes a chain of nested ifs, each `ElseIf`
    /// the else branch of the previous one.
    fn convert_if(
        &mut self,
        condition: &vb::Expr,
        statements: &[vb::Statement],
        else_if_blocks: &[vb::ElseIfBlock],
        else_statements: Option<&[vb::Statement]>,
    ) -> ConversionResult<cs::Statement> {
        let condition = self.nodes.convert_expr(condition)?;
        let then_statements = self.convert_statements(statements)?;

        let else_clause = match else_if_blocks.split_first() {
            Some((first, rest)) => {
                let nested = self.convert_if(&first.condition, &first.statements, rest, else_statements)?;
                Some(with_block_trivia(nested, &first.trivia))
            }
            None => match else_statements {
                Some(else_statements) => Some(self.convert_embedded(else_statements)?),
                None => None,
            },
        };

        // An unbraced inner if would capture our else.
        let statement = match embedded(then_statements) {
            inner @ cs::Statement::If { .. } if else_clause.is_some() => {
                cs::Statement::Block(vec![inner])
            }
            other => other,
        };

        Ok(cs::Statement::If {
            condition,
            statement: Box::new(statement),
            else_clause: else_clause.map(Box::new),
        })
    }
}

fn block_keyword(block: vb::BlockKind) -> &'static str {
    match block {
        vb::BlockKind::Sub => "Sub",
        vb::BlockKind::Function => "Function",
        vb::BlockKind::Property => "Property",
        vb::BlockKind::Operator => "Operator",
        vb::BlockKind::Do => "Do",
        vb::BlockKind::For => "For",
        vb::BlockKind::While => "While",
        vb::BlockKind::Select => "Select",
        vb::BlockKind::Try => "Try",
    }
}

/// Wrap converted statements as the body of a compound statement.
fn embedded(statements: Vec<cs::Statement>) -> cs::Statement {
    match <[cs::Statement; 1]>::try_from(statements) {
        Ok([statement])
            if !matches!(
                statement,
                cs::Statement::LocalDeclaration { .. } | cs::Statement::Commented { .. }
            ) =>
        {
            statement
        }
        Ok([statement]) => cs::Statement::Block(vec![statement]),
        Err(statements) => cs::Statement::Block(statements),
    }
}

/// Comments of an `ElseIf`, `Case`, or `Catch` header, as leading comments
/// of the block it opens. Outside the block they would break an `else if`
/// chain or land between `case` labels.
fn block_with_trivia(statements: Vec<cs::Statement>, trivia: &Trivia) -> Vec<cs::Statement> {
    if trivia.is_empty() {
        return statements;
    }
    let header = Trivia {
        leading: trivia.leading.iter().chain(&trivia.trailing).cloned().collect(),
        trailing: None,
    };
    if statements.is_empty() {
        return vec![cs::Statement::Empty.with_trivia(header.convert())];
    }
    attach_statement_trivia(statements, &header)
}

/// Move header comments into the then-branch of a nested `if`.
fn with_block_trivia(statement: cs::Statement, trivia: &Trivia) -> cs::Statement {
    match statement {
        cs::Statement::If {
            condition,
            statement,
            else_clause,
        } if !trivia.is_empty() => {
            let body = match *statement {
                cs::Statement::Block(statements) => statements,
                other => vec![other],
            };
            cs::Statement::If {
                condition,
                statement: Box::new(cs::Statement::Block(block_with_trivia(body, trivia))),
                else_clause,
            }
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "../tests/method_body_tests.rs"]
mod tests;
