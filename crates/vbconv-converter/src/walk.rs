//! Node id collection over source statements.
//!
//! A synthesized temporary must not capture any name visible anywhere inside
//! the block that introduces it, so the `With` rule asks the semantic model
//! for the names in scope at every descendant node.

use vbconv_syntax::{
    Argument, AsClause, CaseClause, Expr, ForControl, InterpolatedContent, LambdaBody, NodeId,
    ObjectInitializer, Statement, StatementKind, UsingResource, VariableDeclarator,
};

/// Ids of `statement` and of every statement and expression inside it.
pub(crate) fn statement_node_ids(statement: &Statement) -> Vec<NodeId> {
    let mut ids = Vec::new();
    visit_statement(statement, &mut ids);
    ids
}

fn visit_statements(statements: &[Statement], ids: &mut Vec<NodeId>) {
    for statement in statements {
        visit_statement(statement, ids);
    }
}

fn visit_declarator(declarator: &VariableDeclarator, ids: &mut Vec<NodeId>) {
    for name in &declarator.names {
        ids.push(name.id);
        for bound in name.array_bounds.iter().flatten() {
            visit_argument(bound, ids);
        }
    }
    if let Some(AsClause::New { creation }) = &declarator.as_clause {
        visit_expr(creation, ids);
    }
    if let Some(initializer) = &declarator.initializer {
        visit_expr(initializer, ids);
    }
}

fn visit_statement(statement: &Statement, ids: &mut Vec<NodeId>) {
    ids.push(statement.id);
    match &statement.kind {
        StatementKind::LocalDeclaration { declarators, .. } => {
            for declarator in declarators {
                visit_declarator(declarator, ids);
            }
        }
        StatementKind::Expression { expression }
        | StatementKind::Call { expression }
        | StatementKind::Yield { expression } => visit_expr(expression, ids),
        StatementKind::Assignment { left, right, .. } => {
            visit_expr(left, ids);
            visit_expr(right, ids);
        }
        StatementKind::Return { expression } | StatementKind::Throw { expression } => {
            if let Some(expression) = expression {
                visit_expr(expression, ids);
            }
        }
        StatementKind::RaiseEvent { name, arguments } => {
            ids.push(name.id);
            for argument in arguments {
                visit_argument(argument, ids);
            }
        }
        StatementKind::AddHandler { event, handler }
        | StatementKind::RemoveHandler { event, handler } => {
            visit_expr(event, ids);
            visit_expr(handler, ids);
        }
        StatementKind::SingleLineIf {
            condition,
            statements,
            else_statements,
        } => {
            visit_expr(condition, ids);
            visit_statements(statements, ids);
            if let Some(else_statements) = else_statements {
                visit_statements(else_statements, ids);
            }
        }
        StatementKind::MultiLineIf {
            condition,
            statements,
            else_if_blocks,
            else_statements,
        } => {
            visit_expr(condition, ids);
            visit_statements(statements, ids);
            for block in else_if_blocks {
                visit_expr(&block.condition, ids);
                visit_statements(&block.statements, ids);
            }
            if let Some(else_statements) = else_statements {
                visit_statements(else_statements, ids);
            }
        }
        StatementKind::For {
            control,
            from,
            to,
            step,
            statements,
        } => {
            visit_control(control, ids);
            visit_expr(from, ids);
            visit_expr(to, ids);
            if let Some(step) = step {
                visit_expr(step, ids);
            }
            visit_statements(statements, ids);
        }
        StatementKind::ForEach {
            control,
            expression,
            statements,
        } => {
            visit_control(control, ids);
            visit_expr(expression, ids);
            visit_statements(statements, ids);
        }
        StatementKind::Select {
            expression,
            case_blocks,
        } => {
            visit_expr(expression, ids);
            for block in case_blocks {
                for clause in &block.clauses {
                    match clause {
                        CaseClause::Simple { value } | CaseClause::Relational { value, .. } => {
                            visit_expr(value, ids)
                        }
                        CaseClause::Range { lower, upper } => {
                            visit_expr(lower, ids);
                            visit_expr(upper, ids);
                        }
                        CaseClause::Else => {}
                    }
                }
                visit_statements(&block.statements, ids);
            }
        }
        StatementKind::With {
            expression,
            statements,
        }
        | StatementKind::SyncLock {
            expression,
            statements,
        }
        | StatementKind::While {
            condition: expression,
            statements,
        } => {
            visit_expr(expression, ids);
            visit_statements(statements, ids);
        }
        StatementKind::Try {
            statements,
            catch_blocks,
            finally_statements,
        } => {
            visit_statements(statements, ids);
            for block in catch_blocks {
                ids.push(block.id);
                if let Some(filter) = &block.filter {
                    visit_expr(filter, ids);
                }
                visit_statements(&block.statements, ids);
            }
            if let Some(finally_statements) = finally_statements {
                visit_statements(finally_statements, ids);
            }
        }
        StatementKind::Using {
            resource,
            statements,
        } => {
            match resource {
                UsingResource::Expression { expression } => visit_expr(expression, ids),
                UsingResource::Variables { declarators } => {
                    for declarator in declarators {
                        visit_declarator(declarator, ids);
                    }
                }
            }
            visit_statements(statements, ids);
        }
        StatementKind::DoLoop {
            top_condition,
            bottom_condition,
            statements,
        } => {
            for condition in top_condition.iter().chain(bottom_condition) {
                visit_expr(&condition.condition, ids);
            }
            visit_statements(statements, ids);
        }
        StatementKind::ReDim { clauses, .. } => {
            for clause in clauses {
                visit_expr(clause, ids);
            }
        }
        StatementKind::Erase { expressions } => {
            for expression in expressions {
                visit_expr(expression, ids);
            }
        }
        StatementKind::Exit { .. }
        | StatementKind::Continue { .. }
        | StatementKind::Stop
        | StatementKind::End
        | StatementKind::OnErrorGoTo { .. }
        | StatementKind::OnErrorResumeNext
        | StatementKind::Resume { .. }
        | StatementKind::GoTo { .. }
        | StatementKind::Label { .. } => {}
    }
}

fn visit_control(control: &ForControl, ids: &mut Vec<NodeId>) {
    match control {
        ForControl::Declarator { declarator } => visit_declarator(declarator, ids),
        ForControl::Variable { expression } => visit_expr(expression, ids),
    }
}

fn visit_argument(argument: &Argument, ids: &mut Vec<NodeId>) {
    ids.push(argument.id());
    if let Argument::Simple { expression, .. } = argument {
        visit_expr(expression, ids);
    }
}

fn visit_expr(expr: &Expr, ids: &mut Vec<NodeId>) {
    ids.push(expr.id());
    match expr {
        Expr::InterpolatedString { contents, .. } => {
            for content in contents {
                if let InterpolatedContent::Interpolation {
                    expression,
                    alignment,
                    ..
                } = content
                {
                    visit_expr(expression, ids);
                    if let Some(alignment) = alignment {
                        visit_expr(alignment, ids);
                    }
                }
            }
        }
        Expr::MemberAccess { expression, .. } => {
            if let Some(expression) = expression {
                visit_expr(expression, ids);
            }
        }
        Expr::ConditionalAccess {
            expression,
            when_not_null,
            ..
        } => {
            visit_expr(expression, ids);
            visit_expr(when_not_null, ids);
        }
        Expr::Invocation {
            expression,
            arguments,
            ..
        } => {
            visit_expr(expression, ids);
            for argument in arguments {
                visit_argument(argument, ids);
            }
        }
        Expr::ObjectCreation {
            arguments,
            initializer,
            ..
        } => {
            for argument in arguments.iter().flatten() {
                visit_argument(argument, ids);
            }
            match initializer {
                Some(ObjectInitializer::Collection { initializer }) => {
                    for item in &initializer.initializers {
                        visit_expr(item, ids);
                    }
                }
                Some(ObjectInitializer::Members { fields }) => {
                    for field in fields {
                        visit_expr(&field.expression, ids);
                    }
                }
                None => {}
            }
        }
        Expr::ArrayCreation {
            bounds,
            initializer,
            ..
        } => {
            for bound in bounds.iter().flatten() {
                visit_argument(bound, ids);
            }
            for item in &initializer.initializers {
                visit_expr(item, ids);
            }
        }
        Expr::CollectionInitializer(initializer) => {
            for item in &initializer.initializers {
                visit_expr(item, ids);
            }
        }
        Expr::Binary { left, right, .. } => {
            visit_expr(left, ids);
            visit_expr(right, ids);
        }
        Expr::BinaryConditional { first, second, .. } => {
            visit_expr(first, ids);
            visit_expr(second, ids);
        }
        Expr::TernaryConditional {
            condition,
            when_true,
            when_false,
            ..
        } => {
            visit_expr(condition, ids);
            visit_expr(when_true, ids);
            visit_expr(when_false, ids);
        }
        Expr::Unary { operand: inner, .. }
        | Expr::Parenthesized {
            expression: inner, ..
        }
        | Expr::Cast {
            expression: inner, ..
        }
        | Expr::PredefinedCast {
            expression: inner, ..
        }
        | Expr::TypeOf {
            expression: inner, ..
        }
        | Expr::NameOf { argument: inner, .. }
        | Expr::Await {
            expression: inner, ..
        } => visit_expr(inner, ids),
        Expr::Lambda(lambda) => {
            for parameter in &lambda.parameters {
                ids.push(parameter.id);
            }
            match &lambda.body {
                LambdaBody::Expression { expression } => visit_expr(expression, ids),
                LambdaBody::Statement { statement } => visit_statement(statement, ids),
                LambdaBody::Block { statements } => visit_statements(statements, ids),
            }
        }
        Expr::AnonymousObjectCreation { fields, .. } => {
            for field in fields {
                visit_expr(&field.expression, ids);
            }
        }
        Expr::Literal { .. }
        | Expr::Name(_)
        | Expr::Global { .. }
        | Expr::PredefinedType { .. }
        | Expr::Me { .. }
        | Expr::MyBase { .. }
        | Expr::MyClass { .. }
        | Expr::GetType { .. }
        | Expr::Query { .. }
        | Expr::XmlLiteral { .. } => {}
    }
}

#[cfg(test)]
#[path = "tests/walk_tests.rs"]
mod tests;
