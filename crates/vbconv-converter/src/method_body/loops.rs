//! Loops: `For`, `For Each`, `While`, and `Do ... Loop`.

use super::*;
use vbconv_syntax::NodeId;

/// `-x`, or `-x` under any number of parentheses.
fn is_negated(expr: &vb::Expr) -> bool {
    match expr {
        vb::Expr::Parenthesized { expression, .. } => is_negated(expression),
        vb::Expr::Unary {
            operator: vb::UnaryOperator::Minus,
            ..
        } => true,
        _ => false,
    }
}

impl MethodBodyVisitor<'_, '_> {
    /// `For i = a To b Step s`.
    ///
    /// The loop counts down when the step is negated (or a negative
    /// constant); any other step counts up. A control variable that is not
    /// in scope at the loop is declared by it.
    pub(super) fn convert_for(
        &mut self,
        statement_id: NodeId,
        control: &vb::ForControl,
        from: &vb::Expr,
        to: &vb::Expr,
        step: Option<&vb::Expr>,
        statements: &[vb::Statement],
    ) -> ConversionResult<cs::Statement> {
        let (variable, declaration, initializers) = match control {
            vb::ForControl::Declarator { declarator } => {
                let [name] = declarator.names.as_slice() else {
                    return Err(ConversionError::unsupported(
                        "ForBlock",
                        "a loop declares exactly one control variable",
                    ));
                };
                let identifier = convert_identifier(&name.identifier);
                let ty = match &declarator.as_clause {
                    Some(vb::AsClause::Simple { ty, .. }) => self.nodes.convert_type(ty)?,
                    _ => cs::TypeSyntax::Var,
                };
                let start = self.nodes.convert_expr(from)?;
                let declaration = cs::VariableDeclaration::single(ty, identifier.clone(), Some(start));
                (cs::Expr::id(identifier), Some(declaration), Vec::new())
            }
            vb::ForControl::Variable { expression } => {
                let variable = self.nodes.convert_expr(expression)?;
                let start = self.nodes.convert_expr(from)?;
                match expression {
                    vb::Expr::Name(name)
                        if !self
                            .nodes
                            .semantic()
                            .is_name_in_scope(statement_id, name.unescaped()) =>
                    {
                        let identifier = convert_identifier(&name.identifier);
                        let declaration =
                            cs::VariableDeclaration::single(cs::TypeSyntax::Var, identifier, Some(start));
                        (variable, Some(declaration), Vec::new())
                    }
                    _ => {
                        let assignment =
                            cs::Expr::assign(variable.clone(), cs::AssignmentOperator::Simple, start);
                        (variable, None, vec![assignment])
                    }
                }
            }
        };

        let limit = self.nodes.convert_expr(to)?;
        let (descending, incrementor) = match step {
            None => (
                false,
                cs::Expr::PostfixUnary {
                    operand: Box::new(variable.clone()),
                    operator: cs::PostfixOperator::Increment,
                },
            ),
            Some(step) => {
                let constant = self.nodes.semantic().constant_integer(step.id());
                let descending = is_negated(step) || constant.is_some_and(|value| value < 0);
                let incrementor = cs::Expr::assign(
                    variable.clone(),
                    cs::AssignmentOperator::Add,
                    self.nodes.convert_expr(step)?,
                );
                (descending, incrementor)
            }
        };
        let comparison = if descending {
            cs::BinaryOperator::GreaterThanOrEqual
        } else {
            cs::BinaryOperator::LessThanOrEqual
        };

        Ok(cs::Statement::For {
            declaration,
            initializers,
            condition: Some(cs::Expr::binary(variable, comparison, limit)),
            incrementors: vec![incrementor],
            statement: Box::new(self.within_breakable(vb::BlockKind::For, |v| v.convert_embedded(statements))?),
        })
    }

    pub(super) fn convert_for_each(
        &mut self,
        control: &vb::ForControl,
        expression: &vb::Expr,
        statements: &[vb::Statement],
    ) -> ConversionResult<cs::Statement> {
        let (ty, identifier) = match control {
            vb::ForControl::Declarator { declarator } => {
                let [name] = declarator.names.as_slice() else {
                    return Err(ConversionError::unsupported(
                        "ForEachBlock",
                        "a loop declares exactly one control variable",
                    ));
                };
                let ty = match &declarator.as_clause {
                    Some(vb::AsClause::Simple { ty, .. }) => self.nodes.convert_type(ty)?,
                    _ => cs::TypeSyntax::Var,
                };
                (ty, convert_identifier(&name.identifier))
            }
            // An existing variable: C# always declares a fresh one.
            vb::ForControl::Variable {
                expression: vb::Expr::Name(name),
            } => (cs::TypeSyntax::Var, convert_identifier(&name.identifier)),
            vb::ForControl::Variable { .. } => {
                return Err(ConversionError::unsupported(
                    "ForEachBlock",
                    "the control variable must be a simple name",
                ));
            }
        };

        Ok(cs::Statement::ForEach {
            ty,
            identifier,
            expression: self.nodes.convert_expr(expression)?,
            statement: Box::new(self.within_breakable(vb::BlockKind::For, |v| v.convert_embedded(statements))?),
        })
    }

    pub(super) fn convert_while(
        &mut self,
        condition: &vb::Expr,
        statements: &[vb::Statement],
    ) -> ConversionResult<cs::Statement> {
        Ok(cs::Statement::While {
            condition: self.nodes.convert_expr(condition)?,
            statement: Box::new(self.within_breakable(vb::BlockKind::While, |v| v.convert_embedded(statements))?),
        })
    }

    /// `Do While c` and `Do Until c` test first; `Loop While c` and
    /// `Loop Until c` test last; a bare `Do ... Loop` runs until exited.
    pub(super) fn convert_do_loop(
        &mut self,
        top: Option<&vb::LoopCondition>,
        bottom: Option<&vb::LoopCondition>,
        statements: &[vb::Statement],
    ) -> ConversionResult<cs::Statement> {
        match (top, bottom) {
            (Some(top), None) => Ok(cs::Statement::While {
                condition: self.convert_loop_condition(top)?,
                statement: Box::new(self.within_breakable(vb::BlockKind::Do, |v| v.convert_embedded(statements))?),
            }),
            (None, Some(bottom)) => {
                let statement = Box::new(self.within_breakable(vb::BlockKind::Do, |v| v.convert_block(statements))?);
                Ok(cs::Statement::Do {
                    statement,
                    condition: self.convert_loop_condition(bottom)?,
                })
            }
            (None, None) => Ok(cs::Statement::While {
                condition: cs::Expr::Literal(cs::Literal::Bool(true)),
                statement: Box::new(self.within_breakable(vb::BlockKind::Do, |v| v.convert_embedded(statements))?),
            }),
            (Some(_), Some(_)) => Err(ConversionError::unsupported(
                "DoLoopBlock",
                "a loop cannot test its condition at both ends",
            )),
        }
    }

    fn convert_loop_condition(&mut self, condition: &vb::LoopCondition) -> ConversionResult<cs::Expr> {
        let converted = self.nodes.convert_expr(&condition.condition)?;
        Ok(match condition.kind {
            vb::LoopConditionKind::While => converted,
            vb::LoopConditionKind::Until => cs::Expr::prefix(cs::PrefixOperator::LogicalNot, converted),
        })
    }
}
