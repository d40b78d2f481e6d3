//! Block statements: `Select Case`, `With`, `Try`, and `Using`.

use super::*;
use crate::walk::statement_node_ids;
use rustc_hash::FxHashSet;
use std::rc::Rc;

/// Base name of the temporary holding a `With` target.
const WITH_BLOCK_TEMPORARY: &str = "withBlock";

impl MethodBodyVisitor<'_, '_> {
    // =========================================================================
    // Select Case
    // =========================================================================

    /// `Select Case` becomes `switch` when every clause is a single value or
    /// `Case Else`. Source cases never fall through, so every section ends
    /// in `break` unless it already jumps.
    pub(super) fn convert_select(
        &mut self,
        expression: &vb::Expr,
        case_blocks: &[vb::CaseBlock],
    ) -> ConversionResult<cs::Statement> {
        let expression = self.nodes.convert_expr(expression)?;
        let mut sections = Vec::with_capacity(case_blocks.len());
        for block in case_blocks {
            let mut labels = Vec::with_capacity(block.clauses.len());
            for clause in &block.clauses {
                labels.push(match clause {
                    vb::CaseClause::Simple { value } => cs::SwitchLabel::Case(self.nodes.convert_expr(value)?),
                    vb::CaseClause::Else => cs::SwitchLabel::Default,
                    vb::CaseClause::Relational { .. } => {
                        return Err(ConversionError::unsupported(
                            "RelationalCaseClause",
                            "switch labels must be single values",
                        ));
                    }
                    vb::CaseClause::Range { .. } => {
                        return Err(ConversionError::unsupported(
                            "RangeCaseClause",
                            "switch labels must be single values",
                        ));
                    }
                });
            }

            let converted =
                self.within_breakable(vb::BlockKind::Select, |v| v.convert_statements(&block.statements))?;
            let mut statements = block_with_trivia(converted, &block.trivia);
            if !statements.last().is_some_and(cs::Statement::is_jump) {
                statements.push(cs::Statement::Break);
            }
            // Sections share one scope; locals need their own.
            let declares = statements
                .iter()
                .any(|s| matches!(s.unwrap_comments(), cs::Statement::LocalDeclaration { .. }));
            if declares {
                statements = vec![cs::Statement::Block(statements)];
            }
            sections.push(cs::SwitchSection { labels, statements });
        }
        Ok(cs::Statement::Switch { expression, sections })
    }

    // =========================================================================
    // With
    // =========================================================================

    /// `With target ... End With` evaluates `target` once into a temporary
    /// that stands in for the receiver of every `.Member` inside.
    ///
    /// The temporary's name must not collide with any name visible anywhere
    /// inside the block or with an enclosing block's temporary.
    pub(super) fn convert_with(
        &mut self,
        statement: &vb::Statement,
        expression: &vb::Expr,
        statements: &[vb::Statement],
    ) -> ConversionResult<cs::Statement> {
        // The target belongs to the enclosing receiver, not to this block.
        let target = self.nodes.convert_expr(expression)?;

        let semantic = self.nodes.semantic();
        let reserved: FxHashSet<String> = statement_node_ids(statement)
            .into_iter()
            .flat_map(|id| semantic.names_in_scope(id))
            .collect();
        let receivers = Rc::clone(self.nodes.receivers());
        let name = receivers.unique_name(WITH_BLOCK_TEMPORARY, &reserved)?;

        let mut block = vec![cs::Statement::local(
            cs::TypeSyntax::Var,
            name.clone(),
            Some(target),
        )];
        let _receiver = receivers.push(name);
        block.extend(self.convert_statements(statements)?);
        Ok(cs::Statement::Block(block))
    }

    // =========================================================================
    // Try
    // =========================================================================

    pub(super) fn convert_try(
        &mut self,
        statements: &[vb::Statement],
        catch_blocks: &[vb::CatchBlock],
        finally_statements: Option<&[vb::Statement]>,
    ) -> ConversionResult<cs::Statement> {
        let block = self.convert_statements(statements)?;

        let mut catches = Vec::with_capacity(catch_blocks.len());
        for catch in catch_blocks {
            catches.push(self.convert_catch(catch)?);
        }

        let finally = match finally_statements {
            Some(statements) => Some(self.convert_statements(statements)?),
            None => None,
        };

        Ok(cs::Statement::Try {
            block,
            catches,
            finally,
        })
    }

    /// `Catch` alone catches everything. `Catch ex` without `As` takes the
    /// variable's type from the model, defaulting to `Exception`.
    fn convert_catch(&mut self, catch: &vb::CatchBlock) -> ConversionResult<cs::CatchClause> {
        let declaration = match (&catch.identifier, &catch.as_type) {
            (None, None) => None,
            (identifier, Some(ty)) => Some(cs::CatchDeclaration {
                ty: self.nodes.convert_type(ty)?,
                identifier: identifier.as_deref().map(convert_identifier),
            }),
            (Some(identifier), None) => {
                let ty = self
                    .nodes
                    .semantic()
                    .declared_symbol(catch.id)
                    .and_then(|symbol| symbol.ty)
                    .filter(|ty| !ty.is_error())
                    .map(|ty| symbol_type_syntax(&ty))
                    .unwrap_or_else(|| cs::TypeSyntax::named("System.Exception"));
                Some(cs::CatchDeclaration {
                    ty,
                    identifier: Some(convert_identifier(identifier)),
                })
            }
        };
        let filter = self.convert_optional(catch.filter.as_ref())?;
        let block = block_with_trivia(self.convert_statements(&catch.statements)?, &catch.trivia);
        Ok(cs::CatchClause {
            declaration,
            filter,
            block,
        })
    }

    // =========================================================================
    // Using
    // =========================================================================

    /// `Using a = x, b = y` disposes in reverse order of acquisition, so the
    /// first resource is the outermost `using`.
    pub(super) fn convert_using(
        &mut self,
        resource: &vb::UsingResource,
        statements: &[vb::Statement],
    ) -> ConversionResult<cs::Statement> {
        match resource {
            vb::UsingResource::Expression { expression } => {
                let expression = self.nodes.convert_expr(expression)?;
                Ok(cs::Statement::Using {
                    declaration: None,
                    expression: Some(expression),
                    statement: Box::new(self.convert_block(statements)?),
                })
            }
            vb::UsingResource::Variables { declarators } => {
                let mut declarations = Vec::with_capacity(declarators.len());
                for declarator in declarators {
                    declarations.extend(
                        self.nodes
                            .split_variable_declarations(declarator, DeclaratorSite::Local)?,
                    );
                }
                if declarations.is_empty() {
                    return Err(ConversionError::unsupported(
                        "UsingBlock",
                        "a using block needs at least one resource",
                    ));
                }
                let body = self.convert_block(statements)?;
                Ok(declarations
                    .into_iter()
                    .rev()
                    .fold(body, |inner, declaration| cs::Statement::Using {
                        declaration: Some(declaration),
                        expression: None,
                        statement: Box::new(inner),
                    }))
            }
        }
    }
}
