//! Declarator splitting shared by fields and local declarations.
//!
//! One source declarator can declare names of different destination types:
//! in `Dim a, b(5), c? As Integer` the names are `int`, `int[]`, and `int?`.
//! Names are grouped by their printed destination type, in order of first
//! appearance, and each group becomes one declaration.

use super::types::{nullable_of, symbol_type_syntax, with_outer_ranks};
use super::*;
use crate::tokens::convert_identifier;
use indexmap::IndexMap;
use vbconv_csharp::CSharpPrinter;

/// Where a declarator appears; decides the type of names without `As`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclaratorSite {
    Field,
    Local,
    /// `Const` fields and locals: `var` is not allowed and `object` cannot
    /// hold most constants, so the type must be known.
    Constant,
}

impl NodesVisitor<'_> {
    pub fn split_variable_declarations(
        &mut self,
        declarator: &vb::VariableDeclarator,
        site: DeclaratorSite,
    ) -> ConversionResult<Vec<cs::VariableDeclaration>> {
        let mut groups: IndexMap<String, cs::VariableDeclaration> = IndexMap::new();
        for name in &declarator.names {
            let (ty, initializer) = self.declared_variable(declarator, name, site)?;
            let key = CSharpPrinter::type_to_string(&ty);
            groups
                .entry(key)
                .or_insert_with(|| cs::VariableDeclaration {
                    ty,
                    variables: Vec::new(),
                })
                .variables
                .push(cs::VariableDeclarator {
                    identifier: convert_identifier(&name.identifier),
                    initializer,
                });
        }
        Ok(groups.into_values().collect())
    }

    fn declared_variable(
        &mut self,
        declarator: &vb::VariableDeclarator,
        name: &vb::ModifiedIdentifier,
        site: DeclaratorSite,
    ) -> ConversionResult<(cs::TypeSyntax, Option<cs::Expr>)> {
        let mut initializer = match &declarator.initializer {
            Some(initializer) => Some(self.convert_expr(initializer)?),
            None => None,
        };

        let base = match &declarator.as_clause {
            Some(vb::AsClause::Simple { ty, .. }) => self.convert_type(ty)?,
            Some(vb::AsClause::New { creation }) => {
                let vb::Expr::ObjectCreation { ty, .. } = creation else {
                    return Err(ConversionError::unsupported(
                        "AsNewClause",
                        "only object creation can follow As New",
                    ));
                };
                initializer = Some(self.convert_expr(creation)?);
                self.convert_type(ty)?
            }
            None => self.implicit_variable_type(declarator, name, site, initializer.is_some())?,
        };

        let decorated =
            name.nullable || name.array_bounds.is_some() || !name.array_ranks.is_empty();
        let base = if decorated && base == cs::TypeSyntax::Var {
            cs::TypeSyntax::Predefined(cs::PredefinedType::Object)
        } else {
            base
        };
        let base = if name.nullable { nullable_of(base) } else { base };

        let outer_ranks = || {
            name.array_ranks
                .iter()
                .map(|&rank| cs::ArrayRank::omitted(rank))
                .collect::<Vec<_>>()
        };

        let Some(bounds) = &name.array_bounds else {
            return Ok((with_outer_ranks(base, outer_ranks()), initializer));
        };

        // `a(5)` declares and allocates; the declared type has no sizes.
        let bounds_rank = self.convert_bounds_rank(bounds)?;
        let dimensions = bounds_rank.sizes.len().max(1) as u32;
        if initializer.is_none() && bounds_rank.sizes.iter().any(Option::is_some) {
            let mut creation_ranks = vec![bounds_rank];
            creation_ranks.extend(outer_ranks());
            initializer = Some(cs::Expr::ArrayCreation {
                ty: with_outer_ranks(base.clone(), creation_ranks),
                initializer: None,
            });
        }
        let mut ranks = vec![cs::ArrayRank::omitted(dimensions)];
        ranks.extend(outer_ranks());
        Ok((with_outer_ranks(base, ranks), initializer))
    }

    /// Type of a name declared without `As`.
    fn implicit_variable_type(
        &self,
        declarator: &vb::VariableDeclarator,
        name: &vb::ModifiedIdentifier,
        site: DeclaratorSite,
        has_initializer: bool,
    ) -> ConversionResult<cs::TypeSyntax> {
        if site == DeclaratorSite::Local && has_initializer {
            return Ok(cs::TypeSyntax::Var);
        }
        let declared = self
            .semantic
            .declared_symbol(name.id)
            .and_then(|symbol| symbol.ty)
            .filter(|ty| !ty.is_error() && ty.can_be_referenced_by_name);
        if let Some(ty) = declared {
            return Ok(symbol_type_syntax(&ty));
        }
        if site != DeclaratorSite::Constant {
            return Ok(cs::TypeSyntax::Predefined(cs::PredefinedType::Object));
        }
        declarator
            .initializer
            .as_ref()
            .and_then(|initializer| self.semantic.expression_type(initializer.id()))
            .filter(|ty| !ty.is_error())
            .map(|ty| symbol_type_syntax(&ty))
            .ok_or_else(|| {
                ConversionError::unsupported(
                    "VariableDeclarator",
                    format!("the type of constant {} is unknown", name.identifier),
                )
            })
    }
}
