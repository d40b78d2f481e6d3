//! Expression conversion.
//!
//! Most forms map one-to-one. The rest consult the semantic model:
//! invocations that are really element accesses, `ref`/`out` arguments,
//! typed `Nothing`, conversion-method casts, and the parameterless-call
//! heuristic for method names used as values.

use super::types::{symbol_type_syntax, with_outer_ranks};
use super::*;
use crate::convert_methods::{conversion_method, special_type_of};
use crate::method_body::MethodBodyVisitor;
use crate::semantic::{EnclosingBody, ParameterPassing};
use crate::tokens::{
    BinaryMapping, convert_binary_operator, convert_identifier, convert_numeric_literal,
    convert_predefined_type, predefined_keyword,
};
use vbconv_semantic::{SpecialType, Symbol, TypeKind, TypeSymbol};
use vbconv_syntax::NodeId;

fn is_non_generic_enumerable(ty: &TypeSymbol) -> bool {
    matches!(
        ty.display_name.as_str(),
        "IEnumerable" | "System.Collections.IEnumerable"
    )
}

/// Expressions that can be passed by reference. A parenthesized operand is
/// a copy in the source language, so it is passed by value.
fn is_reference_passable(expr: &vb::Expr) -> bool {
    matches!(
        expr,
        vb::Expr::Name(_) | vb::Expr::MemberAccess { .. } | vb::Expr::Invocation { .. }
    )
}

fn is_literal_one(expr: &vb::Expr) -> bool {
    matches!(
        expr,
        vb::Expr::Literal { value: vb::LiteralValue::Numeric(text), .. } if text == "1"
    )
}

impl NodesVisitor<'_> {
    pub fn convert_expr(&mut self, expr: &vb::Expr) -> ConversionResult<cs::Expr> {
        self.convert_expr_with(expr, true)
    }

    pub(crate) fn convert_exprs(&mut self, exprs: &[vb::Expr]) -> ConversionResult<Vec<cs::Expr>> {
        exprs.iter().map(|expr| self.convert_expr(expr)).collect()
    }

    /// `allow_auto_invoke` is false where a method name must stay a method
    /// group: invocation targets, `AddressOf` operands, `NameOf` arguments.
    fn convert_expr_with(&mut self, expr: &vb::Expr, allow_auto_invoke: bool) -> ConversionResult<cs::Expr> {
        self.enter(expr.kind_name())?;
        let result = self.convert_expr_kind(expr, allow_auto_invoke);
        self.leave();
        result
    }

    fn convert_expr_kind(&mut self, expr: &vb::Expr, allow_auto_invoke: bool) -> ConversionResult<cs::Expr> {
        match expr {
            vb::Expr::Literal { id, value } => self.convert_literal(*id, value),
            vb::Expr::InterpolatedString { contents, .. } => self.convert_interpolated_string(contents),
            vb::Expr::Name(name) => {
                let converted = if name.is_generic() {
                    cs::Expr::Generic {
                        identifier: convert_identifier(&name.identifier),
                        type_arguments: self.convert_types(&name.type_arguments)?,
                    }
                } else {
                    cs::Expr::id(convert_identifier(&name.identifier))
                };
                Ok(self.maybe_auto_invoke(name.id, converted, allow_auto_invoke))
            }
            vb::Expr::Global { .. } => Err(ConversionError::unsupported(
                "GlobalName",
                "Global must be followed by a member access",
            )),
            vb::Expr::PredefinedType { keyword, .. } => Ok(match predefined_keyword(*keyword) {
                Some(predefined) => cs::Expr::PredefinedType(predefined),
                None => cs::Expr::dotted("System.DateTime"),
            }),
            vb::Expr::Me { .. } | vb::Expr::MyClass { .. } => Ok(cs::Expr::This),
            vb::Expr::MyBase { .. } => Ok(cs::Expr::Base),
            vb::Expr::MemberAccess {
                id,
                expression,
                name,
            } => {
                let converted = self.convert_member_access(expression.as_deref(), name)?;
                Ok(self.maybe_auto_invoke(*id, converted, allow_auto_invoke))
            }
            vb::Expr::ConditionalAccess {
                expression,
                when_not_null,
                ..
            } => {
                let expression = self.convert_expr(expression)?;
                let saved = std::mem::replace(&mut self.pending_binding, true);
                let when_not_null = self.convert_expr(when_not_null);
                self.pending_binding = saved;
                Ok(cs::Expr::ConditionalAccess {
                    expression: Box::new(expression),
                    when_not_null: Box::new(when_not_null?),
                })
            }
            vb::Expr::Invocation {
                id,
                expression,
                arguments,
            } => self.convert_invocation(*id, expression, arguments),
            vb::Expr::ObjectCreation {
                id,
                ty,
                arguments,
                initializer,
            } => self.convert_object_creation(*id, ty, arguments.as_deref(), initializer.as_ref()),
            vb::Expr::ArrayCreation {
                element_type,
                bounds,
                rank_specifiers,
                initializer,
                ..
            } => self.convert_array_creation(element_type, bounds.as_deref(), rank_specifiers, initializer),
            vb::Expr::CollectionInitializer(initializer) => self.convert_collection_initializer(initializer),
            vb::Expr::Binary {
                operator,
                left,
                right,
                ..
            } => self.convert_binary(*operator, left, right),
            vb::Expr::Unary {
                operator, operand, ..
            } => self.convert_unary(*operator, operand),
            vb::Expr::Parenthesized { expression, .. } => Ok(self.convert_expr(expression)?.paren()),
            vb::Expr::BinaryConditional { first, second, .. } => Ok(cs::Expr::binary(
                self.convert_expr(first)?,
                cs::BinaryOperator::Coalesce,
                self.convert_expr(second)?,
            )),
            vb::Expr::TernaryConditional {
                condition,
                when_true,
                when_false,
                ..
            } => Ok(cs::Expr::Conditional {
                condition: Box::new(self.convert_expr(condition)?),
                when_true: Box::new(self.convert_expr(when_true)?),
                when_false: Box::new(self.convert_expr(when_false)?),
            }),
            vb::Expr::Cast {
                kind,
                expression,
                ty,
                ..
            } => self.convert_cast(*kind, expression, ty),
            vb::Expr::PredefinedCast {
                keyword,
                expression,
                ..
            } => self.convert_predefined_cast(*keyword, expression),
            vb::Expr::TypeOf {
                expression,
                ty,
                is_not,
                ..
            } => {
                let test = cs::Expr::Is {
                    expression: Box::new(self.convert_expr(expression)?),
                    ty: self.convert_type(ty)?,
                };
                Ok(if *is_not {
                    cs::Expr::prefix(cs::PrefixOperator::LogicalNot, test.paren())
                } else {
                    test
                })
            }
            vb::Expr::GetType { ty, .. } => Ok(cs::Expr::TypeOf(self.convert_type(ty)?)),
            vb::Expr::NameOf { argument, .. } => Ok(cs::Expr::call(
                cs::Expr::id("nameof"),
                vec![self.convert_expr_with(argument, false)?],
            )),
            vb::Expr::Await { expression, .. } => {
                Ok(cs::Expr::Await(Box::new(self.convert_expr(expression)?)))
            }
            vb::Expr::Lambda(lambda) => self.convert_lambda(lambda),
            vb::Expr::AnonymousObjectCreation { fields, .. } => {
                let mut converted = Vec::with_capacity(fields.len());
                for field in fields {
                    converted.push((
                        convert_identifier(&field.name),
                        self.convert_expr(&field.expression)?,
                    ));
                }
                Ok(cs::Expr::AnonymousObjectCreation(converted))
            }
            vb::Expr::Query { .. } | vb::Expr::XmlLiteral { .. } => {
                Err(ConversionError::unimplemented(expr.kind_name()))
            }
        }
    }

    // =========================================================================
    // Literals
    // =========================================================================

    fn convert_literal(&mut self, id: NodeId, value: &vb::LiteralValue) -> ConversionResult<cs::Expr> {
        Ok(match value {
            vb::LiteralValue::Nothing => self.convert_nothing(id),
            vb::LiteralValue::Boolean(value) => cs::Expr::Literal(cs::Literal::Bool(*value)),
            vb::LiteralValue::Numeric(text) => cs::Expr::number(convert_numeric_literal(text)?),
            vb::LiteralValue::String(value) => cs::Expr::string(value.clone()),
            vb::LiteralValue::Char(value) => cs::Expr::Literal(cs::Literal::Char(*value)),
            vb::LiteralValue::Date(text) => cs::Expr::call(
                cs::Expr::dotted("System.DateTime.Parse"),
                vec![
                    cs::Expr::string(text.trim()),
                    cs::Expr::dotted("System.Globalization.CultureInfo.InvariantCulture"),
                ],
            ),
        })
    }

    /// `Nothing` is the default of whatever type it converts to.
    fn convert_nothing(&self, id: NodeId) -> cs::Expr {
        match self.semantic.converted_type(id) {
            None => cs::Expr::null().with_comment(UNKNOWN_NOTHING_COMMENT),
            Some(ty) if ty.is_reference_type => cs::Expr::null(),
            Some(ty) if ty.is_error() || !ty.can_be_referenced_by_name => {
                cs::Expr::null().with_comment(UNKNOWN_NOTHING_COMMENT)
            }
            Some(ty) => cs::Expr::Default(symbol_type_syntax(&ty)),
        }
    }

    fn convert_interpolated_string(
        &mut self,
        contents: &[vb::InterpolatedContent],
    ) -> ConversionResult<cs::Expr> {
        let mut converted = Vec::with_capacity(contents.len());
        for content in contents {
            converted.push(match content {
                // Braces escape the same way in both languages; quotes do not.
                vb::InterpolatedContent::Text { text } => {
                    cs::InterpolatedContent::Text(text.replace("\"\"", "\""))
                }
                vb::InterpolatedContent::Interpolation {
                    expression,
                    alignment,
                    format,
                    ..
                } => cs::InterpolatedContent::Interpolation {
                    expression: Box::new(self.convert_expr(expression)?),
                    alignment: match alignment {
                        Some(alignment) => Some(Box::new(self.convert_expr(alignment)?)),
                        None => None,
                    },
                    format: format.clone(),
                },
            });
        }
        Ok(cs::Expr::InterpolatedString(converted))
    }

    // =========================================================================
    // Member access and invocation
    // =========================================================================

    fn convert_member_access(
        &mut self,
        receiver: Option<&vb::Expr>,
        name: &vb::SimpleName,
    ) -> ConversionResult<cs::Expr> {
        let identifier = convert_identifier(&name.identifier);
        let type_arguments = self.convert_types(&name.type_arguments)?;
        let receiver = match receiver {
            Some(vb::Expr::Global { .. }) => {
                if !type_arguments.is_empty() {
                    return Err(ConversionError::unsupported(
                        "GlobalName",
                        "generic names cannot be global-qualified in expressions",
                    ));
                }
                return Ok(cs::Expr::AliasQualified {
                    alias: "global".to_string(),
                    name: identifier,
                });
            }
            Some(receiver) => self.convert_expr(receiver)?,
            None => match self.implicit_receiver() {
                Some(receiver) => receiver,
                None => return Ok(cs::Expr::MemberBinding { name: identifier }),
            },
        };
        Ok(cs::Expr::MemberAccess {
            expression: Box::new(receiver),
            name: identifier,
            type_arguments,
        })
    }

    /// Receiver of `.Name`. The first receiverless access on the right of
    /// `?.` binds to the conditional receiver; otherwise the innermost
    /// `With` temporary is used.
    fn implicit_receiver(&mut self) -> Option<cs::Expr> {
        if std::mem::take(&mut self.pending_binding) {
            return None;
        }
        self.receivers.top().map(cs::Expr::id)
    }

    /// The source language calls parameterless methods without parentheses.
    /// A name bound to a method whose result type is exactly the type the
    /// expression is used as is taken to be such a call.
    fn maybe_auto_invoke(&self, id: NodeId, converted: cs::Expr, allow: bool) -> cs::Expr {
        if !allow {
            return converted;
        }
        let Some(symbol) = self.semantic.resolve_symbol(id) else {
            return converted;
        };
        let Some(return_type) = symbol.return_type() else {
            return converted;
        };
        if self.semantic.converted_type(id).as_ref() != Some(return_type) {
            return converted;
        }
        tracing::debug!(
            node = %id,
            method = %symbol.name,
            "method name used as a value converted to a parameterless call"
        );
        cs::Expr::Invocation {
            expression: Box::new(converted),
            arguments: Vec::new(),
        }
    }

    fn convert_invocation(
        &mut self,
        id: NodeId,
        target: &vb::Expr,
        arguments: &[vb::Argument],
    ) -> ConversionResult<cs::Expr> {
        let invocation_symbol = self.semantic.resolve_symbol(id);
        let target_symbol = self.semantic.resolve_symbol(target.id());
        let expression = Box::new(self.convert_expr_with(target, false)?);
        let arguments = self.convert_arguments(arguments, invocation_symbol.as_ref())?;

        if self
            .semantic
            .is_indexer_or_array_access(invocation_symbol.as_ref(), target_symbol.as_ref())
        {
            tracing::debug!(node = %id, "invocation converted to element access");
            return Ok(cs::Expr::ElementAccess {
                expression,
                arguments,
            });
        }
        Ok(cs::Expr::Invocation {
            expression,
            arguments,
        })
    }

    /// Arguments with `ref`/`out` added where the resolved callee asks for
    /// them. Without a callee every argument is passed by value.
    pub(crate) fn convert_arguments(
        &mut self,
        arguments: &[vb::Argument],
        callee: Option<&Symbol>,
    ) -> ConversionResult<Vec<cs::Argument>> {
        let mut converted = Vec::with_capacity(arguments.len());
        for (position, argument) in arguments.iter().enumerate() {
            let vb::Argument::Simple {
                name, expression, ..
            } = argument
            else {
                return Err(ConversionError::unsupported(
                    "OmittedArgument",
                    "omitted arguments have no C# form",
                ));
            };
            let passing = callee
                .filter(|_| is_reference_passable(expression))
                .map(|callee| {
                    self.semantic
                        .parameter_passing_kind(callee, position, name.as_deref())
                })
                .unwrap_or(ParameterPassing::ByValue);
            converted.push(cs::Argument {
                name_colon: name.as_deref().map(convert_identifier),
                ref_kind: match passing {
                    ParameterPassing::ByValue => None,
                    ParameterPassing::ByReference => Some(cs::ArgumentRefKind::Ref),
                    ParameterPassing::Out => Some(cs::ArgumentRefKind::Out),
                },
                expression: self.convert_expr(expression)?,
            });
        }
        Ok(converted)
    }

    // =========================================================================
    // Creation
    // =========================================================================

    fn convert_object_creation(
        &mut self,
        id: NodeId,
        ty: &vb::TypeSyntax,
        arguments: Option<&[vb::Argument]>,
        initializer: Option<&vb::ObjectInitializer>,
    ) -> ConversionResult<cs::Expr> {
        let constructor = self.semantic.resolve_symbol(id);
        let ty = self.convert_type(ty)?;
        let arguments = match arguments {
            Some(arguments) => Some(self.convert_arguments(arguments, constructor.as_ref())?),
            None => None,
        };
        let initializer = match initializer {
            None => None,
            Some(vb::ObjectInitializer::Collection { initializer }) => Some(cs::Initializer {
                kind: cs::InitializerKind::Collection,
                expressions: self.convert_exprs(&initializer.initializers)?,
            }),
            Some(vb::ObjectInitializer::Members { fields }) => {
                let mut expressions = Vec::with_capacity(fields.len());
                for field in fields {
                    expressions.push(cs::Expr::assign(
                        cs::Expr::id(convert_identifier(&field.name)),
                        cs::AssignmentOperator::Simple,
                        self.convert_expr(&field.expression)?,
                    ));
                }
                Some(cs::Initializer {
                    kind: cs::InitializerKind::Object,
                    expressions,
                })
            }
        };
        Ok(cs::Expr::ObjectCreation {
            ty,
            arguments,
            initializer,
        })
    }

    /// Size of a dimension declared by its inclusive upper bound.
    pub(crate) fn convert_array_bound(&mut self, bound: &vb::Argument) -> ConversionResult<cs::Expr> {
        let vb::Argument::Simple { expression, .. } = bound else {
            return Err(ConversionError::unsupported(
                "ArrayBounds",
                "an array bound cannot be omitted here",
            ));
        };
        if let Some(size) = self
            .semantic
            .constant_integer(expression.id())
            .and_then(|upper| upper.checked_add(1))
        {
            return Ok(cs::Expr::number(size.to_string()));
        }
        if let vb::Expr::Literal {
            value: vb::LiteralValue::Numeric(text),
            ..
        } = expression
            && let Some(size) = text.parse::<i64>().ok().and_then(|upper| upper.checked_add(1))
        {
            return Ok(cs::Expr::number(size.to_string()));
        }
        // `n - 1` is the usual way to write a bound; its size is `n`.
        if let vb::Expr::Binary {
            operator: vb::BinaryOperator::Subtract,
            left,
            right,
            ..
        } = expression
            && is_literal_one(right)
        {
            return self.convert_expr(left);
        }
        Ok(cs::Expr::binary(
            self.convert_expr(expression)?,
            cs::BinaryOperator::Add,
            cs::Expr::number("1"),
        ))
    }

    /// Rank specifier for a bound list: sizes when every bound is given,
    /// a bare `[,]` when every bound is omitted.
    pub(crate) fn convert_bounds_rank(&mut self, bounds: &[vb::Argument]) -> ConversionResult<cs::ArrayRank> {
        if bounds.is_empty() {
            return Ok(cs::ArrayRank::omitted(1));
        }
        if bounds.iter().all(|bound| matches!(bound, vb::Argument::Omitted { .. })) {
            return Ok(cs::ArrayRank::omitted(bounds.len() as u32));
        }
        let mut sizes = Vec::with_capacity(bounds.len());
        for bound in bounds {
            sizes.push(Some(self.convert_array_bound(bound)?));
        }
        Ok(cs::ArrayRank { sizes })
    }

    fn convert_array_creation(
        &mut self,
        element_type: &vb::TypeSyntax,
        bounds: Option<&[vb::Argument]>,
        rank_specifiers: &[u32],
        initializer: &vb::CollectionInitializer,
    ) -> ConversionResult<cs::Expr> {
        let element = self.convert_type(element_type)?;
        let mut ranks = Vec::with_capacity(rank_specifiers.len() + 1);
        if let Some(bounds) = bounds {
            ranks.push(self.convert_bounds_rank(bounds)?);
        }
        ranks.extend(rank_specifiers.iter().map(|&rank| cs::ArrayRank::omitted(rank)));
        if ranks.is_empty() {
            ranks.push(cs::ArrayRank::omitted(1));
        }
        let has_sizes = ranks[0].sizes.iter().any(Option::is_some);

        let initializer = if has_sizes && initializer.initializers.is_empty() {
            None
        } else {
            Some(cs::Initializer {
                kind: cs::InitializerKind::Array,
                expressions: self.convert_exprs(&initializer.initializers)?,
            })
        };
        Ok(cs::Expr::ArrayCreation {
            ty: with_outer_ranks(element, ranks),
            initializer,
        })
    }

    /// `{a, b}` is an array when it targets an array or non-generic
    /// enumerable, and a collection or dictionary entry initializer
    /// otherwise.
    fn convert_collection_initializer(
        &mut self,
        initializer: &vb::CollectionInitializer,
    ) -> ConversionResult<cs::Expr> {
        let expressions = self.convert_exprs(&initializer.initializers)?;
        let array_target = if self.semantic.expression_type(initializer.id).is_none() {
            self.semantic
                .converted_type(initializer.id)
                .filter(|ty| ty.is_array() || is_non_generic_enumerable(ty))
        } else {
            None
        };
        let Some(target) = array_target else {
            return Ok(cs::Expr::Initializer(cs::Initializer {
                kind: cs::InitializerKind::Collection,
                expressions,
            }));
        };

        let initializer = cs::Initializer {
            kind: cs::InitializerKind::Array,
            expressions,
        };
        // `new[] { }` has no element type to infer.
        if initializer.expressions.is_empty() && target.is_array() && target.can_be_referenced_by_name {
            return Ok(cs::Expr::ArrayCreation {
                ty: symbol_type_syntax(&target),
                initializer: Some(initializer),
            });
        }
        Ok(cs::Expr::ImplicitArrayCreation(initializer))
    }

    // =========================================================================
    // Operators
    // =========================================================================

    fn convert_binary(
        &mut self,
        operator: vb::BinaryOperator,
        left: &vb::Expr,
        right: &vb::Expr,
    ) -> ConversionResult<cs::Expr> {
        if matches!(operator, vb::BinaryOperator::Is | vb::BinaryOperator::IsNot) {
            let tested = if right.is_nothing() {
                Some(left)
            } else if left.is_nothing() {
                Some(right)
            } else {
                None
            };
            if let Some(tested) = tested {
                let comparison = if operator == vb::BinaryOperator::Is {
                    cs::BinaryOperator::Equals
                } else {
                    cs::BinaryOperator::NotEquals
                };
                return Ok(cs::Expr::binary(
                    self.convert_expr(tested)?,
                    comparison,
                    cs::Expr::null(),
                ));
            }
        }

        let mapping = convert_binary_operator(operator)?;
        let left = self.convert_expr(left)?;
        let right = self.convert_expr(right)?;
        Ok(match mapping {
            BinaryMapping::Operator(operator) => cs::Expr::binary(left, operator, right),
            BinaryMapping::Power => cs::Expr::call(cs::Expr::dotted("Math.Pow"), vec![left, right]),
        })
    }

    fn convert_unary(&mut self, operator: vb::UnaryOperator, operand: &vb::Expr) -> ConversionResult<cs::Expr> {
        let prefix = match operator {
            vb::UnaryOperator::AddressOf => return self.convert_expr_with(operand, false),
            vb::UnaryOperator::Plus => cs::PrefixOperator::Plus,
            vb::UnaryOperator::Minus => cs::PrefixOperator::Minus,
            // One keyword for both logical and bitwise negation.
            vb::UnaryOperator::Not => {
                let bitwise = self
                    .semantic
                    .expression_type(operand.id())
                    .is_some_and(|ty| {
                        ty.kind == TypeKind::Enum || ty.special.is_some_and(SpecialType::is_integral)
                    });
                if bitwise {
                    cs::PrefixOperator::BitwiseNot
                } else {
                    cs::PrefixOperator::LogicalNot
                }
            }
        };
        Ok(cs::Expr::prefix(prefix, self.convert_expr(operand)?))
    }

    // =========================================================================
    // Casts
    // =========================================================================

    fn convert_cast(
        &mut self,
        kind: vb::CastKind,
        expression: &vb::Expr,
        ty: &vb::TypeSyntax,
    ) -> ConversionResult<cs::Expr> {
        let operand = self.convert_expr(expression)?;
        match kind {
            vb::CastKind::CType => {
                let method = self
                    .semantic
                    .type_of_syntax(ty)
                    .and_then(|target| self.semantic.conversion_method_for(&target));
                if let Some(method) = method {
                    return Ok(cs::Expr::call(cs::Expr::dotted(method), vec![operand]));
                }
                Ok(cs::Expr::Cast {
                    ty: self.convert_type(ty)?,
                    expression: Box::new(operand),
                })
            }
            vb::CastKind::DirectCast => Ok(cs::Expr::Cast {
                ty: self.convert_type(ty)?,
                expression: Box::new(operand),
            }),
            vb::CastKind::TryCast => Ok(cs::Expr::As {
                expression: Box::new(operand),
                ty: self.convert_type(ty)?,
            }),
        }
    }

    fn convert_predefined_cast(
        &mut self,
        keyword: vb::PredefinedCastKeyword,
        expression: &vb::Expr,
    ) -> ConversionResult<cs::Expr> {
        let operand = self.convert_expr(expression)?;
        if keyword == vb::PredefinedCastKeyword::CDate {
            return Ok(cs::Expr::Cast {
                ty: cs::TypeSyntax::named("DateTime"),
                expression: Box::new(operand),
            });
        }
        let target = keyword.target_type();
        Ok(match conversion_method(special_type_of(target)) {
            Some(method) => cs::Expr::call(cs::Expr::dotted(method), vec![operand]),
            None => cs::Expr::Cast {
                ty: convert_predefined_type(target),
                expression: Box::new(operand),
            },
        })
    }

    // =========================================================================
    // Lambdas
    // =========================================================================

    fn convert_lambda(&mut self, lambda: &vb::LambdaExpr) -> ConversionResult<cs::Expr> {
        let is_async = lambda.modifiers.contains(&vb::Modifier::Async);
        let is_iterator = lambda.modifiers.contains(&vb::Modifier::Iterator);
        let return_type = match lambda.kind {
            vb::MethodKind::Sub => None,
            vb::MethodKind::Function => self
                .semantic
                .converted_type(lambda.id)
                .and_then(|delegate| delegate.delegate_return_type.map(|ty| *ty))
                .or_else(|| {
                    lambda
                        .as_clause
                        .as_ref()
                        .and_then(|ty| self.semantic.type_of_syntax(ty))
                }),
        };
        let enclosing = EnclosingBody::Lambda { return_type };

        let body = match &lambda.body {
            vb::LambdaBody::Expression { expression } => {
                cs::LambdaBody::Expression(Box::new(self.convert_expr(expression)?))
            }
            vb::LambdaBody::Statement { statement } => {
                let statements =
                    MethodBodyVisitor::new(self, enclosing, is_iterator).convert_statement(statement)?;
                match <[cs::Statement; 1]>::try_from(statements) {
                    Ok([cs::Statement::Expression(expression)]) => {
                        cs::LambdaBody::Expression(Box::new(expression))
                    }
                    Ok([statement]) => cs::LambdaBody::Block(vec![statement]),
                    Err(statements) => cs::LambdaBody::Block(statements),
                }
            }
            vb::LambdaBody::Block { statements } => cs::LambdaBody::Block(
                MethodBodyVisitor::new(self, enclosing, is_iterator).convert_statements(statements)?,
            ),
        };

        let parameters = match lambda.parameters.as_slice() {
            [parameter]
                if matches!(body, cs::LambdaBody::Expression(_)) && is_plain_parameter(parameter) =>
            {
                cs::LambdaParameters::Simple(convert_identifier(&parameter.identifier))
            }
            parameters => {
                // Either every parameter is typed or none is.
                let any_typed = parameters.iter().any(|p| p.as_type.is_some());
                let mut converted = Vec::with_capacity(parameters.len());
                for parameter in parameters {
                    converted.push(self.convert_parameter(parameter, any_typed)?);
                }
                cs::LambdaParameters::List(converted)
            }
        };

        Ok(cs::Expr::Lambda {
            is_async,
            parameters,
            body,
        })
    }
}

/// A parameter that can be written without parentheses: `x => ...`.
fn is_plain_parameter(parameter: &vb::Parameter) -> bool {
    parameter.as_type.is_none()
        && parameter.attributes.is_empty()
        && parameter
            .modifiers
            .iter()
            .all(|m| *m == vb::Modifier::ByVal)
        && !parameter.nullable
        && parameter.array_ranks.is_empty()
        && parameter.default.is_none()
}
