//! Names, type syntax, attributes, parameters, and type parameters.

use super::*;
use crate::tokens::{convert_identifier, convert_modifiers, convert_predefined_type};
use vbconv_semantic::{SpecialType, TypeSymbol};

/// Destination type syntax for a semantic type.
pub(crate) fn symbol_type_syntax(ty: &TypeSymbol) -> cs::TypeSyntax {
    use cs::PredefinedType as P;

    if let Some(special) = ty.special {
        let predefined = match special {
            SpecialType::Void => P::Void,
            SpecialType::Object => P::Object,
            SpecialType::Boolean => P::Bool,
            SpecialType::Char => P::Char,
            SpecialType::SByte => P::SByte,
            SpecialType::Byte => P::Byte,
            SpecialType::Int16 => P::Short,
            SpecialType::UInt16 => P::UShort,
            SpecialType::Int32 => P::Int,
            SpecialType::UInt32 => P::UInt,
            SpecialType::Int64 => P::Long,
            SpecialType::UInt64 => P::ULong,
            SpecialType::Decimal => P::Decimal,
            SpecialType::Single => P::Float,
            SpecialType::Double => P::Double,
            SpecialType::String => P::String,
            SpecialType::DateTime => return cs::TypeSyntax::named("System.DateTime"),
        };
        return cs::TypeSyntax::Predefined(predefined);
    }
    if let Some(element) = &ty.element_type {
        return symbol_type_syntax(element).array_of();
    }
    cs::TypeSyntax::Named(cs::Name::id(ty.display_name.clone()))
}

/// `T?`; for arrays the element becomes nullable, not the array.
pub(crate) fn nullable_of(ty: cs::TypeSyntax) -> cs::TypeSyntax {
    match ty {
        cs::TypeSyntax::Array { element, ranks } => cs::TypeSyntax::Array {
            element: Box::new(cs::TypeSyntax::Nullable(element)),
            ranks,
        },
        other => cs::TypeSyntax::Nullable(Box::new(other)),
    }
}

/// Apply rank specifiers written on a declared name (`a(,)`). They are the
/// outermost ranks, so they come before ranks already on the type.
pub(crate) fn with_outer_ranks(ty: cs::TypeSyntax, ranks: Vec<cs::ArrayRank>) -> cs::TypeSyntax {
    if ranks.is_empty() {
        return ty;
    }
    match ty {
        cs::TypeSyntax::Array {
            element,
            ranks: inner,
        } => cs::TypeSyntax::Array {
            element,
            ranks: ranks.into_iter().chain(inner).collect(),
        },
        other => cs::TypeSyntax::Array {
            element: Box::new(other),
            ranks,
        },
    }
}

fn is_out_attribute(attribute: &vb::Attribute) -> bool {
    let name = attribute.name.last_identifier();
    attribute.arguments.is_empty()
        && (name.eq_ignore_ascii_case("Out") || name.eq_ignore_ascii_case("OutAttribute"))
}

impl NodesVisitor<'_> {
    // =========================================================================
    // Names and types
    // =========================================================================

    fn convert_simple_name_to_name(&mut self, name: &vb::SimpleName) -> ConversionResult<cs::Name> {
        let identifier = convert_identifier(&name.identifier);
        if !name.is_generic() {
            return Ok(cs::Name::Identifier(identifier));
        }
        Ok(cs::Name::Generic {
            identifier,
            type_arguments: self.convert_types(&name.type_arguments)?,
        })
    }

    pub fn convert_name(&mut self, name: &vb::Name) -> ConversionResult<cs::Name> {
        match name {
            vb::Name::Simple(simple) => self.convert_simple_name_to_name(simple),
            vb::Name::Qualified { left, right, .. } => {
                let right = Box::new(self.convert_simple_name_to_name(right)?);
                if let vb::Name::Global { .. } = left.as_ref() {
                    return Ok(cs::Name::AliasQualified {
                        alias: "global".to_string(),
                        name: right,
                    });
                }
                Ok(cs::Name::Qualified {
                    left: Box::new(self.convert_name(left)?),
                    right,
                })
            }
            vb::Name::Global { .. } => Err(ConversionError::unsupported(
                "GlobalName",
                "Global must qualify a name",
            )),
        }
    }

    pub fn convert_type(&mut self, ty: &vb::TypeSyntax) -> ConversionResult<cs::TypeSyntax> {
        match ty {
            vb::TypeSyntax::Predefined { keyword, .. } => Ok(convert_predefined_type(*keyword)),
            vb::TypeSyntax::Named { name } => Ok(cs::TypeSyntax::Named(self.convert_name(name)?)),
            vb::TypeSyntax::Array { element, ranks, .. } => {
                let element = self.convert_type(element)?;
                Ok(with_outer_ranks(
                    element,
                    ranks.iter().map(|&rank| cs::ArrayRank::omitted(rank)).collect(),
                ))
            }
            vb::TypeSyntax::Nullable { element, .. } => Ok(nullable_of(self.convert_type(element)?)),
        }
    }

    pub(crate) fn convert_types(&mut self, types: &[vb::TypeSyntax]) -> ConversionResult<Vec<cs::TypeSyntax>> {
        types.iter().map(|ty| self.convert_type(ty)).collect()
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    fn convert_attribute(&mut self, attribute: &vb::Attribute) -> ConversionResult<cs::Attribute> {
        let mut arguments = Vec::with_capacity(attribute.arguments.len());
        for argument in &attribute.arguments {
            match argument {
                vb::Argument::Simple {
                    name, expression, ..
                } => arguments.push(cs::AttributeArgument {
                    name_equals: name.as_deref().map(convert_identifier),
                    expression: self.convert_expr(expression)?,
                }),
                vb::Argument::Omitted { .. } => {
                    return Err(ConversionError::unsupported(
                        "OmittedArgument",
                        "attribute arguments cannot be omitted",
                    ));
                }
            }
        }
        Ok(cs::Attribute {
            name: self.convert_name(&attribute.name)?,
            arguments,
        })
    }

    /// Every source attribute becomes its own list, keeping its target.
    pub(crate) fn convert_attribute_lists(
        &mut self,
        lists: &[vb::AttributeList],
    ) -> ConversionResult<Vec<cs::AttributeList>> {
        let mut converted = Vec::new();
        for attribute in lists.iter().flat_map(|list| &list.attributes) {
            let target = attribute.target.map(|target| match target {
                vb::AttributeTarget::Assembly => cs::AttributeTarget::Assembly,
                vb::AttributeTarget::Module => cs::AttributeTarget::Module,
            });
            converted.push(cs::AttributeList {
                target,
                attributes: vec![self.convert_attribute(attribute)?],
            });
        }
        Ok(converted)
    }

    /// Attributes written on an `As` clause apply to the return value.
    pub(crate) fn convert_return_attribute_lists(
        &mut self,
        lists: &[vb::AttributeList],
    ) -> ConversionResult<Vec<cs::AttributeList>> {
        let mut converted = self.convert_attribute_lists(lists)?;
        for list in &mut converted {
            list.target = Some(cs::AttributeTarget::Return);
        }
        Ok(converted)
    }

    // =========================================================================
    // Type parameters
    // =========================================================================

    pub(crate) fn convert_type_parameters(
        &mut self,
        parameters: &[vb::TypeParameter],
    ) -> ConversionResult<(Vec<cs::TypeParameter>, Vec<cs::ConstraintClause>)> {
        let mut converted = Vec::with_capacity(parameters.len());
        let mut clauses = Vec::new();
        for parameter in parameters {
            let identifier = convert_identifier(&parameter.identifier);
            converted.push(cs::TypeParameter {
                variance: parameter.variance.map(|variance| match variance {
                    vb::Variance::In => cs::Variance::In,
                    vb::Variance::Out => cs::Variance::Out,
                }),
                identifier: identifier.clone(),
            });
            if parameter.constraints.is_empty() {
                continue;
            }

            // Destination order: class/struct, then types, then new().
            let mut primary = Vec::new();
            let mut types = Vec::new();
            let mut constructor = false;
            for constraint in &parameter.constraints {
                match constraint {
                    vb::TypeConstraint::Class => primary.push(cs::TypeConstraint::Class),
                    vb::TypeConstraint::Structure => primary.push(cs::TypeConstraint::Struct),
                    vb::TypeConstraint::New => constructor = true,
                    vb::TypeConstraint::Type { ty } => {
                        types.push(cs::TypeConstraint::Type(self.convert_type(ty)?));
                    }
                }
            }
            let mut constraints = primary;
            constraints.extend(types);
            if constructor {
                constraints.push(cs::TypeConstraint::Constructor);
            }
            clauses.push(cs::ConstraintClause {
                type_parameter: identifier,
                constraints,
            });
        }
        Ok((converted, clauses))
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Declared parameters; a parameter without `As` is `object`, or whatever
    /// type the model inferred for it.
    pub(crate) fn convert_parameters(&mut self, parameters: &[vb::Parameter]) -> ConversionResult<Vec<cs::Parameter>> {
        parameters
            .iter()
            .map(|parameter| self.convert_parameter(parameter, true))
            .collect()
    }

    /// Convert one parameter. Lambda parameters without `As` stay untyped
    /// (`implicit_object == false`).
    pub(crate) fn convert_parameter(
        &mut self,
        parameter: &vb::Parameter,
        implicit_object: bool,
    ) -> ConversionResult<cs::Parameter> {
        let mut is_out = false;
        let mut kept = Vec::with_capacity(parameter.attributes.len());
        for list in &parameter.attributes {
            let attributes: Vec<vb::Attribute> = list
                .attributes
                .iter()
                .filter(|attribute| {
                    let out = is_out_attribute(attribute);
                    is_out |= out;
                    !out
                })
                .cloned()
                .collect();
            if !attributes.is_empty() {
                kept.push(vb::AttributeList { attributes });
            }
        }

        let mut modifiers = convert_modifiers(&parameter.modifiers, TokenContext::Local)?;
        if is_out {
            modifiers.retain(|m| *m != cs::Modifier::Ref);
            modifiers.insert(0, cs::Modifier::Out);
        }

        let ty = match &parameter.as_type {
            Some(as_type) => Some(self.convert_type(as_type)?),
            None if implicit_object => Some(
                self.semantic
                    .declared_symbol(parameter.id)
                    .and_then(|symbol| symbol.ty)
                    .map(|ty| symbol_type_syntax(&ty))
                    .unwrap_or(cs::TypeSyntax::Predefined(cs::PredefinedType::Object)),
            ),
            None => None,
        };
        let ty = ty.map(|ty| {
            let ty = if parameter.nullable { nullable_of(ty) } else { ty };
            with_outer_ranks(
                ty,
                parameter
                    .array_ranks
                    .iter()
                    .map(|&rank| cs::ArrayRank::omitted(rank))
                    .collect(),
            )
        });

        let default = match &parameter.default {
            Some(default) => Some(self.convert_expr(default)?),
            None => None,
        };

        Ok(cs::Parameter {
            attributes: self.convert_attribute_lists(&kept)?,
            modifiers,
            ty,
            identifier: convert_identifier(&parameter.identifier),
            default,
        })
    }
}
