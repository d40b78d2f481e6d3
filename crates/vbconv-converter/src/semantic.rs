//! Semantic disambiguation.
//!
//! The same source syntax can mean different destination syntax depending on
//! what it binds to: `a(1)` is a call, an indexer access, or an array element
//! access; an argument may need `ref`. [`SemanticHelper`] wraps the unit's
//! [`SemanticModel`] with the questions the visitors ask. Every query returns
//! `None`/`false` when the model cannot answer, and callers fall back to
//! syntax-only output.

use crate::convert_methods;
use vbconv_semantic::{RefKind, SemanticModel, SpecialType, Symbol, TypeSymbol};
use vbconv_syntax::{NodeId, TypeSyntax};

/// How an argument is handed to its formal parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterPassing {
    ByValue,
    ByReference,
    Out,
}

impl From<RefKind> for ParameterPassing {
    fn from(kind: RefKind) -> Self {
        match kind {
            RefKind::None => ParameterPassing::ByValue,
            RefKind::Ref => ParameterPassing::ByReference,
            RefKind::Out => ParameterPassing::Out,
        }
    }
}

/// The innermost body that a `Return` or `Exit` leaves.
///
/// Each statement visitor is created for exactly one body, so the nearest
/// enclosing function or lambda is always the visitor's own descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnclosingBody {
    /// `Sub`, constructor, event accessor, or an operator without a result.
    Procedure,
    Function { return_type: Option<TypeSymbol> },
    Lambda { return_type: Option<TypeSymbol> },
    Getter { property_type: Option<TypeSymbol> },
    Setter,
}

impl EnclosingBody {
    /// Declared or inferred type of the value leaving this body, when known.
    pub fn return_type(&self) -> Option<&TypeSymbol> {
        match self {
            EnclosingBody::Function { return_type } | EnclosingBody::Lambda { return_type } => {
                return_type.as_ref().filter(|ty| !ty.is_void())
            }
            EnclosingBody::Getter { property_type } => property_type.as_ref(),
            EnclosingBody::Procedure | EnclosingBody::Setter => None,
        }
    }

    /// Whether leaving the body must produce a value.
    pub fn returns_value(&self) -> bool {
        match self {
            EnclosingBody::Function { .. } | EnclosingBody::Getter { .. } => true,
            EnclosingBody::Lambda { return_type } => {
                return_type.as_ref().is_some_and(|ty| !ty.is_void())
            }
            EnclosingBody::Procedure | EnclosingBody::Setter => false,
        }
    }
}

pub struct SemanticHelper<'a> {
    model: &'a dyn SemanticModel,
}

impl<'a> SemanticHelper<'a> {
    pub fn new(model: &'a dyn SemanticModel) -> Self {
        SemanticHelper { model }
    }

    pub fn model(&self) -> &'a dyn SemanticModel {
        self.model
    }

    /// Bound symbol of a node. Failed overload resolution with exactly one
    /// candidate collapses to that candidate.
    pub fn resolve_symbol(&self, node: NodeId) -> Option<Symbol> {
        let info = self.model.symbol_info(node);
        if info.symbol.is_some() {
            return info.symbol;
        }
        let mut candidates = info.candidates;
        if candidates.len() == 1 {
            candidates.pop()
        } else {
            None
        }
    }

    /// Passing mode of the argument at `position` (or named `name`).
    ///
    /// Positions past the last formal are excess `ParamArray` elements and
    /// are always by value.
    pub fn parameter_passing_kind(
        &self,
        callee: &Symbol,
        position: usize,
        name: Option<&str>,
    ) -> ParameterPassing {
        let parameter = match name {
            Some(name) => callee
                .parameters
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(name)),
            None => callee.parameters.get(position),
        };
        match parameter {
            Some(parameter) if !parameter.is_params => parameter.ref_kind.into(),
            _ => ParameterPassing::ByValue,
        }
    }

    /// Whether `target(args)` reads an element instead of calling: the
    /// invocation binds to an indexer, or the target is an array-typed
    /// field, local, parameter, or property.
    pub fn is_indexer_or_array_access(
        &self,
        invocation_symbol: Option<&Symbol>,
        target_symbol: Option<&Symbol>,
    ) -> bool {
        if invocation_symbol.is_some_and(|symbol| symbol.is_indexer) {
            return true;
        }
        target_symbol.is_some_and(|symbol| {
            !symbol.is_method() && symbol.ty.as_ref().is_some_and(TypeSymbol::is_array)
        })
    }

    pub fn expression_type(&self, node: NodeId) -> Option<TypeSymbol> {
        self.model.type_info(node).ty
    }

    pub fn converted_type(&self, node: NodeId) -> Option<TypeSymbol> {
        self.model.type_info(node).converted_type
    }

    pub fn constant_integer(&self, node: NodeId) -> Option<i64> {
        self.model
            .constant_value(node)
            .and_then(|value| value.as_integer())
    }

    pub fn declared_symbol(&self, node: NodeId) -> Option<Symbol> {
        self.model.declared_symbol(node)
    }

    pub fn names_in_scope(&self, node: NodeId) -> Vec<String> {
        self.model.names_in_scope(node)
    }

    /// Source names are case-insensitive.
    pub fn is_name_in_scope(&self, node: NodeId, name: &str) -> bool {
        self.model
            .names_in_scope(node)
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
    }

    pub fn conversion_method_for(&self, ty: &TypeSymbol) -> Option<&'static str> {
        convert_methods::conversion_method_for(ty)
    }

    /// Semantic type of a type syntax node, with a syntax-only answer for
    /// predefined types the model did not record.
    pub fn type_of_syntax(&self, ty: &TypeSyntax) -> Option<TypeSymbol> {
        if let Some(bound) = self.expression_type(ty.id()) {
            return Some(bound);
        }
        match ty {
            TypeSyntax::Predefined { keyword, .. } => Some(TypeSymbol::special(
                convert_methods::special_type_of(*keyword),
            )),
            TypeSyntax::Array { element, .. } => self.type_of_syntax(element).map(TypeSymbol::array),
            TypeSyntax::Named { .. } | TypeSyntax::Nullable { .. } => None,
        }
    }

    pub fn object_type() -> TypeSymbol {
        TypeSymbol::special(SpecialType::Object)
    }
}

#[cfg(test)]
#[path = "tests/semantic_tests.rs"]
mod tests;
