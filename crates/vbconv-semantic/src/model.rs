use crate::symbols::{ConstantValue, Symbol, TypeSymbol};
use serde::{Deserialize, Serialize};
use vbconv_syntax::{ImportsClause, NodeId};

/// Result of binding a node.
///
/// When binding is ambiguous (overload resolution failed), `symbol` is `None`
/// and `candidates` lists the symbols that were considered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    #[serde(default)]
    pub symbol: Option<Symbol>,
    #[serde(default)]
    pub candidates: Vec<Symbol>,
}

impl SymbolInfo {
    pub fn resolved(symbol: Symbol) -> Self {
        SymbolInfo {
            symbol: Some(symbol),
            candidates: Vec::new(),
        }
    }

    pub fn ambiguous(candidates: Vec<Symbol>) -> Self {
        SymbolInfo {
            symbol: None,
            candidates,
        }
    }
}

/// Type of an expression before and after implicit conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    #[serde(default)]
    pub ty: Option<TypeSymbol>,
    #[serde(default)]
    pub converted_type: Option<TypeSymbol>,
}

/// Read-only semantic oracle for one translation unit.
///
/// Every query is keyed by a node of the unit's syntax tree. Queries about
/// nodes the model knows nothing about return empty answers rather than
/// failing; the converter decides how to fall back.
pub trait SemanticModel {
    /// Symbol the node binds to, with overload candidates.
    fn symbol_info(&self, node: NodeId) -> SymbolInfo;

    /// Type and converted type of an expression node.
    fn type_info(&self, node: NodeId) -> TypeInfo;

    /// Constant value of an expression, when it is a compile-time constant.
    fn constant_value(&self, node: NodeId) -> Option<ConstantValue>;

    /// Symbol declared by a declaration node.
    fn declared_symbol(&self, node: NodeId) -> Option<Symbol>;

    /// Names of every symbol visible at the node's position.
    fn names_in_scope(&self, node: NodeId) -> Vec<String>;

    /// Project-level imports applied to every file of the compilation.
    fn global_imports(&self) -> &[ImportsClause];
}
