//! Precomputed semantic answers.
//!
//! A front-end that cannot be linked into the converter process serializes
//! the answers it computed for each node into a `SemanticTable`. Tests build
//! tables in code with the `set_*` methods.

use crate::model::{SemanticModel, SymbolInfo, TypeInfo};
use crate::symbols::{ConstantValue, Symbol, TypeSymbol};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use vbconv_syntax::{ImportsClause, NodeId};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SemanticTable {
    #[serde(default)]
    symbols: FxHashMap<NodeId, SymbolInfo>,
    #[serde(default)]
    types: FxHashMap<NodeId, TypeInfo>,
    #[serde(default)]
    constants: FxHashMap<NodeId, ConstantValue>,
    #[serde(default)]
    declared: FxHashMap<NodeId, Symbol>,
    #[serde(default)]
    scopes: FxHashMap<NodeId, Vec<String>>,
    #[serde(default)]
    global_imports: Vec<ImportsClause>,
}

impl SemanticTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_symbol(&mut self, node: NodeId, symbol: Symbol) {
        self.symbols.insert(node, SymbolInfo::resolved(symbol));
    }

    /// Record a failed overload resolution with its candidates.
    pub fn set_candidates(&mut self, node: NodeId, candidates: Vec<Symbol>) {
        self.symbols.insert(node, SymbolInfo::ambiguous(candidates));
    }

    pub fn set_type(&mut self, node: NodeId, ty: TypeSymbol) {
        let entry = self.types.entry(node).or_default();
        if entry.converted_type.is_none() {
            entry.converted_type = Some(ty.clone());
        }
        entry.ty = Some(ty);
    }

    pub fn set_converted_type(&mut self, node: NodeId, ty: TypeSymbol) {
        self.types.entry(node).or_default().converted_type = Some(ty);
    }

    pub fn set_constant(&mut self, node: NodeId, value: ConstantValue) {
        self.constants.insert(node, value);
    }

    pub fn set_declared(&mut self, node: NodeId, symbol: Symbol) {
        self.declared.insert(node, symbol);
    }

    pub fn add_names_in_scope<I, S>(&mut self, node: NodeId, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes
            .entry(node)
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    pub fn set_global_imports(&mut self, imports: Vec<ImportsClause>) {
        self.global_imports = imports;
    }
}

impl SemanticModel for SemanticTable {
    fn symbol_info(&self, node: NodeId) -> SymbolInfo {
        self.symbols.get(&node).cloned().unwrap_or_default()
    }

    fn type_info(&self, node: NodeId) -> TypeInfo {
        self.types.get(&node).cloned().unwrap_or_default()
    }

    fn constant_value(&self, node: NodeId) -> Option<ConstantValue> {
        self.constants.get(&node).cloned()
    }

    fn declared_symbol(&self, node: NodeId) -> Option<Symbol> {
        self.declared.get(&node).cloned()
    }

    fn names_in_scope(&self, node: NodeId) -> Vec<String> {
        self.scopes.get(&node).cloned().unwrap_or_default()
    }

    fn global_imports(&self) -> &[ImportsClause] {
        &self.global_imports
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
