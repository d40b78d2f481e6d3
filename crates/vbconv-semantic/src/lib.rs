//! Semantic model interface for vbconv.
//!
//! The converter never binds names or infers types itself. It asks a
//! [`SemanticModel`], built by an external front-end for one translation
//! unit, questions keyed by [`NodeId`](vbconv_syntax::NodeId):
//!
//! - which symbol does this node bind to (with overload candidates)?
//! - what type does this expression have, and what is it converted to?
//! - is this expression a compile-time constant?
//! - which symbol does this declaration declare?
//! - which names are in scope here?
//!
//! [`SemanticTable`] is a serde-backed implementation holding precomputed
//! answers, used by the command-line driver and by tests.

pub mod symbols;
pub use symbols::{
    ConstantValue, ParameterSymbol, RefKind, SpecialType, Symbol, SymbolKind, TypeKind,
    TypeSymbol,
};

pub mod model;
pub use model::{SemanticModel, SymbolInfo, TypeInfo};

pub mod table;
pub use table::SemanticTable;
