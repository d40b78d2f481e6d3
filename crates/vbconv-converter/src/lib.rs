//! VB.NET to C# conversion engine.
//!
//! The engine turns one source [`CompilationUnit`](vbconv_syntax::CompilationUnit)
//! plus its [`SemanticModel`](vbconv_semantic::SemanticModel) into one
//! destination [`CompilationUnit`](vbconv_csharp::CompilationUnit):
//!
//! - `tokens`: modifier, operator, keyword, and literal mapping by context
//! - `semantic`: symbol resolution, argument passing, and enclosing bodies
//! - `nodes`: declarations, members, types, and expressions (`NodesVisitor`)
//! - `method_body`: statements and control flow (`MethodBodyVisitor`)
//! - `batch`: per-unit entry point and the parallel batch boundary
//!
//! Conversion is all-or-nothing per unit: the first construct without a rule
//! aborts the unit with a [`ConversionError`].

// Error taxonomy
pub mod error;
pub use error::{BatchError, ConversionError, ConversionResult};

// Conversion options
pub mod options;
pub use options::ConvertOptions;

// Token and modifier mapping
pub mod tokens;
pub use tokens::TokenContext;

// Conversion method lookup table
pub mod convert_methods;

// Semantic disambiguation
pub mod semantic;
pub use semantic::{EnclosingBody, ParameterPassing, SemanticHelper};

// With-block receiver stack
pub mod receiver;
pub use receiver::{ImplicitReceiverStack, ReceiverGuard};

// Node id collection for name collision checks
mod walk;

// Declaration and expression visitor
pub mod nodes;
pub use nodes::NodesVisitor;

// Statement visitor
pub mod method_body;
pub use method_body::MethodBodyVisitor;

// Unit and batch entry points
pub mod batch;
pub use batch::{BatchOutput, TranslationUnit, UnitFailure, convert_batch, convert_unit};
