//! Destination C# syntax for vbconv.
//!
//! - `ast`: the syntax tree the converter builds
//! - `printer`: normalized-whitespace text output (`CSharpPrinter`)

// Destination syntax tree
pub mod ast;
pub use ast::*;

// Text output with precedence-driven parenthesization
pub mod printer;
pub use printer::{CSharpPrinter, escape_char, escape_string};
