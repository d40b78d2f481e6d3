//! Common types and utilities for the vbconv converter.
//!
//! This crate provides foundational types used across all vbconv crates:
//! - Comment trivia and its source-to-destination rewriting (`Trivia`)
//! - Per-unit diagnostics (`Diagnostic`, `DiagnosticCategory`)
//! - Conversion limits and thresholds

// Comment trivia attached to statements and members
pub mod comments;
pub use comments::{Trivia, convert_comment};

// Diagnostics reported at the translation-unit boundary
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;
