//! Conversion failures.
//!
//! Two kinds of failure abort a translation unit:
//!
//! - `Unimplemented`: no conversion rule exists for the node kind.
//! - `Unsupported`: a rule exists but declines this particular shape.
//!
//! Unresolved symbols are not errors; rules fall back to syntax-only output.

use std::fmt;
use vbconv_common::diagnostics::diagnostic_codes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionError {
    Unimplemented { kind: String },
    Unsupported { kind: String, reason: String },
}

pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionError {
    pub fn unimplemented(kind: impl Into<String>) -> Self {
        ConversionError::Unimplemented { kind: kind.into() }
    }

    pub fn unsupported(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        ConversionError::Unsupported {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Source node kind that failed to convert.
    pub fn kind(&self) -> &str {
        match self {
            ConversionError::Unimplemented { kind } | ConversionError::Unsupported { kind, .. } => {
                kind
            }
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            ConversionError::Unimplemented { .. } => diagnostic_codes::UNIMPLEMENTED_CONSTRUCT,
            ConversionError::Unsupported { .. } => diagnostic_codes::UNSUPPORTED_CONSTRUCT,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Unimplemented { kind } => write!(f, "{kind} not implemented!"),
            ConversionError::Unsupported { kind, reason } => {
                write!(f, "{kind} not supported: {reason}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Failure of the batch as a whole, as opposed to one of its units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// The batch contained no translation units.
    NoUnits,
}

impl BatchError {
    pub fn code(&self) -> u32 {
        match self {
            BatchError::NoUnits => diagnostic_codes::NO_TRANSLATABLE_UNITS,
        }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::NoUnits => write!(f, "no translatable units in batch"),
        }
    }
}

impl std::error::Error for BatchError {}
