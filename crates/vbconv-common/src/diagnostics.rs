use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

/// Diagnostic codes reported by the converter and its driver.
pub mod diagnostic_codes {
    /// The batch contained no translatable units.
    pub const NO_TRANSLATABLE_UNITS: u32 = 1000;
    /// A node kind has no conversion rule.
    pub const UNIMPLEMENTED_CONSTRUCT: u32 = 1001;
    /// A conversion rule recognized the node but cannot express its shape.
    pub const UNSUPPORTED_CONSTRUCT: u32 = 1002;
    /// The unit could not be read or its output could not be written.
    pub const IO_FAILURE: u32 = 1003;
    /// A modifier was dropped and left as a comment in the output.
    pub const DROPPED_MODIFIER: u32 = 2001;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(file: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            file: file.into(),
            message_text: message.into(),
        }
    }

    pub fn warning(file: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            file: file.into(),
            message_text: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self.category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
        };
        if self.file.is_empty() {
            write!(f, "{category} VBC{}: {}", self.code, self.message_text)
        } else {
            write!(
                f,
                "{}: {category} VBC{}: {}",
                self.file, self.code, self.message_text
            )
        }
    }
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod tests;
