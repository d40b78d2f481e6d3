use colored::Colorize;
use vbconv_common::diagnostics::{Diagnostic, DiagnosticCategory};

use crate::driver::RunOutcome;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(|diagnostic| self.format_diagnostic(diagnostic))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `file - error VBC1001: message`
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let file = if diagnostic.file.is_empty() {
            "<batch>"
        } else {
            diagnostic.file.as_str()
        };
        let file = if self.color {
            file.cyan().to_string()
        } else {
            file.to_string()
        };
        format!(
            "{file} - {} {}: {}",
            self.format_category(diagnostic.category),
            self.format_code(diagnostic.code),
            diagnostic.message_text
        )
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let (text, painted) = match category {
            DiagnosticCategory::Error => ("error", "error".red().bold()),
            DiagnosticCategory::Warning => ("warning", "warning".yellow().bold()),
        };
        if self.color {
            painted.to_string()
        } else {
            text.to_string()
        }
    }

    fn format_code(&self, code: u32) -> String {
        let code = format!("VBC{code}");
        if self.color {
            code.bright_black().to_string()
        } else {
            code
        }
    }

    /// Closing line: how many units converted.
    pub fn summary(&self, outcome: &RunOutcome) -> String {
        let line = format!(
            "Converted {} of {} unit{}.",
            outcome.converted_count,
            outcome.unit_count,
            if outcome.unit_count == 1 { "" } else { "s" }
        );
        if !self.color {
            return line;
        }
        if outcome.converted_count == outcome.unit_count && outcome.unit_count > 0 {
            line.green().to_string()
        } else {
            line.yellow().to_string()
        }
    }
}

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod tests;
