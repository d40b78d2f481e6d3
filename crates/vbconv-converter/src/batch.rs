//! Unit and batch entry points.
//!
//! A translation unit converts on its own: one visitor pair, one semantic
//! model, one result. Units share nothing mutable (the conversion-method
//! table is built once and read-only), so a batch converts them in
//! parallel. A failing unit is reported and the rest still convert.

use crate::error::{BatchError, ConversionError, ConversionResult};
use crate::nodes::NodesVisitor;
use crate::options::ConvertOptions;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use vbconv_common::diagnostics::Diagnostic;
use vbconv_csharp as cs;
use vbconv_semantic::{SemanticModel, SemanticTable};
use vbconv_syntax as vb;

/// One source file as handed over by the front-end: the syntax tree plus the
/// semantic answers computed for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranslationUnit {
    /// Path of the source file, used to name the output.
    pub path: String,
    pub tree: vb::CompilationUnit,
    #[serde(default)]
    pub semantics: SemanticTable,
}

/// A unit that failed to convert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitFailure {
    pub path: String,
    pub error: ConversionError,
}

impl UnitFailure {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.path.clone(), self.error.to_string(), self.error.code())
    }
}

/// Result of a batch: printed output for every unit that converted, in
/// input order, and the failures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOutput {
    /// `(path, C# source)` pairs.
    pub converted: Vec<(String, String)>,
    pub failures: Vec<UnitFailure>,
}

impl BatchOutput {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert one unit.
pub fn convert_unit(
    tree: &vb::CompilationUnit,
    model: &dyn SemanticModel,
    options: &ConvertOptions,
) -> ConversionResult<cs::CompilationUnit> {
    NodesVisitor::new(model, options.clone()).convert_compilation_unit(tree)
}

fn convert_and_print(unit: &TranslationUnit, options: &ConvertOptions) -> Result<String, UnitFailure> {
    let _span = tracing::info_span!("convert_unit", path = %unit.path).entered();
    match convert_unit(&unit.tree, &unit.semantics, options) {
        Ok(converted) => {
            let mut printer = options.printer();
            printer.emit_compilation_unit(&converted);
            tracing::debug!(path = %unit.path, "converted");
            Ok(printer.take_output())
        }
        Err(error) => {
            tracing::warn!(path = %unit.path, kind = error.kind(), %error, "unit failed to convert");
            Err(UnitFailure {
                path: unit.path.clone(),
                error,
            })
        }
    }
}

/// Convert every unit in parallel. Output order follows input order no
/// matter which unit finishes first.
pub fn convert_batch(units: &[TranslationUnit], options: &ConvertOptions) -> Result<BatchOutput, BatchError> {
    if units.is_empty() {
        return Err(BatchError::NoUnits);
    }
    let _span = tracing::info_span!("convert_batch", units = units.len()).entered();

    let results: Vec<Result<String, UnitFailure>> = units
        .par_iter()
        .map(|unit| convert_and_print(unit, options))
        .collect();

    let mut output = BatchOutput::default();
    for (unit, result) in units.iter().zip(results) {
        match result {
            Ok(code) => output.converted.push((unit.path.clone(), code)),
            Err(failure) => output.failures.push(failure),
        }
    }
    tracing::info!(
        converted = output.converted.len(),
        failed = output.failures.len(),
        "batch finished"
    );
    Ok(output)
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
