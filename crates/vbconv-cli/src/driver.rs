//! Driver: find serialized units, convert them as one batch, write the
//! results.
//!
//! A unit that cannot be read or parsed is reported and skipped; the rest of
//! the batch still converts. Failing to write an output file aborts the run.

use crate::args::CliArgs;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::{Component, Path, PathBuf};
use vbconv_common::diagnostics::{Diagnostic, diagnostic_codes};
use vbconv_converter::{BatchError, TranslationUnit, convert_batch};
use walkdir::WalkDir;

/// Extension of serialized translation units.
pub const UNIT_EXTENSION: &str = "vbjson";
const OUTPUT_EXTENSION: &str = "cs";

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every unit converted.
    Success,
    /// At least one unit failed to load or convert.
    UnitsFailed,
    /// The batch itself failed: no units found.
    BatchFailed,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::UnitsFailed => 1,
            ExitStatus::BatchFailed => 2,
        }
    }
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub diagnostics: Vec<Diagnostic>,
    /// Files written, in input order.
    pub emitted_files: Vec<PathBuf>,
    /// `(path, code)` pairs when writing to stdout.
    pub printed: Vec<(String, String)>,
    pub converted_count: usize,
    pub unit_count: usize,
}

impl RunOutcome {
    pub fn exit_status(&self) -> ExitStatus {
        if self.unit_count == 0 {
            ExitStatus::BatchFailed
        } else if self.diagnostics.iter().any(Diagnostic::is_error) {
            ExitStatus::UnitsFailed
        } else {
            ExitStatus::Success
        }
    }
}

/// A unit plus where it was read from.
struct LoadedUnit {
    source: PathBuf,
    unit: TranslationUnit,
}

/// Every `.vbjson` file under `inputs`, sorted within each directory so runs
/// are reproducible. Explicit file inputs are taken as given.
pub fn discover_units(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
            continue;
        }
        if !input.is_dir() {
            anyhow::bail!("input not found: {}", input.display());
        }
        for entry in WalkDir::new(input)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().is_some_and(|ext| ext == UNIT_EXTENSION)
            {
                files.push(path.to_path_buf());
            }
        }
    }
    tracing::debug!(count = files.len(), "discovered units");
    Ok(files)
}

fn load_unit(path: &Path) -> Result<TranslationUnit> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Apply `--replace-path` to a unit's recorded path.
pub fn rewrite_path(path: &str, replacement: Option<(&str, &str)>) -> String {
    match replacement {
        Some((from, to)) if !from.is_empty() => path.replace(from, to),
        _ => path.to_string(),
    }
}

/// Where the converted form of a unit goes. Under `--out-dir` the recorded
/// path's relative structure is kept; otherwise the output lands next to
/// the serialized input.
pub fn output_path(recorded: &str, source: &Path, out_dir: Option<&Path>) -> PathBuf {
    let recorded = Path::new(recorded);
    let target = match out_dir {
        Some(out_dir) => {
            let relative: PathBuf = recorded
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .collect();
            out_dir.join(relative)
        }
        None => {
            let directory = source.parent().unwrap_or_else(|| Path::new(""));
            match recorded.file_name() {
                Some(name) => directory.join(name),
                None => source.to_path_buf(),
            }
        }
    };
    target.with_extension(OUTPUT_EXTENSION)
}

/// Load every unit. Unreadable ones become diagnostics; a recorded path seen
/// twice keeps its first unit.
fn load_units(files: &[PathBuf], args: &CliArgs, diagnostics: &mut Vec<Diagnostic>) -> IndexMap<String, LoadedUnit> {
    let replacement = args.path_replacement();
    let mut units = IndexMap::new();
    for file in files {
        let mut unit = match load_unit(file) {
            Ok(unit) => unit,
            Err(error) => {
                tracing::warn!(file = %file.display(), "unit could not be loaded");
                diagnostics.push(Diagnostic::error(
                    file.display().to_string(),
                    format!("{error:#}"),
                    diagnostic_codes::IO_FAILURE,
                ));
                continue;
            }
        };
        unit.path = rewrite_path(&unit.path, replacement);
        if units.contains_key(&unit.path) {
            diagnostics.push(Diagnostic::warning(
                file.display().to_string(),
                format!("unit path {} already seen; skipped", unit.path),
                diagnostic_codes::IO_FAILURE,
            ));
            continue;
        }
        units.insert(
            unit.path.clone(),
            LoadedUnit {
                source: file.clone(),
                unit,
            },
        );
    }
    units
}

/// Run the whole pipeline for parsed arguments.
pub fn run(args: &CliArgs) -> Result<RunOutcome> {
    let _span = tracing::info_span!("run", inputs = args.inputs.len()).entered();
    let mut outcome = RunOutcome::default();

    let files = discover_units(&args.inputs)?;
    let loaded = load_units(&files, args, &mut outcome.diagnostics);
    outcome.unit_count = loaded.len();

    let units: Vec<TranslationUnit> = loaded.values().map(|l| l.unit.clone()).collect();
    let options = args.convert_options();
    let batch = match args.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("failed to build worker pool")?;
            pool.install(|| convert_batch(&units, &options))
        }
        None => convert_batch(&units, &options),
    };
    let batch = match batch {
        Ok(batch) => batch,
        Err(error @ BatchError::NoUnits) => {
            outcome
                .diagnostics
                .push(Diagnostic::error(String::new(), error.to_string(), error.code()));
            return Ok(outcome);
        }
    };

    outcome
        .diagnostics
        .extend(batch.failures.iter().map(|failure| failure.to_diagnostic()));
    outcome.converted_count = batch.converted.len();

    if args.stdout {
        outcome.printed = batch.converted;
        return Ok(outcome);
    }

    for (path, code) in &batch.converted {
        let Some(loaded) = loaded.get(path) else {
            continue;
        };
        let target = output_path(path, &loaded.source, args.out_dir.as_deref());
        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&target, code).with_context(|| format!("failed to write {}", target.display()))?;
        tracing::debug!(path = %target.display(), "wrote output");
        outcome.emitted_files.push(target);
    }
    Ok(outcome)
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
