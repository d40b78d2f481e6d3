//! Command-line driver for the vbconv converter.
//!
//! Reads translation units serialized by a front-end, converts them in one
//! parallel batch, and writes one `.cs` file per converted unit.

// Command-line arguments
pub mod args;
pub use args::CliArgs;

// Unit discovery, conversion, and output
pub mod driver;
pub use driver::{ExitStatus, RunOutcome, run};

// Diagnostic rendering
pub mod reporter;
pub use reporter::Reporter;

// Tracing subscriber setup
pub mod tracing_config;
