#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use vbconv_cli::{CliArgs, Reporter, driver, tracing_config};

fn main() -> Result<()> {
    // Only installs a subscriber when VBCONV_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let outcome = driver::run(&args)?;

    for (path, code) in &outcome.printed {
        println!("// {path}");
        println!("{code}");
    }

    let reporter = Reporter::new(!args.no_color && std::io::stderr().is_terminal());
    if !outcome.diagnostics.is_empty() {
        eprintln!("{}", reporter.render(&outcome.diagnostics));
    }
    eprintln!("{}", reporter.summary(&outcome));

    std::process::exit(outcome.exit_status().code());
}
