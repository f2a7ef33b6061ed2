//! pptx2json CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: initialize logging, parse the single
//! path argument, run the extraction, and exit with the appropriate status.
//! For programmatic use, prefer the library API (`pptx2json::extract_deck`).

use clap::Parser;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Diagnostics are opt-in via RUST_LOG; with no filter set, stderr stays
    // a pure channel for the JSON error object.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli::CliArgs::parse())
}
