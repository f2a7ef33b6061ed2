//! Command-line shell: argument parsing, path validation, and exit-code
//! mapping.
//!
//! The contract observed by callers is exit codes plus streams: 0 with the
//! JSON deck on stdout, 2 with `{"error": ...}` on stderr when the input
//! file is missing, 1 with `{"error": ...}` on stderr for any other failure.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract titles, body text, and speaker notes from a .pptx file as JSON.
#[derive(Parser, Debug)]
#[command(name = "pptx2json", version)]
pub struct CliArgs {
    /// Path to the .pptx file
    pub pptx_path: PathBuf,
}

/// Run the extraction described by `args` and map the outcome to an exit
/// code.
pub fn run(args: CliArgs) -> ExitCode {
    if !args.pptx_path.exists() {
        emit_error(&format!("File not found: {}", args.pptx_path.display()));
        return ExitCode::from(2);
    }

    match emit_deck(&args.pptx_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            emit_error(&e.to_string());
            ExitCode::from(1)
        },
    }
}

fn emit_deck(path: &std::path::Path) -> pptx2json::Result<()> {
    let deck = pptx2json::extract_deck(path)?;
    // serde_json leaves non-ASCII characters unescaped
    let json = serde_json::to_string(&deck)?;
    println!("{json}");
    Ok(())
}

/// Write a machine-readable error object to stderr.
fn emit_error(message: &str) {
    eprintln!("{}", serde_json::json!({ "error": message }));
}
