//! `json-extract` — look up a dot path in a JSON document.
//!
//! Usage:
//!   json-extract [--as any|string|number] [--file FILE] '<path>'
//!
//! The document is read from `--file`, or from stdin when no file is given.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use json_joy_json_extract::cli::{lookup, CliError, ValueMode};

#[derive(Parser)]
#[command(name = "json-extract")]
#[command(about = "Extract a value from a JSON document by dot path, e.g. a.[-1].val")]
#[command(version)]
struct Cli {
    /// Dot-separated path; `[n]` segments index arrays, negative from the end
    path: String,

    /// Required type of the result (any, string, number)
    #[arg(long = "as", default_value_t = ValueMode::Any)]
    mode: ValueMode,

    /// Read the document from this file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let doc = match &cli.file {
        Some(file) => fs::read(file)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    tracing::debug!(bytes = doc.len(), path = %cli.path, mode = %cli.mode, "extracting");
    lookup(&doc, &cli.path, cli.mode)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{result}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
