//! CLI tool to tokenize Lox source files.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status for invalid invocations and unreadable input.
const EXIT_USAGE: u8 = 1;

/// Scan Lox source files into tokens.
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source files into tokens", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true, env = "LOX_VERBOSE")]
    verbose: bool,

    /// Disable color in log output
    #[arg(long, global = true, env = "LOX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one line per token, then `EOF  null`
    ///
    /// Lexical errors go to stderr and make the process exit with 65.
    Tokenize {
        /// Source file to scan
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose, cli.no_color);

    let result = match &cli.command {
        Command::Tokenize { file } => run_tokenize(file),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Install a stderr subscriber. `LOX_LOG` overrides the level flags.
fn init_logging(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_env("LOX_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn run_tokenize(path: &Path) -> anyhow::Result<u8> {
    info!(path = %path.display(), "tokenizing");
    let result = lox_scanner::scan_file(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    for error in &result.errors {
        eprintln!("{error}");
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for token in &result.tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()?;

    debug!(
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "done"
    );
    Ok(result.exit_code())
}
