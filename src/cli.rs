//! CLI for the pygen emission engine
//!
//! ## Commands
//!
//! - `emit <file.json>` - Decode descriptors and print the generated source
//! - `emit -c '<json>'` - Same, with inline input
//! - `kinds` - List the statement kinds the engine supports
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::decode::decode_statements;
use crate::emit::CodeGenerator;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Statement-descriptor to Python source emission engine
#[derive(Parser, Debug)]
#[command(name = "pygen")]
#[command(version = VERSION)]
#[command(about = "Generate Python source from statement descriptors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate source from a JSON descriptor file
    Emit {
        /// Descriptor file to emit
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Emit inline descriptor JSON
        #[arg(short = 'c', long = "command", value_name = "JSON")]
        command: Option<String>,
        /// Write output to a file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// List the statement kinds the engine supports
    Kinds,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Emit {
            file,
            command,
            output,
        } => {
            let json = match (file, command) {
                (Some(path), None) => fs::read_to_string(&path).map_err(|e| {
                    CliError::failure(format!("error: cannot read {}: {}", path.display(), e))
                })?,
                (None, Some(inline)) => inline,
                _ => {
                    return Err(CliError::failure(
                        "error: provide a descriptor file or -c '<json>'",
                    ));
                }
            };
            emit_json(&json, output.as_deref())
        }
        Command::Kinds => {
            let generator = CodeGenerator::new();
            for kind in generator.supported_kinds() {
                println!("{kind}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Decode descriptors, generate source, and write it to `output` or stdout.
fn emit_json(json: &str, output: Option<&std::path::Path>) -> CliResult<ExitCode> {
    let statements =
        decode_statements(json).map_err(|e| CliError::failure(format!("error: {e}")))?;

    let generator = CodeGenerator::new();
    let code = generator
        .generate(&statements)
        .map_err(|e| CliError::failure(format!("error: {e}")))?;

    match output {
        Some(path) => {
            fs::write(path, format!("{code}\n")).map_err(|e| {
                CliError::failure(format!("error: cannot write {}: {}", path.display(), e))
            })?;
            tracing::info!(path = %path.display(), "wrote generated source");
        }
        None => println!("{code}"),
    }
    Ok(ExitCode::SUCCESS)
}
