//! Lexical scanner for the Lox scripting language.
//!
//! Turns source text into an ordered sequence of typed tokens that
//! always ends with an end-of-input marker. Lexical errors are
//! collected as diagnostics and never stop the scan, so a single
//! pass reports every fault in a file.
//!
//! # Quick start
//!
//! ```
//! use lox_scanner::{scan, TokenKind};
//!
//! let result = scan("var answer = 42;");
//! assert!(!result.had_error());
//!
//! let lines: Vec<String> = result.tokens.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     lines,
//!     [
//!         "VAR var null",
//!         "IDENTIFIER answer null",
//!         "EQUAL = null",
//!         "NUMBER 42 42.0",
//!         "SEMICOLON ; null",
//!         "EOF  null",
//!     ]
//! );
//! assert_eq!(result.tokens[0].kind, TokenKind::Var);
//! ```
//!
//! ## Diagnostics
//!
//! ```
//! let result = lox_scanner::scan("(#)");
//! assert_eq!(result.errors[0].to_string(), "[line 1] Error: Unexpected character: #");
//! assert_eq!(result.exit_code(), 65);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod scanner;
pub mod token;

pub use scanner::{EXIT_LEXICAL_ERROR, Scan, ScanError, ScanErrorKind, Scanner, scan};
pub use token::{Literal, Token, TokenKind};

/// Read a source file and scan it in one step.
///
/// Lexical errors are part of the returned [`Scan`]; only failing to
/// read the file is an `Err`.
pub fn scan_file(path: impl AsRef<std::path::Path>) -> std::io::Result<Scan> {
    let source = std::fs::read_to_string(path)?;
    Ok(scan(&source))
}
