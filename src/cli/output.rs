//! Terminal output formatting
//!
//! Data goes to the given writer (stdout in production); diagnostics go to
//! stderr with colors. Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::Value;

use crate::infrastructure::{InfraError, InfraResult};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Write a JSON document indented by two spaces, followed by a newline.
pub fn json(out: &mut dyn Write, doc: &Value) -> InfraResult<()> {
    let text = serde_json::to_string_pretty(doc)
        .map_err(|e| InfraError::io("serialize response", io::Error::from(e)))?;
    line(out, &text)
}

/// Write plain text followed by a newline (no color).
pub fn line(out: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) -> InfraResult<()> {
    writeln!(out, "{}", msg).map_err(|e| InfraError::io("write output", e))
}
