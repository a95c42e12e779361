//! Output formatting for barcus.
//!
//! This module renders parsed commands and parse failures for display.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::BarcusError;
use crate::parser::{Command, ParseError};

pub use json::*;
pub use pretty::*;

/// Format the outcome of parsing `input` based on output format.
///
/// Unknown input is reported as such in pretty output; in JSON it is an
/// ordinary `unknown` command.
///
/// # Errors
///
/// Returns `BarcusError::Serialize` if JSON serialization fails.
pub fn format_command(
    input: &str,
    command: &Command,
    show_unknown_hint: bool,
    format: OutputFormat,
) -> Result<String, BarcusError> {
    match (format, command) {
        (OutputFormat::Pretty, Command::Unknown) => Ok(format_unknown_pretty(show_unknown_hint)),
        (OutputFormat::Pretty, _) => Ok(format_command_pretty(command)),
        (OutputFormat::Json, _) => format_command_json(input, command),
    }
}

/// Format a parse failure based on output format
///
/// # Errors
///
/// Returns `BarcusError::Serialize` if JSON serialization fails.
pub fn format_parse_error(
    input: &str,
    err: &ParseError,
    format: OutputFormat,
) -> Result<String, BarcusError> {
    match format {
        OutputFormat::Pretty => Ok(format_parse_error_pretty(err)),
        OutputFormat::Json => format_parse_error_json(input, err),
    }
}

/// Format the keyword reference based on output format
///
/// # Errors
///
/// Returns `BarcusError::Serialize` if JSON serialization fails.
pub fn format_keywords(format: OutputFormat) -> Result<String, BarcusError> {
    match format {
        OutputFormat::Pretty => Ok(format_keywords_pretty()),
        OutputFormat::Json => format_keywords_json(),
    }
}
