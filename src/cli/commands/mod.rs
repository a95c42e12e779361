//! Command implementations for barcus.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod repl;

pub use config::config;
pub use repl::{repl, ReplSummary};

use crate::cli::args::OutputFormat;
use crate::cli::completions::{
    completion_install_instructions, generate_completions, shell_from_str,
};
use crate::config::Config;
use crate::error::BarcusError;
use crate::output::{format_command, format_keywords};
use crate::parser::parse;

/// Execute the parse command.
///
/// # Errors
///
/// Returns `BarcusError::Parse` if the line starts with a keyword but is
/// malformed, or an error if output formatting fails.
pub fn parse_line(
    words: &[String],
    config: &Config,
    format: OutputFormat,
) -> Result<String, BarcusError> {
    let line = words.join(" ");
    let command = parse(&line)?;
    format_command(&line, &command, config.repl.show_unknown_hint, format)
}

/// Execute keywords command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn keywords(format: OutputFormat) -> Result<String, BarcusError> {
    format_keywords(format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns `BarcusError::Config` if the shell is not supported.
pub fn completions(shell: &str, install: bool) -> Result<String, BarcusError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        BarcusError::Config(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Keyword, ParseError};

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_line_json() {
        let out = parse_line(&words("find old book"), &Config::default(), OutputFormat::Json).unwrap();
        assert!(out.contains("\"command\": \"find\""));
        assert!(out.contains("\"query\": \"old book\""));
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        let err = parse_line(&words("mark hehe"), &Config::default(), OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, BarcusError::Parse(ParseError::MissingIndex(Keyword::Mark))));
    }

    #[test]
    fn test_parse_line_unknown_is_not_an_error() {
        let out = parse_line(&[], &Config::default(), OutputFormat::Json).unwrap();
        assert!(out.contains("\"command\": \"unknown\""));
    }

    #[test]
    fn test_completions_unknown_shell() {
        let err = completions("tcsh", false).unwrap_err();
        assert!(err.to_string().contains("Unknown shell: tcsh"));
    }
}
