//! Interactive command session.
//!
//! Reads one command per line, reports how each one parses, and stops after
//! `bye` or at end of input.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::cli::args::OutputFormat;
use crate::config::ReplConfig;
use crate::error::BarcusError;
use crate::output::{format_command, format_parse_error};
use crate::parser::parse;

/// Counts from a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    /// Lines read, including the final `bye`.
    pub lines: usize,
    /// Lines rejected with a parse error.
    pub rejected: usize,
    /// Whether the session ended with `bye` rather than end of input.
    pub exited: bool,
}

/// Run a session over `input`, writing results to `output`.
///
/// The prompt is only written when `interactive` is set, so piped input
/// produces nothing but results.
///
/// # Errors
///
/// Returns an error if reading, writing or output formatting fails. Parse
/// failures are reported in the output and do not end the session.
pub fn repl<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    settings: &ReplConfig,
    format: OutputFormat,
    interactive: bool,
) -> Result<ReplSummary, BarcusError> {
    let mut summary = ReplSummary::default();
    let mut lines = input.lines();

    loop {
        if interactive {
            write!(output, "{}", settings.prompt)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        summary.lines += 1;

        let (rendered, exit) = match parse(&line) {
            Ok(command) => (
                format_command(&line, &command, settings.show_unknown_hint, format)?,
                command.is_exit(),
            ),
            Err(e) => {
                summary.rejected += 1;
                debug!(error = %e, "rejected line");
                (format_parse_error(&line, &e, format)?, false)
            },
        };
        writeln!(output, "{rendered}")?;

        if exit {
            summary.exited = true;
            break;
        }
    }

    info!(lines = summary.lines, rejected = summary.rejected, "session finished");
    Ok(summary)
}
