use colored::Colorize;

use crate::core::{parse_task_datetime, DATE_TIME_PATTERN};
use crate::parser::{Command, Keyword, ParseError};

/// Labelled fields of a command, in display order. Date fields are flagged
/// with `true`.
fn command_fields(command: &Command) -> Vec<(&'static str, String, bool)> {
    match command {
        Command::Unknown | Command::Exit | Command::List => Vec::new(),
        Command::Mark { index } | Command::Unmark { index } | Command::Delete { index } => {
            vec![("Task", index.to_string(), false)]
        },
        Command::AddTodo { description } => vec![("Description", description.clone(), false)],
        Command::AddDeadline { description, by } => vec![
            ("Description", description.clone(), false),
            ("By", by.clone(), true),
        ],
        Command::AddEvent { description, from, to } => vec![
            ("Description", description.clone(), false),
            ("From", from.clone(), true),
            ("To", to.clone(), true),
        ],
        Command::Find { query } => vec![("Query", query.clone(), false)],
        Command::Tag { index, tag } | Command::Untag { index, tag } => vec![
            ("Task", index.to_string(), false),
            ("Tag", tag.clone(), false),
        ],
    }
}

/// Format a parsed command as labelled lines.
pub fn format_command_pretty(command: &Command) -> String {
    let Some(keyword) = command.keyword() else {
        return format!("{}", "Unknown command".yellow().bold());
    };

    let mut lines = vec![format!("{} {}", "Command:".green().bold(), keyword.as_str().bold())];
    for (label, value, is_date) in command_fields(command) {
        let mut line = format!("  {} {value}", format!("{label}:").cyan());
        if is_date && parse_task_datetime(&value).is_none() {
            line.push_str(&format!("  {}", format!("(not {DATE_TIME_PATTERN})").yellow()));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Format a line that matched no keyword.
pub fn format_unknown_pretty(show_hint: bool) -> String {
    let mut output = format!("{}", "Sorry, I don't understand that command.".yellow());
    if show_hint {
        let keywords: Vec<&str> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
        output.push_str(&format!("\n  {} {}", "Try one of:".dimmed(), keywords.join(", ")));
    }
    output
}

/// Format a parse failure. The message itself is left exactly as the parser
/// produced it.
pub fn format_parse_error_pretty(err: &ParseError) -> String {
    format!("{} {err}", "error:".red().bold())
}

/// Format the keyword reference.
pub fn format_keywords_pretty() -> String {
    let mut lines = vec![format!("{}", "Keywords".bold())];
    lines.push("─".repeat(60));
    for keyword in Keyword::ALL {
        let name = format!("{:<10}", keyword.as_str());
        lines.push(format!("  {} {}", name.cyan(), keyword.usage().dimmed()));
    }
    lines.join("\n")
}
