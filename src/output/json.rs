//! JSON output formatting for barcus.

use serde_json::json;

use crate::core::parse_task_datetime;
use crate::error::BarcusError;
use crate::parser::{Command, Keyword, ParseError};

/// Date fields of a command that do not follow the task date pattern.
fn nonconforming_dates(command: &Command) -> Vec<&'static str> {
    let dates: Vec<(&'static str, &str)> = match command {
        Command::AddDeadline { by, .. } => vec![("by", by.as_str())],
        Command::AddEvent { from, to, .. } => vec![("from", from.as_str()), ("to", to.as_str())],
        _ => Vec::new(),
    };
    dates
        .into_iter()
        .filter(|(_, value)| parse_task_datetime(value).is_none())
        .map(|(field, _)| field)
        .collect()
}

/// Format a parsed command as JSON.
///
/// # Errors
///
/// Returns `BarcusError::Serialize` if JSON serialization fails.
pub fn format_command_json(input: &str, command: &Command) -> Result<String, BarcusError> {
    let output = json!({
        "input": input.trim(),
        "parsed": true,
        "command": command,
        "nonconforming_dates": nonconforming_dates(command),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a parse failure as JSON.
///
/// # Errors
///
/// Returns `BarcusError::Serialize` if JSON serialization fails.
pub fn format_parse_error_json(input: &str, err: &ParseError) -> Result<String, BarcusError> {
    let output = json!({
        "input": input.trim(),
        "parsed": false,
        "keyword": err.keyword(),
        "error": err.to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the keyword reference as JSON.
///
/// # Errors
///
/// Returns `BarcusError::Serialize` if JSON serialization fails.
pub fn format_keywords_json() -> Result<String, BarcusError> {
    let items: Vec<_> = Keyword::ALL
        .iter()
        .map(|k| json!({ "keyword": k, "usage": k.usage() }))
        .collect();
    let output = json!({
        "count": items.len(),
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_format_command_json() {
        let cmd = Command::Tag { index: 2, tag: "#fun".to_string() };
        let out = format_command_json(" tag 2 #fun ", &cmd).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["input"], "tag 2 #fun");
        assert_eq!(value["parsed"], true);
        assert_eq!(value["command"]["command"], "tag");
        assert_eq!(value["command"]["index"], 2);
        assert_eq!(value["command"]["tag"], "#fun");
    }

    #[test]
    fn test_format_command_json_flags_dates() {
        let cmd = Command::AddEvent {
            description: "camp".to_string(),
            from: "22/08/2024 09:00".to_string(),
            to: "sunday".to_string(),
        };
        let out = format_command_json("event camp /from 22/08/2024 09:00 /to sunday", &cmd).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["nonconforming_dates"], json!(["to"]));
    }

    #[test]
    fn test_format_parse_error_json() {
        let err = ParseError::MalformedTag(Keyword::Untag);
        let out = format_parse_error_json("untag 5", &err).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["parsed"], false);
        assert_eq!(value["keyword"], "untag");
        assert_eq!(value["error"], "please have an integer and a single word tag after 'untag'");
    }

    #[test]
    fn test_format_keywords_json() {
        let out = format_keywords_json().unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["count"], 11);
        assert_eq!(value["items"][0]["keyword"], "todo");
    }
}
