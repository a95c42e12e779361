//! Keyword command grammar.
//!
//! Turns lines like "deadline homework /by 22/08/2024 16:00" into a
//! [`Command`]. Each keyword has one accepted shape; anything else after a
//! known keyword is rejected with that keyword's fixed message.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace};

use super::command::{Command, Keyword};

/// Why a line starting with a known keyword was rejected.
///
/// The `Display` output is the message shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `mark`, `unmark` or `delete` without a single integer after it.
    #[error("please have an integer after '{0}'")]
    MissingIndex(Keyword),

    #[error("please include a description of the todo")]
    MissingDescription,

    #[error("please include '/by' and deadline after it")]
    MissingDeadline,

    #[error("please include '/from' and '/to' as well as dates after each of those words")]
    MissingEventPeriod,

    #[error("please include what word(s) you want to find after 'find'")]
    MissingQuery,

    /// `tag` or `untag` without exactly an integer and a `#word`.
    #[error("please have an integer and a single word tag after '{0}'")]
    MalformedTag(Keyword),
}

impl ParseError {
    /// The keyword whose shape was violated.
    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        match self {
            Self::MissingIndex(keyword) | Self::MalformedTag(keyword) => *keyword,
            Self::MissingDescription => Keyword::Todo,
            Self::MissingDeadline => Keyword::Deadline,
            Self::MissingEventPeriod => Keyword::Event,
            Self::MissingQuery => Keyword::Find,
        }
    }
}

// "<description> /by <date>"
static DEADLINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<description>.+?)\s+/by\s+(?P<by>.+)$")
        .unwrap_or_else(|e| panic!("Invalid deadline regex: {e}"))
});

// "<description> /from <date> /to <date>"
static EVENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<description>.+?)\s+/from\s+(?P<from>.+?)\s+/to\s+(?P<to>.+)$")
        .unwrap_or_else(|e| panic!("Invalid event regex: {e}"))
});

/// Parse one input line into a command.
///
/// Empty input and input whose first token is not a keyword give
/// [`Command::Unknown`], which is not an error.
///
/// # Errors
///
/// Returns a [`ParseError`] when the line starts with a keyword but the rest
/// of it does not have the shape that keyword needs.
///
/// # Examples
///
/// ```
/// use barcus::parser::{parse, Command};
///
/// let cmd = parse("deadline homework /by 22/08/2024 16:00").unwrap();
/// assert_eq!(
///     cmd,
///     Command::AddDeadline {
///         description: "homework".to_string(),
///         by: "22/08/2024 16:00".to_string(),
///     }
/// );
///
/// let err = parse("mark hehe").unwrap_err();
/// assert_eq!(err.to_string(), "please have an integer after 'mark'");
/// ```
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (token, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(token, rest)| (token, rest.trim_start()));

    let Some(keyword) = Keyword::from_token(token) else {
        trace!(token, "no keyword matched");
        return Ok(Command::Unknown);
    };
    debug!(%keyword, rest, "dispatching command");

    let command = match keyword {
        Keyword::Bye => Command::Exit,
        Keyword::List => Command::List,
        Keyword::Mark => Command::Mark { index: parse_index(keyword, rest)? },
        Keyword::Unmark => Command::Unmark { index: parse_index(keyword, rest)? },
        Keyword::Delete => Command::Delete { index: parse_index(keyword, rest)? },
        Keyword::Todo => Command::AddTodo {
            description: non_empty(rest).ok_or(ParseError::MissingDescription)?,
        },
        Keyword::Deadline => parse_deadline(rest)?,
        Keyword::Event => parse_event(rest)?,
        Keyword::Find => Command::Find {
            query: non_empty(rest).ok_or(ParseError::MissingQuery)?,
        },
        Keyword::Tag => {
            let (index, tag) = parse_tag(keyword, rest)?;
            Command::Tag { index, tag }
        },
        Keyword::Untag => {
            let (index, tag) = parse_tag(keyword, rest)?;
            Command::Untag { index, tag }
        },
    };

    debug!(?command, "parsed command");
    Ok(command)
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Exactly one whole-number token.
fn parse_index(keyword: Keyword, rest: &str) -> Result<i32, ParseError> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.parse().map_err(|_| ParseError::MissingIndex(keyword)),
        _ => Err(ParseError::MissingIndex(keyword)),
    }
}

/// Exactly two tokens: a whole number, then `#` followed by at least one character.
fn parse_tag(keyword: Keyword, rest: &str) -> Result<(i32, String), ParseError> {
    let err = ParseError::MalformedTag(keyword);
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let [index, tag] = tokens.as_slice() else {
        return Err(err);
    };

    let index: i32 = index.parse().map_err(|_| err)?;
    if tag.len() < 2 || !tag.starts_with('#') {
        return Err(err);
    }
    Ok((index, (*tag).to_string()))
}

fn parse_deadline(rest: &str) -> Result<Command, ParseError> {
    let caps = DEADLINE_PATTERN.captures(rest).ok_or(ParseError::MissingDeadline)?;
    let field = |name: &str| caps.name(name).and_then(|m| non_empty(m.as_str()));

    match (field("description"), field("by")) {
        (Some(description), Some(by)) => Ok(Command::AddDeadline { description, by }),
        _ => Err(ParseError::MissingDeadline),
    }
}

fn parse_event(rest: &str) -> Result<Command, ParseError> {
    let caps = EVENT_PATTERN.captures(rest).ok_or(ParseError::MissingEventPeriod)?;
    let field = |name: &str| caps.name(name).and_then(|m| non_empty(m.as_str()));

    match (field("description"), field("from"), field("to")) {
        (Some(description), Some(from), Some(to)) => Ok(Command::AddEvent { description, from, to }),
        _ => Err(ParseError::MissingEventPeriod),
    }
}
