//! Command types produced by the parser.

use std::fmt;

use serde::Serialize;

/// A recognized command keyword.
///
/// Keywords are matched exactly and case-sensitively against the first token
/// of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Bye,
    List,
    Mark,
    Unmark,
    Delete,
    Todo,
    Deadline,
    Event,
    Find,
    Tag,
    Untag,
}

impl Keyword {
    /// Every keyword, in the order they are listed to users.
    pub const ALL: [Self; 11] = [
        Self::Todo,
        Self::Deadline,
        Self::Event,
        Self::List,
        Self::Find,
        Self::Mark,
        Self::Unmark,
        Self::Delete,
        Self::Tag,
        Self::Untag,
        Self::Bye,
    ];

    /// Look up the keyword for a token. Returns `None` for anything else,
    /// including other capitalizations.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == token)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bye => "bye",
            Self::List => "list",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Delete => "delete",
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Find => "find",
            Self::Tag => "tag",
            Self::Untag => "untag",
        }
    }

    /// Usage shape shown to users, e.g. `mark <index>`.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Bye => "bye",
            Self::List => "list",
            Self::Mark => "mark <index>",
            Self::Unmark => "unmark <index>",
            Self::Delete => "delete <index>",
            Self::Todo => "todo <description>",
            Self::Deadline => "deadline <description> /by <dd/MM/yyyy HH:mm>",
            Self::Event => "event <description> /from <dd/MM/yyyy HH:mm> /to <dd/MM/yyyy HH:mm>",
            Self::Find => "find <words>",
            Self::Tag => "tag <index> #<tag>",
            Self::Untag => "untag <index> #<tag>",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed command, ready to be executed against the task list.
///
/// Indices are 1-based as typed by the user; range checks belong to the
/// executor. Tags keep their leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Input that matched no keyword, including the empty line.
    Unknown,
    Exit,
    List,
    Mark { index: i32 },
    Unmark { index: i32 },
    AddTodo { description: String },
    AddDeadline { description: String, by: String },
    AddEvent { description: String, from: String, to: String },
    Delete { index: i32 },
    Find { query: String },
    Tag { index: i32, tag: String },
    Untag { index: i32, tag: String },
}

impl Command {
    /// The keyword that produces this command, or `None` for [`Command::Unknown`].
    #[must_use]
    pub const fn keyword(&self) -> Option<Keyword> {
        let keyword = match self {
            Self::Unknown => return None,
            Self::Exit => Keyword::Bye,
            Self::List => Keyword::List,
            Self::Mark { .. } => Keyword::Mark,
            Self::Unmark { .. } => Keyword::Unmark,
            Self::AddTodo { .. } => Keyword::Todo,
            Self::AddDeadline { .. } => Keyword::Deadline,
            Self::AddEvent { .. } => Keyword::Event,
            Self::Delete { .. } => Keyword::Delete,
            Self::Find { .. } => Keyword::Find,
            Self::Tag { .. } => Keyword::Tag,
            Self::Untag { .. } => Keyword::Untag,
        };
        Some(keyword)
    }

    /// Whether executing this command ends the session.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    /// Whether executing this command changes the task list, so the list
    /// has to be saved afterwards.
    #[must_use]
    pub const fn modifies_tasks(&self) -> bool {
        matches!(
            self,
            Self::Mark { .. }
                | Self::Unmark { .. }
                | Self::AddTodo { .. }
                | Self::AddDeadline { .. }
                | Self::AddEvent { .. }
                | Self::Delete { .. }
                | Self::Tag { .. }
                | Self::Untag { .. }
        )
    }

    /// The 1-based task index this command targets, if any.
    #[must_use]
    pub const fn index(&self) -> Option<i32> {
        match self {
            Self::Mark { index }
            | Self::Unmark { index }
            | Self::Delete { index }
            | Self::Tag { index, .. }
            | Self::Untag { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The tag without its leading `#`.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Tag { tag, .. } | Self::Untag { tag, .. } => {
                Some(tag.strip_prefix('#').unwrap_or(tag))
            },
            _ => None,
        }
    }
}

/// Renders the canonical input line for the command. Parsing the rendered
/// line gives back an equal command. `Unknown` renders as an empty line.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => Ok(()),
            Self::Exit => f.write_str("bye"),
            Self::List => f.write_str("list"),
            Self::Mark { index } => write!(f, "mark {index}"),
            Self::Unmark { index } => write!(f, "unmark {index}"),
            Self::Delete { index } => write!(f, "delete {index}"),
            Self::AddTodo { description } => write!(f, "todo {description}"),
            Self::AddDeadline { description, by } => write!(f, "deadline {description} /by {by}"),
            Self::AddEvent { description, from, to } => {
                write!(f, "event {description} /from {from} /to {to}")
            },
            Self::Find { query } => write!(f, "find {query}"),
            Self::Tag { index, tag } => write!(f, "tag {index} {tag}"),
            Self::Untag { index, tag } => write!(f, "untag {index} {tag}"),
        }
    }
}
