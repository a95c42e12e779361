//! Command parsing for task entry.
//!
//! Every input line starts with a keyword that selects its grammar:
//! - "todo read book"
//! - "deadline homework /by 22/08/2024 16:00"
//! - "event camp /from 22/08/2024 09:00 /to 24/08/2024 18:00"
//! - "tag 2 #fun"

mod command;
mod grammar;

pub use command::{Command, Keyword};
pub use grammar::{parse, ParseError};
