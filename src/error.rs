//! Error types for barcus.

use thiserror::Error;

use crate::parser::ParseError;

/// Errors surfaced by the barcus command-line front-end.
#[derive(Debug, Error)]
pub enum BarcusError {
    /// A line started with a keyword but had the wrong shape.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BarcusError {
    /// Whether the error comes from user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
