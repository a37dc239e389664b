//! Error types for colorport

use thiserror::Error;

/// Result type alias for colorport operations
pub type Result<T> = std::result::Result<T, StyleError>;

/// Style conversion error types
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid color {0}")]
    InvalidColor(String),

    #[error("unrecognised style directive: {0}")]
    UnrecognisedDirective(String),

    #[error("invalid token name: {0:?}")]
    InvalidToken(String),

    #[error("duplicate format: {first} and {second}")]
    DuplicateFormat { first: String, second: String },

    #[error("malformed definition file (line {line}): {message}")]
    MalformedDefinition { line: usize, message: String },

    #[error("format {format} does not support {operation}")]
    Unsupported {
        format: String,
        operation: &'static str,
    },

    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("unknown style: {0}")]
    UnknownStyle(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl StyleError {
    /// Shorthand for a definition-file error on a given line
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        StyleError::MalformedDefinition {
            line,
            message: message.into(),
        }
    }
}
