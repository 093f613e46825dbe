//! Custom error types for the expense manager
//!
//! This module defines the error hierarchy for the application using thiserror.
//! `Validation` and `Transport` are the two failures a user can run into while
//! working with expenses; the rest cover the ambient plumbing.

use thiserror::Error;

/// The main error type for expense manager operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpenseError {
    /// Missing or malformed user input, detected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network, HTTP status or response body failure talking to the remote store
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ExpenseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The message without the category prefix, suitable for a notice
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::Transport(m)
            | Self::Config(m)
            | Self::Io(m)
            | Self::Json(m)
            | Self::Tui(m) => m,
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ExpenseError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for expense manager operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
