// Rust guideline compliant 2026-10-17

//! Error types for the richterm core library.

use thiserror::Error;

/// Result type alias for richterm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for richterm operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No program was given to run.
    #[error("Empty command")]
    EmptyCommand,

    /// The program could not be found on PATH.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// The program exists but could not be started.
    #[error("Failed to launch {program}: {source}")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Command text could not be split into words.
    #[error("Invalid command syntax: {0}")]
    InvalidCommandSyntax(String),

    /// Console markup could not be parsed.
    #[error("Invalid markup: {0}")]
    InvalidMarkup(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns `true` when the error means the program does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::CommandNotFound(_))
    }
}
