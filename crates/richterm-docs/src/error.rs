// Rust guideline compliant 2026-10-17

//! Error types for the documentation directive.

use thiserror::Error;

/// Errors raised while running a single directive.
#[derive(Debug, Error)]
pub enum DirectiveError {
    /// The directive has no command.
    #[error("richterm directive requires a command")]
    MissingCommand,

    /// The command could not be split into words.
    #[error("Invalid command syntax in '{command}': {reason}")]
    InvalidSyntax {
        /// Command text as written.
        command: String,
        /// Why splitting failed.
        reason: String,
    },

    /// The directive uses an option it does not know.
    #[error("Unknown option '{0}' (expected prompt, hide-command or shown-command)")]
    UnknownOption(String),

    /// An option value is not acceptable.
    #[error("Invalid value for option '{name}': {reason}")]
    InvalidOption {
        /// Option name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The command could not be executed.
    #[error("Failed to execute command: {0}")]
    Execution(#[from] richterm_core::Error),

    /// The command ran but exited with a non-zero code.
    #[error("Command '{command}' failed with exit code {exit_code}:\n{output}")]
    CommandFailed {
        /// Command text as written.
        command: String,
        /// Exit code of the command.
        exit_code: i32,
        /// Captured output, useful for diagnosing the failure.
        output: String,
    },
}

/// A directive error located in a document.
#[derive(Debug, Error)]
#[error("line {line}: {source}")]
pub struct DocumentError {
    /// 1-based line of the directive.
    pub line: usize,
    /// The underlying directive error.
    #[source]
    pub source: DirectiveError,
}
