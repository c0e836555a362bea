//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use flightdesk::entity::ValidationError;
use flightdesk::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// The session stopped because no more answers could be read.
    Interrupted(LibError),

    /// The database could not be opened or initialized.
    DatabaseOpen(LibError),

    /// Database file not found (and auto-init disabled).
    NoDatabase(String),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Session interrupted (input closed or retries exhausted)
    /// - 3: Database could not be opened
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Interrupted(_) => 1,
            CliError::DatabaseOpen(_) | CliError::NoDatabase(_) => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(_) => 6,
            CliError::Config(_) => 7,
        }
    }

    /// Whether the error ends the session instead of returning to the menu.
    pub fn is_session_ending(&self) -> bool {
        matches!(self, CliError::Interrupted(_) | CliError::Io(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(LibError::Internal { context }) => {
                write!(f, "internal error in {context}")
            }
            CliError::Library(e) | CliError::Interrupted(e) => write!(f, "{e}"),
            CliError::DatabaseOpen(e) => write!(f, "Could not open the database: {e}"),
            CliError::NoDatabase(path) => write!(
                f,
                "Database {path} not found (auto-init is disabled)"
            ),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) | CliError::Interrupted(e) | CliError::DatabaseOpen(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_session_ending() {
            CliError::Interrupted(e)
        } else if let LibError::Io(io) = e {
            CliError::Io(io)
        } else {
            CliError::Library(e)
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        CliError::Library(e.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
