//! Error types for the flightdesk library.
//!
//! This module provides the error hierarchy shared by every layer of the
//! library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a flightdesk error.
///
/// # Examples
///
/// ```
/// use flightdesk::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the flightdesk library.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested record was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The record that was not found.
        resource: String,
    },

    /// A name lookup matched more than one record.
    #[error("{count} {entity} records are named '{name}'")]
    AmbiguousName {
        /// Display name of the entity that was searched.
        entity: String,
        /// The name that was searched for.
        name: String,
        /// How many records matched.
        count: usize,
    },

    /// The user kept entering invalid input until the retry limit was hit.
    #[error("gave up reading {field} after {attempts} invalid attempt(s)")]
    RetriesExhausted {
        /// The field that was being read.
        field: String,
        /// Number of attempts made.
        attempts: u32,
    },

    /// The input source reached end of file.
    #[error("input closed")]
    InputClosed,

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// A query returned a result of an unexpected shape.
    #[error("internal error in {context}")]
    Internal {
        /// Where the malformed result was observed.
        context: String,
    },
}

impl From<crate::entity::ValidationError> for Error {
    fn from(err: crate::entity::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error ends an interactive session.
    ///
    /// Closed input and exhausted retries mean no further answers can be
    /// collected, so the menu loop stops instead of re-prompting.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdesk::Error;
    ///
    /// assert!(Error::InputClosed.is_session_ending());
    /// let err = Error::NotFound { resource: "plane 3".into() };
    /// assert!(!err.is_session_ending());
    /// ```
    #[must_use]
    pub fn is_session_ending(&self) -> bool {
        matches!(self, Self::InputClosed | Self::RetriesExhausted { .. })
    }

    /// Check if error came from the database engine.
    #[must_use]
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
