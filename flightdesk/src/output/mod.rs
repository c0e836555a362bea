//! Output formatting for query results.
//!
//! Lookups and reports produce a [`QueryResult`]; a formatter turns it into
//! the text printed to the user, either tab-separated like a terminal
//! listing or as JSON for scripting.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::database::QueryResult;
use crate::{Error, Result};

pub use formatters::{JsonFormatter, TableFormatter};

/// Trait for formatting query results.
pub trait OutputFormatter {
    /// Format `result` into a string ready to print.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be rendered.
    fn format(&self, result: &QueryResult) -> Result<String>;
}

/// Available output formats for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header and rows as tab-separated values.
    #[default]
    Table,
    /// A JSON array with one object per row.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }

    /// The name used on the command line and in configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{other}' (expected table or json)"),
            }),
        }
    }
}
