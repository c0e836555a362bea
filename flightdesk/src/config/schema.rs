//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Invalid answers accepted per field before a prompt gives up.
pub const DEFAULT_MAX_INPUT_RETRIES: u32 = 10;

/// Seconds to wait for a locked database before failing.
pub const DEFAULT_BUSY_TIMEOUT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that layers can be merged; the accessor
/// methods apply the defaults.
///
/// # Examples
///
/// ```
/// use flightdesk::config::Config;
///
/// let config: Config = serde_yaml::from_str("max_input_retries: 0\n").unwrap();
/// assert_eq!(config.retry_limit(), None);
/// assert!(serde_yaml::from_str::<Config>("colour: blue\n").is_err());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Invalid answers accepted per field; 0 means no limit.
    pub max_input_retries: Option<u32>,

    /// Maximum time to wait for a database lock (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Output format for lookups and reports.
    pub output_format: Option<OutputFormat>,

    /// Refuse to create a database that does not exist yet.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Retry limit for the prompter, `None` when unlimited.
    #[must_use]
    pub fn retry_limit(&self) -> Option<u32> {
        match self.max_input_retries.unwrap_or(DEFAULT_MAX_INPUT_RETRIES) {
            0 => None,
            n => Some(n),
        }
    }

    /// Busy timeout for database connections.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(
            self.busy_timeout_seconds
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_SECONDS),
        )
    }

    /// Output format for query results.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether a missing database may be created.
    #[must_use]
    pub fn autoinit(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }
}
