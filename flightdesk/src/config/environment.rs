//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `FLIGHTDESK_*` environment variables
//! that override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides `max_input_retries`.
pub const MAX_INPUT_RETRIES_ENV: &str = "FLIGHTDESK_MAX_INPUT_RETRIES";
/// Overrides `busy_timeout_seconds`.
pub const BUSY_TIMEOUT_ENV: &str = "FLIGHTDESK_BUSY_TIMEOUT";
/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "FLIGHTDESK_OUTPUT_FORMAT";
/// Overrides `disable_autoinit`.
pub const DISABLE_AUTOINIT_ENV: &str = "FLIGHTDESK_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use flightdesk::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g. a non-numeric retry count or an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(MAX_INPUT_RETRIES_ENV) {
            config.max_input_retries =
                Some(val.trim().parse().map_err(|_| Error::Validation {
                    field: MAX_INPUT_RETRIES_ENV.into(),
                    message: "Must be a non-negative integer".into(),
                })?);
        }

        if let Ok(val) = env::var(BUSY_TIMEOUT_ENV) {
            config.busy_timeout_seconds =
                Some(val.trim().parse().map_err(|_| Error::Validation {
                    field: BUSY_TIMEOUT_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(val.parse()?);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
