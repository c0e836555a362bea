//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Largest accepted `max_input_retries`.
pub const MAX_INPUT_RETRIES_LIMIT: u32 = 1000;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use flightdesk::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero_timeout = Config { busy_timeout_seconds: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero_timeout).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if config.busy_timeout_seconds == Some(0) {
            return Err(Error::Validation {
                field: "busy_timeout_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        if let Some(retries) = config.max_input_retries {
            if retries > MAX_INPUT_RETRIES_LIMIT {
                return Err(Error::Validation {
                    field: "max_input_retries".into(),
                    message: format!(
                        "Must be at most {MAX_INPUT_RETRIES_LIMIT} (use 0 for no limit)"
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_retries_means_unlimited() {
        let config = Config {
            max_input_retries: Some(0),
            ..Default::default()
        };
        ConfigValidator::validate(&config).unwrap();
    }

    #[test]
    fn test_retry_limit_bound() {
        let at_limit = Config {
            max_input_retries: Some(MAX_INPUT_RETRIES_LIMIT),
            ..Default::default()
        };
        ConfigValidator::validate(&at_limit).unwrap();

        let over = Config {
            max_input_retries: Some(MAX_INPUT_RETRIES_LIMIT + 1),
            ..Default::default()
        };
        match ConfigValidator::validate(&over) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "max_input_retries"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
