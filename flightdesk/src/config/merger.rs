//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use flightdesk::config::{Config, ConfigMerger};
///
/// let low = Config { max_input_retries: Some(3), ..Default::default() };
/// let high = Config { max_input_retries: Some(5), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_input_retries, Some(5));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, given lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.max_input_retries.is_some() {
            target.max_input_retries = source.max_input_retries;
        }
        if source.busy_timeout_seconds.is_some() {
            target.busy_timeout_seconds = source.busy_timeout_seconds;
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}
