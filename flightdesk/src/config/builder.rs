//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::database::resolve_data_dir;
use crate::error::Result;

/// Builds the effective configuration from file, environment and explicit
/// overrides.
///
/// # Examples
///
/// ```no_run
/// use flightdesk::config::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .with_data_dir(Path::new("/var/lib/flightdesk"))
///     .build()
///     .unwrap();
/// println!("retry limit: {:?}", config.retry_limit());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the default data directory and the
    /// environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from `dir` instead of the default data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `FLIGHTDESK_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges the layers and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// an environment variable is invalid, or the merged values fail
    /// validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            let dir = resolve_data_dir(self.data_dir.as_deref())?;
            sources.extend(ConfigLoader::load_from_dir(&dir)?);
        }
        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }
        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{BUSY_TIMEOUT_ENV, OUTPUT_FORMAT_ENV};
    use crate::config::CONFIG_FILE_NAME;
    use crate::output::OutputFormat;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_precedence_flags_over_env_over_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "busy_timeout_seconds: 11\noutput_format: json\nmax_input_retries: 2\n",
        )
        .unwrap();
        std::env::set_var(BUSY_TIMEOUT_ENV, "22");
        std::env::remove_var(OUTPUT_FORMAT_ENV);

        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .with_config(Config {
                output_format: Some(OutputFormat::Table),
                ..Default::default()
            })
            .build();
        std::env::remove_var(BUSY_TIMEOUT_ENV);
        let config = config.unwrap();

        assert_eq!(config.max_input_retries, Some(2));
        assert_eq!(config.busy_timeout_seconds, Some(22));
        assert_eq!(config.output_format, Some(OutputFormat::Table));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                busy_timeout_seconds: Some(0),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
