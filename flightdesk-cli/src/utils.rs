//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared by startup and the menu commands:
//! configuration loading, database path resolution and opening, and
//! display helpers.

use crate::error::CliError;
use flightdesk::database::{resolve_data_dir, resolve_database_path};
use flightdesk::{Config, ConfigBuilder, Database, DatabaseConfig, OutputFormat};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the retry limit for invalid answers.
    pub max_retries: Option<u32>,

    /// Override the output format.
    pub output: Option<OutputFormat>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

impl GlobalOptions {
    /// The configuration layer made of command-line flags.
    fn as_overrides(&self) -> Config {
        Config {
            max_input_retries: self.max_retries,
            busy_timeout_seconds: self.busy_timeout,
            output_format: self.output,
            disable_autoinit: self.disable_autoinit.then_some(true),
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(global.as_overrides());
    if let Some(dir) = &global.data_dir {
        builder = builder.with_data_dir(dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database file for `name`.
///
/// # Errors
///
/// Returns `InvalidArguments` for a blank name and `Config` when the data
/// directory cannot be determined.
pub fn database_path(global: &GlobalOptions, name: &str) -> Result<PathBuf, CliError> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArguments(
            "the database name cannot be empty".to_string(),
        ));
    }
    let data_dir = resolve_data_dir(global.data_dir.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(resolve_database_path(&data_dir, name))
}

/// Open the database at `path` with configuration.
///
/// # Errors
///
/// Returns `NoDatabase` if the database doesn't exist and auto-init is
/// disabled, or `DatabaseOpen` if it cannot be opened or initialized.
pub fn open_database(path: &Path, config: &Config) -> Result<Database, CliError> {
    if !path.exists() && !config.autoinit() {
        return Err(CliError::NoDatabase(shorten_path(path)));
    }

    let db_config = DatabaseConfig::new(path)
        .with_busy_timeout(config.busy_timeout())
        .with_auto_create(config.autoinit());

    Database::open(db_config).map_err(CliError::DatabaseOpen)
}

/// The URL shown in the connection banner.
pub fn connection_url(path: &Path, port: u16, user: &str) -> String {
    format!("sqlite://{user}@localhost:{port}/{}", shorten_path(path))
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
