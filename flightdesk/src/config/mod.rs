//! Configuration for flightdesk sessions.
//!
//! Settings come from up to four layers, highest precedence first:
//!
//! 1. Programmatic overrides (command-line flags, via
//!    [`ConfigBuilder::with_config`])
//! 2. Environment variables (`FLIGHTDESK_*`)
//! 3. The YAML file `config.yaml` in the data directory
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use flightdesk::config::{Config, ConfigBuilder};
//! use flightdesk::output::OutputFormat;
//!
//! let flags = Config {
//!     output_format: Some(OutputFormat::Json),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(flags)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.format(), OutputFormat::Json);
//! assert_eq!(config.retry_limit(), Some(10));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_BUSY_TIMEOUT_SECONDS, DEFAULT_MAX_INPUT_RETRIES};
pub use validator::ConfigValidator;
