//! Database configuration and path resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "FLIGHTDESK_DATA_DIR";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use flightdesk::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/airline.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to create the database (and its directory) if missing.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a configuration with a 5 second busy timeout, auto-create
    /// enabled and read-write access.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_secs(5),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether a missing database is created.
    #[must_use]
    pub const fn with_auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }

    /// Opens the database read-only. Disables auto-create.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.flightdesk`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".flightdesk"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the data directory from an explicit value, the
/// `FLIGHTDESK_DATA_DIR` environment variable, or the default.
///
/// # Errors
///
/// Returns an error if no directory was given and the home directory cannot
/// be determined.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Maps a database name to a file path.
///
/// A plain name such as `airline` becomes `<data_dir>/airline.db`. A name
/// that contains a path separator or already ends in `.db` is used as a
/// path as given.
///
/// # Examples
///
/// ```
/// use flightdesk::database::resolve_database_path;
/// use std::path::{Path, PathBuf};
///
/// let dir = Path::new("/var/lib/flightdesk");
/// assert_eq!(resolve_database_path(dir, "airline"), PathBuf::from("/var/lib/flightdesk/airline.db"));
/// assert_eq!(resolve_database_path(dir, "./ops.db"), PathBuf::from("./ops.db"));
/// assert_eq!(resolve_database_path(dir, "ops.db"), PathBuf::from("ops.db"));
/// ```
#[must_use]
pub fn resolve_database_path(data_dir: &Path, name: &str) -> PathBuf {
    let looks_like_path =
        name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) || name.ends_with(".db");
    if looks_like_path {
        PathBuf::from(name)
    } else {
        data_dir.join(format!("{name}.db"))
    }
}
