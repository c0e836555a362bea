//! CLI structure and argument definitions.
//!
//! This module defines the command line using clap's derive macros: the
//! three positional connection arguments and the global options.

use clap::{Parser, ValueEnum};
use std::num::NonZeroU16;
use std::path::PathBuf;

/// Menu-driven console for an airline-operations database.
#[derive(Parser)]
#[command(name = "flightdesk")]
#[command(version, about = "Manage planes, pilots, flights and bookings", long_about = None)]
pub struct Cli {
    /// Name of the database, or a path to a `.db` file
    #[arg(value_name = "DATABASE")]
    pub database_name: String,

    /// Port of the database service
    #[arg(value_name = "PORT")]
    pub port: NonZeroU16,

    /// User to connect as
    #[arg(value_name = "USER", value_parser = parse_user)]
    pub user: String,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "FLIGHTDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Invalid answers accepted per field before giving up (0 for no limit)
    #[arg(long, value_name = "N", global = true)]
    pub max_retries: Option<u32>,

    /// Output format for lookups and reports
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormatArg>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub busy_timeout: Option<u64>,

    /// Refuse to create a database that does not exist yet
    #[arg(long, global = true)]
    pub disable_autoinit: bool,
}

/// Output formats accepted by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Tab-separated columns
    Table,
    /// JSON array of objects
    Json,
}

impl From<OutputFormatArg> for flightdesk::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => Self::Table,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

fn parse_user(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("the user name cannot be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}
