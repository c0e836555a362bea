//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders that pass the connection arguments
//! - Direct database access for checking what a session wrote

use assert_cmd::Command;
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const ISOLATED_ENV: [&str; 5] = [
    "FLIGHTDESK_MAX_INPUT_RETRIES",
    "FLIGHTDESK_BUSY_TIMEOUT",
    "FLIGHTDESK_OUTPUT_FORMAT",
    "FLIGHTDESK_DISABLE_AUTOINIT",
    "FLIGHTDESK_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the flightdesk data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the console creates it together
    /// with the database.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("flightdesk-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured arguments.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("flightdesk").expect("Failed to find flightdesk binary");
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        cmd.env_remove("FLIGHTDESK_DATA_DIR");
        cmd
    }

    /// Get a command builder for the `airline` database in this
    /// environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .args(["airline", "5432", "ops"]);
        cmd
    }

    /// Run one session with `script` as stdin and return its stdout.
    ///
    /// # Panics
    /// Panics if the session does not exit successfully.
    pub fn session(&self, script: &str) -> String {
        let output = self
            .command()
            .write_stdin(script)
            .output()
            .expect("Failed to run flightdesk");
        assert!(
            output.status.success(),
            "session failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Path of the database file used by [`TestEnv::command`].
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("airline.db")
    }

    /// Open the session's database directly.
    pub fn connect(&self) -> Connection {
        Connection::open(self.db_path()).expect("Failed to open database")
    }

    /// Run a query returning one integer.
    pub fn query_i64(&self, sql: &str) -> i64 {
        self.connect()
            .query_row(sql, [], |row| row.get(0))
            .expect("query failed")
    }

    /// Write a `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }
}

/// Menu answers that add a plane.
#[allow(dead_code)]
pub fn add_plane(make: &str, model: &str, age: i64, seats: i64) -> String {
    format!("1\n{make}\n{model}\n{age}\n{seats}\n")
}

/// Menu answers that add a pilot.
#[allow(dead_code)]
pub fn add_pilot(name: &str, nationality: &str) -> String {
    format!("2\n{name}\n{nationality}\n")
}

/// Menu answers that add a customer with no address, phone or zipcode.
#[allow(dead_code)]
pub fn add_customer(first: &str, last: &str) -> String {
    format!("11\n{first}\n{last}\nF\n1990\n4\n12\n\n\n\n")
}

/// Menu answers that add a flight from JFK to LAX on 2024-03-05 flown by
/// `pilot` on `plane`.
#[allow(dead_code)]
pub fn add_flight(num_sold: i64, pilot: &str, plane: &str) -> String {
    format!("3\n250\n{num_sold}\n0\n2024\n3\n5\n2024\n3\n5\nLAX\nJFK\n{pilot}\n{plane}\n")
}
