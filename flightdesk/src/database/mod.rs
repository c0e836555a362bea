//! Database layer for the airline schema.
//!
//! This module provides a SQLite-based storage layer: connection management,
//! schema versioning, parameterized inserts for every table, and a generic
//! printable query result.
//!
//! # Examples
//!
//! ```no_run
//! use flightdesk::database::{Database, DatabaseConfig};
//! use flightdesk::entity::NewPlane;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/airline.db")).unwrap();
//! let plane = NewPlane::new("Boeing", "737", 2010, 180).unwrap();
//! db.with_transaction(|tx| Database::insert_plane(tx, 0, &plane)).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod query;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use query::{query_table, Cell, QueryResult};
pub use schema::CURRENT_SCHEMA_VERSION;

pub(crate) use schema::{
    SELECT_AVAILABLE_SEATS, SELECT_PASSENGERS_WITH_STATUS, SELECT_REPAIRS_PER_PLANE,
    SELECT_REPAIRS_PER_YEAR,
};
