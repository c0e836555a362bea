#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # flightdesk
//!
//! A library for running an airline-operations database: planes, pilots,
//! technicians, customers, flights with their crew and schedule, repairs and
//! reservations.
//!
//! ## Core Types
//!
//! - [`Database`] and [`DatabaseConfig`]: `SQLite` storage with schema checks
//! - [`IdAllocators`]: per-table id allocation with recycling of released ids
//! - [`FlightDate`]: validated calendar dates
//! - [`OperationPlan`] and [`PlanExecutor`]: transactional writes
//! - [`Prompter`]: validated interactive input
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use flightdesk::{FlightDate, IdAllocator};
//!
//! let date = FlightDate::from_ymd(2024, 3, 5).unwrap();
//! assert_eq!(date.to_string(), "2024-03-05");
//!
//! let mut ids = IdAllocator::new(-1);
//! assert_eq!(ids.allocate(), 0);
//! assert_eq!(ids.allocate(), 1);
//! ids.release(0);
//! assert_eq!(ids.allocate(), 0);
//! ```

pub mod allocator;
pub mod config;
pub mod database;
pub mod date;
pub mod entity;
pub mod error;
pub mod input;
pub mod logging;
pub mod lookup;
pub mod operations;
pub mod output;
pub mod reports;

// Re-export key types at crate root for convenience
pub use allocator::{IdAllocator, IdAllocators};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, QueryResult};
pub use date::FlightDate;
pub use entity::EntityKind;
pub use error::{Error, Result};
pub use input::Prompter;
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use lookup::NameMatch;
pub use operations::{
    AddFlightPlan, AddRecordPlan, BookingPlan, ExecutionResult, OperationPlan, PlanAction,
    PlanExecutor,
};
pub use output::{OutputFormat, OutputFormatter};
