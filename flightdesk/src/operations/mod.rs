//! Write operations for the airline database.
//!
//! Every write goes through a plan/execute split. A planner validates the
//! references it needs, draws ids from the session's allocators and returns
//! an [`OperationPlan`]; the [`PlanExecutor`] then applies the whole plan in
//! one transaction.
//!
//! # Examples
//!
//! ```no_run
//! use flightdesk::allocator::IdAllocators;
//! use flightdesk::database::{Database, DatabaseConfig};
//! use flightdesk::entity::NewTechnician;
//! use flightdesk::operations::{AddRecordPlan, PlanExecutor};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/airline.db")).unwrap();
//! let mut ids = IdAllocators::seed(db.connection()).unwrap();
//!
//! let tech = NewTechnician::new("Sam Ortiz").unwrap();
//! let plan = AddRecordPlan::new(tech).build_plan(db.connection(), &mut ids).unwrap();
//! let result = PlanExecutor::new(&mut db)
//!     .release_ids_to(&mut ids)
//!     .execute(&plan)
//!     .unwrap();
//! for summary in &result.summaries {
//!     println!("{summary}");
//! }
//! ```

pub mod add_flight;
pub mod add_record;
pub mod booking;
pub mod executor;
pub mod plan;

#[cfg(test)]
mod proptests;

pub use add_flight::AddFlightPlan;
pub use add_record::{AddRecordPlan, NewRecord};
pub use booking::BookingPlan;
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
