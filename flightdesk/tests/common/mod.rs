//! Common test utilities for integration tests.
//!
//! This module provides a throwaway database and a few fixtures for the
//! airline tables.

use flightdesk::database::{Database, DatabaseConfig};
use flightdesk::entity::{Gender, NewCustomer, NewFlight, NewPilot, NewPlane, NewTechnician};
use flightdesk::{AddFlightPlan, AddRecordPlan, FlightDate, IdAllocators, PlanExecutor};

/// Creates a temporary test database that will be cleaned up when the
/// process exits.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("airline.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Parses a `YYYY-MM-DD` date.
#[allow(dead_code)]
pub fn day(s: &str) -> FlightDate {
    s.parse().unwrap()
}

/// Adds a record through the planner and executor, returning its id.
#[allow(dead_code)]
pub fn add(
    db: &mut Database,
    ids: &mut IdAllocators,
    record: impl Into<flightdesk::operations::NewRecord>,
) -> i64 {
    let plan = AddRecordPlan::new(record)
        .build_plan(db.connection(), ids)
        .unwrap();
    let id = plan.allocated_ids()[0].1;
    PlanExecutor::new(db)
        .release_ids_to(ids)
        .execute(&plan)
        .unwrap();
    id
}

/// Adds a plane with `seats` seats and a pilot, then a flight departing
/// on `date` with `num_sold` tickets sold. Returns the flight number.
#[allow(dead_code)]
pub fn add_flight(
    db: &mut Database,
    ids: &mut IdAllocators,
    seats: i64,
    num_sold: i64,
    date: &str,
) -> i64 {
    let plane = add(db, ids, NewPlane::new("Boeing", "737", 2010, seats).unwrap());
    let pilot = add(db, ids, NewPilot::new("Ann Lee", "US").unwrap());
    let flight = NewFlight::new(250, num_sold, 0, day(date), day(date), "LAX", "JFK").unwrap();

    let plan = AddFlightPlan::new(flight, pilot, plane)
        .build_plan(db.connection(), ids)
        .unwrap();
    let fnum = plan.allocated_ids()[0].1;
    PlanExecutor::new(db)
        .release_ids_to(ids)
        .execute(&plan)
        .unwrap();
    fnum
}

/// A customer with only the required fields.
#[allow(dead_code)]
pub fn customer(first: &str, last: &str) -> NewCustomer {
    NewCustomer::new(first, last, Gender::Male, day("1985-06-30"), "", "", "").unwrap()
}

/// A technician.
#[allow(dead_code)]
pub fn technician(name: &str) -> NewTechnician {
    NewTechnician::new(name).unwrap()
}
