//! Shared test utilities for database unit tests.

use rusqlite::Connection;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::entity::{EntityKind, NewFlight, NewPilot, NewPlane};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Inserts a plane with `seats` seats, a pilot, and a flight departing and
/// arriving on `date` with `num_sold` tickets sold, wired together through
/// `FlightInfo` and `Schedule`. Returns the flight number.
///
/// # Panics
///
/// Panics if any insert fails.
pub fn seed_flight(conn: &Connection, seats: i64, num_sold: i64, date: &str) -> i64 {
    let next = |kind| Database::max_key(conn, kind).unwrap() + 1;
    let day = date.parse().unwrap();

    let plane_id = next(EntityKind::Plane);
    Database::insert_plane(conn, plane_id, &NewPlane::new("Boeing", "737", 2010, seats).unwrap())
        .unwrap();
    let pilot_id = next(EntityKind::Pilot);
    Database::insert_pilot(conn, pilot_id, &NewPilot::new("Ann Lee", "US").unwrap()).unwrap();

    let fnum = next(EntityKind::Flight);
    let flight = NewFlight::new(300, num_sold, 0, day, day, "LAX", "JFK").unwrap();
    Database::insert_flight(conn, fnum, &flight).unwrap();
    Database::insert_flight_info(conn, next(EntityKind::FlightInfo), fnum, pilot_id, plane_id)
        .unwrap();
    Database::insert_schedule(conn, next(EntityKind::Schedule), fnum, day, day).unwrap();

    fnum
}
