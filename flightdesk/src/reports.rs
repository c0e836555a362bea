//! Fixed read-only reports.

use rusqlite::{Connection, OptionalExtension};

use crate::database::{
    query_table, QueryResult, SELECT_AVAILABLE_SEATS, SELECT_PASSENGERS_WITH_STATUS,
    SELECT_REPAIRS_PER_PLANE, SELECT_REPAIRS_PER_YEAR,
};
use crate::date::FlightDate;
use crate::entity::ReservationStatus;
use crate::error::{Error, Result};

/// Seats left on flight `flight_num` departing on `date`.
///
/// Computed as the assigned plane's capacity minus the tickets sold.
/// Returns `None` when no flight with a matching schedule and plane exists
/// for that date. The value can be zero or negative for an oversold flight.
///
/// # Errors
///
/// Returns [`Error::Internal`] if the query yields a non-integer value, or
/// a database error if it fails.
pub fn available_seats(
    conn: &Connection,
    flight_num: i64,
    date: FlightDate,
) -> Result<Option<i64>> {
    let value = conn
        .query_row(SELECT_AVAILABLE_SEATS, rusqlite::params![flight_num, date], |row| {
            row.get::<_, rusqlite::types::Value>(0)
        })
        .optional()?;
    match value {
        None => Ok(None),
        Some(rusqlite::types::Value::Integer(seats)) => Ok(Some(seats)),
        Some(_) => Err(Error::Internal {
            context: "available_seats".into(),
        }),
    }
}

/// Number of repairs per plane, most repaired first.
///
/// Columns are `plane_id` and `repairs`; ties are ordered by plane id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn repairs_per_plane(conn: &Connection) -> Result<QueryResult> {
    query_table(conn, SELECT_REPAIRS_PER_PLANE, [])
}

/// Number of repairs per calendar year, fewest first.
///
/// Columns are `year` and `repairs`; ties are ordered by year.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn repairs_per_year(conn: &Connection) -> Result<QueryResult> {
    query_table(conn, SELECT_REPAIRS_PER_YEAR, [])
}

/// Number of reservations on a flight with the given status.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn passengers_with_status(
    conn: &Connection,
    flight_num: i64,
    status: ReservationStatus,
) -> Result<i64> {
    Ok(conn.query_row(
        SELECT_PASSENGERS_WITH_STATUS,
        rusqlite::params![flight_num, status.as_str()],
        |row| row.get(0),
    )?)
}
