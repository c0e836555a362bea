//! Row-level reads and writes.
//!
//! Every function takes a plain `&Connection` so it can run either on its
//! own or inside a transaction opened by the caller (a `Transaction`
//! dereferences to a `Connection`). All values are bound as parameters.

use rusqlite::{params, Connection, OptionalExtension};

use crate::date::FlightDate;
use crate::entity::{
    EntityKind, NewCustomer, NewFlight, NewPilot, NewPlane, NewRepair, NewTechnician,
    ReservationStatus,
};
use crate::error::{Error, Result};

use super::connection::Database;
use super::schema::{
    INCREMENT_SOLD, INSERT_CUSTOMER, INSERT_FLIGHT, INSERT_FLIGHT_INFO, INSERT_PILOT,
    INSERT_PLANE, INSERT_REPAIR, INSERT_RESERVATION, INSERT_SCHEDULE, INSERT_TECHNICIAN,
};

impl Database {
    /// Inserts a plane under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or a constraint fails.
    pub fn insert_plane(conn: &Connection, id: i64, plane: &NewPlane) -> Result<()> {
        conn.execute(
            INSERT_PLANE,
            params![id, plane.make(), plane.model(), plane.age(), plane.seats()],
        )?;
        Ok(())
    }

    /// Inserts a pilot under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or a constraint fails.
    pub fn insert_pilot(conn: &Connection, id: i64, pilot: &NewPilot) -> Result<()> {
        conn.execute(
            INSERT_PILOT,
            params![id, pilot.fullname(), pilot.nationality()],
        )?;
        Ok(())
    }

    /// Inserts a technician under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or a constraint fails.
    pub fn insert_technician(conn: &Connection, id: i64, technician: &NewTechnician) -> Result<()> {
        conn.execute(INSERT_TECHNICIAN, params![id, technician.full_name()])?;
        Ok(())
    }

    /// Inserts a customer under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or a constraint fails.
    pub fn insert_customer(conn: &Connection, id: i64, customer: &NewCustomer) -> Result<()> {
        conn.execute(
            INSERT_CUSTOMER,
            params![
                id,
                customer.first_name(),
                customer.last_name(),
                customer.gender().as_str(),
                customer.date_of_birth(),
                customer.address(),
                customer.phone(),
                customer.zipcode(),
            ],
        )?;
        Ok(())
    }

    /// Inserts a flight under flight number `fnum`.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is taken or a constraint fails.
    pub fn insert_flight(conn: &Connection, fnum: i64, flight: &NewFlight) -> Result<()> {
        conn.execute(
            INSERT_FLIGHT,
            params![
                fnum,
                flight.cost(),
                flight.num_sold(),
                flight.num_stops(),
                flight.departure_date(),
                flight.arrival_date(),
                flight.arrival_airport(),
                flight.departure_airport(),
            ],
        )?;
        Ok(())
    }

    /// Assigns a pilot and plane to a flight.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced row is missing or the id is taken.
    pub fn insert_flight_info(
        conn: &Connection,
        fiid: i64,
        flight_num: i64,
        pilot_id: i64,
        plane_id: i64,
    ) -> Result<()> {
        conn.execute(
            INSERT_FLIGHT_INFO,
            params![fiid, flight_num, pilot_id, plane_id],
        )?;
        Ok(())
    }

    /// Records the departure and arrival of a flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the flight is missing or the id is taken.
    pub fn insert_schedule(
        conn: &Connection,
        id: i64,
        flight_num: i64,
        departure: FlightDate,
        arrival: FlightDate,
    ) -> Result<()> {
        conn.execute(
            INSERT_SCHEDULE,
            params![id, flight_num, departure, arrival],
        )?;
        Ok(())
    }

    /// Records a repair under `rid`.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced row is missing or the id is taken.
    pub fn insert_repair(conn: &Connection, rid: i64, repair: &NewRepair) -> Result<()> {
        conn.execute(
            INSERT_REPAIR,
            params![
                rid,
                repair.repair_date(),
                repair.code().as_str(),
                repair.pilot_id(),
                repair.plane_id(),
                repair.technician_id(),
            ],
        )?;
        Ok(())
    }

    /// Records a reservation under `rnum`.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer or flight is missing or the id is taken.
    pub fn insert_reservation(
        conn: &Connection,
        rnum: i64,
        customer_id: i64,
        flight_num: i64,
        status: ReservationStatus,
    ) -> Result<()> {
        conn.execute(
            INSERT_RESERVATION,
            params![rnum, customer_id, flight_num, status.as_str()],
        )?;
        Ok(())
    }

    /// Adds one to the tickets sold on a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no flight has that number.
    pub fn increment_sold(conn: &Connection, flight_num: i64) -> Result<()> {
        let changed = conn.execute(INCREMENT_SOLD, [flight_num])?;
        if changed == 0 {
            return Err(Error::NotFound {
                resource: format!("flight {flight_num}"),
            });
        }
        Ok(())
    }

    /// Largest key stored in the table for `kind`, or `-1` when it is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn max_key(conn: &Connection, kind: EntityKind) -> Result<i64> {
        let sql = format!(
            "SELECT COALESCE(MAX({}), -1) FROM {}",
            kind.key_column(),
            kind.table()
        );
        Ok(conn.query_row(&sql, [], |row| row.get(0))?)
    }

    /// Whether a row with key `id` exists in the table for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn exists(conn: &Connection, kind: EntityKind, id: i64) -> Result<bool> {
        let sql = format!(
            "SELECT 1 FROM {} WHERE {} = ?1",
            kind.table(),
            kind.key_column()
        );
        let found: Option<i64> = conn.query_row(&sql, [id], |row| row.get(0)).optional()?;
        Ok(found.is_some())
    }

    /// Number of rows in the table for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count(conn: &Connection, kind: EntityKind) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        Ok(conn.query_row(&sql, [], |row| row.get(0))?)
    }

    /// Tickets sold on a flight, if the flight exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn num_sold(conn: &Connection, flight_num: i64) -> Result<Option<i64>> {
        Ok(conn
            .query_row(
                "SELECT num_sold FROM Flight WHERE fnum = ?1",
                [flight_num],
                |row| row.get(0),
            )
            .optional()?)
    }
}
