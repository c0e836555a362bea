//! Add Flight command implementation.
//!
//! A flight is stored as three rows: the flight itself, its crew
//! assignment and its schedule. They are written together or not at all.

use std::io::{BufRead, Write};

use flightdesk::entity::fields::{
    ARRIVAL_AIRPORT, DEPARTURE_AIRPORT, FLIGHT_COST, FLIGHT_NUM_SOLD, FLIGHT_NUM_STOPS,
};
use flightdesk::entity::NewFlight;
use flightdesk::{AddFlightPlan, EntityKind};

use crate::error::CliError;
use crate::session::Session;

/// Asks for a flight, its pilot and plane, and inserts all three rows.
pub struct AddFlightCommand;

impl AddFlightCommand {
    /// Execute the add flight command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let prompter = &mut session.prompter;
        let cost = prompter.read_int("Please enter the cost of the flight: ", &FLIGHT_COST)?;
        let num_sold = prompter.read_int(
            "Please enter the number of tickets sold for this flight: ",
            &FLIGHT_NUM_SOLD,
        )?;
        let num_stops = prompter.read_int(
            "Please enter the number of stops for this flight: ",
            &FLIGHT_NUM_STOPS,
        )?;
        let departure = prompter.read_date("Please enter the departure date of this flight.")?;
        let arrival = prompter.read_date("Please enter the arrival date of this flight.")?;
        let arrival_airport = prompter.read_text(
            "Please enter the code of the arrival airport: ",
            &ARRIVAL_AIRPORT,
        )?;
        let departure_airport = prompter.read_text(
            "Please enter the code of the departure airport: ",
            &DEPARTURE_AIRPORT,
        )?;
        let pilot_id = session.resolve(EntityKind::Pilot)?;
        let plane_id = session.resolve(EntityKind::Plane)?;

        let flight = NewFlight::new(
            cost,
            num_sold,
            num_stops,
            departure,
            arrival,
            arrival_airport,
            departure_airport,
        )?;
        let plan = AddFlightPlan::new(flight, pilot_id, plane_id)
            .build_plan(session.db.connection(), &mut session.ids)?;
        session.execute(&plan)?;
        Ok(())
    }
}
