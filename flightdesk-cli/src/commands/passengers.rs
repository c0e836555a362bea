//! Passengers-by-status report.

use std::io::{BufRead, Write};

use flightdesk::entity::ReservationStatus;
use flightdesk::reports::passengers_with_status;
use flightdesk::EntityKind;

use crate::error::CliError;
use crate::session::Session;

/// Counts the reservations on a flight that have a given status.
pub struct PassengersCommand;

impl PassengersCommand {
    /// Execute the passengers command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let flight_num = session.resolve(EntityKind::Flight)?;
        let status: ReservationStatus = session
            .prompter
            .read_code("status", "Please enter the reservation status (W, C or R): ")?;

        let count = passengers_with_status(session.db.connection(), flight_num, status)?;
        session.say(format!(
            "The number of passengers on flight {flight_num} with status {status} is:\n{count}"
        ))
    }
}
