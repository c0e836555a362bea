//! Available seats report.

use std::io::{BufRead, Write};

use flightdesk::reports::available_seats;
use flightdesk::EntityKind;

use crate::error::CliError;
use crate::session::Session;

/// Shows the seats left on a flight departing on a given date.
pub struct AvailableSeatsCommand;

impl AvailableSeatsCommand {
    /// Execute the available seats command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let flight_num = session.resolve(EntityKind::Flight)?;
        let date = session
            .prompter
            .read_date("Please enter the departure date of the flight.")?;

        match available_seats(session.db.connection(), flight_num, date)? {
            Some(seats) => session.say(format!(
                "The number of available seats for flight {flight_num} on {date} is:\n{seats}"
            )),
            None => session.say(format!(
                "Flight {flight_num} has no scheduled departure on {date}."
            )),
        }
    }
}
