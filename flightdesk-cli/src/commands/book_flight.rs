//! Book Flight command implementation.

use std::io::{BufRead, Write};

use flightdesk::{BookingPlan, EntityKind};

use crate::error::CliError;
use crate::session::Session;

/// Books a customer onto a flight departing on a given date.
///
/// A flight with no seats left puts the reservation on the waitlist without
/// asking; otherwise the customer is asked whether they confirmed, and a
/// ticket is sold.
pub struct BookFlightCommand;

impl BookFlightCommand {
    /// Execute the book flight command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let customer_id = session.resolve(EntityKind::Customer)?;
        let flight_num = session.resolve(EntityKind::Flight)?;
        let departure = session
            .prompter
            .read_date("Please enter the departure date of the flight.")?;

        let booking = BookingPlan::new(customer_id, flight_num, departure);
        let seats_left = booking.seats_left(session.db.connection())?;
        let confirmed = if seats_left > 0 {
            session
                .prompter
                .read_yes_no("Has the customer confirmed their reservation? (y/n):")?
        } else {
            false
        };

        let plan = booking
            .confirmed(confirmed)
            .build_plan(session.db.connection(), &mut session.ids)?;
        session.execute(&plan)?;

        if plan.reservation_status().is_some_and(|status| status.takes_seat()) {
            session.say(format!("The ticket has been sold to customer {customer_id}"))?;
        }
        Ok(())
    }
}
