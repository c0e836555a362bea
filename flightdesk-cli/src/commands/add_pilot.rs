//! Add Pilot command implementation.

use std::io::{BufRead, Write};

use flightdesk::entity::fields::{PILOT_NAME, PILOT_NATIONALITY};
use flightdesk::entity::NewPilot;
use flightdesk::AddRecordPlan;

use crate::error::CliError;
use crate::session::Session;

/// Asks for a pilot's details and inserts them. Both fields may be left
/// empty.
pub struct AddPilotCommand;

impl AddPilotCommand {
    /// Execute the add pilot command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let prompter = &mut session.prompter;
        let fullname = prompter.read_text("Please enter the pilot's full name: ", &PILOT_NAME)?;
        let nationality =
            prompter.read_text("Please enter the pilot's nationality: ", &PILOT_NATIONALITY)?;

        let pilot = NewPilot::new(fullname, nationality)?;
        let plan = AddRecordPlan::new(pilot).build_plan(session.db.connection(), &mut session.ids)?;
        session.execute(&plan)?;
        Ok(())
    }
}
