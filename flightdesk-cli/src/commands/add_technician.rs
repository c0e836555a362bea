//! Add Technician command implementation.

use std::io::{BufRead, Write};

use flightdesk::entity::fields::TECHNICIAN_NAME;
use flightdesk::entity::NewTechnician;
use flightdesk::AddRecordPlan;

use crate::error::CliError;
use crate::session::Session;

/// Asks for a technician's name and inserts them.
pub struct AddTechnicianCommand;

impl AddTechnicianCommand {
    /// Execute the add technician command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let full_name = session
            .prompter
            .read_text("Please enter the technician's full name: ", &TECHNICIAN_NAME)?;

        let technician = NewTechnician::new(full_name)?;
        let plan =
            AddRecordPlan::new(technician).build_plan(session.db.connection(), &mut session.ids)?;
        session.execute(&plan)?;
        Ok(())
    }
}
