//! Add Plane command implementation.

use std::io::{BufRead, Write};

use flightdesk::entity::fields::{PLANE_AGE, PLANE_MAKE, PLANE_MODEL, PLANE_SEATS};
use flightdesk::entity::NewPlane;
use flightdesk::AddRecordPlan;

use crate::error::CliError;
use crate::session::Session;

/// Asks for a plane's details and inserts it.
pub struct AddPlaneCommand;

impl AddPlaneCommand {
    /// Execute the add plane command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let prompter = &mut session.prompter;
        let make = prompter.read_text("Please enter the plane's make: ", &PLANE_MAKE)?;
        let model = prompter.read_text("Please enter the plane's model: ", &PLANE_MODEL)?;
        let age = prompter.read_int("Please enter the plane's age: ", &PLANE_AGE)?;
        let seats = prompter.read_int("Please enter the plane's seat capacity: ", &PLANE_SEATS)?;

        let plane = NewPlane::new(make, model, age, seats)?;
        let plan = AddRecordPlan::new(plane).build_plan(session.db.connection(), &mut session.ids)?;
        session.execute(&plan)?;
        Ok(())
    }
}
