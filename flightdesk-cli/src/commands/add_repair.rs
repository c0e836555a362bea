//! Add Repair command implementation.

use std::io::{BufRead, Write};

use flightdesk::entity::{NewRepair, RepairCode};
use flightdesk::{AddRecordPlan, EntityKind};

use crate::error::CliError;
use crate::session::Session;

/// Records a repair of a plane by a technician, reported by a pilot.
pub struct AddRepairCommand;

impl AddRepairCommand {
    /// Execute the add repair command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let repair_date = session.prompter.read_date("Please enter the date of repair.")?;
        let code: RepairCode = session
            .prompter
            .read_code("repair_code", "Please enter the repair code: ")?;
        let pilot_id = session.resolve(EntityKind::Pilot)?;
        let plane_id = session.resolve(EntityKind::Plane)?;
        let technician_id = session.resolve(EntityKind::Technician)?;

        let repair = NewRepair::new(repair_date, code, pilot_id, plane_id, technician_id)?;
        let plan = AddRecordPlan::new(repair).build_plan(session.db.connection(), &mut session.ids)?;
        session.execute(&plan)?;
        Ok(())
    }
}
