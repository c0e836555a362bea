//! Repairs-per-plane report.

use std::io::{BufRead, Write};

use flightdesk::reports::repairs_per_plane;

use crate::error::CliError;
use crate::session::Session;

/// Lists planes by number of repairs, most repaired first.
pub struct RepairsPerPlaneCommand;

impl RepairsPerPlaneCommand {
    /// Execute the repairs per plane command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let result = repairs_per_plane(session.db.connection())?;
        session.show(&result)
    }
}
