//! Repairs-per-year report.

use std::io::{BufRead, Write};

use flightdesk::reports::repairs_per_year;

use crate::error::CliError;
use crate::session::Session;

/// Lists years by number of repairs, fewest first.
pub struct RepairsPerYearCommand;

impl RepairsPerYearCommand {
    /// Execute the repairs per year command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        let result = repairs_per_year(session.db.connection())?;
        session.show(&result)
    }
}
