//! Record lookup submenu.

use std::io::{BufRead, Write};

use flightdesk::EntityKind;

use crate::error::CliError;
use crate::session::Session;

/// How a submenu entry finds its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum By {
    Id,
    Name,
}

/// Submenu entries, numbered from 1.
const ENTRIES: [(EntityKind, By); 8] = [
    (EntityKind::Plane, By::Id),
    (EntityKind::Pilot, By::Id),
    (EntityKind::Pilot, By::Name),
    (EntityKind::Technician, By::Id),
    (EntityKind::Technician, By::Name),
    (EntityKind::Customer, By::Id),
    (EntityKind::Customer, By::Name),
    (EntityKind::Flight, By::Id),
];

/// Finds and prints records until the user goes back to the main menu.
pub struct LookupCommand;

impl LookupCommand {
    /// Execute the lookup command.
    pub fn execute<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        loop {
            print_submenu(session)?;
            let choice = session
                .prompter
                .read_choice("Please make your choice: ", 0, entry_count())?;
            let Some((kind, by)) = usize::try_from(choice)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| ENTRIES.get(index).copied())
            else {
                return Ok(());
            };

            match by {
                By::Id => session.resolve_by_id(kind)?,
                By::Name => session.resolve_by_name(kind)?,
            };
        }
    }
}

fn entry_count() -> u32 {
    u32::try_from(ENTRIES.len()).unwrap_or(u32::MAX)
}

fn entry_label(kind: EntityKind, by: By) -> String {
    let entity = kind.display_name();
    let mut label = entity[..1].to_uppercase();
    label.push_str(&entity[1..]);
    match by {
        By::Id => format!("{label} by ID"),
        By::Name => format!("{label} by name"),
    }
}

fn print_submenu<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), CliError> {
    session.say("LOOK UP RECORDS")?;
    session.say("---------------")?;
    for (number, &(kind, by)) in ENTRIES.iter().enumerate() {
        session.say(format!("{}. {}", number + 1, entry_label(kind, by)))?;
    }
    session.say("0. < BACK")
}
