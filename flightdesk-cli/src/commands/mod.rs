//! Menu command implementations.
//!
//! This module contains one command per main-menu action, plus the
//! [`MenuChoice`] table that numbers them and dispatches to them.

mod add_customer;
mod add_flight;
mod add_pilot;
mod add_plane;
mod add_repair;
mod add_technician;
mod available_seats;
mod book_flight;
mod lookup;
mod passengers;
mod repairs_per_plane;
mod repairs_per_year;

pub use add_customer::AddCustomerCommand;
pub use add_flight::AddFlightCommand;
pub use add_pilot::AddPilotCommand;
pub use add_plane::AddPlaneCommand;
pub use add_repair::AddRepairCommand;
pub use add_technician::AddTechnicianCommand;
pub use available_seats::AvailableSeatsCommand;
pub use book_flight::BookFlightCommand;
pub use lookup::LookupCommand;
pub use passengers::PassengersCommand;
pub use repairs_per_plane::RepairsPerPlaneCommand;
pub use repairs_per_year::RepairsPerYearCommand;

use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::session::Session;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPlane,
    AddPilot,
    AddFlight,
    AddTechnician,
    BookFlight,
    AvailableSeats,
    RepairsPerPlane,
    RepairsPerYear,
    Passengers,
    Exit,
    AddCustomer,
    AddRepair,
    Lookup,
}

impl MenuChoice {
    /// Highest menu number.
    pub const LAST: u32 = 13;

    /// Order in which entries are listed; Exit comes last.
    pub const DISPLAY_ORDER: [Self; 13] = [
        Self::AddPlane,
        Self::AddPilot,
        Self::AddFlight,
        Self::AddTechnician,
        Self::BookFlight,
        Self::AvailableSeats,
        Self::RepairsPerPlane,
        Self::RepairsPerYear,
        Self::Passengers,
        Self::AddCustomer,
        Self::AddRepair,
        Self::Lookup,
        Self::Exit,
    ];

    /// The entry for menu number `number`.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::DISPLAY_ORDER
            .into_iter()
            .find(|choice| choice.number() == number)
    }

    /// The number the user types.
    pub fn number(self) -> u32 {
        match self {
            Self::AddPlane => 1,
            Self::AddPilot => 2,
            Self::AddFlight => 3,
            Self::AddTechnician => 4,
            Self::BookFlight => 5,
            Self::AvailableSeats => 6,
            Self::RepairsPerPlane => 7,
            Self::RepairsPerYear => 8,
            Self::Passengers => 9,
            Self::Exit => 10,
            Self::AddCustomer => 11,
            Self::AddRepair => 12,
            Self::Lookup => 13,
        }
    }

    /// Menu text.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddPlane => "Add Plane",
            Self::AddPilot => "Add Pilot",
            Self::AddFlight => "Add Flight",
            Self::AddTechnician => "Add Technician",
            Self::BookFlight => "Book Flight",
            Self::AvailableSeats => "List number of available seats for a given flight.",
            Self::RepairsPerPlane => "List total number of repairs per plane in descending order",
            Self::RepairsPerYear => "List total number of repairs per year in ascending order",
            Self::Passengers => "Find total number of passengers with a given status",
            Self::Exit => "< EXIT",
            Self::AddCustomer => "Add Customer",
            Self::AddRepair => "Add Repair",
            Self::Lookup => "Look up records",
        }
    }

    /// Runs the action behind this entry. Exit does nothing.
    pub fn dispatch<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<(), CliError> {
        match self {
            Self::AddPlane => AddPlaneCommand.execute(session),
            Self::AddPilot => AddPilotCommand.execute(session),
            Self::AddFlight => AddFlightCommand.execute(session),
            Self::AddTechnician => AddTechnicianCommand.execute(session),
            Self::BookFlight => BookFlightCommand.execute(session),
            Self::AvailableSeats => AvailableSeatsCommand.execute(session),
            Self::RepairsPerPlane => RepairsPerPlaneCommand.execute(session),
            Self::RepairsPerYear => RepairsPerYearCommand.execute(session),
            Self::Passengers => PassengersCommand.execute(session),
            Self::AddCustomer => AddCustomerCommand.execute(session),
            Self::AddRepair => AddRepairCommand.execute(session),
            Self::Lookup => LookupCommand.execute(session),
            Self::Exit => Ok(()),
        }
    }
}
