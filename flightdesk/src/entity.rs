//! Domain types for the airline-operations schema.
//!
//! This module provides the entity catalogue ([`EntityKind`]), the field
//! rules every user-supplied value is checked against, the enumerated codes
//! stored in the database, and validated records ready for insertion.
//!
//! # Examples
//!
//! ```
//! use flightdesk::entity::{EntityKind, NewPlane};
//!
//! let plane = NewPlane::new("Boeing", "737", 2010, 180).unwrap();
//! assert_eq!(plane.seats(), 180);
//!
//! assert!(NewPlane::new("Boeing", "737", 2010, 500).is_err());
//! assert_eq!(EntityKind::Repair.table(), "Repairs");
//! ```

pub mod codes;
pub mod fields;
pub mod records;

#[cfg(test)]
mod proptests;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use codes::{Gender, RepairCode, ReservationStatus};
pub use fields::{IntRule, TextRule};
pub use records::{NewCustomer, NewFlight, NewPilot, NewPlane, NewRepair, NewTechnician};

/// Every table the application reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// An aircraft.
    Plane,
    /// A pilot.
    Pilot,
    /// A maintenance technician.
    Technician,
    /// A passenger.
    Customer,
    /// A flight.
    Flight,
    /// The pilot/plane assignment of a flight.
    FlightInfo,
    /// The departure/arrival times of a flight.
    Schedule,
    /// A repair performed on a plane.
    Repair,
    /// A seat reservation.
    Reservation,
}

impl EntityKind {
    /// All entity kinds, in schema creation order.
    pub const ALL: [Self; 9] = [
        Self::Plane,
        Self::Pilot,
        Self::Technician,
        Self::Customer,
        Self::Flight,
        Self::FlightInfo,
        Self::Schedule,
        Self::Repair,
        Self::Reservation,
    ];

    /// Table holding rows of this kind.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Plane => "Plane",
            Self::Pilot => "Pilot",
            Self::Technician => "Technician",
            Self::Customer => "Customer",
            Self::Flight => "Flight",
            Self::FlightInfo => "FlightInfo",
            Self::Schedule => "Schedule",
            Self::Repair => "Repairs",
            Self::Reservation => "Reservation",
        }
    }

    /// Primary key column of [`table`](Self::table).
    #[must_use]
    pub const fn key_column(self) -> &'static str {
        match self {
            Self::Plane | Self::Pilot | Self::Technician | Self::Customer | Self::Schedule => "id",
            Self::Flight => "fnum",
            Self::FlightInfo => "fiid",
            Self::Repair => "rid",
            Self::Reservation => "rnum",
        }
    }

    /// SQL expression yielding the searchable name of a row, if the kind has one.
    #[must_use]
    pub const fn name_expr(self) -> Option<&'static str> {
        match self {
            Self::Pilot => Some("fullname"),
            Self::Technician => Some("full_name"),
            Self::Customer => Some("fname || ' ' || lname"),
            _ => None,
        }
    }

    /// Lower-case name used in prompts and messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Pilot => "pilot",
            Self::Technician => "technician",
            Self::Customer => "customer",
            Self::Flight => "flight",
            Self::FlightInfo => "flight info",
            Self::Schedule => "schedule",
            Self::Repair => "repair",
            Self::Reservation => "reservation",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
