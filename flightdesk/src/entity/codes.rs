//! Enumerated codes stored as short strings in the database.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Kind of repair performed on a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepairCode {
    /// Major repair.
    #[serde(rename = "MJ")]
    Major,
    /// Minor repair.
    #[serde(rename = "MN")]
    Minor,
    /// Routine service.
    #[serde(rename = "SV")]
    Service,
}

impl RepairCode {
    /// Message shown when a repair code cannot be parsed.
    pub const HINT: &'static str = "The valid codes are \"MN,\" \"MJ,\" and \"SV.\"";

    /// The two-letter code stored in the `repair_code` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "MJ",
            Self::Minor => "MN",
            Self::Service => "SV",
        }
    }
}

impl fmt::Display for RepairCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepairCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "MJ" => Ok(Self::Major),
            "MN" => Ok(Self::Minor),
            "SV" => Ok(Self::Service),
            _ => Err(ValidationError::new("repair_code", Self::HINT)),
        }
    }
}

/// Gender recorded for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// `M`
    #[serde(rename = "M")]
    Male,
    /// `F`
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Message shown when a gender cannot be parsed.
    pub const HINT: &'static str = "Enter M or F.";

    /// The single-letter code stored in the `gtype` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            _ => Err(ValidationError::new("gtype", Self::HINT)),
        }
    }
}

/// State of a seat reservation.
///
/// # Examples
///
/// ```
/// use flightdesk::entity::ReservationStatus;
///
/// let status: ReservationStatus = "W".parse().unwrap();
/// assert_eq!(status, ReservationStatus::Waitlisted);
/// assert_eq!(ReservationStatus::Confirmed.to_string(), "C");
/// assert!("X".parse::<ReservationStatus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// The flight was full; the customer waits for a seat.
    #[serde(rename = "W")]
    Waitlisted,
    /// The customer confirmed and a ticket was sold.
    #[serde(rename = "C")]
    Confirmed,
    /// A seat was held but the customer has not confirmed.
    #[serde(rename = "R")]
    Reserved,
}

impl ReservationStatus {
    /// Message shown when a status cannot be parsed.
    pub const HINT: &'static str = "The valid statuses are W, C and R.";

    /// The single-letter code stored in the `status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waitlisted => "W",
            Self::Confirmed => "C",
            Self::Reserved => "R",
        }
    }

    /// Whether a reservation in this state occupies a sold seat.
    #[must_use]
    pub const fn takes_seat(self) -> bool {
        !matches!(self, Self::Waitlisted)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "W" => Ok(Self::Waitlisted),
            "C" => Ok(Self::Confirmed),
            "R" => Ok(Self::Reserved),
            _ => Err(ValidationError::new("status", Self::HINT)),
        }
    }
}
