//! Field rules shared by record construction and interactive prompts.
//!
//! Each rule carries the human label used in re-prompt messages, so the
//! text a user sees and the check applied before insertion come from the
//! same place.

use super::ValidationError;

/// Length rule for a text field. Lengths are counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    /// Column the value is stored in.
    pub field: &'static str,
    /// Sentence subject used in messages, e.g. "The plane's make".
    pub label: &'static str,
    /// Maximum number of characters.
    pub max_chars: usize,
    /// Whether an empty value is rejected.
    pub required: bool,
}

impl TextRule {
    /// Checks `value` against this rule.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the value is too long, or empty when
    /// the field is required.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdesk::entity::fields::PLANE_MAKE;
    ///
    /// assert!(PLANE_MAKE.check("Airbus").is_ok());
    /// assert!(PLANE_MAKE.check("").is_err());
    /// assert!(PLANE_MAKE.check(&"x".repeat(33)).is_err());
    /// ```
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let len = value.chars().count();
        if len > self.max_chars {
            return Err(ValidationError::new(
                self.field,
                format!("{} must be {} characters or less.", self.label, self.max_chars),
            ));
        }
        if self.required && len == 0 {
            return Err(ValidationError::new(
                self.field,
                format!("{} cannot be empty.", self.label),
            ));
        }
        Ok(())
    }
}

/// Inclusive range rule for an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRule {
    /// Column the value is stored in.
    pub field: &'static str,
    /// Sentence subject used in messages.
    pub label: &'static str,
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
}

impl IntRule {
    /// Returns `true` if `value` lies within the rule's bounds.
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks `value` against this rule.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the accepted range.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdesk::entity::fields::PLANE_SEATS;
    ///
    /// assert!(PLANE_SEATS.check(1).is_ok());
    /// assert!(PLANE_SEATS.check(499).is_ok());
    /// assert!(PLANE_SEATS.check(0).is_err());
    /// assert!(PLANE_SEATS.check(500).is_err());
    /// ```
    pub fn check(&self, value: i64) -> Result<(), ValidationError> {
        if self.contains(value) {
            return Ok(());
        }
        let message = if self.max == i64::MAX {
            if self.min == 0 {
                format!("{} cannot be negative.", self.label)
            } else {
                format!("{} must be at least {}.", self.label, self.min)
            }
        } else {
            format!(
                "{} must be between {} and {}.",
                self.label, self.min, self.max
            )
        };
        Err(ValidationError::new(self.field, message))
    }
}

/// Manufacturer of a plane.
pub const PLANE_MAKE: TextRule = TextRule {
    field: "make",
    label: "The plane's make",
    max_chars: 32,
    required: true,
};

/// Model designation of a plane.
pub const PLANE_MODEL: TextRule = TextRule {
    field: "model",
    label: "The plane's model",
    max_chars: 64,
    required: true,
};

/// Year the plane entered service.
pub const PLANE_AGE: IntRule = IntRule {
    field: "age",
    label: "The plane's age",
    min: 0,
    max: 9999,
};

/// Seat capacity of a plane.
pub const PLANE_SEATS: IntRule = IntRule {
    field: "seats",
    label: "The plane's seat capacity",
    min: 1,
    max: 499,
};

/// Full name of a pilot.
pub const PILOT_NAME: TextRule = TextRule {
    field: "fullname",
    label: "The pilot's name",
    max_chars: 128,
    required: false,
};

/// Nationality of a pilot.
pub const PILOT_NATIONALITY: TextRule = TextRule {
    field: "nationality",
    label: "The pilot's nationality",
    max_chars: 24,
    required: false,
};

/// Full name of a technician.
pub const TECHNICIAN_NAME: TextRule = TextRule {
    field: "full_name",
    label: "The technician's name",
    max_chars: 128,
    required: true,
};

/// First name of a customer.
pub const CUSTOMER_FIRST_NAME: TextRule = TextRule {
    field: "fname",
    label: "The customer's first name",
    max_chars: 24,
    required: true,
};

/// Last name of a customer.
pub const CUSTOMER_LAST_NAME: TextRule = TextRule {
    field: "lname",
    label: "The customer's last name",
    max_chars: 24,
    required: true,
};

/// Postal address of a customer.
pub const CUSTOMER_ADDRESS: TextRule = TextRule {
    field: "address",
    label: "The customer's address",
    max_chars: 256,
    required: false,
};

/// Zip code of a customer.
pub const CUSTOMER_ZIPCODE: TextRule = TextRule {
    field: "zipcode",
    label: "The customer's zipcode",
    max_chars: 10,
    required: false,
};

/// Ticket price of a flight.
pub const FLIGHT_COST: IntRule = IntRule {
    field: "cost",
    label: "The flight cost",
    min: 1,
    max: i64::MAX,
};

/// Tickets already sold on a new flight.
pub const FLIGHT_NUM_SOLD: IntRule = IntRule {
    field: "num_sold",
    label: "The number of tickets sold",
    min: 0,
    max: i64::MAX,
};

/// Intermediate stops of a flight.
pub const FLIGHT_NUM_STOPS: IntRule = IntRule {
    field: "num_stops",
    label: "The number of stops",
    min: 0,
    max: i64::MAX,
};

/// Airport code a flight lands at.
pub const ARRIVAL_AIRPORT: TextRule = TextRule {
    field: "arrival_airport",
    label: "The arrival airport code",
    max_chars: 5,
    required: true,
};

/// Airport code a flight leaves from.
pub const DEPARTURE_AIRPORT: TextRule = TextRule {
    field: "departure_airport",
    label: "The departure airport code",
    max_chars: 5,
    required: true,
};

/// Record ids typed in by the user.
pub const RECORD_ID: IntRule = IntRule {
    field: "id",
    label: "The ID",
    min: 0,
    max: i64::MAX,
};

/// Checks a customer phone number: exactly ten ASCII digits, or empty.
///
/// # Errors
///
/// Returns a [`ValidationError`] for any other value.
///
/// # Examples
///
/// ```
/// use flightdesk::entity::fields::check_phone;
///
/// assert!(check_phone("").is_ok());
/// assert!(check_phone("9515551234").is_ok());
/// assert!(check_phone("951-555-1234").is_err());
/// ```
pub fn check_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || (value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "phone",
            "The phone number must be exactly 10 digits or left empty.",
        ))
    }
}
