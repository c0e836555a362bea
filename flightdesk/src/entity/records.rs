//! Validated records ready for insertion.
//!
//! Each `New*` type can only be built through its constructor, which applies
//! the rules in [`super::fields`]. Ids are assigned separately by the
//! allocator when the record is placed into an operation plan.

use serde::Serialize;

use super::codes::{Gender, RepairCode};
use super::fields::{
    self, ARRIVAL_AIRPORT, CUSTOMER_ADDRESS, CUSTOMER_FIRST_NAME, CUSTOMER_LAST_NAME,
    CUSTOMER_ZIPCODE, DEPARTURE_AIRPORT, FLIGHT_COST, FLIGHT_NUM_SOLD, FLIGHT_NUM_STOPS,
    PILOT_NAME, PILOT_NATIONALITY, PLANE_AGE, PLANE_MAKE, PLANE_MODEL, PLANE_SEATS,
    TECHNICIAN_NAME,
};
use super::ValidationError;
use crate::date::FlightDate;

/// A plane to be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPlane {
    make: String,
    model: String,
    age: i64,
    seats: i64,
}

impl NewPlane {
    /// Creates a validated plane record.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first field that breaks its rule.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        age: i64,
        seats: i64,
    ) -> Result<Self, ValidationError> {
        let make = make.into();
        let model = model.into();
        PLANE_MAKE.check(&make)?;
        PLANE_MODEL.check(&model)?;
        PLANE_AGE.check(age)?;
        PLANE_SEATS.check(seats)?;
        Ok(Self {
            make,
            model,
            age,
            seats,
        })
    }

    /// Manufacturer.
    #[must_use]
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Model designation.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Year the plane entered service.
    #[must_use]
    pub const fn age(&self) -> i64 {
        self.age
    }

    /// Seat capacity.
    #[must_use]
    pub const fn seats(&self) -> i64 {
        self.seats
    }
}

/// A pilot to be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPilot {
    fullname: String,
    nationality: String,
}

impl NewPilot {
    /// Creates a validated pilot record. Both fields may be empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either field is too long.
    pub fn new(
        fullname: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let fullname = fullname.into();
        let nationality = nationality.into();
        PILOT_NAME.check(&fullname)?;
        PILOT_NATIONALITY.check(&nationality)?;
        Ok(Self {
            fullname,
            nationality,
        })
    }

    /// Full name.
    #[must_use]
    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Nationality.
    #[must_use]
    pub fn nationality(&self) -> &str {
        &self.nationality
    }
}

/// A technician to be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTechnician {
    full_name: String,
}

impl NewTechnician {
    /// Creates a validated technician record.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is empty or too long.
    pub fn new(full_name: impl Into<String>) -> Result<Self, ValidationError> {
        let full_name = full_name.into();
        TECHNICIAN_NAME.check(&full_name)?;
        Ok(Self { full_name })
    }

    /// Full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

/// A customer to be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    first_name: String,
    last_name: String,
    gender: Gender,
    date_of_birth: FlightDate,
    address: String,
    phone: String,
    zipcode: String,
}

impl NewCustomer {
    /// Creates a validated customer record.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first field that breaks its rule.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        date_of_birth: FlightDate,
        address: impl Into<String>,
        phone: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let address = address.into();
        let phone = phone.into();
        let zipcode = zipcode.into();
        CUSTOMER_FIRST_NAME.check(&first_name)?;
        CUSTOMER_LAST_NAME.check(&last_name)?;
        CUSTOMER_ADDRESS.check(&address)?;
        fields::check_phone(&phone)?;
        CUSTOMER_ZIPCODE.check(&zipcode)?;
        Ok(Self {
            first_name,
            last_name,
            gender,
            date_of_birth,
            address,
            phone,
            zipcode,
        })
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Gender code.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> FlightDate {
        self.date_of_birth
    }

    /// Postal address, possibly empty.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Ten-digit phone number, possibly empty.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Zip code, possibly empty.
    #[must_use]
    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }
}

/// A flight to be added, without its pilot/plane assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFlight {
    cost: i64,
    num_sold: i64,
    num_stops: i64,
    departure_date: FlightDate,
    arrival_date: FlightDate,
    arrival_airport: String,
    departure_airport: String,
}

impl NewFlight {
    /// Creates a validated flight record.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first field that breaks its rule.
    pub fn new(
        cost: i64,
        num_sold: i64,
        num_stops: i64,
        departure_date: FlightDate,
        arrival_date: FlightDate,
        arrival_airport: impl Into<String>,
        departure_airport: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let arrival_airport = arrival_airport.into();
        let departure_airport = departure_airport.into();
        FLIGHT_COST.check(cost)?;
        FLIGHT_NUM_SOLD.check(num_sold)?;
        FLIGHT_NUM_STOPS.check(num_stops)?;
        ARRIVAL_AIRPORT.check(&arrival_airport)?;
        DEPARTURE_AIRPORT.check(&departure_airport)?;
        Ok(Self {
            cost,
            num_sold,
            num_stops,
            departure_date,
            arrival_date,
            arrival_airport,
            departure_airport,
        })
    }

    /// Ticket price.
    #[must_use]
    pub const fn cost(&self) -> i64 {
        self.cost
    }

    /// Tickets sold when the flight is created.
    #[must_use]
    pub const fn num_sold(&self) -> i64 {
        self.num_sold
    }

    /// Intermediate stops.
    #[must_use]
    pub const fn num_stops(&self) -> i64 {
        self.num_stops
    }

    /// Departure date.
    #[must_use]
    pub const fn departure_date(&self) -> FlightDate {
        self.departure_date
    }

    /// Arrival date.
    #[must_use]
    pub const fn arrival_date(&self) -> FlightDate {
        self.arrival_date
    }

    /// Code of the airport the flight lands at.
    #[must_use]
    pub fn arrival_airport(&self) -> &str {
        &self.arrival_airport
    }

    /// Code of the airport the flight leaves from.
    #[must_use]
    pub fn departure_airport(&self) -> &str {
        &self.departure_airport
    }
}

/// A repair to be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewRepair {
    repair_date: FlightDate,
    code: RepairCode,
    pilot_id: i64,
    plane_id: i64,
    technician_id: i64,
}

impl NewRepair {
    /// Creates a repair record. Referenced ids are checked by the database.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any id is negative.
    pub fn new(
        repair_date: FlightDate,
        code: RepairCode,
        pilot_id: i64,
        plane_id: i64,
        technician_id: i64,
    ) -> Result<Self, ValidationError> {
        for (field, id) in [
            ("pilot_id", pilot_id),
            ("plane_id", plane_id),
            ("technician_id", technician_id),
        ] {
            if id < 0 {
                return Err(ValidationError::new(field, "ids cannot be negative."));
            }
        }
        Ok(Self {
            repair_date,
            code,
            pilot_id,
            plane_id,
            technician_id,
        })
    }

    /// Date of the repair.
    #[must_use]
    pub const fn repair_date(&self) -> FlightDate {
        self.repair_date
    }

    /// Repair code.
    #[must_use]
    pub const fn code(&self) -> RepairCode {
        self.code
    }

    /// Pilot who reported the repair.
    #[must_use]
    pub const fn pilot_id(&self) -> i64 {
        self.pilot_id
    }

    /// Plane that was repaired.
    #[must_use]
    pub const fn plane_id(&self) -> i64 {
        self.plane_id
    }

    /// Technician who performed the repair.
    #[must_use]
    pub const fn technician_id(&self) -> i64 {
        self.technician_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> FlightDate {
        FlightDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_plane_accepts_boundaries() {
        assert!(NewPlane::new("B", "7", 0, 1).is_ok());
        assert!(NewPlane::new("B".repeat(32), "7".repeat(64), 9999, 499).is_ok());
    }

    #[test]
    fn test_plane_rejects_first_bad_field() {
        let err = NewPlane::new("", "", -1, 0).unwrap_err();
        assert_eq!(err.field, "make");

        let err = NewPlane::new("Boeing", "737", 2010, 500).unwrap_err();
        assert_eq!(err.field, "seats");
    }

    #[test]
    fn test_pilot_fields_optional() {
        let pilot = NewPilot::new("", "").unwrap();
        assert_eq!(pilot.fullname(), "");
        assert!(NewPilot::new("a".repeat(129), "").is_err());
        assert!(NewPilot::new("Ann Lee", "n".repeat(25)).is_err());
    }

    #[test]
    fn test_technician_requires_name() {
        assert!(NewTechnician::new("").is_err());
        assert_eq!(NewTechnician::new("Sam Ortiz").unwrap().full_name(), "Sam Ortiz");
    }

    #[test]
    fn test_customer_validation() {
        let dob = date(1990, 4, 12);
        let customer = NewCustomer::new(
            "Ada",
            "Byron",
            Gender::Female,
            dob,
            "12 Main St",
            "9515551234",
            "92507",
        )
        .unwrap();
        assert_eq!(customer.gender(), Gender::Female);
        assert_eq!(customer.date_of_birth(), dob);

        let err = NewCustomer::new("Ada", "Byron", Gender::Female, dob, "", "555", "")
            .unwrap_err();
        assert_eq!(err.field, "phone");

        let err = NewCustomer::new("Ada", "", Gender::Female, dob, "", "", "").unwrap_err();
        assert_eq!(err.field, "lname");
    }

    #[test]
    fn test_flight_validation() {
        let dep = date(2024, 3, 5);
        let arr = date(2024, 3, 6);
        let flight = NewFlight::new(250, 0, 1, dep, arr, "LAX", "JFK").unwrap();
        assert_eq!(flight.departure_date().to_string(), "2024-03-05");
        assert_eq!(flight.arrival_airport(), "LAX");

        assert_eq!(
            NewFlight::new(0, 0, 0, dep, arr, "LAX", "JFK").unwrap_err().field,
            "cost"
        );
        assert_eq!(
            NewFlight::new(1, -1, 0, dep, arr, "LAX", "JFK").unwrap_err().field,
            "num_sold"
        );
        assert_eq!(
            NewFlight::new(1, 0, 0, dep, arr, "LAXLAX", "JFK").unwrap_err().field,
            "arrival_airport"
        );
        assert_eq!(
            NewFlight::new(1, 0, 0, dep, arr, "LAX", "").unwrap_err().field,
            "departure_airport"
        );
    }

    #[test]
    fn test_repair_rejects_negative_ids() {
        let day = date(2023, 8, 1);
        assert!(NewRepair::new(day, RepairCode::Minor, 0, 0, 0).is_ok());
        let err = NewRepair::new(day, RepairCode::Minor, 0, -1, 0).unwrap_err();
        assert_eq!(err.field, "plane_id");
    }
}
