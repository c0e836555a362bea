//! Planning a flight booking.

use rusqlite::Connection;

use crate::allocator::IdAllocators;
use crate::date::FlightDate;
use crate::entity::{EntityKind, ReservationStatus};
use crate::error::{Error, Result};
use crate::reports::available_seats;

use super::add_record::require;
use super::plan::{OperationPlan, PlanAction};

/// Reservation status for a booking given the seats left and whether the
/// customer confirmed.
///
/// A flight with no seats left always waitlists, whatever the answer.
///
/// # Examples
///
/// ```
/// use flightdesk::entity::ReservationStatus;
/// use flightdesk::operations::booking::status_for;
///
/// assert_eq!(status_for(0, true), ReservationStatus::Waitlisted);
/// assert_eq!(status_for(5, true), ReservationStatus::Confirmed);
/// assert_eq!(status_for(5, false), ReservationStatus::Reserved);
/// ```
#[must_use]
pub const fn status_for(available: i64, confirmed: bool) -> ReservationStatus {
    if available <= 0 {
        ReservationStatus::Waitlisted
    } else if confirmed {
        ReservationStatus::Confirmed
    } else {
        ReservationStatus::Reserved
    }
}

/// Plans a reservation for a customer on a flight departing on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPlan {
    customer_id: i64,
    flight_num: i64,
    departure: FlightDate,
    confirmed: bool,
}

impl BookingPlan {
    /// Creates an unconfirmed booking.
    #[must_use]
    pub const fn new(customer_id: i64, flight_num: i64, departure: FlightDate) -> Self {
        Self {
            customer_id,
            flight_num,
            departure,
            confirmed: false,
        }
    }

    /// Sets whether the customer has confirmed the reservation.
    #[must_use]
    pub const fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    /// Seats left on the booked flight, failing if it does not depart on
    /// the booked date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no such departure exists, or a
    /// database error.
    pub fn seats_left(&self, conn: &Connection) -> Result<i64> {
        available_seats(conn, self.flight_num, self.departure)?.ok_or_else(|| Error::NotFound {
            resource: format!("flight {} departing {}", self.flight_num, self.departure),
        })
    }

    /// Builds the plan, drawing a reservation number from `ids`.
    ///
    /// A full flight yields a waitlisted reservation and leaves the tickets
    /// sold alone. Otherwise the sold count goes up by one before the
    /// reservation is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the customer or the departure does not
    /// exist, or a database error.
    pub fn build_plan(&self, conn: &Connection, ids: &mut IdAllocators) -> Result<OperationPlan> {
        require(conn, EntityKind::Customer, self.customer_id)?;
        let available = self.seats_left(conn)?;
        let status = status_for(available, self.confirmed);

        let rnum = ids.allocate(EntityKind::Reservation);
        Ok(self.plan_with(rnum, status))
    }

    fn plan_with(&self, rnum: i64, status: ReservationStatus) -> OperationPlan {
        let mut plan = OperationPlan::new(format!("Book flight {}", self.flight_num));
        if status.takes_seat() {
            plan = plan.add_action(PlanAction::IncrementSold {
                flight_num: self.flight_num,
            });
        } else {
            plan = plan.add_warning(format!(
                "Flight {} is full. The reservation will be placed on the waitlist.",
                self.flight_num
            ));
        }
        plan.add_action(PlanAction::InsertReservation {
            rnum,
            customer_id: self.customer_id,
            flight_num: self.flight_num,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_flight};
    use crate::database::Database;
    use crate::entity::{Gender, NewCustomer};
    use crate::operations::PlanExecutor;
    use crate::reports::passengers_with_status;

    fn day(s: &str) -> FlightDate {
        s.parse().unwrap()
    }

    fn add_customer(conn: &Connection, id: i64) {
        let customer =
            NewCustomer::new("Ada", "Byron", Gender::Female, day("1990-04-12"), "", "", "")
                .unwrap();
        Database::insert_customer(conn, id, &customer).unwrap();
    }

    #[test]
    fn test_confirmed_booking_sells_a_ticket() {
        let mut db = create_test_database();
        let fnum = seed_flight(db.connection(), 2, 0, "2024-03-05");
        add_customer(db.connection(), 0);
        let mut ids = IdAllocators::seed(db.connection()).unwrap();

        let plan = BookingPlan::new(0, fnum, day("2024-03-05"))
            .confirmed(true)
            .build_plan(db.connection(), &mut ids)
            .unwrap();
        assert!(matches!(plan.actions[0], PlanAction::IncrementSold { .. }));
        assert_eq!(plan.reservation_status(), Some(ReservationStatus::Confirmed));
        PlanExecutor::new(&mut db).execute(&plan).unwrap();

        let conn = db.connection();
        assert_eq!(Database::num_sold(conn, fnum).unwrap(), Some(1));
        assert_eq!(
            passengers_with_status(conn, fnum, ReservationStatus::Confirmed).unwrap(),
            1
        );
        assert_eq!(available_seats(conn, fnum, day("2024-03-05")).unwrap(), Some(1));
    }

    #[test]
    fn test_unconfirmed_booking_is_reserved() {
        let db = create_test_database();
        let fnum = seed_flight(db.connection(), 5, 1, "2024-03-05");
        add_customer(db.connection(), 0);
        let mut ids = IdAllocators::seed(db.connection()).unwrap();

        let plan = BookingPlan::new(0, fnum, day("2024-03-05"))
            .build_plan(db.connection(), &mut ids)
            .unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.reservation_status(), Some(ReservationStatus::Reserved));
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_full_flight_waitlists_without_selling() {
        let mut db = create_test_database();
        let fnum = seed_flight(db.connection(), 3, 3, "2024-03-05");
        add_customer(db.connection(), 0);
        let mut ids = IdAllocators::seed(db.connection()).unwrap();

        let plan = BookingPlan::new(0, fnum, day("2024-03-05"))
            .confirmed(true)
            .build_plan(db.connection(), &mut ids)
            .unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.reservation_status(), Some(ReservationStatus::Waitlisted));
        assert_eq!(
            plan.warnings,
            vec![format!(
                "Flight {fnum} is full. The reservation will be placed on the waitlist."
            )]
        );

        PlanExecutor::new(&mut db).execute(&plan).unwrap();
        assert_eq!(Database::num_sold(db.connection(), fnum).unwrap(), Some(3));
    }

    #[test]
    fn test_unknown_departure_is_not_found() {
        let db = create_test_database();
        let fnum = seed_flight(db.connection(), 3, 0, "2024-03-05");
        add_customer(db.connection(), 0);
        let mut ids = IdAllocators::seed(db.connection()).unwrap();

        match BookingPlan::new(0, fnum, day("2024-03-06")).build_plan(db.connection(), &mut ids) {
            Err(Error::NotFound { resource }) => {
                assert_eq!(resource, format!("flight {fnum} departing 2024-03-06"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(ids.get(EntityKind::Reservation).unwrap().last_issued(), -1);
    }

    #[test]
    fn test_unknown_customer_is_not_found() {
        let db = create_test_database();
        let fnum = seed_flight(db.connection(), 3, 0, "2024-03-05");
        let mut ids = IdAllocators::seed(db.connection()).unwrap();

        let err = BookingPlan::new(8, fnum, day("2024-03-05"))
            .build_plan(db.connection(), &mut ids)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { resource } if resource == "customer 8"));
    }
}
