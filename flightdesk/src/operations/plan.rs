//! Plan types for write operations.
//!
//! A plan lists the inserts and updates an operation will perform, with
//! every id already drawn, so it can be inspected, shown in a dry run, or
//! executed as one unit.

use crate::date::FlightDate;
use crate::entity::{
    EntityKind, NewCustomer, NewFlight, NewPilot, NewPlane, NewRepair, NewTechnician,
    ReservationStatus,
};

/// A single database write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a plane.
    InsertPlane {
        /// Allocated plane id.
        id: i64,
        /// The plane.
        plane: NewPlane,
    },
    /// Insert a pilot.
    InsertPilot {
        /// Allocated pilot id.
        id: i64,
        /// The pilot.
        pilot: NewPilot,
    },
    /// Insert a technician.
    InsertTechnician {
        /// Allocated technician id.
        id: i64,
        /// The technician.
        technician: NewTechnician,
    },
    /// Insert a customer.
    InsertCustomer {
        /// Allocated customer id.
        id: i64,
        /// The customer.
        customer: NewCustomer,
    },
    /// Insert a flight.
    InsertFlight {
        /// Allocated flight number.
        fnum: i64,
        /// The flight.
        flight: NewFlight,
    },
    /// Assign a pilot and plane to a flight.
    InsertFlightInfo {
        /// Allocated flight info id.
        fiid: i64,
        /// Flight being assigned.
        flight_num: i64,
        /// Assigned pilot.
        pilot_id: i64,
        /// Assigned plane.
        plane_id: i64,
    },
    /// Insert the schedule row of a flight.
    InsertSchedule {
        /// Allocated schedule id.
        id: i64,
        /// Flight being scheduled.
        flight_num: i64,
        /// Departure date.
        departure: FlightDate,
        /// Arrival date.
        arrival: FlightDate,
    },
    /// Insert a repair.
    InsertRepair {
        /// Allocated repair id.
        rid: i64,
        /// The repair.
        repair: NewRepair,
    },
    /// Count one more ticket sold on a flight.
    IncrementSold {
        /// Flight the ticket was sold on.
        flight_num: i64,
    },
    /// Insert a reservation.
    InsertReservation {
        /// Allocated reservation number.
        rnum: i64,
        /// Customer holding the reservation.
        customer_id: i64,
        /// Flight reserved.
        flight_num: i64,
        /// Reservation status.
        status: ReservationStatus,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertPlane { id, plane } => {
                format!("Insert plane {id} ({} {})", plane.make(), plane.model())
            }
            Self::InsertPilot { id, .. } => format!("Insert pilot {id}"),
            Self::InsertTechnician { id, .. } => format!("Insert technician {id}"),
            Self::InsertCustomer { id, .. } => format!("Insert customer {id}"),
            Self::InsertFlight { fnum, flight } => format!(
                "Insert flight {fnum} from {} to {}",
                flight.departure_airport(),
                flight.arrival_airport()
            ),
            Self::InsertFlightInfo {
                fiid,
                flight_num,
                pilot_id,
                plane_id,
            } => format!(
                "Insert flight info {fiid} assigning pilot {pilot_id} and plane {plane_id} to flight {flight_num}"
            ),
            Self::InsertSchedule {
                id, flight_num, ..
            } => format!("Insert schedule {id} for flight {flight_num}"),
            Self::InsertRepair { rid, repair } => {
                format!("Insert repair {rid} on plane {}", repair.plane_id())
            }
            Self::IncrementSold { flight_num } => {
                format!("Increment tickets sold on flight {flight_num}")
            }
            Self::InsertReservation {
                rnum,
                flight_num,
                status,
                ..
            } => format!("Insert reservation {rnum} on flight {flight_num} with status {status}"),
        }
    }

    /// The id this action draws from an allocator, if any.
    #[must_use]
    pub const fn allocated_id(&self) -> Option<(EntityKind, i64)> {
        match self {
            Self::InsertPlane { id, .. } => Some((EntityKind::Plane, *id)),
            Self::InsertPilot { id, .. } => Some((EntityKind::Pilot, *id)),
            Self::InsertTechnician { id, .. } => Some((EntityKind::Technician, *id)),
            Self::InsertCustomer { id, .. } => Some((EntityKind::Customer, *id)),
            Self::InsertFlight { fnum, .. } => Some((EntityKind::Flight, *fnum)),
            Self::InsertFlightInfo { fiid, .. } => Some((EntityKind::FlightInfo, *fiid)),
            Self::InsertSchedule { id, .. } => Some((EntityKind::Schedule, *id)),
            Self::InsertRepair { rid, .. } => Some((EntityKind::Repair, *rid)),
            Self::InsertReservation { rnum, .. } => Some((EntityKind::Reservation, *rnum)),
            Self::IncrementSold { .. } => None,
        }
    }

    /// The `Label: value` block describing the row this action creates.
    ///
    /// Returns `None` for actions that do not create a row.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let block = match self {
            Self::InsertPlane { id, plane } => format!(
                "New Plane with ID {id}\nMake: {}\nModel: {}\nAge: {}\nNumber of Seats: {}",
                plane.make(),
                plane.model(),
                plane.age(),
                plane.seats()
            ),
            Self::InsertPilot { id, pilot } => format!(
                "New Pilot with ID {id}\nFull Name: {}\nNationality: {}",
                pilot.fullname(),
                pilot.nationality()
            ),
            Self::InsertTechnician { id, technician } => format!(
                "New Technician with ID {id}\nFull Name: {}",
                technician.full_name()
            ),
            Self::InsertCustomer { id, customer } => format!(
                "New Customer with ID {id}\nFirst Name: {}\nLast Name: {}\nGender: {}\nDate of Birth: {}\nAddress: {}\nPhone: {}\nZip Code: {}",
                customer.first_name(),
                customer.last_name(),
                customer.gender(),
                customer.date_of_birth(),
                customer.address(),
                customer.phone(),
                customer.zipcode()
            ),
            Self::InsertFlight { fnum, flight } => format!(
                "New Flight with ID {fnum}\nCost: {}\nNumber of Tickets Sold: {}\nNumber of Stops: {}\nDate of Departure: {}\nDate of Arrival: {}\nArrival Airport Code: {}\nDeparture Airport Code: {}",
                flight.cost(),
                flight.num_sold(),
                flight.num_stops(),
                flight.departure_date(),
                flight.arrival_date(),
                flight.arrival_airport(),
                flight.departure_airport()
            ),
            Self::InsertFlightInfo {
                fiid,
                flight_num,
                pilot_id,
                plane_id,
            } => format!(
                "New FlightInfo entry with ID {fiid}\nFlight ID: {flight_num}\nPilot ID: {pilot_id}\nPlane ID: {plane_id}"
            ),
            Self::InsertSchedule {
                id,
                flight_num,
                departure,
                arrival,
            } => format!(
                "New Schedule entry with ID {id}\nFlight ID: {flight_num}\nTime of Departure: {departure}\nTime of Arrival: {arrival}"
            ),
            Self::InsertRepair { rid, repair } => format!(
                "New Repair with ID {rid}\nDate of Repair: {}\nRepair Code: {}\nPilot ID: {}\nPlane ID: {}\nTechnician ID: {}",
                repair.repair_date(),
                repair.code(),
                repair.pilot_id(),
                repair.plane_id(),
                repair.technician_id()
            ),
            Self::InsertReservation {
                rnum,
                customer_id,
                flight_num,
                status,
            } => format!(
                "New Reservation with ID {rnum}\nCustomer ID: {customer_id}\nFlight ID: {flight_num}\nReservation Status: {status}"
            ),
            Self::IncrementSold { .. } => return None,
        };
        Some(block)
    }
}

/// A complete operation plan describing all actions to be taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdesk::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Add plane");
    /// assert_eq!(plan.description, "Add plane");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdesk::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book flight").add_warning("Flight 3 is full.");
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Every id drawn for this plan, in action order.
    #[must_use]
    pub fn allocated_ids(&self) -> Vec<(EntityKind, i64)> {
        self.actions
            .iter()
            .filter_map(PlanAction::allocated_id)
            .collect()
    }

    /// The status of the reservation this plan inserts, if any.
    #[must_use]
    pub fn reservation_status(&self) -> Option<ReservationStatus> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::InsertReservation { status, .. } => Some(*status),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane_action(id: i64) -> PlanAction {
        PlanAction::InsertPlane {
            id,
            plane: NewPlane::new("Boeing", "737", 2010, 180).unwrap(),
        }
    }

    #[test]
    fn test_plan_builder() {
        let plan = OperationPlan::new("Add plane")
            .add_action(plane_action(3))
            .add_warning("careful");
        assert_eq!(plan.len(), 1);
        assert!(!plan.is_empty());
        assert_eq!(plan.warnings, vec!["careful"]);
    }

    #[test]
    fn test_allocated_ids_skip_updates() {
        let plan = OperationPlan::new("Book")
            .add_action(PlanAction::IncrementSold { flight_num: 4 })
            .add_action(PlanAction::InsertReservation {
                rnum: 9,
                customer_id: 1,
                flight_num: 4,
                status: ReservationStatus::Confirmed,
            });
        assert_eq!(plan.allocated_ids(), vec![(EntityKind::Reservation, 9)]);
        assert_eq!(plan.reservation_status(), Some(ReservationStatus::Confirmed));
    }

    #[test]
    fn test_plane_summary() {
        let summary = plane_action(0).summary().unwrap();
        assert_eq!(
            summary,
            "New Plane with ID 0\nMake: Boeing\nModel: 737\nAge: 2010\nNumber of Seats: 180"
        );
    }

    #[test]
    fn test_increment_has_no_summary() {
        let action = PlanAction::IncrementSold { flight_num: 2 };
        assert!(action.summary().is_none());
        assert!(action.allocated_id().is_none());
        assert_eq!(action.description(), "Increment tickets sold on flight 2");
    }

    #[test]
    fn test_descriptions_mention_ids() {
        assert!(plane_action(12).description().contains("12"));
        let action = PlanAction::InsertFlightInfo {
            fiid: 1,
            flight_num: 2,
            pilot_id: 3,
            plane_id: 4,
        };
        let description = action.description();
        assert!(description.contains("pilot 3"));
        assert!(description.contains("plane 4"));
        assert!(description.contains("flight 2"));
    }
}
