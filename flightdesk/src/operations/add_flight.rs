//! Planning a new flight with its crew assignment and schedule.

use rusqlite::Connection;

use crate::allocator::IdAllocators;
use crate::entity::{EntityKind, NewFlight};
use crate::error::Result;

use super::add_record::require;
use super::plan::{OperationPlan, PlanAction};

/// Plans the three rows that make up a flight: `Flight`, `FlightInfo` and
/// `Schedule`.
///
/// # Examples
///
/// ```no_run
/// use flightdesk::allocator::IdAllocators;
/// use flightdesk::database::{Database, DatabaseConfig};
/// use flightdesk::entity::NewFlight;
/// use flightdesk::operations::{AddFlightPlan, PlanExecutor};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/airline.db")).unwrap();
/// let mut ids = IdAllocators::seed(db.connection()).unwrap();
/// let day = "2024-03-05".parse().unwrap();
/// let flight = NewFlight::new(300, 0, 0, day, day, "LAX", "JFK").unwrap();
///
/// let plan = AddFlightPlan::new(flight, 0, 0)
///     .build_plan(db.connection(), &mut ids)
///     .unwrap();
/// PlanExecutor::new(&mut db).release_ids_to(&mut ids).execute(&plan).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct AddFlightPlan {
    flight: NewFlight,
    pilot_id: i64,
    plane_id: i64,
}

impl AddFlightPlan {
    /// Creates a plan for `flight` flown by `pilot_id` on `plane_id`.
    #[must_use]
    pub const fn new(flight: NewFlight, pilot_id: i64, plane_id: i64) -> Self {
        Self {
            flight,
            pilot_id,
            plane_id,
        }
    }

    /// Builds the plan, drawing a flight number, a flight info id and a
    /// schedule id from `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the pilot or plane does not
    /// exist, or a database error if the check fails.
    pub fn build_plan(&self, conn: &Connection, ids: &mut IdAllocators) -> Result<OperationPlan> {
        require(conn, EntityKind::Pilot, self.pilot_id)?;
        require(conn, EntityKind::Plane, self.plane_id)?;

        let fnum = ids.allocate(EntityKind::Flight);
        let fiid = ids.allocate(EntityKind::FlightInfo);
        let schedule_id = ids.allocate(EntityKind::Schedule);
        Ok(self.plan_with_ids(fnum, fiid, schedule_id))
    }

    /// Builds the plan from ids the caller has already drawn.
    #[must_use]
    pub fn plan_with_ids(&self, fnum: i64, fiid: i64, schedule_id: i64) -> OperationPlan {
        let flight = &self.flight;
        let mut plan = OperationPlan::new(format!("Add flight {fnum}"))
            .add_action(PlanAction::InsertFlight {
                fnum,
                flight: flight.clone(),
            })
            .add_action(PlanAction::InsertFlightInfo {
                fiid,
                flight_num: fnum,
                pilot_id: self.pilot_id,
                plane_id: self.plane_id,
            })
            .add_action(PlanAction::InsertSchedule {
                id: schedule_id,
                flight_num: fnum,
                departure: flight.departure_date(),
                arrival: flight.arrival_date(),
            });

        if flight.arrival_date() < flight.departure_date() {
            plan = plan.add_warning(format!(
                "Flight {fnum} arrives on {} before it departs on {}.",
                flight.arrival_date(),
                flight.departure_date()
            ));
        }
        plan
    }
}
