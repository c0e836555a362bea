//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans and
//! applies them to the database as a single transaction.

use rusqlite::Connection;

use crate::allocator::IdAllocators;
use crate::database::Database;
use crate::error::Result;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// One `Label: value` block per row created.
    pub summaries: Vec<String>,
}

impl ExecutionResult {
    fn from_plan(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            summaries: plan.actions.iter().filter_map(PlanAction::summary).collect(),
        }
    }
}

/// Executes operation plans against the database.
///
/// All actions of a plan run inside one immediate transaction: either every
/// row is written or, on the first failure, none is. When the executor is
/// given the session's allocators, the ids drawn for a failed plan are
/// released for reuse, except ids that another row already holds: those
/// move the allocator past the table's largest key instead.
///
/// # Examples
///
/// ```no_run
/// use flightdesk::database::{Database, DatabaseConfig};
/// use flightdesk::entity::NewPlane;
/// use flightdesk::operations::{OperationPlan, PlanAction, PlanExecutor};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/airline.db")).unwrap();
/// let plan = OperationPlan::new("Add plane").add_action(PlanAction::InsertPlane {
///     id: 0,
///     plane: NewPlane::new("Boeing", "737", 2010, 180).unwrap(),
/// });
///
/// let result = PlanExecutor::new(&mut db).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    allocators: Option<&'a mut IdAllocators>,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(db: &'a mut Database) -> Self {
        Self {
            db,
            allocators: None,
            dry_run: false,
        }
    }

    /// Hands the plan's ids back to `allocators` if execution fails.
    #[must_use]
    pub fn release_ids_to(mut self, allocators: &'a mut IdAllocators) -> Self {
        self.allocators = Some(allocators);
        self
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode the plan is described but the database is untouched.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an action. The transaction is rolled
    /// back and, if allocators were supplied, the plan's ids are released.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::debug!("dry run: {}", plan.description);
            return Ok(ExecutionResult::from_plan(plan, true));
        }

        let outcome = self.db.with_transaction(|tx| {
            for action in &plan.actions {
                log::debug!("{}", action.description());
                apply_action(tx, action)?;
            }
            Ok(())
        });

        match outcome {
            Ok(()) => Ok(ExecutionResult::from_plan(plan, false)),
            Err(e) => {
                log::warn!("{} failed and was rolled back: {e}", plan.description);
                if let Some(allocators) = self.allocators.as_deref_mut() {
                    if let Err(reclaim) = reclaim_ids(self.db.connection(), allocators, plan) {
                        log::warn!("could not reclaim ids of {}: {reclaim}", plan.description);
                    }
                }
                Err(e)
            }
        }
    }
}

/// Releases the ids of a rolled-back plan. An id that is still present
/// after the rollback was taken by someone else, so the allocator skips
/// ahead of the table instead of handing it out again.
fn reclaim_ids(conn: &Connection, allocators: &mut IdAllocators, plan: &OperationPlan) -> Result<()> {
    for (kind, id) in plan.allocated_ids() {
        if Database::exists(conn, kind, id)? {
            log::warn!("{kind} id {id} is already taken");
            allocators.advance_past(kind, Database::max_key(conn, kind)?);
        } else {
            allocators.release(kind, id);
        }
    }
    Ok(())
}

fn apply_action(conn: &Connection, action: &PlanAction) -> Result<()> {
    match action {
        PlanAction::InsertPlane { id, plane } => Database::insert_plane(conn, *id, plane),
        PlanAction::InsertPilot { id, pilot } => Database::insert_pilot(conn, *id, pilot),
        PlanAction::InsertTechnician { id, technician } => {
            Database::insert_technician(conn, *id, technician)
        }
        PlanAction::InsertCustomer { id, customer } => {
            Database::insert_customer(conn, *id, customer)
        }
        PlanAction::InsertFlight { fnum, flight } => Database::insert_flight(conn, *fnum, flight),
        PlanAction::InsertFlightInfo {
            fiid,
            flight_num,
            pilot_id,
            plane_id,
        } => Database::insert_flight_info(conn, *fiid, *flight_num, *pilot_id, *plane_id),
        PlanAction::InsertSchedule {
            id,
            flight_num,
            departure,
            arrival,
        } => Database::insert_schedule(conn, *id, *flight_num, *departure, *arrival),
        PlanAction::InsertRepair { rid, repair } => Database::insert_repair(conn, *rid, repair),
        PlanAction::IncrementSold { flight_num } => Database::increment_sold(conn, *flight_num),
        PlanAction::InsertReservation {
            rnum,
            customer_id,
            flight_num,
            status,
        } => Database::insert_reservation(conn, *rnum, *customer_id, *flight_num, *status),
    }
}
