//! Planning single-row inserts.

use rusqlite::Connection;

use crate::allocator::IdAllocators;
use crate::database::Database;
use crate::entity::{EntityKind, NewCustomer, NewPilot, NewPlane, NewRepair, NewTechnician};
use crate::error::{Error, Result};

use super::plan::{OperationPlan, PlanAction};

/// A validated record that becomes exactly one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    /// A plane.
    Plane(NewPlane),
    /// A pilot.
    Pilot(NewPilot),
    /// A technician.
    Technician(NewTechnician),
    /// A customer.
    Customer(NewCustomer),
    /// A repair.
    Repair(NewRepair),
}

impl NewRecord {
    /// The table the record is inserted into.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Plane(_) => EntityKind::Plane,
            Self::Pilot(_) => EntityKind::Pilot,
            Self::Technician(_) => EntityKind::Technician,
            Self::Customer(_) => EntityKind::Customer,
            Self::Repair(_) => EntityKind::Repair,
        }
    }
}

impl From<NewPlane> for NewRecord {
    fn from(value: NewPlane) -> Self {
        Self::Plane(value)
    }
}

impl From<NewPilot> for NewRecord {
    fn from(value: NewPilot) -> Self {
        Self::Pilot(value)
    }
}

impl From<NewTechnician> for NewRecord {
    fn from(value: NewTechnician) -> Self {
        Self::Technician(value)
    }
}

impl From<NewCustomer> for NewRecord {
    fn from(value: NewCustomer) -> Self {
        Self::Customer(value)
    }
}

impl From<NewRepair> for NewRecord {
    fn from(value: NewRepair) -> Self {
        Self::Repair(value)
    }
}

/// Plans the insert of one record under a freshly allocated id.
///
/// # Examples
///
/// ```
/// use flightdesk::allocator::IdAllocators;
/// use flightdesk::entity::NewPlane;
/// use flightdesk::operations::AddRecordPlan;
/// use rusqlite::Connection;
///
/// let conn = Connection::open_in_memory().unwrap();
/// flightdesk::database::initialize_schema(&conn).unwrap();
/// let mut ids = IdAllocators::empty();
///
/// let plane = NewPlane::new("Boeing", "737", 2010, 180).unwrap();
/// let plan = AddRecordPlan::new(plane).build_plan(&conn, &mut ids).unwrap();
/// assert_eq!(plan.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AddRecordPlan {
    record: NewRecord,
}

impl AddRecordPlan {
    /// Creates a plan for `record`.
    #[must_use]
    pub fn new(record: impl Into<NewRecord>) -> Self {
        Self {
            record: record.into(),
        }
    }

    /// Builds the plan, drawing one id from `ids`.
    ///
    /// Repairs must reference an existing pilot, plane and technician; this
    /// is checked before any id is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for a missing referenced row, or a database
    /// error if the check fails.
    pub fn build_plan(&self, conn: &Connection, ids: &mut IdAllocators) -> Result<OperationPlan> {
        if let NewRecord::Repair(repair) = &self.record {
            require(conn, EntityKind::Pilot, repair.pilot_id())?;
            require(conn, EntityKind::Plane, repair.plane_id())?;
            require(conn, EntityKind::Technician, repair.technician_id())?;
        }

        let kind = self.record.kind();
        let id = ids.allocate(kind);
        let action = match self.record.clone() {
            NewRecord::Plane(plane) => PlanAction::InsertPlane { id, plane },
            NewRecord::Pilot(pilot) => PlanAction::InsertPilot { id, pilot },
            NewRecord::Technician(technician) => PlanAction::InsertTechnician { id, technician },
            NewRecord::Customer(customer) => PlanAction::InsertCustomer { id, customer },
            NewRecord::Repair(repair) => PlanAction::InsertRepair { rid: id, repair },
        };

        Ok(OperationPlan::new(format!("Add {kind}")).add_action(action))
    }
}

/// Fails with [`Error::NotFound`] unless a `kind` row with key `id` exists.
pub(crate) fn require(conn: &Connection, kind: EntityKind, id: i64) -> Result<()> {
    if Database::exists(conn, kind, id)? {
        Ok(())
    } else {
        Err(Error::NotFound {
            resource: format!("{kind} {id}"),
        })
    }
}
