//! Finding records by id or by name.
//!
//! Name matching is exact and case-sensitive. A name that matches more
//! than one row is reported as ambiguous so the caller can fall back to
//! asking for an id.

use rusqlite::Connection;

use crate::database::{query_table, QueryResult};
use crate::entity::EntityKind;
use crate::error::{Error, Result};

/// Outcome of a lookup by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// No row has that name.
    NoMatch,
    /// Exactly one row has that name.
    Unique(i64),
    /// Several rows share the name; their ids in ascending order.
    Ambiguous(Vec<i64>),
}

impl NameMatch {
    /// The id of a unique match.
    #[must_use]
    pub const fn unique_id(&self) -> Option<i64> {
        match self {
            Self::Unique(id) => Some(*id),
            _ => None,
        }
    }
}

/// Fetches the row with key `id`, or `None` when it does not exist.
///
/// # Errors
///
/// Returns an error if the query fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use flightdesk::database::initialize_schema;
/// use flightdesk::entity::EntityKind;
/// use flightdesk::lookup::find_by_id;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert!(find_by_id(&conn, EntityKind::Plane, 0).unwrap().is_none());
/// ```
pub fn find_by_id(conn: &Connection, kind: EntityKind, id: i64) -> Result<Option<QueryResult>> {
    let sql = format!(
        "SELECT * FROM {} WHERE {} = ?1",
        kind.table(),
        kind.key_column()
    );
    let result = query_table(conn, &sql, [id])?;
    Ok(if result.is_empty() { None } else { Some(result) })
}

/// Looks up the ids of rows whose name equals `name`.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `kind` has no name column, or a
/// database error if the query fails.
pub fn find_by_name(conn: &Connection, kind: EntityKind, name: &str) -> Result<NameMatch> {
    let name_expr = name_expr(kind)?;
    let sql = format!(
        "SELECT {key} FROM {table} WHERE {name_expr} = ?1 ORDER BY {key}",
        key = kind.key_column(),
        table = kind.table(),
    );
    let mut stmt = conn.prepare(&sql)?;
    let ids = stmt
        .query_map([name], |row| row.get::<_, i64>(0))?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(match ids.as_slice() {
        [] => NameMatch::NoMatch,
        [id] => NameMatch::Unique(*id),
        _ => NameMatch::Ambiguous(ids),
    })
}

/// Fetches every row whose name equals `name`, for showing candidates.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `kind` has no name column, or a
/// database error if the query fails.
pub fn rows_named(conn: &Connection, kind: EntityKind, name: &str) -> Result<QueryResult> {
    let name_expr = name_expr(kind)?;
    let sql = format!(
        "SELECT * FROM {table} WHERE {name_expr} = ?1 ORDER BY {key}",
        key = kind.key_column(),
        table = kind.table(),
    );
    query_table(conn, &sql, [name])
}

fn name_expr(kind: EntityKind) -> Result<&'static str> {
    kind.name_expr().ok_or_else(|| Error::Validation {
        field: "name".into(),
        message: format!("{kind} records cannot be looked up by name"),
    })
}
