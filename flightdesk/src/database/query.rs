//! Printable query results.

use std::fmt;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params};
use serde::Serialize;

use crate::error::Result;

/// A single value from a result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// SQL `NULL`.
    Null,
    /// An integer column.
    Integer(i64),
    /// A floating point column.
    Real(f64),
    /// A text column. Blobs are rendered lossily as text.
    Text(String),
}

impl Cell {
    /// The integer value, if this cell holds one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<ValueRef<'_>> for Cell {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(v) => Self::Integer(v),
            ValueRef::Real(v) => Self::Real(v),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Self::Text(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Column names and rows returned by a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    /// Column names in select order.
    pub columns: Vec<String>,
    /// Row values, one `Vec` per row in column order.
    pub rows: Vec<Vec<Cell>>,
}

impl QueryResult {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the query returned no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The value at `row`, `column`, if present.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index)
    }
}

/// Runs `sql` and collects every row with its column names.
///
/// # Errors
///
/// Returns an error if the statement cannot be prepared or executed.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use flightdesk::database::query_table;
///
/// let conn = Connection::open_in_memory().unwrap();
/// let result = query_table(&conn, "SELECT 1 AS one, 'x' AS letter", []).unwrap();
/// assert_eq!(result.columns, vec!["one", "letter"]);
/// assert_eq!(result.len(), 1);
/// ```
pub fn query_table<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<QueryResult> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let rows = stmt
        .query_map(params, |row| {
            (0..width)
                .map(|i| row.get_ref(i).map(Cell::from))
                .collect::<rusqlite::Result<Vec<Cell>>>()
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(QueryResult { columns, rows })
}
