//! Output formatter implementations.

use serde_json::{Map, Value};

use crate::database::{Cell, QueryResult};
use crate::{Error, Result};

use super::OutputFormatter;

/// Formatter that prints column names, then one line per row, with values
/// separated by tabs.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format(&self, result: &QueryResult) -> Result<String> {
        let mut lines = vec![result.columns.join("\t")];
        if result.is_empty() {
            lines.push("(0 rows)".to_string());
        }
        for row in &result.rows {
            let values: Vec<String> = row.iter().map(ToString::to_string).collect();
            lines.push(values.join("\t"));
        }
        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Null => Value::Null,
        Cell::Integer(v) => Value::from(*v),
        Cell::Real(v) => Value::from(*v),
        Cell::Text(v) => Value::from(v.as_str()),
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &QueryResult) -> Result<String> {
        let rows: Vec<Value> = result
            .rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = result
                    .columns
                    .iter()
                    .cloned()
                    .zip(row.iter().map(cell_value))
                    .collect();
                Value::Object(object)
            })
            .collect();

        serde_json::to_string_pretty(&rows).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}
