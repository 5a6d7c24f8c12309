//! Project a [`RecordSet`] onto rows and columns.

use indexmap::IndexSet;
use serde_json::Value;

use crate::types::record::RecordSet;
use crate::types::table::{Cell, Table, SCALAR_COLUMN};

/// Build a table whose columns are the union of all record keys, in
/// first-seen order. One row per element; absent keys become empty cells.
///
/// Non-object elements land in the [`SCALAR_COLUMN`] of their row.
pub fn build_table(records: &RecordSet) -> Table {
    let mut columns: IndexSet<String> = IndexSet::new();
    for element in records {
        match element {
            Value::Object(record) => {
                for key in record.keys() {
                    if !columns.contains(key) {
                        columns.insert(key.clone());
                    }
                }
            }
            _ => {
                columns.insert(SCALAR_COLUMN.to_string());
            }
        }
    }

    let rows = records
        .iter()
        .map(|element| {
            columns
                .iter()
                .map(|column| cell_for(element, column))
                .collect()
        })
        .collect();

    Table::new(columns.into_iter().collect(), rows)
}

fn cell_for(element: &Value, column: &str) -> Cell {
    match element {
        Value::Object(record) => record.get(column).cloned(),
        scalar if column == SCALAR_COLUMN => Some(scalar.clone()),
        _ => None,
    }
}
