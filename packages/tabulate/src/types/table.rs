//! Row/column projection of a [`RecordSet`](super::record::RecordSet).

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use super::record::Record;

/// Column that holds non-object array elements.
pub const SCALAR_COLUMN: &str = "value";

/// A single cell. `None` means the record had no such field; this is
/// distinct from an explicit JSON `null`.
pub type Cell = Option<Value>;

/// A table built fresh for each extraction.
///
/// Every row has exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// No rows to show or export.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at `row` under `column`, if the record had that field.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index)?.as_ref()
    }

    /// Rows as objects, skipping absent cells.
    pub fn row_objects(&self) -> impl Iterator<Item = Record> + '_ {
        self.rows.iter().map(move |row| {
            self.columns
                .iter()
                .zip(row)
                .filter_map(|(column, cell)| cell.clone().map(|value| (column.clone(), value)))
                .collect()
        })
    }
}

/// Text shown for a cell in CSV and in the HTML table.
///
/// Absent cells and `null` render empty; strings render without quotes;
/// nested arrays and objects render as compact JSON.
pub fn display_cell(cell: Option<&Value>) -> Cow<'_, str> {
    match cell {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(Value::Bool(b)) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Some(Value::Number(n)) => Cow::Owned(n.to_string()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Table {
        Table::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![Some(json!(1)), None],
                vec![None, Some(Value::Null)],
            ],
        )
    }

    #[test]
    fn test_get_distinguishes_absent_and_null() {
        let table = sample();
        assert_eq!(table.get(0, "a"), Some(&json!(1)));
        assert_eq!(table.get(0, "b"), None);
        assert_eq!(table.get(1, "b"), Some(&Value::Null));
        assert_eq!(table.get(5, "a"), None);
        assert_eq!(table.get(0, "missing"), None);
    }

    #[test]
    fn test_row_objects_skip_absent_cells() {
        let rows: Vec<Record> = sample().row_objects().collect();
        assert_eq!(Value::Object(rows[0].clone()), json!({"a": 1}));
        assert_eq!(Value::Object(rows[1].clone()), json!({"b": null}));
    }

    #[test]
    fn test_display_cell() {
        assert_eq!(display_cell(None), "");
        assert_eq!(display_cell(Some(&Value::Null)), "");
        assert_eq!(display_cell(Some(&json!("Widget"))), "Widget");
        assert_eq!(display_cell(Some(&json!(9.99))), "9.99");
        assert_eq!(display_cell(Some(&json!(true))), "true");
        assert_eq!(display_cell(Some(&json!(["red", "blue"]))), r#"["red","blue"]"#);
    }
}
