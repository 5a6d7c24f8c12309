//! Serialize a [`Table`] for download.

use tracing::debug;

use crate::error::{Result, TabulateError};
use crate::types::export::{ExportFormat, ExportPayload};
use crate::types::record::Record;
use crate::types::table::{display_cell, Table};

/// Serialize `table` in the requested format.
///
/// A table with no columns exports as empty CSV or `[]`; it never fails.
pub fn export_table(table: &Table, format: ExportFormat) -> Result<ExportPayload> {
    let bytes = match format {
        ExportFormat::Csv => to_csv(table)?,
        ExportFormat::Json => to_json(table)?,
    };

    debug!(
        format = %format,
        rows = table.row_count(),
        bytes = bytes.len(),
        "Exported table"
    );

    Ok(ExportPayload::new(format, bytes))
}

/// One header row, no index column, `\n` terminators, minimal quoting.
fn to_csv(table: &Table) -> Result<Vec<u8>> {
    if table.column_count() == 0 {
        return Ok(Vec::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| display_cell(cell.as_ref()).into_owned()))?;
    }

    writer
        .into_inner()
        .map_err(|e| TabulateError::Export(e.to_string().into()))
}

/// Pretty-printed array of objects in row order. Absent cells are omitted.
fn to_json(table: &Table) -> Result<Vec<u8>> {
    let rows: Vec<Record> = table.row_objects().collect();
    serde_json::to_vec_pretty(&rows).map_err(|e| TabulateError::Export(Box::new(e)))
}
