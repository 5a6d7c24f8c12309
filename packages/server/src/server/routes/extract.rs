use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use tabulate::{display_cell, ExportFormat, ExportPayload, Extraction, SanitizeRule};

use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    /// "CSV" or "JSON", any case. Defaults to CSV.
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub columns: Vec<String>,
    /// Cells rendered as display text, empty for missing values
    pub rows: Vec<Vec<String>>,
    pub rule: SanitizeRule,
    pub download: Download,
}

/// Export payload ready for a browser download.
#[derive(Debug, Serialize)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

impl ExtractResponse {
    fn new(extraction: Extraction, payload: ExportPayload) -> Self {
        let rows = extraction
            .table
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| display_cell(cell.as_ref()).into_owned())
                    .collect()
            })
            .collect();

        Self {
            columns: extraction.table.columns().to_vec(),
            rows,
            rule: extraction.rule,
            download: Download {
                content: payload.text().into_owned(),
                filename: payload.file_name,
                mime: payload.mime_type,
            },
        }
    }
}

/// Run one extraction over the posted text and return the table plus its export.
pub async fn extract_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let format = match request.format.as_deref() {
        Some(format) => format.parse::<ExportFormat>()?,
        None => ExportFormat::default(),
    };

    let (extraction, payload) = state
        .extractor
        .extract_and_export(&request.text, format)
        .await?;

    Ok(Json(ExtractResponse::new(extraction, payload)))
}
