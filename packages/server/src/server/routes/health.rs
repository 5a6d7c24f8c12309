use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;
use tabulate::Llm;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    provider: String,
    model: String,
}

/// Health check endpoint
///
/// Reports the configured backend. Does not call the provider.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let llm = state.extractor.llm();

    Json(HealthResponse {
        status: "ok",
        provider: llm.provider().to_string(),
        model: llm.model().to_string(),
    })
}
