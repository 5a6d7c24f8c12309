//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tabulate::{Extractor, ExtractorConfig, Llm};
use tower_http::trace::TraceLayer;

use crate::server::routes::{extract_handler, health_handler};
use crate::server::static_files::serve_web_app;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor<Arc<dyn Llm>>>,
}

impl AppState {
    pub fn new(llm: Arc<dyn Llm>, config: ExtractorConfig) -> Self {
        Self {
            extractor: Arc::new(Extractor::with_config(llm, config)),
        }
    }
}

/// Build the Axum application router
///
/// Every request runs at most one extraction; nothing is kept between
/// requests. No request timeout: each backend's HTTP client bounds its
/// own calls and reports overruns as provider errors.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/extract", post(extract_handler))
        .route("/health", get(health_handler))
        .fallback(serve_web_app)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
