// Main entry point for the web server

use anyhow::{Context, Result};
use tabulate::build_llm;
use tabulate_server::{
    server::{build_app, AppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tabulate=debug,tabulate_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tabulate");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        provider = %config.provider,
        model = %config.credentials.model,
        hints = config.extractor.hints.len(),
        "Configuration loaded"
    );

    // Build the LLM backend from explicit credentials
    let llm = build_llm(config.provider, config.credentials)
        .context("Failed to initialize LLM backend")?;

    // Build application
    let app = build_app(AppState::new(llm, config.extractor));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
