//! Copydesk server binary.
//!
//! Loads configuration, wires the AI provider into the desk routes, and
//! serves the single-page workflow UI.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use copydesk::adapters::http::desk;
use copydesk::adapters::{DeskAppState, OpenAICompatConfig, OpenAICompatProvider};
use copydesk::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load and validate configuration before anything else
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    // Wire the provider every agent in the workflow talks to
    let api_key = config.ai.api_key.clone().unwrap_or_default();
    let provider_config = OpenAICompatConfig::new(api_key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout());
    let provider = Arc::new(OpenAICompatProvider::new(provider_config));

    tracing::info!(
        model = %config.ai.model,
        base_url = %config.ai.base_url,
        "AI provider configured"
    );

    let state = DeskAppState::new(provider, config.ai.temperature);

    // The request timeout bounds the whole workflow, which runs inside a
    // single POST
    let app = Router::new()
        .merge(desk::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Copydesk listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
