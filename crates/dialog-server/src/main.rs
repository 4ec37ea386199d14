//! Portfolio dialog HTTP server
//!
//! Hosts the `recommendPortfolio` code hook behind a small axum API so the
//! conversational platform (or a relay in front of it) can invoke it once
//! per dialog turn.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{health_check, invoke_handler};
use crate::state::AppState;

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/invoke", post(invoke_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading RUST_LOG
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dispatcher = portfolio_advisor::dispatcher();

    tracing::info!(intents = ?dispatcher.intents().names(), "Intents registered");

    let state = AppState {
        dispatcher: Arc::new(dispatcher),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("dialog-server listening on http://{}", config.bind_addr);
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  POST /invoke - Code-hook invocation");

    axum::serve(listener, router(state)).await?;

    Ok(())
}
