//! HTTP API Server
//!
//! Starts and manages the axum-based HTTP server.

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use cg_core::{ApiConfig, ToolManager};

use crate::routes::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub tools: Arc<ToolManager>,
}

/// Build the application router
pub fn app(tools: ToolManager) -> Router {
    let state = AppState {
        tools: Arc::new(tools),
    };

    Router::new()
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP API server and serve until Ctrl+C
pub async fn start_server(config: &ApiConfig, tools: ToolManager) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("HTTP API listening on {}", listener.local_addr()?);

    axum::serve(listener, app(tools))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
