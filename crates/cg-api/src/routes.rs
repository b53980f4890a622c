//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{call_tool, health, list_tools};
use crate::server::AppState;

/// Create the API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Tool discovery and invocation
        .route("/api/tools", get(list_tools))
        .route("/api/tools/{name}", post(call_tool))
}
