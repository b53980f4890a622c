//! cg-api: HTTP API for coin-gateway
//!
//! Exposes the registered tools over REST endpoints.
//! Built with axum for async HTTP handling.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use server::{AppState, app, start_server};
