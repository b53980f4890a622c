//! HTTP API handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use cg_core::{ToolDefinition, ToolResult};

use crate::error::{ApiError, Result};
use crate::server::AppState;

/// Tool call response payload
#[derive(Debug, Serialize)]
pub struct ToolCallResponse {
    pub tool: String,
    pub output: String,
    pub data: Option<JsonValue>,
}

impl ToolCallResponse {
    fn new(tool: String, result: ToolResult) -> Self {
        Self {
            tool,
            output: result.output,
            data: result.data,
        }
    }
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// List registered tool definitions
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(state.tools.definitions())
}

/// Invoke a tool; the request body is the tool input (empty means `{}`)
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<ToolCallResponse>> {
    if !state.tools.contains(&name) {
        return Err(ApiError::UnknownTool(name));
    }

    let input: JsonValue = if body.iter().all(u8::is_ascii_whitespace) {
        JsonValue::Object(Default::default())
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::InvalidRequest(format!("Body is not valid JSON: {}", e)))?
    };

    debug!(tool = %name, input = %input, "Tool call");

    let result = state.tools.execute(&name, input).await?;

    info!(tool = %name, "Tool call succeeded");

    Ok(Json(ToolCallResponse::new(name, result)))
}
