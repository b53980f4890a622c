//! Tool trait definition

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::Result;

/// Tool execution result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    /// Human-readable output
    pub output: String,
    /// Structured output, for tools returning a mapping
    pub data: Option<JsonValue>,
}

impl ToolResult {
    /// Create a plain text result
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            data: None,
        }
    }

    /// Create a structured result; `output` holds the JSON rendering
    pub fn structured(data: JsonValue) -> Self {
        Self {
            output: data.to_string(),
            data: Some(data),
        }
    }
}

/// Tool trait
///
/// Implement this trait to expose an operation to the tool dispatcher.
/// Failures are returned as `Err` and rendered by the host.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool name (unique within a [`ToolManager`](super::ToolManager))
    fn name(&self) -> &str;

    /// Get the tool description
    fn description(&self) -> &str;

    /// Get the JSON schema for the tool's input parameters
    fn input_schema(&self) -> JsonValue;

    /// Execute the tool with the given input
    async fn execute(&self, input: JsonValue) -> Result<ToolResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_result() {
        let result = ToolResult::text("BTC price: $1.00 USD");
        assert_eq!(result.output, "BTC price: $1.00 USD");
        assert!(result.data.is_none());
    }

    #[test]
    fn test_structured_result() {
        let result = ToolResult::structured(json!({"BTC": "$1.00"}));
        assert_eq!(result.output, r#"{"BTC":"$1.00"}"#);
        assert_eq!(result.data, Some(json!({"BTC": "$1.00"})));
    }
}
