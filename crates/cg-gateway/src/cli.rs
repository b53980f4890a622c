//! One-shot CLI mode
//!
//! Runs a single tool call and prints the result to stdout.

use cg_core::{ToolManager, ToolResult};
use serde_json::Value as JsonValue;
use tracing::info;

/// Execute one tool call
///
/// ```text
/// coin-gateway --execute fetch_multiple_prices '{"coin_symbols": ["BTC", "ETH"]}'
/// ```
pub async fn run_execute(
    tool_manager: &ToolManager,
    tool: &str,
    input: Option<&str>,
) -> anyhow::Result<()> {
    let input = parse_input(input)?;

    info!(tool = %tool, "Executing tool");

    let result = tool_manager
        .execute(tool, input)
        .await
        .map_err(|e| anyhow::anyhow!("{} failed: {}", tool, e))?;

    println!("{}", render_result(&result)?);
    Ok(())
}

/// Print the registered tool definitions as JSON
pub fn print_tools(tool_manager: &ToolManager) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&tool_manager.definitions())?
    );
    Ok(())
}

fn parse_input(input: Option<&str>) -> anyhow::Result<JsonValue> {
    match input.map(str::trim) {
        None | Some("") => Ok(JsonValue::Object(Default::default())),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("Tool input is not valid JSON: {}", e)),
    }
}

fn render_result(result: &ToolResult) -> anyhow::Result<String> {
    match &result.data {
        Some(data) => Ok(serde_json::to_string_pretty(data)?),
        None => Ok(result.output.clone()),
    }
}
