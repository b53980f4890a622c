//! coin-gateway: main binary
//!
//! Usage:
//!   coin-gateway                          - Start the HTTP API server
//!   coin-gateway --execute <tool> [json]  - Run one tool call and print the result
//!   coin-gateway --list-tools             - Print the registered tool definitions
//!   coin-gateway --help                   - Show help

mod cli;

use cg_core::{Config, PriceFetcher, ToolManager};
use cg_tools::register_default_tools;
use tracing_subscriber::EnvFilter;

/// Run mode
#[derive(Debug, PartialEq, Eq)]
enum RunMode {
    /// HTTP API server
    Server,
    /// One-shot tool call
    Execute { tool: String, input: Option<String> },
    /// Print tool definitions
    ListTools,
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = parse_args(&args)?;

    match mode {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("coin-gateway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    // Load .env file
    dotenvy::dotenv().ok();

    // stdout is reserved for tool output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Price index: {}", config.market.base_url);

    let fetcher = PriceFetcher::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to create price fetcher: {}", e))?;

    let mut tool_manager = ToolManager::new();
    register_default_tools(&mut tool_manager, &fetcher);

    tracing::info!(
        "Registered {} tools ({} supported coins): {:?}",
        tool_manager.len(),
        fetcher.registry().len(),
        tool_manager.tool_names()
    );

    match mode {
        RunMode::Execute { tool, input } => {
            cli::run_execute(&tool_manager, &tool, input.as_deref()).await
        }
        RunMode::ListTools => cli::print_tools(&tool_manager),
        RunMode::Server => {
            tracing::info!("Starting coin-gateway...");
            cg_api::start_server(&config.api, tool_manager).await
        }
        RunMode::Help | RunMode::Version => Ok(()),
    }
}

/// Parse command line arguments (program name excluded)
fn parse_args(args: &[String]) -> anyhow::Result<RunMode> {
    let mut iter = args.iter();
    let Some(arg) = iter.next() else {
        return Ok(RunMode::Server);
    };

    match arg.as_str() {
        "--execute" | "-e" => {
            let tool = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--execute requires a tool name"))?
                .clone();
            let input = iter.next().cloned();
            Ok(RunMode::Execute { tool, input })
        }
        "--list-tools" | "-l" => Ok(RunMode::ListTools),
        "--help" | "-h" => Ok(RunMode::Help),
        "--version" | "-v" => Ok(RunMode::Version),
        other => anyhow::bail!("Unknown argument: {} (see --help)", other),
    }
}

/// Print help message
fn print_help() {
    println!("coin-gateway - cryptocurrency price tools");
    println!();
    println!("Usage:");
    println!("  coin-gateway                          Start the HTTP API server");
    println!("  coin-gateway --execute <tool> [json]  Run one tool call and print the result");
    println!("  coin-gateway --list-tools             Print the registered tool definitions");
    println!("  coin-gateway --help                   Show this help message");
    println!("  coin-gateway --version                Show version");
    println!();
    println!("Example:");
    println!("  coin-gateway --execute fetch_coin_price '{{\"coin_symbol\": \"BTC\"}}'");
    println!();
    println!("Environment Variables:");
    println!("  PRICE_INDEX_BASE_URL  Price index base URL (default: https://api.coingecko.com/api/v3)");
    println!("  DEFAULT_CURRENCY      Quote currency when none is given (default: usd)");
    println!("  API_HOST              HTTP API bind address (default: 0.0.0.0)");
    println!("  API_PORT              HTTP API port (default: 8000)");
    println!("  RUST_LOG              Log filter (default: info)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_default_server() {
        assert_eq!(parse_args(&[]).unwrap(), RunMode::Server);
    }

    #[test]
    fn test_parse_args_execute() {
        let mode = parse_args(&args(&["--execute", "fetch_coin_price", r#"{"coin_symbol":"BTC"}"#]))
            .unwrap();
        assert_eq!(
            mode,
            RunMode::Execute {
                tool: "fetch_coin_price".to_string(),
                input: Some(r#"{"coin_symbol":"BTC"}"#.to_string()),
            }
        );

        let mode = parse_args(&args(&["-e", "supported_coins"])).unwrap();
        assert_eq!(
            mode,
            RunMode::Execute {
                tool: "supported_coins".to_string(),
                input: None,
            }
        );
    }

    #[test]
    fn test_parse_args_execute_missing_tool() {
        assert!(parse_args(&args(&["--execute"])).is_err());
    }

    #[test]
    fn test_parse_args_flags() {
        assert_eq!(parse_args(&args(&["--list-tools"])).unwrap(), RunMode::ListTools);
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), RunMode::Help);
        assert_eq!(parse_args(&args(&["--version"])).unwrap(), RunMode::Version);
    }

    #[test]
    fn test_parse_args_unknown() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
