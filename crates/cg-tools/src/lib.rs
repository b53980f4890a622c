//! cg-tools: Built-in tools for coin-gateway
//!
//! Adapts [`PriceFetcher`] operations into tools with caller-facing output.

use cg_core::{PriceFetcher, ToolManager};

pub mod format;
pub mod price;

pub use price::{CoinPriceTool, MultiplePricesTool, SupportedCoinsTool};

use std::sync::Arc;

/// Register all default built-in tools with the tool manager
pub fn register_default_tools(manager: &mut ToolManager, fetcher: &PriceFetcher) {
    manager.register(Arc::new(CoinPriceTool::new(fetcher.clone())));
    manager.register(Arc::new(MultiplePricesTool::new(fetcher.clone())));
    manager.register(Arc::new(SupportedCoinsTool::new(fetcher.clone())));
}
