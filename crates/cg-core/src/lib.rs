//! cg-core: Coin Gateway Core Library
//!
//! Symbol registry, price fetching against a CoinGecko-style price index,
//! configuration and the tool system shared by the gateway crates.

pub mod config;
pub mod error;
pub mod market;
pub mod tool;

pub use config::{ApiConfig, Config, MarketConfig};
pub use error::{Error, Result};
pub use market::{
    HttpPriceSource, PriceBatch, PriceFetcher, PriceQuote, PriceSource, SymbolRegistry,
};
pub use tool::{Tool, ToolDefinition, ToolManager, ToolResult};
