//! Cryptocurrency price lookups
//!
//! Resolves ticker symbols through the [`SymbolRegistry`] and fetches prices
//! from a CoinGecko-compatible "simple price" endpoint.

mod fetcher;
mod registry;
mod source;
mod types;

pub use fetcher::PriceFetcher;
pub use registry::{SymbolRegistry, normalize_symbol};
pub use source::{HttpPriceSource, PRICE_TIMEOUT, PriceSource};
pub use types::{PriceBatch, PriceQuote};
