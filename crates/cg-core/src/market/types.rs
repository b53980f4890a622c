use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prices for a batch request, keyed by uppercase ticker
pub type PriceBatch = BTreeMap<String, f64>;

/// A single resolved price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Uppercase ticker
    pub symbol: String,
    /// Lowercase currency code, e.g. `usd`
    pub currency: String,
    pub value: f64,
}

impl PriceQuote {
    pub fn new(symbol: impl Into<String>, currency: impl Into<String>, value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            currency: currency.into(),
            value,
        }
    }
}
