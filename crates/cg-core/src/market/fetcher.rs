//! Price fetching
//!
//! Validates ticker symbols against the registry and queries the price
//! source. Every call is independent: no caching, no retries.

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

use super::registry::{SymbolRegistry, normalize_symbol};
use super::source::{HttpPriceSource, PriceSource};
use super::types::{PriceBatch, PriceQuote};

/// Fetches prices for registered ticker symbols
#[derive(Clone)]
pub struct PriceFetcher {
    registry: Arc<SymbolRegistry>,
    source: Arc<dyn PriceSource>,
    default_currency: String,
}

impl PriceFetcher {
    /// Create a fetcher over `registry` and `source`, defaulting to USD
    pub fn new(registry: SymbolRegistry, source: Arc<dyn PriceSource>) -> Self {
        Self {
            registry: Arc::new(registry),
            source,
            default_currency: "usd".to_string(),
        }
    }

    /// Build the registry and HTTP source described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpPriceSource::new(&config.market.base_url)?;
        Ok(Self::new(config.symbol_registry(), Arc::new(source))
            .with_default_currency(&config.market.default_currency))
    }

    /// Set the currency used when callers pass `None`
    pub fn with_default_currency(mut self, currency: &str) -> Self {
        let currency = normalize_currency(currency);
        if !currency.is_empty() {
            self.default_currency = currency;
        }
        self
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Normalized currency code, falling back to the default
    pub fn resolve_currency(&self, currency: Option<&str>) -> String {
        currency
            .map(normalize_currency)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.default_currency.clone())
    }

    /// Latest price of a single coin.
    ///
    /// # Errors
    /// - [`Error::UnsupportedSymbol`] when the ticker is not registered (no
    ///   request is made)
    /// - [`Error::UpstreamUnavailable`] on transport or HTTP status failure
    /// - [`Error::PriceNotFound`] when the response has no price for the pair
    pub async fn fetch_one(&self, symbol: &str, currency: Option<&str>) -> Result<f64> {
        let id = self
            .registry
            .lookup(symbol)
            .ok_or_else(|| Error::UnsupportedSymbol(symbol.to_string()))?;
        let currency = self.resolve_currency(currency);

        debug!(symbol = %symbol, id = %id, currency = %currency, "Fetching coin price");

        let body = self.source.simple_price(&[id], &currency).await?;

        extract_price(&body, id, &currency).ok_or_else(|| Error::PriceNotFound {
            symbol: normalize_symbol(symbol),
            currency,
        })
    }

    /// Like [`fetch_one`](Self::fetch_one), wrapped as a [`PriceQuote`]
    pub async fn quote(&self, symbol: &str, currency: Option<&str>) -> Result<PriceQuote> {
        let value = self.fetch_one(symbol, currency).await?;
        Ok(PriceQuote::new(
            normalize_symbol(symbol),
            self.resolve_currency(currency),
            value,
        ))
    }

    /// Latest prices for several coins with one request.
    ///
    /// Unregistered symbols are dropped silently, as are registered ones
    /// missing from the response.
    ///
    /// # Errors
    /// - [`Error::NoSupportedSymbols`] when no input resolves (no request is
    ///   made)
    /// - [`Error::UpstreamUnavailable`] on transport or HTTP status failure
    /// - [`Error::EmptyUpstreamResult`] when the response priced none of them
    pub async fn fetch_many<I, S>(&self, symbols: I, currency: Option<&str>) -> Result<PriceBatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved: Vec<(String, &str)> = Vec::new();
        for symbol in symbols {
            let symbol = normalize_symbol(symbol.as_ref());
            if let Some(id) = self.registry.lookup(&symbol) {
                if !resolved.iter().any(|(s, _)| *s == symbol) {
                    resolved.push((symbol, id));
                }
            }
        }

        if resolved.is_empty() {
            return Err(Error::NoSupportedSymbols);
        }

        let currency = self.resolve_currency(currency);
        let mut ids: Vec<&str> = Vec::with_capacity(resolved.len());
        for (_, id) in &resolved {
            // aliases may share an identifier
            if !ids.contains(id) {
                ids.push(*id);
            }
        }

        debug!(ids = ?ids, currency = %currency, "Fetching multiple coin prices");

        let body = self.source.simple_price(&ids, &currency).await?;

        let prices: PriceBatch = resolved
            .into_iter()
            .filter_map(|(symbol, id)| extract_price(&body, id, &currency).map(|p| (symbol, p)))
            .collect();

        if prices.is_empty() {
            return Err(Error::EmptyUpstreamResult);
        }

        Ok(prices)
    }

    /// Supported ticker -> identifier mapping, as an owned copy
    pub fn list_supported_symbols(&self) -> BTreeMap<String, String> {
        self.registry.to_map()
    }
}

/// Currency codes are keyed in lowercase by the price index
fn normalize_currency(currency: &str) -> String {
    currency.trim().to_lowercase()
}

fn extract_price(body: &JsonValue, id: &str, currency: &str) -> Option<f64> {
    body.get(id)?
        .get(currency)?
        .as_f64()
        .filter(|p| p.is_finite() && *p >= 0.0)
}
