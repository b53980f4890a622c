//! Price index HTTP access
//!
//! [`PriceSource`] is the seam between the fetcher and the network, so the
//! HTTP client can be swapped out (tests use in-memory sources).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Timeout applied to every outbound price request
pub const PRICE_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of "simple price" responses
///
/// Implementations return the decoded JSON body shaped as
/// `{ identifier: { currency: price } }`. Transport and HTTP status failures
/// must be reported as [`Error::UpstreamUnavailable`].
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch prices for `ids` in `currency` with a single request
    async fn simple_price(&self, ids: &[&str], currency: &str) -> Result<JsonValue>;
}

/// reqwest-backed price source for CoinGecko-compatible APIs
#[derive(Clone)]
pub struct HttpPriceSource {
    client: Client,
    base_url: String,
}

impl HttpPriceSource {
    /// Create a source for `base_url` with the fixed request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, PRICE_TIMEOUT)
    }

    /// Create a source whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("coin-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create with custom client (for testing)
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn simple_price(&self, ids: &[&str], currency: &str) -> Result<JsonValue> {
        let url = format!("{}/simple/price", self.base_url);
        let ids = ids.join(",");

        debug!(url = %url, ids = %ids, currency = %currency, "Requesting simple price");

        let response = self
            .client
            .get(&url)
            .query(&[("ids", ids.as_str()), ("vs_currencies", currency)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Price index request failed");
                Error::UpstreamUnavailable(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Price index returned error status");
            return Err(Error::UpstreamUnavailable(format!("HTTP error: {}", status)));
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| Error::UpstreamUnavailable(format!("Invalid response body: {}", e)))
    }
}
