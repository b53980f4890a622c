//! Cryptocurrency price tools

use async_trait::async_trait;
use cg_core::{PriceFetcher, Result, Tool, ToolResult};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::format::{format_batch_price, format_price_line};

fn invalid_input(e: serde_json::Error) -> cg_core::Error {
    cg_core::Error::ToolExecution(format!("Invalid input parameters: {}", e))
}

/// Input for [`CoinPriceTool`]
#[derive(Debug, Deserialize)]
struct CoinPriceInput {
    coin_symbol: String,
    #[serde(default)]
    currency: Option<String>,
}

/// Input for [`MultiplePricesTool`]
#[derive(Debug, Deserialize)]
struct MultiplePricesInput {
    coin_symbols: Vec<String>,
    #[serde(default)]
    currency: Option<String>,
}

/// Latest price of a single coin, rendered as a sentence
pub struct CoinPriceTool {
    fetcher: PriceFetcher,
}

impl CoinPriceTool {
    pub fn new(fetcher: PriceFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Tool for CoinPriceTool {
    fn name(&self) -> &str {
        "fetch_coin_price"
    }

    fn description(&self) -> &str {
        "Return the latest price for the requested coin symbol (e.g. BTC)."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "coin_symbol": {
                    "type": "string",
                    "description": "Ticker symbol of the coin, case-insensitive (e.g. BTC)"
                },
                "currency": {
                    "type": "string",
                    "description": "Quote currency code (default: usd)"
                }
            },
            "required": ["coin_symbol"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let input: CoinPriceInput = serde_json::from_value(input).map_err(invalid_input)?;

        let quote = self
            .fetcher
            .quote(&input.coin_symbol, input.currency.as_deref())
            .await?;

        tracing::debug!(symbol = %quote.symbol, currency = %quote.currency, "Fetched coin price");

        Ok(ToolResult::text(format_price_line(
            &quote.symbol,
            quote.value,
            &quote.currency,
        )))
    }
}

/// Latest prices of several coins as a symbol -> formatted price mapping
pub struct MultiplePricesTool {
    fetcher: PriceFetcher,
}

impl MultiplePricesTool {
    pub fn new(fetcher: PriceFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Tool for MultiplePricesTool {
    fn name(&self) -> &str {
        "fetch_multiple_prices"
    }

    fn description(&self) -> &str {
        "Return prices for multiple coin symbols. Unsupported symbols are skipped."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "coin_symbols": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Ticker symbols to look up (e.g. [\"BTC\", \"ETH\"])"
                },
                "currency": {
                    "type": "string",
                    "description": "Quote currency code (default: usd)"
                }
            },
            "required": ["coin_symbols"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let input: MultiplePricesInput = serde_json::from_value(input).map_err(invalid_input)?;
        let currency = self.fetcher.resolve_currency(input.currency.as_deref());

        let prices = self
            .fetcher
            .fetch_many(&input.coin_symbols, Some(currency.as_str()))
            .await?;

        let formatted: Map<String, Value> = prices
            .into_iter()
            .map(|(symbol, value)| (symbol, Value::String(format_batch_price(value, &currency))))
            .collect();

        Ok(ToolResult::structured(Value::Object(formatted)))
    }
}

/// Supported ticker -> price index identifier mapping
pub struct SupportedCoinsTool {
    fetcher: PriceFetcher,
}

impl SupportedCoinsTool {
    pub fn new(fetcher: PriceFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Tool for SupportedCoinsTool {
    fn name(&self) -> &str {
        "supported_coins"
    }

    fn description(&self) -> &str {
        "List coin symbols recognised by the gateway."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _input: Value) -> Result<ToolResult> {
        let coins = serde_json::to_value(self.fetcher.list_supported_symbols())?;
        Ok(ToolResult::structured(coins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_core::{HttpPriceSource, SymbolRegistry};
    use std::sync::Arc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> PriceFetcher {
        let source = HttpPriceSource::new(server.uri()).unwrap();
        PriceFetcher::new(SymbolRegistry::builtin(), Arc::new(source))
    }

    #[tokio::test]
    async fn test_coin_price_tool() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .and(query_param("ids", "bitcoin"))
            .and(query_param("vs_currencies", "usd"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"bitcoin": {"usd": 65000.5}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tool = CoinPriceTool::new(fetcher_for(&server));
        let result = tool.execute(json!({"coin_symbol": "btc"})).await.unwrap();

        assert_eq!(result.output, "BTC price: $65,000.50 USD");
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn test_coin_price_tool_other_currency() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .and(query_param("vs_currencies", "eur"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ethereum": {"eur": 2950.1}})),
            )
            .mount(&server)
            .await;

        let tool = CoinPriceTool::new(fetcher_for(&server));
        let result = tool
            .execute(json!({"coin_symbol": "ETH", "currency": "EUR"}))
            .await
            .unwrap();

        assert_eq!(result.output, "ETH price: €2,950.10 EUR");
    }

    #[tokio::test]
    async fn test_coin_price_tool_unsupported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = CoinPriceTool::new(fetcher_for(&server));
        let err = tool.execute(json!({"coin_symbol": "XYZ"})).await.unwrap_err();
        assert!(matches!(err, cg_core::Error::UnsupportedSymbol(_)));
    }

    #[tokio::test]
    async fn test_coin_price_tool_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let tool = CoinPriceTool::new(fetcher_for(&server));
        let err = tool.execute(json!({"coin_symbol": "BTC"})).await.unwrap_err();
        assert!(matches!(err, cg_core::Error::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn test_coin_price_tool_missing_price() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bitcoin": {}})))
            .mount(&server)
            .await;

        let tool = CoinPriceTool::new(fetcher_for(&server));
        let err = tool.execute(json!({"coin_symbol": "BTC"})).await.unwrap_err();
        assert!(matches!(err, cg_core::Error::PriceNotFound { .. }));
    }

    #[tokio::test]
    async fn test_coin_price_tool_invalid_input() {
        let server = MockServer::start().await;
        let tool = CoinPriceTool::new(fetcher_for(&server));

        let err = tool.execute(json!({"symbol": "BTC"})).await.unwrap_err();
        assert!(matches!(err, cg_core::Error::ToolExecution(_)));
    }

    #[tokio::test]
    async fn test_multiple_prices_tool() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .and(query_param("ids", "bitcoin,ethereum"))
            .and(query_param("vs_currencies", "usd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "bitcoin": {"usd": 65000.5},
                "ethereum": {"usd": 3200.0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = MultiplePricesTool::new(fetcher_for(&server));
        let result = tool
            .execute(json!({"coin_symbols": ["BTC", "XYZ", "ETH"]}))
            .await
            .unwrap();

        assert_eq!(
            result.data,
            Some(json!({"BTC": "$65,000.50", "ETH": "$3,200.00"}))
        );
    }

    #[tokio::test]
    async fn test_multiple_prices_tool_no_supported_symbols() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = MultiplePricesTool::new(fetcher_for(&server));
        let err = tool
            .execute(json!({"coin_symbols": ["XYZ", "ABC"]}))
            .await
            .unwrap_err();
        assert!(matches!(err, cg_core::Error::NoSupportedSymbols));
    }

    #[tokio::test]
    async fn test_multiple_prices_tool_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let tool = MultiplePricesTool::new(fetcher_for(&server));
        let err = tool
            .execute(json!({"coin_symbols": ["BTC", "ETH"]}))
            .await
            .unwrap_err();
        assert!(matches!(err, cg_core::Error::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn test_multiple_prices_tool_invalid_input() {
        let server = MockServer::start().await;
        let tool = MultiplePricesTool::new(fetcher_for(&server));

        let err = tool.execute(json!({"coin_symbols": "BTC"})).await.unwrap_err();
        assert!(matches!(err, cg_core::Error::ToolExecution(_)));
    }

    #[tokio::test]
    async fn test_supported_coins_tool() {
        let server = MockServer::start().await;
        let tool = SupportedCoinsTool::new(fetcher_for(&server));

        let result = tool.execute(json!({})).await.unwrap();
        let data = result.data.unwrap();

        assert_eq!(data.as_object().unwrap().len(), 11);
        assert_eq!(data["BTC"], "bitcoin");
        assert_eq!(data["AVAX"], "avalanche-2");
    }
}
