//! Error types for cg-core

use thiserror::Error;

/// Main error type for cg-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported coin symbol: {0}")]
    UnsupportedSymbol(String),

    #[error("No supported coin symbols were provided")]
    NoSupportedSymbols,

    #[error("Price index unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Price for {symbol} in {currency} not available from the price index")]
    PriceNotFound { symbol: String, currency: String },

    #[error("Price index did not return prices for the requested symbols")]
    EmptyUpstreamResult,

    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable snake_case tag for the error variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedSymbol(_) => "unsupported_symbol",
            Self::NoSupportedSymbols => "no_supported_symbols",
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
            Self::PriceNotFound { .. } => "price_not_found",
            Self::EmptyUpstreamResult => "empty_upstream_result",
            Self::ToolExecution(_) => "tool_execution",
            Self::Config(_) => "config",
            Self::Json(_) => "json",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for cg-core
pub type Result<T> = std::result::Result<T, Error>;
