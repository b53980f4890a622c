//! Configuration management
//!
//! Settings are resolved in this order of precedence:
//! 1. Environment variables
//! 2. `coin-gateway.toml` in the working directory
//! 3. Defaults
//!
//! `${VAR_NAME}` references inside the TOML file are expanded from the
//! environment before parsing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::Error;
use crate::market::SymbolRegistry;

/// Default config file name looked up by [`Config::load`]
pub const CONFIG_FILE_NAME: &str = "coin-gateway.toml";

/// Price index configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketConfig {
    /// Base URL of the CoinGecko-compatible price index
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Currency used when a tool call does not name one
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_currency: default_currency(),
        }
    }
}

/// HTTP API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address for the HTTP API
    #[serde(default = "default_api_host")]
    pub host: String,

    /// Port for the HTTP API
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

/// Main configuration for coin-gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub market: MarketConfig,

    #[serde(default)]
    pub api: ApiConfig,

    /// Extra ticker -> identifier entries layered over the built-in registry
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
}

fn default_base_url() -> String {
    "https://api.coingecko.com/api/v3".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}

fn default_api_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8000
}

impl Config {
    /// Expand `${VAR_NAME}` references with environment values.
    ///
    /// Unset variables expand to an empty string.
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next();

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        let toml_content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let mut cfg = Self::from_toml_str(&toml_content)?;
        cfg.apply_env_overrides();

        Ok(cfg)
    }

    /// Parse configuration from TOML text (no environment overrides)
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let expanded_content = Self::expand_env_vars(content);

        let toml_config: TomlConfig = toml::from_str(&expanded_content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;

        Self::from_toml_config(toml_config)
    }

    /// Load configuration from the default location.
    ///
    /// Uses `./coin-gateway.toml` when present, environment variables only
    /// otherwise.
    pub fn load() -> crate::Result<Self> {
        if Path::new(CONFIG_FILE_NAME).exists() {
            return Self::from_toml_file(CONFIG_FILE_NAME);
        }

        Self::from_env()
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> crate::Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn from_toml_config(toml: TomlConfig) -> crate::Result<Self> {
        let market = toml.market.unwrap_or_default();
        let market_config = MarketConfig {
            base_url: market.base_url.unwrap_or_else(default_base_url),
            default_currency: market
                .default_currency
                .unwrap_or_else(default_currency),
        };

        let api = toml.api.unwrap_or_default();
        let api_config = ApiConfig {
            host: api.host.unwrap_or_else(default_api_host),
            port: api.port.unwrap_or_else(default_api_port),
        };

        let mut symbols = BTreeMap::new();
        for (ticker, id) in toml.symbols.unwrap_or_default() {
            let ticker = ticker.trim().to_uppercase();
            let id = id.trim().to_string();
            if ticker.is_empty() || id.is_empty() {
                return Err(Error::Config(
                    "Symbol entries must have a non-empty ticker and identifier".to_string(),
                ));
            }
            symbols.insert(ticker, id);
        }

        Ok(Config {
            market: market_config,
            api: api_config,
            symbols,
        })
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override settings from a key lookup; empty values are ignored
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = get("PRICE_INDEX_BASE_URL") {
            self.market.base_url = base_url;
        }
        if let Some(currency) = get("DEFAULT_CURRENCY") {
            self.market.default_currency = currency.trim().to_lowercase();
        }
        if let Some(host) = get("API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = get("API_PORT") {
            if let Ok(p) = port.trim().parse() {
                self.api.port = p;
            } else {
                tracing::warn!(value = %port, "Ignoring invalid API_PORT");
            }
        }
    }

    /// Build the symbol registry: built-in table plus configured extras
    pub fn symbol_registry(&self) -> SymbolRegistry {
        SymbolRegistry::builtin().with_entries(self.symbols.clone())
    }
}

/// Top-level TOML file layout
#[derive(Debug, Deserialize)]
struct TomlConfig {
    market: Option<TomlMarketConfig>,
    api: Option<TomlApiConfig>,
    symbols: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlMarketConfig {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    default_currency: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlApiConfig {
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    port: Option<u16>,
}
