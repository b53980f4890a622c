//! Ticker symbol registry

use std::collections::BTreeMap;

/// Built-in ticker -> price index identifier table
const BUILTIN_SYMBOLS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("SOL", "solana"),
    ("MATIC", "matic-network"),
    ("ADA", "cardano"),
    ("DOT", "polkadot"),
    ("LINK", "chainlink"),
    ("AVAX", "avalanche-2"),
    ("UNI", "uniswap"),
    ("USDC", "usd-coin"),
    ("USDT", "tether"),
];

/// Normalize caller input into registry key form
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Immutable mapping from uppercase ticker to price index identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRegistry {
    entries: BTreeMap<String, String>,
}

impl SymbolRegistry {
    /// Registry with the built-in coin table
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_SYMBOLS
                .iter()
                .map(|(ticker, id)| (ticker.to_string(), id.to_string())),
        )
    }

    /// Build a registry from arbitrary entries.
    ///
    /// Tickers are normalized; a later entry for the same ticker wins.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(ticker, id)| (normalize_symbol(ticker.as_ref()), id.into()))
            .collect();
        Self { entries }
    }

    /// Return a new registry with `entries` layered over this one
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (ticker, id) in entries {
            self.entries.insert(normalize_symbol(ticker.as_ref()), id.into());
        }
        self
    }

    /// Resolve a ticker (any case) to its identifier
    pub fn lookup(&self, symbol: &str) -> Option<&str> {
        self.entries.get(&normalize_symbol(symbol)).map(String::as_str)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.lookup(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (ticker, identifier) pairs in ticker order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned copy of the mapping
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
