//! Coin registry lookups.
//!
//! Population of the registry (which coins exist, what firmware they need)
//! is owned by whoever ships the coin document. This module only indexes it.

use std::collections::HashMap;
use std::io::Read;

use callguard_core::CoinDescriptor;

use crate::error::Result;

/// Coin descriptors indexed by shortcut and slip44.
#[derive(Debug, Clone, Default)]
pub struct CoinRegistry {
    coins: Vec<CoinDescriptor>,
    /// Lower-cased shortcut -> position in `coins`.
    by_shortcut: HashMap<String, usize>,
}

impl CoinRegistry {
    /// Build a registry. On duplicate shortcuts the first coin wins.
    pub fn new(coins: Vec<CoinDescriptor>) -> Self {
        let mut by_shortcut = HashMap::with_capacity(coins.len());
        for (index, coin) in coins.iter().enumerate() {
            by_shortcut
                .entry(coin.shortcut.to_ascii_lowercase())
                .or_insert(index);
        }
        Self { coins, by_shortcut }
    }

    /// Parse a JSON array of coin descriptors.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(s)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    /// Look up a coin by shortcut, ignoring case.
    pub fn by_shortcut(&self, shortcut: &str) -> Option<&CoinDescriptor> {
        self.by_shortcut
            .get(&shortcut.to_ascii_lowercase())
            .map(|&index| &self.coins[index])
    }

    /// First coin registered under `slip44`.
    pub fn by_slip44(&self, slip44: u32) -> Option<&CoinDescriptor> {
        self.coins.iter().find(|coin| coin.slip44 == slip44)
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoinDescriptor> {
        self.coins.iter()
    }
}
