//! Coin descriptors as produced by the coin registry.

use serde::{Deserialize, Deserializer, Serialize};

use crate::range::Generation;

/// Minimum firmware per device generation declared by a coin.
///
/// A generation without a version string is not supported (or its support
/// is unknown). Registry documents mark this with `false` or by omitting the
/// key; both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinSupport {
    #[serde(
        default,
        alias = "trezor1",
        deserialize_with = "version_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub gen_one: Option<String>,
    #[serde(
        default,
        alias = "trezor2",
        deserialize_with = "version_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub gen_two: Option<String>,
}

impl CoinSupport {
    pub fn get(&self, generation: Generation) -> Option<&str> {
        match generation {
            Generation::One => self.gen_one.as_deref(),
            Generation::Two => self.gen_two.as_deref(),
        }
    }
}

fn version_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// A registered coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinDescriptor {
    /// Registered slip44 coin type.
    pub slip44: u32,
    /// Coin family (e.g. `"bitcoin"`, `"ethereum"`), if the registry assigns one.
    #[serde(rename = "type", default)]
    pub coin_type: Option<String>,
    pub shortcut: String,
    #[serde(default)]
    pub support: CoinSupport,
}

impl CoinDescriptor {
    pub fn new(slip44: u32, shortcut: impl Into<String>) -> Self {
        Self {
            slip44,
            coin_type: None,
            shortcut: shortcut.into(),
            support: CoinSupport::default(),
        }
    }

    pub fn with_type(mut self, coin_type: impl Into<String>) -> Self {
        self.coin_type = Some(coin_type.into());
        self
    }

    pub fn with_support(mut self, generation: Generation, version: impl Into<String>) -> Self {
        let version = Some(version.into());
        match generation {
            Generation::One => self.support.gen_one = version,
            Generation::Two => self.support.gen_two = version,
        }
        self
    }
}
