//! Firmware ranges and configured overrides.

use serde::{Deserialize, Serialize};

use crate::version::UNBOUNDED;

/// Device model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generation {
    One,
    Two,
}

impl Generation {
    pub const ALL: [Generation; 2] = [Generation::One, Generation::Two];

    /// Position of this generation in `[gen_one, gen_two]` override pairs.
    pub const fn index(&self) -> usize {
        match self {
            Generation::One => 0,
            Generation::Two => 1,
        }
    }
}

/// Supported firmware bounds for one generation. `"0"` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRange {
    pub min: String,
    pub max: String,
}

impl GenerationRange {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

impl Default for GenerationRange {
    fn default() -> Self {
        Self::new(UNBOUNDED, UNBOUNDED)
    }
}

/// Supported firmware bounds for both generations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareRange {
    #[serde(alias = "1")]
    pub gen_one: GenerationRange,
    #[serde(alias = "2")]
    pub gen_two: GenerationRange,
}

impl FirmwareRange {
    pub fn new(gen_one: GenerationRange, gen_two: GenerationRange) -> Self {
        Self { gen_one, gen_two }
    }

    pub fn get(&self, generation: Generation) -> &GenerationRange {
        match generation {
            Generation::One => &self.gen_one,
            Generation::Two => &self.gen_two,
        }
    }

    pub fn get_mut(&mut self, generation: Generation) -> &mut GenerationRange {
        match generation {
            Generation::One => &mut self.gen_one,
            Generation::Two => &mut self.gen_two,
        }
    }
}

/// The `coin` selector of an override entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoinSelector {
    One(String),
    Many(Vec<String>),
}

impl CoinSelector {
    /// Whether `shortcut` is selected. Shortcuts compare case-insensitively.
    pub fn matches(&self, shortcut: &str) -> bool {
        match self {
            CoinSelector::One(s) => s.eq_ignore_ascii_case(shortcut),
            CoinSelector::Many(list) => list.iter().any(|s| s.eq_ignore_ascii_case(shortcut)),
        }
    }
}

/// A configured firmware override.
///
/// Selected by coin family (`coin_type`), by coin shortcut (`coin`), or, when
/// neither is set, by method name alone. `excluded_methods` scopes the entry
/// to the listed methods: an entry that declares it applies only to those.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin: Option<CoinSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_methods: Option<Vec<String>>,
    /// Minimum firmware as `[gen_one, gen_two]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<[String; 2]>,
    /// Maximum firmware as `[gen_one, gen_two]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<[String; 2]>,
}

impl OverrideEntry {
    /// Whether the entry is scoped to `method` (or not scoped at all).
    pub fn applies_to(&self, method: &str) -> bool {
        self.excluded_methods
            .as_ref()
            .map_or(true, |methods| methods.iter().any(|m| m == method))
    }

    /// Whether the entry selects neither a coin family nor a coin.
    pub fn is_coinless(&self) -> bool {
        self.coin_type.is_none() && self.coin.is_none()
    }
}
