//! Test fixtures and helpers.
//!
//! A small coin registry and configuration document shaped like the ones
//! shipped with the client, plus the default method range.

use callguard_config::{CoinRegistry, Config};
use callguard_core::{CoinDescriptor, FirmwareRange, GenerationRange};

/// Coin document used by [`TestFixture`].
pub const COINS_JSON: &str = r#"[
    { "slip44": 0, "type": "bitcoin", "shortcut": "BTC",
      "support": { "trezor1": "1.5.2", "trezor2": "2.0.5" } },
    { "slip44": 1, "type": "bitcoin", "shortcut": "TEST",
      "support": { "trezor1": "1.5.2", "trezor2": "2.0.5" } },
    { "slip44": 5, "type": "bitcoin", "shortcut": "DASH",
      "support": { "trezor1": "1.5.2", "trezor2": "2.0.5" } },
    { "slip44": 60, "type": "ethereum", "shortcut": "ETH",
      "support": { "trezor1": "1.6.2", "trezor2": "2.0.7" } },
    { "slip44": 144, "type": "misc", "shortcut": "XRP",
      "support": { "trezor1": false, "trezor2": "2.0.8" } },
    { "slip44": 1815, "type": "misc", "shortcut": "ADA",
      "support": { "trezor2": "2.3.2" } }
]"#;

/// Configuration document used by [`TestFixture`].
pub const CONFIG_JSON: &str = r#"{
    "supportedFirmware": [
        { "coin": ["xrp", "txrp"], "min": ["0", "2.0.8"] },
        { "coin": ["bnb"], "min": ["0", "2.3.0"] },
        { "coinType": "ethereum", "excludedMethods": ["ethereumSignTypedData"],
          "min": ["1.9.0", "2.3.0"] },
        { "excludedMethods": ["getAccountInfo"], "min": ["1.9.0", "2.3.0"] },
        { "coin": ["ada", "tada"], "min": ["0", "2.3.2"] },
        { "coin": "dash", "max": ["1.10.0", "2.4.0"] }
    ]
}"#;

/// Registry, configuration and base range for resolution tests.
pub struct TestFixture {
    pub registry: CoinRegistry,
    pub config: Config,
    pub base: FirmwareRange,
}

impl TestFixture {
    /// Build the fixture from the bundled documents.
    pub fn new() -> Self {
        Self {
            registry: CoinRegistry::from_json_str(COINS_JSON).expect("bundled coins parse"),
            config: Config::from_json_str(CONFIG_JSON).expect("bundled config parses"),
            base: default_range(),
        }
    }

    /// Look up a bundled coin.
    pub fn coin(&self, shortcut: &str) -> CoinDescriptor {
        self.registry
            .by_shortcut(shortcut)
            .cloned()
            .unwrap_or_else(|| panic!("no fixture coin {shortcut}"))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Default method range: any firmware from 1.0.0 / 2.0.0 up.
pub fn default_range() -> FirmwareRange {
    FirmwareRange::new(
        GenerationRange::new("1.0.0", "0"),
        GenerationRange::new("2.0.0", "0"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use callguard_core::Generation;

    #[test]
    fn test_fixture_loads() {
        let fixture = TestFixture::new();
        assert_eq!(fixture.registry.len(), 6);
        assert_eq!(fixture.config.overrides().len(), 6);
    }

    #[test]
    fn test_fixture_coin() {
        let fixture = TestFixture::new();
        let xrp = fixture.coin("xrp");
        assert_eq!(xrp.slip44, 144);
        assert_eq!(xrp.support.get(Generation::One), None);
        assert_eq!(xrp.support.get(Generation::Two), Some("2.0.8"));
    }
}
