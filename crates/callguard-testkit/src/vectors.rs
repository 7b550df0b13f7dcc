//! Golden firmware-range vectors.
//!
//! Each vector resolves one method/coin pair against [`TestFixture`] and
//! records the range every implementation must produce.

use callguard_core::{resolve_firmware_range, FirmwareRange, GenerationRange};

use crate::fixtures::TestFixture;

/// A golden resolution vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub method: &'static str,
    /// Fixture coin shortcut, if the call targets a coin.
    pub coin: Option<&'static str>,
    /// Expected `[min, max]` for generation one.
    pub gen_one: [&'static str; 2],
    /// Expected `[min, max]` for generation two.
    pub gen_two: [&'static str; 2],
}

impl GoldenVector {
    pub fn expected(&self) -> FirmwareRange {
        FirmwareRange::new(
            GenerationRange::new(self.gen_one[0], self.gen_one[1]),
            GenerationRange::new(self.gen_two[0], self.gen_two[1]),
        )
    }
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "no coin, no override",
            method: "getAddress",
            coin: None,
            gen_one: ["1.0.0", "0"],
            gen_two: ["2.0.0", "0"],
        },
        GoldenVector {
            name: "coin support raises minimum",
            method: "getAddress",
            coin: Some("BTC"),
            gen_one: ["1.5.2", "0"],
            gen_two: ["2.0.5", "0"],
        },
        GoldenVector {
            name: "method override without coin",
            method: "getAccountInfo",
            coin: None,
            gen_one: ["1.9.0", "0"],
            gen_two: ["2.3.0", "0"],
        },
        GoldenVector {
            name: "method override for unmatched coin",
            method: "getAccountInfo",
            coin: Some("BTC"),
            gen_one: ["1.9.0", "0"],
            gen_two: ["2.3.0", "0"],
        },
        GoldenVector {
            name: "gated coin-type override shadows method override",
            method: "getAccountInfo",
            coin: Some("ETH"),
            gen_one: ["1.6.2", "0"],
            gen_two: ["2.0.7", "0"],
        },
        GoldenVector {
            name: "coin-type override for listed method",
            method: "ethereumSignTypedData",
            coin: Some("ETH"),
            gen_one: ["1.9.0", "0"],
            gen_two: ["2.3.0", "0"],
        },
        GoldenVector {
            name: "generation one unsupported",
            method: "getAddress",
            coin: Some("XRP"),
            gen_one: ["0", "0"],
            gen_two: ["2.0.8", "0"],
        },
        GoldenVector {
            name: "support block without generation one",
            method: "signTransaction",
            coin: Some("ADA"),
            gen_one: ["0", "0"],
            gen_two: ["2.3.2", "0"],
        },
        GoldenVector {
            name: "max override fills unbounded max",
            method: "signTransaction",
            coin: Some("DASH"),
            gen_one: ["1.5.2", "1.10.0"],
            gen_two: ["2.0.5", "2.4.0"],
        },
    ]
}

/// Resolve a vector against the fixture.
pub fn resolve_vector(fixture: &TestFixture, vector: &GoldenVector) -> FirmwareRange {
    let coin = vector.coin.map(|shortcut| fixture.coin(shortcut));
    resolve_firmware_range(
        vector.method,
        coin.as_ref(),
        &fixture.base,
        fixture.config.overrides(),
    )
}

/// Resolve every vector, reporting `(name, matches, actual)`.
pub fn verify_all_vectors() -> Vec<(String, bool, FirmwareRange)> {
    let fixture = TestFixture::new();
    all_vectors()
        .iter()
        .map(|v| {
            let actual = resolve_vector(&fixture, v);
            (v.name.to_string(), actual == v.expected(), actual)
        })
        .collect()
}
