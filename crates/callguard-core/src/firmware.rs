//! Effective firmware range resolution.
//!
//! The range a method call may run on starts from the method's base range,
//! is narrowed by the coin's declared minimum firmware, and is finally
//! adjusted by the first matching configured override.

use std::cmp::Ordering;

use crate::coin::CoinDescriptor;
use crate::range::{FirmwareRange, Generation, OverrideEntry};
use crate::version::{is_unbounded, version_compare, UNBOUNDED};

/// Compute the firmware range for calling `method` with `coin`.
///
/// `base` is left untouched; the result is a fresh value. Resolution cannot
/// fail: when no override matches, the coin-adjusted range is returned.
pub fn resolve_firmware_range(
    method: &str,
    coin: Option<&CoinDescriptor>,
    base: &FirmwareRange,
    overrides: &[OverrideEntry],
) -> FirmwareRange {
    let mut current = base.clone();

    if let Some(coin) = coin {
        apply_coin_support(&mut current, coin);
    }

    let Some(entry) = find_override(method, coin, overrides) else {
        return current;
    };

    if !entry.applies_to(method) {
        return current;
    }

    if let Some(min) = &entry.min {
        for g in Generation::ALL {
            raise(&mut current.get_mut(g).min, &min[g.index()]);
        }
    }
    // Uses the same raise-only rule as `min`: an override cannot lower a max.
    if let Some(max) = &entry.max {
        for g in Generation::ALL {
            raise(&mut current.get_mut(g).max, &max[g.index()]);
        }
    }

    current
}

/// Lift each generation's minimum to the coin's declared support, or clear
/// it when the coin declares none for that generation.
fn apply_coin_support(range: &mut FirmwareRange, coin: &CoinDescriptor) {
    for g in Generation::ALL {
        let slot = &mut range.get_mut(g).min;
        match coin.support.get(g) {
            None => *slot = UNBOUNDED.to_owned(),
            Some(declared) => {
                if version_compare(declared, slot) == Ordering::Greater {
                    *slot = declared.to_owned();
                }
            }
        }
    }
}

/// First entry selecting `coin`, else the first coinless entry scoped to `method`.
pub fn find_override<'a>(
    method: &str,
    coin: Option<&CoinDescriptor>,
    overrides: &'a [OverrideEntry],
) -> Option<&'a OverrideEntry> {
    coin.and_then(|coin| overrides.iter().find(|entry| selects_coin(entry, coin)))
        .or_else(|| {
            overrides.iter().find(|entry| {
                entry.is_coinless()
                    && entry
                        .excluded_methods
                        .as_ref()
                        .is_some_and(|methods| methods.iter().any(|m| m == method))
            })
        })
}

fn selects_coin(entry: &OverrideEntry, coin: &CoinDescriptor) -> bool {
    let by_type = matches!(
        (&entry.coin_type, &coin.coin_type),
        (Some(wanted), Some(actual)) if wanted == actual
    );
    by_type
        || entry
            .coin
            .as_ref()
            .is_some_and(|selector| selector.matches(&coin.shortcut))
}

fn raise(slot: &mut String, target: &str) {
    if is_unbounded(slot) || version_compare(slot, target) == Ordering::Less {
        *slot = target.to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{CoinSelector, GenerationRange};

    fn base() -> FirmwareRange {
        FirmwareRange::new(
            GenerationRange::new("1.6.0", "0"),
            GenerationRange::new("2.0.5", "0"),
        )
    }

    fn btc() -> CoinDescriptor {
        CoinDescriptor::new(0, "BTC")
            .with_type("bitcoin")
            .with_support(Generation::One, "1.6.2")
            .with_support(Generation::Two, "2.0.5")
    }

    #[test]
    fn test_no_coin_no_overrides() {
        let range = resolve_firmware_range("getAddress", None, &base(), &[]);
        assert_eq!(range, base());
    }

    #[test]
    fn test_coin_raises_minimum() {
        let range = resolve_firmware_range("getAddress", Some(&btc()), &base(), &[]);
        assert_eq!(range.gen_one.min, "1.6.2");
        // Equal support does not change the minimum.
        assert_eq!(range.gen_two.min, "2.0.5");
    }

    #[test]
    fn test_coin_never_lowers_minimum() {
        let coin = CoinDescriptor::new(0, "BTC")
            .with_support(Generation::One, "1.5.0")
            .with_support(Generation::Two, "2.0.0");
        let range = resolve_firmware_range("getAddress", Some(&coin), &base(), &[]);
        assert_eq!(range, base());
    }

    #[test]
    fn test_unsupported_generation_cleared() {
        let coin = CoinDescriptor::new(60, "ETH").with_support(Generation::One, "1.6.2");
        let range = resolve_firmware_range("getAddress", Some(&coin), &base(), &[]);
        assert_eq!(range.gen_one.min, "1.6.2");
        assert_eq!(range.gen_two.min, "0");
    }

    #[test]
    fn test_base_not_mutated() {
        let base = base();
        let snapshot = base.clone();
        let coin = CoinDescriptor::new(60, "ETH");
        let overrides = vec![OverrideEntry {
            coin: Some(CoinSelector::One("eth".into())),
            min: Some(["1.8.0".into(), "2.1.0".into()]),
            ..Default::default()
        }];

        let first = resolve_firmware_range("getAddress", Some(&coin), &base, &overrides);
        let second = resolve_firmware_range("getAddress", Some(&coin), &base, &overrides);

        assert_eq!(first, second);
        assert_eq!(base, snapshot);
        assert_ne!(first, base);
    }

    #[test]
    fn test_override_by_coin_type() {
        let overrides = vec![OverrideEntry {
            coin_type: Some("bitcoin".into()),
            min: Some(["1.9.0".into(), "2.1.0".into()]),
            ..Default::default()
        }];
        let range = resolve_firmware_range("signTransaction", Some(&btc()), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.9.0");
        assert_eq!(range.gen_two.min, "2.1.0");
    }

    #[test]
    fn test_override_by_shortcut_case_insensitive() {
        let overrides = vec![OverrideEntry {
            coin: Some(CoinSelector::Many(vec!["ltc".into(), "btc".into()])),
            min: Some(["1.7.0".into(), "2.0.9".into()]),
            ..Default::default()
        }];
        let range = resolve_firmware_range("getAddress", Some(&btc()), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.7.0");
        assert_eq!(range.gen_two.min, "2.0.9");
    }

    #[test]
    fn test_override_min_never_lowers() {
        let overrides = vec![OverrideEntry {
            coin_type: Some("bitcoin".into()),
            min: Some(["1.0.0".into(), "2.0.0".into()]),
            ..Default::default()
        }];
        let range = resolve_firmware_range("getAddress", Some(&btc()), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.6.2");
        assert_eq!(range.gen_two.min, "2.0.5");
    }

    #[test]
    fn test_override_replaces_sentinel() {
        // Coin without gen two support clears the minimum, the override sets it again.
        let coin = CoinDescriptor::new(144, "XRP").with_support(Generation::One, "1.6.0");
        let overrides = vec![OverrideEntry {
            coin: Some(CoinSelector::One("xrp".into())),
            min: Some(["0".into(), "2.0.8".into()]),
            ..Default::default()
        }];
        let range = resolve_firmware_range("getAddress", Some(&coin), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.6.0");
        assert_eq!(range.gen_two.min, "2.0.8");
    }

    #[test]
    fn test_first_match_wins() {
        let overrides = vec![
            OverrideEntry {
                coin: Some(CoinSelector::One("btc".into())),
                min: Some(["1.7.0".into(), "2.1.0".into()]),
                ..Default::default()
            },
            OverrideEntry {
                coin_type: Some("bitcoin".into()),
                min: Some(["1.9.0".into(), "2.3.0".into()]),
                ..Default::default()
            },
        ];
        let range = resolve_firmware_range("getAddress", Some(&btc()), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.7.0");
    }

    #[test]
    fn test_exclusion_gate() {
        let overrides = vec![OverrideEntry {
            coin_type: Some("bitcoin".into()),
            excluded_methods: Some(vec!["signTx".into()]),
            min: Some(["1.9.0".into(), "2.3.0".into()]),
            ..Default::default()
        }];
        let coin = btc();
        let expected = resolve_firmware_range("getAddress", Some(&coin), &base(), &[]);

        let range = resolve_firmware_range("getAddress", Some(&coin), &base(), &overrides);
        assert_eq!(range, expected);

        let range = resolve_firmware_range("signTx", Some(&coin), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.9.0");
    }

    #[test]
    fn test_gated_coin_entry_hides_method_fallback() {
        let overrides = vec![
            OverrideEntry {
                coin_type: Some("bitcoin".into()),
                excluded_methods: Some(vec!["signTx".into()]),
                min: Some(["1.9.0".into(), "2.3.0".into()]),
                ..Default::default()
            },
            OverrideEntry {
                excluded_methods: Some(vec!["getAddress".into()]),
                min: Some(["1.8.0".into(), "2.2.0".into()]),
                ..Default::default()
            },
        ];
        let range = resolve_firmware_range("getAddress", Some(&btc()), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.6.2");
    }

    #[test]
    fn test_method_fallback_without_coin() {
        let overrides = vec![
            OverrideEntry {
                coin_type: Some("ethereum".into()),
                min: Some(["1.8.0".into(), "2.1.0".into()]),
                ..Default::default()
            },
            OverrideEntry {
                excluded_methods: Some(vec!["getAccountInfo".into()]),
                min: Some(["1.9.0".into(), "2.3.0".into()]),
                ..Default::default()
            },
        ];
        let range = resolve_firmware_range("getAccountInfo", None, &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.9.0");
        assert_eq!(range.gen_two.min, "2.3.0");

        let range = resolve_firmware_range("getAddress", None, &base(), &overrides);
        assert_eq!(range, base());
    }

    #[test]
    fn test_method_fallback_when_coin_unmatched() {
        let overrides = vec![OverrideEntry {
            excluded_methods: Some(vec!["getAccountInfo".into()]),
            min: Some(["1.9.0".into(), "2.3.0".into()]),
            ..Default::default()
        }];
        let range = resolve_firmware_range("getAccountInfo", Some(&btc()), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.9.0");
    }

    #[test]
    fn test_absent_coin_type_does_not_match_absent() {
        let coin = CoinDescriptor::new(60, "ETH")
            .with_support(Generation::One, "1.6.2")
            .with_support(Generation::Two, "2.0.7");
        let overrides = vec![OverrideEntry {
            coin: Some(CoinSelector::One("xrp".into())),
            min: Some(["1.9.0".into(), "2.3.0".into()]),
            ..Default::default()
        }];
        let range = resolve_firmware_range("getAddress", Some(&coin), &base(), &overrides);
        assert_eq!(range.gen_one.min, "1.6.2");
    }

    #[test]
    fn test_max_override_only_raises() {
        let mut capped = base();
        capped.gen_one.max = "1.9.0".into();
        capped.gen_two.max = "2.4.0".into();

        let overrides = vec![OverrideEntry {
            coin_type: Some("bitcoin".into()),
            max: Some(["1.8.0".into(), "2.5.0".into()]),
            ..Default::default()
        }];
        let range = resolve_firmware_range("getAddress", Some(&btc()), &capped, &overrides);

        // A lower override max leaves the existing cap in place.
        assert_eq!(range.gen_one.max, "1.9.0");
        assert_eq!(range.gen_two.max, "2.5.0");
    }

    #[test]
    fn test_max_override_fills_unbounded() {
        let overrides = vec![OverrideEntry {
            coin_type: Some("bitcoin".into()),
            max: Some(["1.8.0".into(), "2.5.0".into()]),
            ..Default::default()
        }];
        let range = resolve_firmware_range("getAddress", Some(&btc()), &base(), &overrides);
        assert_eq!(range.gen_one.max, "1.8.0");
        assert_eq!(range.gen_two.max, "2.5.0");
    }
}
