//! Dotted firmware version comparison.
//!
//! Versions are compared on their first three numeric components. An empty
//! component reads as `0`. A component that is missing or not a number
//! sorts below any numeric one, so `"1.8"` < `"1.8.0"` and `"0"` < `"0.0.1"`.
//! Comparison never fails.

use std::cmp::Ordering;

/// Number of components that take part in a comparison.
const COMPONENTS: usize = 3;

/// Sentinel meaning "no bound" or "support unknown".
pub const UNBOUNDED: &str = "0";

fn components(version: &str) -> [Option<u64>; COMPONENTS] {
    let mut out = [None; COMPONENTS];
    for (slot, part) in out.iter_mut().zip(version.split('.')) {
        let part = part.trim();
        *slot = if part.is_empty() {
            Some(0)
        } else {
            part.parse().ok()
        };
    }
    out
}

/// Compare two dotted version strings.
pub fn version_compare(a: &str, b: &str) -> Ordering {
    let a = components(a);
    let b = components(b);
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = match (x, y) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Whether `version` is the "no bound" sentinel.
pub fn is_unbounded(version: &str) -> bool {
    version == UNBOUNDED
}
