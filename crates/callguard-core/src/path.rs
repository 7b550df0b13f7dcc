//! BIP32 derivation path helpers.

/// High bit marking a hardened derivation index.
pub const HARDENED: u32 = 0x8000_0000;

/// Position of the coin-type segment in a BIP44-style path.
pub const COIN_TYPE_INDEX: usize = 1;

pub const fn to_hardened(index: u32) -> u32 {
    index | HARDENED
}

pub const fn from_hardened(index: u32) -> u32 {
    index & !HARDENED
}

pub const fn is_hardened(index: u32) -> bool {
    index & HARDENED != 0
}

/// The slip44 coin type encoded in `path`, if the path reaches that far.
pub fn coin_type(path: &[u32]) -> Option<u32> {
    path.get(COIN_TYPE_INDEX).copied().map(from_hardened)
}
