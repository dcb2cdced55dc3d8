//! Deterministic string hashing used by pricing and weather generation.
//!
//! The value is part of observable output (prices, forecasts), so the
//! algorithm is frozen: changing it changes every price in the catalog.

/// Multiplier applied per character.
pub const HASH_MULTIPLIER: u32 = 31;

/// Hash a string into a stable unsigned 32-bit integer.
///
/// Iterates Unicode scalar values left to right and accumulates
/// `hash * 31 + codepoint` with 32-bit wraparound. The empty string hashes
/// to `0`.
pub fn stable_hash(input: &str) -> u32 {
    input.chars().fold(0u32, |hash, ch| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(ch as u32)
    })
}
