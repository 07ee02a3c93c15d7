//! Deterministic per-test RNG seeds.
//!
//! Tests name their seed after themselves so scenarios stay reproducible
//! without sharing dice sequences between unrelated tests.

/// Derive a stable 64-bit seed from a test name (FNV-1a).
pub fn from_name(name: &str) -> u64 {
    let mut hash: u64 = 0xCBF2_9CE4_8422_2325;
    for byte in name.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01B3);
    }
    hash
}
