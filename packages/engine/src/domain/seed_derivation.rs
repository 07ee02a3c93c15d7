//! RNG seed derivation for deterministic game behavior.
//!
//! A game stores one base seed; each consumer of randomness derives its own
//! seed from it so that replaying a game with the same base seed reproduces
//! every roll and the initial turn order exactly.

/// Derive the seed used to cast all cups for one round.
///
/// Unique per (game, round) combination.
pub fn derive_roll_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(1)
}

/// Derive the seed used for the one-time turn-order shuffle at game start.
pub fn derive_order_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(2)
}
