//! Deterministic dice casting.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::state::{Cup, GameState};
use crate::errors::domain::DomainError;

/// Roll one cup of `dice` dice with `sides` faces.
fn roll_cup<R: Rng>(rng: &mut R, sides: u8, dice: u8) -> Cup {
    let mut cup = Cup::empty(sides);
    for _ in 0..dice {
        cup.add(rng.random_range(1..=sides));
    }
    cup
}

/// Recreate every live player's cup from independent uniform draws.
///
/// Iterates seating order with a single seeded generator, so a fixed seed and
/// seating produce identical cups. Each player rolls their current allotment.
pub fn cast_cups(state: &mut GameState, seed: u64) -> Result<(), DomainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let sides = state.config.dice_sides;

    state.cups.clear();
    for idx in 0..state.seating.len() {
        let player = state.seating[idx];
        let dice = state
            .dice_left
            .get(&player)
            .copied()
            .ok_or_else(|| {
                DomainError::invariant("seated player has no dice counter (cast_cups)")
            })?;
        let cup = roll_cup(&mut rng, sides, dice);
        state.cups.insert(player, cup);
    }
    Ok(())
}
