use std::ops::RangeInclusive;

/// Standard allotment: five dice per player.
pub const DEFAULT_DICE_PER_PLAYER: u8 = 5;
/// Standard cup: six-sided dice.
pub const DEFAULT_DICE_SIDES: u8 = 6;
/// A real match needs an opponent; solo play is opt-in via config.
pub const DEFAULT_MIN_PLAYERS: usize = 2;

pub fn valid_face_range(dice_sides: u8) -> RangeInclusive<u8> {
    1..=dice_sides
}
