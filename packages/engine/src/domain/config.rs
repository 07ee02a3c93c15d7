//! Per-game settings supplied by the host when a game is created.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{
    DEFAULT_DICE_PER_PLAYER, DEFAULT_DICE_SIDES, DEFAULT_MIN_PLAYERS,
};

/// Elimination ruleset applied to the loser of every call resolution.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    /// Losing a single call removes you; last live player wins.
    SuddenDeath,
    /// Each loss costs one die; run out and you are out. Last live player wins.
    LastManStanding,
    /// Each loss costs one die; the first player to run out ends the game.
    FirstElimination,
    /// Losses are only counted; the game runs until ended explicitly.
    Infinite,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Dice each player starts a game with.
    pub dice_per_player: u8,
    /// Faces per die (D6, D20, ...).
    pub dice_sides: u8,
    /// Elimination ruleset.
    pub mode: GameMode,
    /// When true, a raise that strictly increases the face value may lower
    /// the dice count.
    pub count_reset_on_raise: bool,
    /// Players required before the creator may start. May be set to 1 for
    /// lone-player testing.
    pub min_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_per_player: DEFAULT_DICE_PER_PLAYER,
            dice_sides: DEFAULT_DICE_SIDES,
            mode: GameMode::SuddenDeath,
            count_reset_on_raise: false,
            min_players: DEFAULT_MIN_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Builder: set the elimination ruleset.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: set dice count and sides.
    pub fn with_dice(mut self, per_player: u8, sides: u8) -> Self {
        self.dice_per_player = per_player;
        self.dice_sides = sides;
        self
    }

    /// Builder: allow a raised face to reset the required count.
    pub fn with_count_reset(mut self, enabled: bool) -> Self {
        self.count_reset_on_raise = enabled;
        self
    }

    /// Builder: set the minimum player count required to start.
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }
}
