//! Domain layer: pure game logic types and operations.

pub mod betting;
pub mod config;
pub mod lifecycle;
pub mod rolling;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;


#[cfg(test)]
mod tests_elimination;

// Re-exports for ergonomics
pub use betting::{call_bet, peek, raise_bet, Bet, CallOutcome, RevealedCup};
pub use config::{GameConfig, GameMode};
pub use lifecycle::{
    begin_next_round, end_game, join, leave, start, FinalStanding,
};
pub use seed_derivation::{derive_order_seed, derive_roll_seed};
pub use snapshot::{snapshot, GameSnapshot, SeatView};
pub use state::{Cup, GameState, Phase, PlayerId};
