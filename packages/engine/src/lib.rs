//! Round/bet state machine for Liar's Dice (Perudo) matches.
//!
//! The engine owns all in-memory game state and exposes plain synchronous
//! operations for an external command dispatcher: player lifecycle
//! (join/leave/start), round control, bet escalation, and call resolution.
//! It performs no I/O and assumes the host serializes operations per game
//! instance; [`registry::GameRegistry`] provides the per-session instance
//! map a host typically needs.

pub mod domain;
pub mod errors;
pub mod registry;

pub use domain::betting::{call_bet, peek, raise_bet, Bet, CallOutcome, RevealedCup};
pub use domain::config::{GameConfig, GameMode};
pub use domain::lifecycle::{begin_next_round, end_game, join, leave, start, FinalStanding};
pub use domain::snapshot::{snapshot, GameSnapshot};
pub use domain::state::{GameState, Phase, PlayerId};
pub use errors::domain::DomainError;
pub use registry::{GameRegistry, SessionKey};
