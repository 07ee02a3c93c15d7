//! Read-only public projections of game state for the external renderer.

use serde::{Deserialize, Serialize};

use crate::domain::betting::Bet;
use crate::domain::config::GameMode;
use crate::domain::state::{current_raiser, GameState, Phase, PlayerId};

/// Serializable mirror of [`Phase`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PhaseView {
    Lobby,
    RoundOpen,
    RoundResolved,
    Finished,
}

impl From<Phase> for PhaseView {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Lobby => PhaseView::Lobby,
            Phase::RoundOpen => PhaseView::RoundOpen,
            Phase::RoundResolved => PhaseView::RoundResolved,
            Phase::Finished => PhaseView::Finished,
        }
    }
}

/// Public info about one seat, in turn order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub player: PlayerId,
    pub dice_left: u8,
    pub losses: u32,
    /// This seat raises next (only ever true while a round is open).
    pub is_raiser: bool,
}

/// Everything a renderer needs to draw the table; no hidden dice.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: PhaseView,
    pub mode: GameMode,
    pub round_no: u32,
    /// Live seats in turn order with the active raiser marked.
    pub seats: Vec<SeatView>,
    /// Players queued to join at the next round start.
    pub pending: Vec<PlayerId>,
    pub current_bet: Option<Bet>,
    /// Player due to raise next, while a round is open.
    pub turn: Option<PlayerId>,
    pub finished: bool,
}

/// Project the public view of a game.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let turn = if state.phase == Phase::RoundOpen {
        current_raiser(state)
    } else {
        None
    };

    let seats = state
        .seating
        .iter()
        .map(|&player| SeatView {
            player,
            dice_left: state.dice_left.get(&player).copied().unwrap_or(0),
            losses: state.losses.get(&player).copied().unwrap_or(0),
            is_raiser: turn == Some(player),
        })
        .collect();

    GameSnapshot {
        phase: state.phase.into(),
        mode: state.config.mode,
        round_no: state.round_no,
        seats,
        pending: state.pending.clone(),
        current_bet: state.current_bet,
        turn,
        finished: state.phase == Phase::Finished,
    }
}
