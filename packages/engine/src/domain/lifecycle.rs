//! Player lifecycle and round control: join, leave, start, round opening,
//! loss application, and explicit game end.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::config::GameMode;
use crate::domain::rolling::cast_cups;
use crate::domain::seed_derivation::{derive_order_seed, derive_roll_seed};
use crate::domain::state::{require_dice_left, GameState, Phase, PlayerId};
use crate::errors::domain::DomainError;

/// Final per-player tallies returned by [`end_game`], in join order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FinalStanding {
    pub player: PlayerId,
    pub losses: u32,
    pub dice_left: u8,
}

/// Join the game.
///
/// In the lobby the player is seated directly. Once the game has started the
/// player is queued and merged into seating at the next round start, so an
/// open round's seat ordering is never disturbed.
pub fn join(state: &mut GameState, player: PlayerId) -> Result<(), DomainError> {
    if state.phase == Phase::Finished {
        return Err(DomainError::GameFinished);
    }
    if state.in_game(player) {
        return Err(DomainError::AlreadyJoined);
    }

    if state.phase == Phase::Lobby {
        state.seat_player(player);
    } else {
        state.pending.push(player);
        state.roster.push(player);
        state.dice_left.insert(player, state.config.dice_per_player);
        state.losses.insert(player, 0);
    }
    debug!(player, queued = state.phase != Phase::Lobby, "player joined");
    Ok(())
}

/// Leave the game, clearing every trace of the player: seat, queued join,
/// cup, and counters. Not permitted while a round is open.
pub fn leave(state: &mut GameState, player: PlayerId) -> Result<(), DomainError> {
    if state.phase == Phase::RoundOpen {
        return Err(DomainError::RoundAlreadyOpen);
    }
    if !state.in_game(player) {
        return Err(DomainError::NotInGame);
    }

    state.seating.retain(|&p| p != player);
    state.pending.retain(|&p| p != player);
    state.roster.retain(|&p| p != player);
    state.cups.remove(&player);
    state.dice_left.remove(&player);
    state.losses.remove(&player);
    debug!(player, "player left");
    Ok(())
}

/// Start the game: creator-only, lobby-only. Randomizes the turn order once
/// (a seed-derived uniform permutation), then opens round one.
pub fn start(state: &mut GameState, who: PlayerId) -> Result<(), DomainError> {
    if !state.is_creator(who) {
        return Err(DomainError::NotCreator);
    }
    if state.phase != Phase::Lobby {
        return Err(DomainError::GameAlreadyStarted);
    }
    if state.live_count() < state.config.min_players {
        return Err(DomainError::TooFewPlayers {
            min: state.config.min_players,
            have: state.live_count(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(derive_order_seed(state.rng_seed));
    state.seating.shuffle(&mut rng);
    info!(players = state.live_count(), "game started");
    open_round(state)
}

/// Open the next round.
///
/// Merges queued joins, advances the round counter, points the opening
/// raiser at seat `round_no - 1` (one seat later each round), re-rolls every
/// live cup, and clears the bet.
pub fn begin_next_round(state: &mut GameState) -> Result<(), DomainError> {
    match state.phase {
        Phase::Finished => Err(DomainError::GameFinished),
        Phase::RoundOpen => Err(DomainError::RoundAlreadyOpen),
        Phase::Lobby => Err(DomainError::GameNotStarted),
        Phase::RoundResolved => open_round(state),
    }
}

fn open_round(state: &mut GameState) -> Result<(), DomainError> {
    state.seating.append(&mut state.pending);
    if state.seating.is_empty() {
        return Err(DomainError::TooFewPlayers {
            min: state.config.min_players,
            have: 0,
        });
    }

    state.round_no += 1;
    state.raiser_cursor = (state.round_no - 1) as usize;
    cast_cups(state, derive_roll_seed(state.rng_seed, state.round_no))?;
    state.current_bet = None;
    state.phase = Phase::RoundOpen;
    debug!(
        round = state.round_no,
        players = state.live_count(),
        "round opened"
    );
    Ok(())
}

/// End the game explicitly, returning final tallies in join order.
///
/// Creator-gated; hosts with their own admin concept should authorize via
/// [`GameState::is_creator`] and call as the creator when overriding.
pub fn end_game(
    state: &mut GameState,
    who: PlayerId,
) -> Result<Vec<FinalStanding>, DomainError> {
    if state.round_no == 0 {
        return Err(DomainError::GameNotStarted);
    }
    if state.phase == Phase::RoundOpen {
        return Err(DomainError::RoundAlreadyOpen);
    }
    if !state.is_creator(who) {
        return Err(DomainError::NotCreator);
    }

    state.phase = Phase::Finished;
    let standings = final_standings(state);
    info!(rounds = state.round_no, "game ended");
    Ok(standings)
}

fn final_standings(state: &GameState) -> Vec<FinalStanding> {
    state
        .roster
        .iter()
        .map(|&player| FinalStanding {
            player,
            losses: state.losses.get(&player).copied().unwrap_or(0),
            dice_left: state.dice_left.get(&player).copied().unwrap_or(0),
        })
        .collect()
}

/// What applying a loss did to the loser and the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct LossEffect {
    /// Loser was removed from the live seating.
    pub removed: bool,
    /// The mode's stopping condition was met.
    pub finished: bool,
}

/// Apply the mode's elimination policy to the loser of a call.
///
/// The single policy keyed by [`GameMode`] is the only place elimination
/// rules live; the bet/raise/call mechanics are identical across modes.
pub(crate) fn apply_loss(
    state: &mut GameState,
    loser: PlayerId,
) -> Result<LossEffect, DomainError> {
    *state.losses.entry(loser).or_insert(0) += 1;

    match state.config.mode {
        GameMode::SuddenDeath => {
            remove_live(state, loser);
            Ok(LossEffect {
                removed: true,
                finished: state.live_count() <= 1,
            })
        }
        GameMode::LastManStanding => {
            let left = require_dice_left(state, loser, "apply_loss")?.saturating_sub(1);
            state.dice_left.insert(loser, left);
            let removed = left == 0;
            if removed {
                remove_live(state, loser);
            }
            Ok(LossEffect {
                removed,
                finished: state.live_count() <= 1,
            })
        }
        GameMode::FirstElimination => {
            let left = require_dice_left(state, loser, "apply_loss")?.saturating_sub(1);
            state.dice_left.insert(loser, left);
            // The loser keeps their seat; emptying a cup ends the game
            // outright, however many players remain.
            Ok(LossEffect {
                removed: false,
                finished: left == 0,
            })
        }
        GameMode::Infinite => Ok(LossEffect {
            removed: false,
            finished: false,
        }),
    }
}

fn remove_live(state: &mut GameState, player: PlayerId) {
    state.seating.retain(|&p| p != player);
    state.cups.remove(&player);
    state.dice_left.insert(player, 0);
}
