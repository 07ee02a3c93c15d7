//! Bet escalation and call resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::lifecycle::apply_loss;
use crate::domain::rules::valid_face_range;
use crate::domain::state::{
    current_raiser, last_raiser, require_cup, GameState, Phase, PlayerId,
};
use crate::errors::domain::DomainError;

/// A claim: at least `count` dice across all live cups show `face`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub count: u32,
    pub face: u8,
}

impl Bet {
    pub fn new(count: u32, face: u8) -> Self {
        Self { count, face }
    }
}

/// One player's cup as revealed at call time.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealedCup {
    pub player: PlayerId,
    /// Face values, lowest first.
    pub dice: Vec<u8>,
    /// Dice in this cup showing the called bet's face.
    pub face_count: u8,
}

/// Result of resolving a call, describing what happened and what the
/// external renderer needs to show.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CallOutcome {
    pub round_no: u32,
    pub bet: Bet,
    /// Whether the table held at least `bet.count` dice showing `bet.face`.
    pub bet_met: bool,
    /// Total dice showing the bet's face across all live cups.
    pub total: u32,
    pub caller: PlayerId,
    /// Player who made the last raise.
    pub raiser: PlayerId,
    /// The caller when the bet held, otherwise the last raiser.
    pub loser: PlayerId,
    /// Cups in seating order at call time, before any elimination.
    pub revealed: Vec<RevealedCup>,
    /// Loser was removed from the live seating by the mode's policy.
    pub loser_removed: bool,
    /// The game reached its stopping condition.
    pub finished: bool,
}

/// Replace the current bet with a strictly greater one.
///
/// Only the player at the raise cursor may act. Validation order: face in
/// range, count positive, face not lowered, count not lowered (unless
/// count-reset is enabled and the face strictly increased), and the bet
/// actually changed. Nothing is mutated on failure.
pub fn raise_bet(
    state: &mut GameState,
    who: PlayerId,
    bet: Bet,
) -> Result<(), DomainError> {
    if state.phase != Phase::RoundOpen {
        return Err(DomainError::RoundNotOpen);
    }
    if current_raiser(state) != Some(who) {
        return Err(DomainError::NotYourTurn);
    }

    let sides = state.config.dice_sides;
    if !valid_face_range(sides).contains(&bet.face) {
        return Err(DomainError::InvalidFace { sides });
    }
    if bet.count < 1 {
        return Err(DomainError::InvalidCount);
    }

    if let Some(current) = state.current_bet {
        if bet.face < current.face {
            return Err(DomainError::FaceDecreased);
        }
        if bet.count < current.count {
            // A lowered count rides only on a strictly raised face, and only
            // when the table plays with count reset.
            if !(state.config.count_reset_on_raise && bet.face > current.face) {
                return Err(DomainError::CountDecreased);
            }
        }
        if bet == current {
            return Err(DomainError::BetNotRaised);
        }
    }

    state.current_bet = Some(bet);
    state.raiser_cursor += 1;
    debug!(
        player = who,
        count = bet.count,
        face = bet.face,
        "bet raised"
    );
    Ok(())
}

/// Challenge the current bet: reveal all cups, tally the bet's face, pick
/// the loser, and apply the mode's elimination policy.
pub fn call_bet(
    state: &mut GameState,
    who: PlayerId,
) -> Result<CallOutcome, DomainError> {
    if state.phase != Phase::RoundOpen {
        return Err(DomainError::RoundNotOpen);
    }
    if !state.is_seated(who) {
        return Err(DomainError::NotInGame);
    }
    let Some(bet) = state.current_bet else {
        return Err(DomainError::NoBetToCall);
    };
    let raiser = last_raiser(state).ok_or_else(|| {
        DomainError::invariant("open round with empty seating (call_bet)")
    })?;

    let mut revealed = Vec::with_capacity(state.seating.len());
    let mut total: u32 = 0;
    for idx in 0..state.seating.len() {
        let player = state.seating[idx];
        let cup = require_cup(state, player, "call_bet")?;
        let face_count = cup.count(bet.face);
        total += face_count as u32;
        revealed.push(RevealedCup {
            player,
            dice: cup.faces(),
            face_count,
        });
    }

    let bet_met = total >= bet.count;
    let loser = if bet_met { who } else { raiser };

    let effect = apply_loss(state, loser)?;
    state.phase = if effect.finished {
        Phase::Finished
    } else {
        Phase::RoundResolved
    };

    debug!(
        round = state.round_no,
        caller = who,
        loser,
        total,
        bet_met,
        finished = effect.finished,
        "bet called"
    );
    Ok(CallOutcome {
        round_no: state.round_no,
        bet,
        bet_met,
        total,
        caller: who,
        raiser,
        loser,
        revealed,
        loser_removed: effect.removed,
        finished: effect.finished,
    })
}

/// A player's own dice for the current (or just-resolved) round, as a flat
/// ordered sequence of face values.
pub fn peek(state: &GameState, who: PlayerId) -> Result<Vec<u8>, DomainError> {
    if state.round_no == 0 {
        return Err(DomainError::NoRoundYet);
    }
    match state.cups.get(&who) {
        Some(cup) => Ok(cup.faces()),
        None => Err(DomainError::NotInGame),
    }
}
