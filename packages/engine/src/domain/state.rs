use std::collections::HashMap;

use crate::domain::betting::Bet;
use crate::domain::config::GameConfig;
use crate::errors::domain::DomainError;

/// Opaque caller-supplied player identity (e.g. a platform user id). The
/// engine never inspects or mutates it.
pub type PlayerId = i64;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Game created but not yet started; players join freely.
    Lobby,
    /// Dice are cast and the betting sequence is live.
    RoundOpen,
    /// A call has been resolved; the next round has not begun.
    RoundResolved,
    /// The mode's stopping condition was met, or the game was ended.
    Finished,
}

/// One player's hidden dice: a count per face value, rebuilt every round.
///
/// `counts[face - 1]` is the number of dice showing `face`. The sum of all
/// counts equals that player's current die allotment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cup {
    counts: Vec<u8>,
}

impl Cup {
    pub fn empty(dice_sides: u8) -> Self {
        Self {
            counts: vec![0; dice_sides as usize],
        }
    }

    /// Record one die showing `face`. Faces outside the cup are ignored;
    /// rolling always produces in-range faces.
    pub fn add(&mut self, face: u8) {
        if face == 0 {
            return;
        }
        if let Some(slot) = self.counts.get_mut(face as usize - 1) {
            *slot += 1;
        }
    }

    /// Dice in this cup showing `face` (0 for out-of-range faces).
    pub fn count(&self, face: u8) -> u8 {
        if face == 0 {
            return 0;
        }
        self.counts.get(face as usize - 1).copied().unwrap_or(0)
    }

    /// Total dice in the cup.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Flatten to an ordered sequence of face values (lowest face first).
    pub fn faces(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total() as usize);
        for (idx, &n) in self.counts.iter().enumerate() {
            for _ in 0..n {
                out.push(idx as u8 + 1);
            }
        }
        out
    }
}

/// Entire game container, sufficient for all engine operations.
///
/// Fields are public so hosts and tests can project or script state, but all
/// mutation should go through the operation functions in
/// [`lifecycle`](crate::domain::lifecycle) and
/// [`betting`](crate::domain::betting), which validate before committing.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Player who created the game; gates `start` and `end_game`.
    pub creator: PlayerId,
    /// Base seed; round rolls and the turn-order shuffle derive from it.
    pub rng_seed: u64,
    pub phase: Phase,
    /// 0 in the lobby; rounds count from 1.
    pub round_no: u32,
    /// Live players in turn order. Mutated by joins, leaves, eliminations.
    pub seating: Vec<PlayerId>,
    /// Joined after the game started; merged into seating at the next
    /// round start so an open round's seat ordering is never disturbed.
    pub pending: Vec<PlayerId>,
    /// Everyone who joined and has not left, live or eliminated.
    pub roster: Vec<PlayerId>,
    /// Hidden dice per live player, recreated each round.
    pub cups: HashMap<PlayerId, Cup>,
    /// Monotonic raise cursor. The seat it denotes is always taken modulo
    /// the live seating length at read time, never cached, so removals and
    /// wrap-around stay correct.
    pub raiser_cursor: usize,
    /// `None` until the first raise of the round.
    pub current_bet: Option<Bet>,
    /// Current die allotment per player (decremented in attrition modes).
    pub dice_left: HashMap<PlayerId, u8>,
    /// Calls lost per player.
    pub losses: HashMap<PlayerId, u32>,
}

impl GameState {
    /// Create a lobby with the creator already seated.
    pub fn new(creator: PlayerId, config: GameConfig, rng_seed: u64) -> Self {
        let mut state = Self {
            config,
            creator,
            rng_seed,
            phase: Phase::Lobby,
            round_no: 0,
            seating: Vec::new(),
            pending: Vec::new(),
            roster: Vec::new(),
            cups: HashMap::new(),
            raiser_cursor: 0,
            current_bet: None,
            dice_left: HashMap::new(),
            losses: HashMap::new(),
        };
        state.seat_player(creator);
        state
    }

    /// Seat a player directly and initialize their counters.
    pub(crate) fn seat_player(&mut self, player: PlayerId) {
        self.seating.push(player);
        self.roster.push(player);
        self.dice_left.insert(player, self.config.dice_per_player);
        self.losses.insert(player, 0);
    }

    pub fn is_creator(&self, player: PlayerId) -> bool {
        self.creator == player
    }

    /// Whether the player has joined (seated, queued, or eliminated).
    pub fn in_game(&self, player: PlayerId) -> bool {
        self.roster.contains(&player)
    }

    pub fn is_seated(&self, player: PlayerId) -> bool {
        self.seating.contains(&player)
    }

    pub fn live_count(&self) -> usize {
        self.seating.len()
    }
}

/// Seat due to raise next, reduced modulo the live seating length.
///
/// `None` only when seating is empty, which no open round permits.
pub fn current_raiser(state: &GameState) -> Option<PlayerId> {
    if state.seating.is_empty() {
        return None;
    }
    Some(state.seating[state.raiser_cursor % state.seating.len()])
}

/// Seat that made the most recent raise (cursor minus one, modulo the live
/// seating length at read time).
pub fn last_raiser(state: &GameState) -> Option<PlayerId> {
    let len = state.seating.len();
    if len == 0 {
        return None;
    }
    Some(state.seating[(state.raiser_cursor + len - 1) % len])
}

pub fn require_cup<'a>(
    state: &'a GameState,
    player: PlayerId,
    ctx: &'static str,
) -> Result<&'a Cup, DomainError> {
    state.cups.get(&player).ok_or_else(|| {
        DomainError::invariant(format!("seated player has no cup ({ctx})"))
    })
}

pub fn require_dice_left(
    state: &GameState,
    player: PlayerId,
    ctx: &'static str,
) -> Result<u8, DomainError> {
    state.dice_left.get(&player).copied().ok_or_else(|| {
        DomainError::invariant(format!("player has no dice counter ({ctx})"))
    })
}
