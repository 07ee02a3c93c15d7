//! Domain-level error type for all engine operations.
//!
//! Every variant is a recoverable, user-facing condition detected before any
//! state mutation; the dispatcher presents the message to the end user.
//! `Invariant` is the one exception: it signals an engine defect and should
//! be logged by the host and reported generically.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Player is already seated or queued in this game.
    #[error("you have already joined this game")]
    AlreadyJoined,
    /// Player is not part of this game.
    #[error("you are not in this game")]
    NotInGame,
    /// Operation reserved for the game creator.
    #[error("only the game creator can do that")]
    NotCreator,
    #[error("need at least {min} players to start, have {have}")]
    TooFewPlayers { min: usize, have: usize },
    #[error("the game has already started")]
    GameAlreadyStarted,
    #[error("the game has not started yet")]
    GameNotStarted,
    #[error("the game is finished")]
    GameFinished,
    #[error("a round is already open")]
    RoundAlreadyOpen,
    #[error("no round is open right now")]
    RoundNotOpen,
    #[error("it is not your turn to raise")]
    NotYourTurn,
    #[error("the face value must be between 1 and {sides}")]
    InvalidFace { sides: u8 },
    #[error("the dice count must be at least 1")]
    InvalidCount,
    #[error("cannot lower the face value")]
    FaceDecreased,
    #[error("cannot lower the dice count without raising the face value")]
    CountDecreased,
    #[error("the bet must be raised")]
    BetNotRaised,
    #[error("there is no bet to call")]
    NoBetToCall,
    #[error("no round has started yet")]
    NoRoundYet,
    /// Engine defect: a state invariant did not hold.
    #[error("engine invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
