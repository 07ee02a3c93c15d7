//! Host-facing registry of game instances keyed by session.
//!
//! The engine never assumes a global singleton; the host owns a registry and
//! addresses one game per independent match (e.g. one per channel). Access
//! goes through [`GameRegistry::with_game`], whose per-key lock serializes
//! mutations so at most one operation is in flight per instance.

use dashmap::DashMap;
use rand::Rng;
use tracing::info;

use crate::domain::config::GameConfig;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::{GameState, PlayerId};

/// Opaque match/session key chosen by the host (e.g. a channel id).
pub type SessionKey = i64;

#[derive(Debug, Default)]
pub struct GameRegistry {
    games: DashMap<SessionKey, GameState>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }

    /// Create a game under `key` with a seed drawn from the thread RNG.
    /// Returns `false` and leaves the existing game alone if the key is
    /// already occupied.
    pub fn create(&self, key: SessionKey, creator: PlayerId, config: GameConfig) -> bool {
        self.create_seeded(key, creator, config, rand::rng().random())
    }

    /// Create a game with an explicit seed (deterministic replays, tests).
    pub fn create_seeded(
        &self,
        key: SessionKey,
        creator: PlayerId,
        config: GameConfig,
        seed: u64,
    ) -> bool {
        if self.games.contains_key(&key) {
            return false;
        }
        self.games.insert(key, GameState::new(creator, config, seed));
        info!(key, creator, "game created");
        true
    }

    /// Run `f` against the game under `key`, holding its lock for the
    /// duration. Returns `None` if no game exists there.
    pub fn with_game<R>(
        &self,
        key: SessionKey,
        f: impl FnOnce(&mut GameState) -> R,
    ) -> Option<R> {
        self.games.get_mut(&key).map(|mut game| f(&mut game))
    }

    /// Public projection of the game under `key`.
    pub fn snapshot(&self, key: SessionKey) -> Option<GameSnapshot> {
        self.games.get(&key).map(|game| snapshot(&game))
    }

    /// Discard the game under `key`. Returns whether one existed.
    pub fn remove(&self, key: SessionKey) -> bool {
        let removed = self.games.remove(&key).is_some();
        if removed {
            info!(key, "game removed");
        }
        removed
    }

    /// Replace the game under `key` with a fresh lobby for the same creator
    /// and config, under a new seed. Returns whether a game existed.
    pub fn reset(&self, key: SessionKey) -> bool {
        let seed = rand::rng().random();
        let reset = self.with_game(key, |game| {
            *game = GameState::new(game.creator, game.config, seed);
        });
        if reset.is_some() {
            info!(key, "game reset");
        }
        reset.is_some()
    }

    pub fn contains(&self, key: SessionKey) -> bool {
        self.games.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
