//! The game state machine.
//!
//! ## Operation ordering
//!
//! `check_guess` is a per-room read-modify-write: the first-correct-guess
//! guarantee holds only if calls for the same room are serialized by the
//! caller. Different rooms are fully independent. The periodic timeout
//! driver may race a guess within one poll tick; `check_timeout` re-reads
//! the guessed flag, so a round solved in the meantime never reports
//! expiry.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{PlayerId, RoomId};
use crate::guess::GuessOutcome;
use crate::scores::{ScoreLedger, ScoreStore};
use crate::words::{Word, WordPool};

use super::config::EngineConfig;
use super::round::RoundState;

/// The word-guessing game engine.
///
/// Owns all per-room game state and the score ledger. Construct one at
/// process start and pass it to every handler; tests build as many
/// independent engines as they need.
pub struct GameEngine {
    config: EngineConfig,
    pool: WordPool,
    rooms: FxHashMap<RoomId, RoundState>,
    scores: ScoreLedger,
}

impl GameEngine {
    /// Create an engine with the default configuration: ten-minute
    /// rounds, in-memory scores.
    #[must_use]
    pub fn new(pool: WordPool) -> Self {
        Self::with_config(pool, EngineConfig::default())
    }

    /// Create an engine from explicit configuration.
    ///
    /// When `config.score_store` is set, existing totals are loaded now;
    /// a missing or unreadable store starts the ledger empty (logged,
    /// never fatal).
    #[must_use]
    pub fn with_config(pool: WordPool, config: EngineConfig) -> Self {
        let scores = match &config.score_store {
            Some(path) => ScoreLedger::with_store(ScoreStore::new(path)),
            None => ScoreLedger::in_memory(),
        };
        Self {
            config,
            pool,
            rooms: FxHashMap::default(),
            scores,
        }
    }

    // === Room Lifecycle ===

    /// Start a game in a room.
    ///
    /// Returns `false` without touching anything if a game is already
    /// active there. A new game has no host and no word until the first
    /// `set_host`; whatever scores the room already has are left alone.
    pub fn start_game(&mut self, room: RoomId) -> bool {
        if self.rooms.contains_key(&room) {
            return false;
        }
        self.rooms.insert(room, RoundState::idle());
        debug!(%room, "game started");
        true
    }

    /// Stop the game in a room, if any. Scores are untouched.
    pub fn stop_game(&mut self, room: RoomId) {
        if self.rooms.remove(&room).is_some() {
            debug!(%room, "game stopped");
        }
    }

    /// Whether a game is active in a room.
    #[must_use]
    pub fn is_active(&self, room: RoomId) -> bool {
        self.rooms.contains_key(&room)
    }

    /// Every room with an active game, for the timeout driver to poll.
    #[must_use]
    pub fn active_rooms(&self) -> Vec<RoomId> {
        self.rooms.keys().copied().collect()
    }

    // === Host Rotation ===

    /// Make `participant` the room's host and hand them a fresh word.
    ///
    /// Draws from the pool, clears the guess state, and restarts the
    /// round clock (the only operation that does). The current host
    /// asking again is treated identically: new word, fresh clock.
    /// Returns the literal word for display to the new host, or `None`
    /// if no game is active.
    pub fn set_host(&mut self, room: RoomId, participant: PlayerId) -> Option<String> {
        if !self.rooms.contains_key(&room) {
            return None;
        }
        let word = Word::new(self.pool.draw());
        let display = word.display().to_owned();

        let state = self.rooms.get_mut(&room)?;
        state.begin(participant, word);
        debug!(%room, host = %participant, "host assigned");
        Some(display)
    }

    /// The room's current host, if any round has started.
    #[must_use]
    pub fn host(&self, room: RoomId) -> Option<PlayerId> {
        self.rooms.get(&room).and_then(RoundState::host)
    }

    /// The secret word, revealed only to the host.
    ///
    /// `None` for every other participant, so the word cannot leak
    /// through this call.
    #[must_use]
    pub fn host_word(&self, room: RoomId, participant: PlayerId) -> Option<String> {
        let state = self.rooms.get(&room)?;
        if state.host() != Some(participant) {
            return None;
        }
        state.word().map(|word| word.display().to_owned())
    }

    // === Guessing ===

    /// Check one chat message as a guess.
    ///
    /// The host's own messages are never scored, whatever they say. Once
    /// a round is solved, later matches are rejected: the first correct
    /// guess wins. A correct guess awards exactly one point, persisted
    /// before this returns.
    pub fn check_guess(&mut self, room: RoomId, participant: PlayerId, text: &str) -> GuessOutcome {
        let Some(state) = self.rooms.get_mut(&room) else {
            return GuessOutcome::Miss;
        };
        if state.host() == Some(participant) {
            return GuessOutcome::FromHost;
        }
        if state.is_guessed() {
            return GuessOutcome::Miss;
        }
        let matched = state.word().map_or(false, |word| word.matches(text));
        if !matched {
            return GuessOutcome::Miss;
        }

        state.mark_guessed(participant);
        self.scores.add(room, participant, 1);
        debug!(%room, guesser = %participant, "word guessed");
        GuessOutcome::Correct
    }

    /// Whether the room's current round has been solved.
    #[must_use]
    pub fn is_guessed(&self, room: RoomId) -> bool {
        self.rooms
            .get(&room)
            .map_or(false, RoundState::is_guessed)
    }

    /// Who solved the current round, if anyone has.
    #[must_use]
    pub fn guesser(&self, room: RoomId) -> Option<PlayerId> {
        self.rooms.get(&room).and_then(RoundState::guesser)
    }

    // === Round Timeout ===

    /// Whether the room's round has expired.
    ///
    /// True only when a game is active, a round has started, nobody has
    /// guessed, and at least the configured timeout has elapsed. A solved
    /// round never expires, no matter how old; neither does a game whose
    /// first host was never assigned.
    #[must_use]
    pub fn check_timeout(&self, room: RoomId) -> bool {
        let Some(state) = self.rooms.get(&room) else {
            return false;
        };
        if state.is_guessed() {
            return false;
        }
        match state.elapsed() {
            Some(elapsed) => elapsed >= self.config.round_timeout,
            None => false,
        }
    }

    /// Seconds left before the round expires.
    ///
    /// `None` before the first host assignment, zero once expired, whole
    /// (truncated) seconds otherwise.
    #[must_use]
    pub fn remaining_secs(&self, room: RoomId) -> Option<u64> {
        let elapsed = self.rooms.get(&room)?.elapsed()?;
        Some(self.config.round_timeout.saturating_sub(elapsed).as_secs())
    }

    // === Scores ===

    /// A participant's point total for a room.
    #[must_use]
    pub fn score(&self, room: RoomId, participant: PlayerId) -> u64 {
        self.scores.get(room, participant)
    }

    /// Snapshot of every participant's total for a room.
    ///
    /// A copy, safe for the caller to sort or mutate.
    #[must_use]
    pub fn scores(&self, room: RoomId) -> FxHashMap<PlayerId, u64> {
        self.scores.all(room)
    }

    /// Wipe a room's totals. Other rooms are unaffected.
    pub fn reset_scores(&mut self, room: RoomId) {
        self.scores.reset(room);
    }
}
