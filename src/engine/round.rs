//! Per-room round state.

use std::time::{Duration, Instant};

use crate::core::PlayerId;
use crate::words::Word;

/// State of the game running in one room.
///
/// Presence of this value in the engine's room map is what "a game is
/// active" means. A fresh game has no host and no word until the first
/// host assignment.
#[derive(Clone, Debug)]
pub(crate) struct RoundState {
    host: Option<PlayerId>,
    word: Option<Word>,
    guessed: bool,
    guesser: Option<PlayerId>,
    started_at: Option<Instant>,
}

impl RoundState {
    /// A freshly started game: no host, no word, no round clock.
    pub(crate) fn idle() -> Self {
        Self {
            host: None,
            word: None,
            guessed: false,
            guesser: None,
            started_at: None,
        }
    }

    /// Assign a host and word, clearing the guess state and stamping the
    /// round clock. The sole place the clock resets.
    pub(crate) fn begin(&mut self, host: PlayerId, word: Word) {
        self.host = Some(host);
        self.word = Some(word);
        self.guessed = false;
        self.guesser = None;
        self.started_at = Some(Instant::now());
    }

    /// Record the winning guesser.
    pub(crate) fn mark_guessed(&mut self, guesser: PlayerId) {
        debug_assert!(self.host != Some(guesser), "a host cannot guess their own word");
        self.guessed = true;
        self.guesser = Some(guesser);
    }

    pub(crate) fn host(&self) -> Option<PlayerId> {
        self.host
    }

    pub(crate) fn word(&self) -> Option<&Word> {
        self.word.as_ref()
    }

    pub(crate) fn is_guessed(&self) -> bool {
        self.guessed
    }

    pub(crate) fn guesser(&self) -> Option<PlayerId> {
        self.guesser
    }

    /// Time since the round clock was stamped, `None` before the first
    /// host assignment.
    pub(crate) fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|started| started.elapsed())
    }
}
