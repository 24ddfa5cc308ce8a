//! In-memory score ledger with write-through persistence.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::{PlayerId, RoomId};
use crate::error::EngineError;

use super::store::{ScoreStore, ScoreTable};

/// Per-room, per-participant point totals.
///
/// The ledger's lifecycle is independent of room game state: stopping a
/// game keeps its scores, and only [`ScoreLedger::reset`] ever clears a
/// room's totals.
#[derive(Debug, Default)]
pub struct ScoreLedger {
    scores: ScoreTable,
    store: Option<ScoreStore>,
}

impl ScoreLedger {
    /// Create a ledger with no durable backing.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Create a ledger backed by a score store, loading existing totals.
    ///
    /// A missing file is a normal first boot; an unreadable or corrupt
    /// one is logged. Either way the ledger starts empty rather than
    /// failing startup.
    #[must_use]
    pub fn with_store(store: ScoreStore) -> Self {
        let scores = match store.load() {
            Ok(scores) => scores,
            Err(EngineError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %store.path().display(), "no score store yet, starting empty");
                ScoreTable::default()
            }
            Err(e) => {
                warn!(
                    path = %store.path().display(),
                    error = %e,
                    "score store unreadable, starting with an empty ledger"
                );
                ScoreTable::default()
            }
        };
        Self {
            scores,
            store: Some(store),
        }
    }

    /// Award points, creating zero-initialized entries as needed, then
    /// persist the full record before returning.
    pub fn add(&mut self, room: RoomId, participant: PlayerId, points: u64) {
        *self
            .scores
            .entry(room)
            .or_default()
            .entry(participant)
            .or_insert(0) += points;
        self.persist();
    }

    /// A participant's total for a room, zero if absent.
    #[must_use]
    pub fn get(&self, room: RoomId, participant: PlayerId) -> u64 {
        self.scores
            .get(&room)
            .and_then(|room_scores| room_scores.get(&participant))
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of a room's totals, empty if the room has none.
    ///
    /// The returned map is a copy; mutating it does not touch the ledger.
    #[must_use]
    pub fn all(&self, room: RoomId) -> FxHashMap<PlayerId, u64> {
        self.scores.get(&room).cloned().unwrap_or_default()
    }

    /// Delete a room's totals entirely and persist.
    ///
    /// Other rooms are unaffected.
    pub fn reset(&mut self, room: RoomId) {
        self.scores.remove(&room);
        self.persist();
    }

    /// Best-effort write-through. A failure downgrades to a log line so a
    /// broken disk never blocks scoring; the totals stay correct in
    /// memory for the rest of the process.
    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.scores) {
            warn!(
                path = %store.path().display(),
                error = %e,
                "failed to persist scores, keeping them in memory"
            );
        }
    }
}
