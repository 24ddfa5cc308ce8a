//! Durable score storage: a single JSON record on disk.
//!
//! Layout: room id (text key) to participant id (text key) to point
//! total. Saving then loading reproduces identical totals with the
//! identifiers restored to their native integer form.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::core::{PlayerId, RoomId};
use crate::error::EngineError;

/// The full score record: per-room, per-participant totals.
pub type ScoreTable = FxHashMap<RoomId, FxHashMap<PlayerId, u64>>;

/// Handle to the score file.
///
/// The file is not touched until the first `load` or `save`; failures are
/// reported as [`EngineError`] and it is the ledger's job to decide they
/// are survivable.
#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Create a store handle for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full score record.
    pub fn load(&self) -> Result<ScoreTable, EngineError> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write the full score record, replacing the previous contents.
    pub fn save(&self, scores: &ScoreTable) -> Result<(), EngineError> {
        let json = serde_json::to_vec_pretty(scores)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
