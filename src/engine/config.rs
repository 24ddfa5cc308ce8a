//! Engine configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a [`GameEngine`](super::GameEngine).
///
/// The default gives every round ten minutes and keeps scores in memory
/// only.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// How long an unguessed round may run before it expires.
    pub round_timeout: Duration,

    /// Score store file. `None` keeps the ledger in memory only.
    pub score_store: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            round_timeout: Duration::from_secs(600),
            score_store: None,
        }
    }
}

impl EngineConfig {
    /// Override the round timeout.
    #[must_use]
    pub fn with_round_timeout(mut self, timeout: Duration) -> Self {
        self.round_timeout = timeout;
        self
    }

    /// Persist scores to the given file.
    #[must_use]
    pub fn with_score_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.score_store = Some(path.into());
        self
    }
}
