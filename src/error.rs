//! Configuration and storage errors.
//!
//! Invalid-state conditions (no active game, word lookup by a non-host)
//! are not errors: those surface as sentinel returns on the engine
//! itself. This module covers the two fault classes that remain: bad
//! startup configuration and score-store I/O.

use thiserror::Error;

/// Errors surfaced by pool construction and the score store.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The word catalog was empty. Rejected eagerly at startup; a pool
    /// that cannot draw is not recoverable mid-round.
    #[error("word catalog is empty")]
    EmptyCatalog,

    /// The score store file could not be read or written.
    #[error("score store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The score store contents did not parse as a score record.
    #[error("score store is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
