//! # charades-engine
//!
//! A chat-driven word-guessing game engine: one participant (the host) is
//! privately shown a secret word and must get the other participants in
//! the same room to guess it from plain text messages.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: The chat transport (commands, buttons, message
//!    formatting, scheduling) lives outside this crate. Callers invoke
//!    synchronous operations and render the plain values they get back;
//!    the engine never calls out.
//!
//! 2. **Sentinels Over Faults**: Operations attempted with no active game
//!    report "nothing happened" (`false` / `None` / `Miss`) instead of
//!    failing. Callers may arrive out of order; the engine tolerates it.
//!
//! 3. **One Explicit Instance**: All room state and the score ledger hang
//!    off a single [`GameEngine`] constructed at startup and passed to
//!    every handler. Tests build as many independent engines as they like.
//!
//! ## Modules
//!
//! - `core`: Room and participant identifiers, deterministic RNG
//! - `words`: Secret words and the random draw pool
//! - `guess`: Guess normalization and outcome reporting
//! - `engine`: Room lifecycle, host rotation, guessing, round timeouts
//! - `scores`: Persistent per-room score ledger
//! - `error`: Configuration and storage errors

pub mod core;
pub mod words;
pub mod guess;
pub mod engine;
pub mod scores;
pub mod error;

// Re-export commonly used types
pub use crate::core::{EngineRng, PlayerId, RoomId};

pub use crate::words::{Word, WordPool};

pub use crate::guess::{normalize, GuessOutcome};

pub use crate::engine::{EngineConfig, GameEngine};

pub use crate::scores::{ScoreLedger, ScoreStore};

pub use crate::error::EngineError;
