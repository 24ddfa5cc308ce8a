//! The game engine: room lifecycle, host rotation, guessing, timeouts.
//!
//! One [`GameEngine`] instance owns every room's state and the score
//! ledger. The chat transport drives it with synchronous calls and
//! renders the plain values it gets back; the engine never calls out and
//! never schedules anything itself.
//!
//! ## Key Types
//!
//! - `EngineConfig`: round timeout and optional score-store path
//! - `GameEngine`: the state machine itself

pub mod config;
pub mod game;
mod round;

pub use config::EngineConfig;
pub use game::GameEngine;
