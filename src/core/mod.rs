//! Core engine types: room and participant identifiers, RNG.
//!
//! Identifiers are opaque stable integers supplied by the chat transport;
//! the engine compares and hashes them but never interprets them.

pub mod ids;
pub mod rng;

pub use ids::{PlayerId, RoomId};
pub use rng::EngineRng;
