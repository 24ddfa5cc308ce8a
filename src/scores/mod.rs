//! Persistent per-room score ledger.
//!
//! Scores live independently of room game state: they survive game stop
//! and restart, and survive process restart through a JSON score store.
//! Persistence is strictly best-effort: a failing store degrades the
//! ledger to in-memory for the rest of the process and never interrupts
//! game logic.
//!
//! ## Key Types
//!
//! - `ScoreLedger`: in-memory totals with write-through persistence
//! - `ScoreStore`: the JSON file on disk

pub mod ledger;
pub mod store;

pub use ledger::ScoreLedger;
pub use store::{ScoreStore, ScoreTable};
