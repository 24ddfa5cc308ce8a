//! Word pool: fixed catalog, uniform random draw.
//!
//! The catalog is immutable after construction and must be non-empty.
//! An empty pool is a configuration error rejected at startup, not a
//! runtime condition the engine has to survive mid-round.

use std::fs;
use std::path::Path;

use crate::core::EngineRng;
use crate::error::EngineError;

/// Catalog bundled with the crate, used when no word file is supplied.
const BUILTIN_CATALOG: &str = include_str!("builtin_words.txt");

/// Fixed catalog of candidate secret words with uniform random draw.
///
/// Draws are with replacement: the same word may recur across draws and
/// across rooms.
#[derive(Clone, Debug)]
pub struct WordPool {
    words: Vec<String>,
    rng: EngineRng,
}

impl WordPool {
    /// Create a pool from a catalog, seeding the RNG from OS entropy.
    ///
    /// Fails with [`EngineError::EmptyCatalog`] if `words` is empty.
    pub fn new(words: Vec<String>) -> Result<Self, EngineError> {
        Self::with_rng(words, EngineRng::from_entropy())
    }

    /// Create a pool with an explicit RNG, for reproducible draws.
    pub fn with_rng(words: Vec<String>, rng: EngineRng) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(Self { words, rng })
    }

    /// Load a catalog from a file: one word per line, `#` comments and
    /// blank lines skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let text = fs::read_to_string(path)?;
        Self::new(parse_catalog(&text))
    }

    /// The catalog bundled with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(parse_catalog(BUILTIN_CATALOG)).expect("builtin catalog is non-empty")
    }

    /// Number of words in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty catalog cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw one word uniformly at random, with replacement.
    pub fn draw(&mut self) -> &str {
        self.rng
            .choose(&self.words)
            .map(String::as_str)
            .expect("catalog validated non-empty at construction")
    }
}

fn parse_catalog(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}
