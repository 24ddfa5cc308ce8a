//! Deterministic random number generation for word draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draw sequence
//! - **Entropy-seeded by default**: Production engines draw unpredictably
//!
//! Seeded construction makes pool draws reproducible in tests. Uses
//! ChaCha8 for speed while maintaining solid statistical quality.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing the word pool.
#[derive(Clone, Debug)]
pub struct EngineRng {
    inner: ChaCha8Rng,
}

impl EngineRng {
    /// Create a new RNG with the given seed.
    ///
    /// The same seed produces an identical sequence of draws.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` only for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

impl Default for EngineRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
