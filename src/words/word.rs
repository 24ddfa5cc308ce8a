//! The secret word assigned to a host.

use crate::guess::normalize;

/// A secret word: the literal form shown to the host and the normalized
/// form used for guess comparison.
///
/// Both forms are derived together at construction, so they can never
/// drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    display: String,
    normalized: String,
}

impl Word {
    /// Create a word, deriving its normalized comparison form.
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let normalized = normalize(&display);
        Self {
            display,
            normalized,
        }
    }

    /// The literal word, original casing preserved, for showing the host.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The canonicalized form used for comparison.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether a raw guess names this word exactly, after normalization.
    ///
    /// Whole-word equality only: substrings and extra words never match.
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        normalize(guess) == self.normalized
    }
}
