//! Guess normalization and outcome reporting.
//!
//! Guesses arrive as raw chat text. Trivial formatting differences
//! (casing, punctuation, stray whitespace) must not cause false
//! negatives, but the guess still has to name the whole word: there is
//! no substring or fuzzy matching.

/// Canonicalize text for guess comparison.
///
/// Lowercases (Unicode-aware), drops every non-alphanumeric character,
/// and collapses internal whitespace runs to a single space:
/// `"  Ice   Cream! "` becomes `"ice cream"`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else if c.is_alphanumeric() {
            // Lowercasing can expand to multiple chars and may introduce
            // combining marks (e.g. U+0130); keep only the alphanumerics.
            for lc in c.to_lowercase().filter(|lc| lc.is_alphanumeric()) {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(lc);
            }
        }
        // Everything else is punctuation: dropped.
    }

    out
}

/// Outcome of checking one chat message as a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// First correct guess of the round; one point awarded.
    Correct,
    /// The message came from the room's current host. Host messages are
    /// never scored, even when they name the secret word.
    FromHost,
    /// No active game, round already solved, or the text does not match.
    Miss,
}

impl GuessOutcome {
    /// Whether this guess solved the round.
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }

    /// Whether the message came from the room's current host.
    #[must_use]
    pub fn is_from_host(self) -> bool {
        matches!(self, GuessOutcome::FromHost)
    }
}
