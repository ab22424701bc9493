//! Round configuration.
//!
//! Sessions are configured at startup with a `RoundConfig`:
//! - `min_length`: shortest candidate the LongEnough rule accepts
//! - `fallback_word`: title used when the start-word list is empty

use serde::{Deserialize, Serialize};

/// Default minimum candidate length, in characters.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Default title when no start words could be loaded.
pub const DEFAULT_FALLBACK_WORD: &str = "silkworm";

/// Configuration shared by the engine and the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Candidates shorter than this many characters are rejected.
    pub min_length: usize,

    /// Single-word list substituted for a missing or empty start list.
    pub fallback_word: String,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            fallback_word: DEFAULT_FALLBACK_WORD.to_string(),
        }
    }
}

impl RoundConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum candidate length.
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the fallback title.
    ///
    /// Panics if `word` is blank; the fallback must always be usable as a title.
    #[must_use]
    pub fn with_fallback_word(mut self, word: impl Into<String>) -> Self {
        let word = word.into();
        assert!(!word.trim().is_empty(), "Fallback word must not be blank");
        self.fallback_word = word;
        self
    }
}
