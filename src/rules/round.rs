//! Per-round mutable state.
//!
//! A `Round` holds the title word and the words accepted so far. It is
//! replaced wholesale when a new round starts and only grows through
//! accepted submissions.
//!
//! History is an `im::Vector`, so cloning a round for a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::word::normalize;
use crate::error::EngineError;

/// Title word plus accepted-word history.
///
/// Serialized as the title and the history only; the comparison key is
/// rebuilt on load, and a blank title is refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundSnapshot", into = "RoundSnapshot")]
pub struct Round {
    /// Title as supplied, for display.
    title: String,

    /// Lowercase title used by the rules.
    title_key: String,

    /// Accepted words, most recent first. Stored normalized.
    used_words: Vector<String>,
}

impl Round {
    /// Start a fresh round with no accepted words.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            title_key: normalize(title),
            used_words: Vector::new(),
        }
    }

    /// Title in its original casing.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lowercase title for comparisons.
    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &Vector<String> {
        &self.used_words
    }

    /// Check if a normalized word was already accepted.
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Number of accepted words.
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.used_words.len()
    }

    /// Record an accepted word at the front of the history.
    pub(crate) fn record(&mut self, word: String) {
        self.used_words.push_front(word);
    }
}

/// Wire form of a `Round`.
#[derive(Serialize, Deserialize)]
struct RoundSnapshot {
    title: String,
    used_words: Vector<String>,
}

impl TryFrom<RoundSnapshot> for Round {
    type Error = EngineError;

    fn try_from(snapshot: RoundSnapshot) -> Result<Self, Self::Error> {
        if snapshot.title.is_empty() {
            return Err(EngineError::EmptyTitle);
        }
        let mut round = Round::new(&snapshot.title);
        round.used_words = snapshot.used_words.iter().map(|w| normalize(w)).collect();
        Ok(round)
    }
}

impl From<Round> for RoundSnapshot {
    fn from(round: Round) -> Self {
        Self {
            title: round.title,
            used_words: round.used_words,
        }
    }
}
