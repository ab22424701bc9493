//! Start-word list loading.
//!
//! Titles are drawn from a newline-delimited word list. A list that is
//! missing or yields zero words is replaced by a single fallback word, so
//! title selection never runs on an empty list. This policy lives here at
//! the loading boundary; `WordSet` and the engine never substitute words.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::lexicon::WordSet;

/// Ordered list of candidate title words.
///
/// Words keep their original casing for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    fallback: bool,
}

impl WordList {
    /// Build from newline-delimited text.
    ///
    /// Lines are trimmed and blank lines are skipped. The result may be empty.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        Self {
            words: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            fallback: false,
        }
    }

    /// Read a word list from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_lines(&text);
        debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Read a word list, substituting `fallback` when the file is missing,
    /// unreadable, or empty.
    #[must_use]
    pub fn load_or_fallback(path: impl AsRef<Path>, fallback: &str) -> Self {
        match Self::load(path) {
            Ok(list) => list.or_fallback(fallback),
            Err(err) => {
                warn!(error = %err, fallback, "word list unavailable, using fallback word");
                Self::fallback(fallback)
            }
        }
    }

    /// Single-word list holding `word`.
    #[must_use]
    pub fn fallback(word: &str) -> Self {
        Self {
            words: vec![word.trim().to_string()],
            fallback: true,
        }
    }

    /// Replace an empty list with the fallback word.
    #[must_use]
    pub fn or_fallback(self, fallback: &str) -> Self {
        if self.words.is_empty() {
            warn!(fallback, "word list is empty, using fallback word");
            Self::fallback(fallback)
        } else {
            self
        }
    }

    /// True if this list is the substituted fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build a lexicon holding every word of this list.
    #[must_use]
    pub fn to_word_set(&self) -> WordSet {
        self.words.iter().collect()
    }
}
