//! Letter handling shared by the rule pipeline.
//!
//! All comparisons work on Unicode scalar values (`char`), never on
//! grapheme clusters or bytes. Case folding maps each character on its
//! own with `char::to_lowercase`, so a letter folds the same way wherever
//! it sits in a word (no final-sigma rule). No normalization form is
//! applied, so a precomposed letter and its decomposed spelling are
//! different letters.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Normalize a word for comparison.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

/// Number of characters in a word (not bytes).
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Multiset of letters available for spelling.
///
/// Built from a title word; each letter can be taken at most once.
/// Most titles fit inline, so no allocation happens for them.
///
/// ```
/// use word_scramble::core::LetterPool;
///
/// let mut pool = LetterPool::new("cat");
/// assert!(pool.take('a'));
/// assert!(!pool.take('a'));
/// assert_eq!(pool.remaining(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterPool {
    letters: SmallVec<[char; 16]>,
}

impl LetterPool {
    /// Create a pool from the lowercase letters of `word`.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    /// Take one copy of `letter` out of the pool.
    ///
    /// Returns false if no copy is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(idx) => {
                self.letters.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Consume the letters of `word` from the pool.
    ///
    /// Returns false as soon as a letter is missing. The pool is left
    /// partially consumed in that case.
    pub fn spell(&mut self, word: &str) -> bool {
        word.chars()
            .flat_map(char::to_lowercase)
            .all(|c| self.take(c))
    }

    /// Letters still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Check whether `candidate` can be spelled from the letters of `title`.
#[must_use]
pub fn can_spell(title: &str, candidate: &str) -> bool {
    LetterPool::new(title).spell(candidate)
}
