//! Lexicon trait and its in-memory implementation.

use std::rc::Rc;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::core::word::normalize;

/// Answers "is this a real word?".
///
/// Lookups are case-insensitive. Implementations are read-only once built,
/// so a shared lexicon can be read from several threads without locking.
pub trait Lexicon {
    /// Check if `word` is a known word.
    ///
    /// Must return false for the empty string rather than panic.
    fn contains(&self, word: &str) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Box<L> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Rc<L> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Arc<L> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Set of lowercase words backed by a hash set.
///
/// ## Example
///
/// ```
/// use word_scramble::lexicon::{Lexicon, WordSet};
///
/// let words = WordSet::from_lines("cat\nAct\n\ntac\n");
/// assert_eq!(words.len(), 3);
/// assert!(words.contains("ACT"));
/// assert!(!words.contains("dog"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Create an empty set. It rejects every word.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from newline-delimited text, one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        text.lines().collect()
    }

    /// Add a word. Blank input is ignored; duplicates are harmless.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(normalize(word));
        }
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored (lowercase) words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for WordSet {
    fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.words.contains(&normalize(word))
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let set: WordSet = ["Cat"].into_iter().collect();
        assert!(set.contains("cat"));
        assert!(set.contains("CAT"));
        assert!(set.contains("cAt"));
    }

    #[test]
    fn test_empty_string() {
        let set = WordSet::from_lines("cat\n");
        assert!(!set.contains(""));
    }

    #[test]
    fn test_empty_set_rejects_everything() {
        let set = WordSet::new();
        assert!(set.is_empty());
        assert!(!set.contains("cat"));
    }

    #[test]
    fn test_blank_lines_discarded() {
        let set = WordSet::from_lines("\ncat\n   \r\nact\r\n\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("act"));
        assert!(!set.contains(" "));
    }

    #[test]
    fn test_duplicates_harmless() {
        let set = WordSet::from_lines("cat\nCAT\ncat");
        assert_eq!(set.len(), 1);
        assert!(set.contains("cat"));
    }

    #[test]
    fn test_iter_yields_lowercase() {
        let set = WordSet::from_lines("Cat\nACT");
        let mut words: Vec<_> = set.iter().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["act", "cat"]);
    }

    #[test]
    fn test_extend() {
        let mut set = WordSet::from_lines("cat");
        set.extend(["dog", "", "Bird"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("bird"));
    }

    #[test]
    fn test_shared_lexicon() {
        let set = Arc::new(WordSet::from_lines("cat"));
        let handle = {
            let set = Arc::clone(&set);
            std::thread::spawn(move || set.contains("CAT"))
        };
        assert!(handle.join().unwrap());
        assert!(Lexicon::contains(&set, "cat"));
    }

    #[test]
    fn test_trait_object() {
        let boxed: Box<dyn Lexicon> = Box::new(WordSet::from_lines("cat"));
        assert!(boxed.contains("cat"));
        assert!(!boxed.contains("act"));
    }
}
