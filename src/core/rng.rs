//! Deterministic random title selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical title sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Pluggable**: Sessions pick titles through `RandomPicker`, so tests
//!   can substitute `FixedPicker`
//!
//! ```
//! use word_scramble::core::{RandomPicker, WordRng};
//!
//! let words = vec!["silkworm".to_string(), "agitated".to_string()];
//!
//! let mut rng1 = WordRng::new(42);
//! let mut rng2 = WordRng::new(42);
//! assert_eq!(rng1.pick(&words), rng2.pick(&words));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of title words.
///
/// Implementations choose one entry of a non-empty word list.
/// Returns `None` only for an empty list.
pub trait RandomPicker {
    /// Choose an index into a list of `len` words.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    /// Choose a word from `words`.
    fn pick<'a>(&mut self, words: &'a [String]) -> Option<&'a str> {
        let idx = self.pick_index(words.len())?;
        words.get(idx).map(String::as_str)
    }
}

/// Seeded RNG for uniform title selection.
///
/// Uses ChaCha8 so a seed reproduces the same rounds on every platform.
#[derive(Clone, Debug)]
pub struct WordRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl WordRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> WordRngState {
        WordRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &WordRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomPicker for WordRng {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.gen_range_usize(0..len))
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Picker that walks a fixed sequence of indices.
///
/// Indices wrap modulo the list length, and the sequence repeats once
/// exhausted. An empty sequence always picks index 0.
#[derive(Clone, Debug, Default)]
pub struct FixedPicker {
    indices: Vec<usize>,
    cursor: usize,
}

impl FixedPicker {
    /// Create a picker over the given indices.
    #[must_use]
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            cursor: 0,
        }
    }

    /// Always pick the first word.
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }
}

impl RandomPicker for FixedPicker {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let raw = if self.indices.is_empty() {
            0
        } else {
            let raw = self.indices[self.cursor % self.indices.len()];
            self.cursor += 1;
            raw
        };
        Some(raw % len)
    }
}
