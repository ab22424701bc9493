//! Core building blocks: letter handling, RNG, configuration.
//!
//! Nothing here knows about rounds or rules; the `rules` and `game`
//! modules are built on top of these.

pub mod word;
pub mod rng;
pub mod config;

pub use word::{can_spell, char_len, normalize, LetterPool};
pub use rng::{FixedPicker, RandomPicker, WordRng, WordRngState};
pub use config::{RoundConfig, DEFAULT_FALLBACK_WORD, DEFAULT_MIN_LENGTH};
