//! # word-scramble
//!
//! Validation engine for a single-player anagram word game.
//!
//! A round has a title word. The player submits candidates that must be
//! spelled from the title's letters, be new this round, be at least three
//! letters long, differ from the title, and be real words. The engine
//! classifies each candidate as accepted or as exactly one rejection
//! reason.
//!
//! ## Design Principles
//!
//! 1. **Rejections are values**: a bad word is a normal outcome returned as
//!    `SubmissionResult::Rejected`, never an error.
//!
//! 2. **Injected capabilities**: the dictionary (`Lexicon`) and the title
//!    source (`RandomPicker`) are traits, so tests run on fixed word sets
//!    and fixed titles.
//!
//! 3. **No hidden state**: the round is owned by its `RoundEngine`; the
//!    lexicon is read-only after construction.
//!
//! ## Modules
//!
//! - `core`: letter pool, normalization, RNG, configuration
//! - `lexicon`: `Lexicon` trait, `WordSet`, `WordList` loader
//! - `rules`: rule pipeline, rejection reasons, `RoundEngine`
//! - `game`: session that draws titles and drives the engine
//! - `error`: engine and loading errors

pub mod core;
pub mod error;
pub mod lexicon;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    FixedPicker, LetterPool, RandomPicker, RoundConfig, WordRng, WordRngState,
};

pub use crate::error::{EngineError, LoadError};

pub use crate::lexicon::{Lexicon, WordList, WordSet};

pub use crate::rules::{
    RejectionMessage, RejectionReason, Round, RoundEngine, Rule, SubmissionResult,
};

pub use crate::game::{WordScramble, WordScrambleBuilder};
