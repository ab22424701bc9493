//! Word Scramble game session.
//!
//! Glue between the loaded resources and the round engine:
//! - Titles are drawn uniformly from the start-word list
//! - A missing or empty list falls back to a single configured word
//! - Submissions go straight to `RoundEngine`; no rule lives here

mod session;

pub use session::{WordScramble, WordScrambleBuilder};
