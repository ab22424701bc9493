//! Known-word lookup and word-list loading.
//!
//! - `Lexicon`: trait the rule pipeline uses for the Real check
//! - `WordSet`: in-memory, case-insensitive `Lexicon`
//! - `WordList`: ordered start words, with the fallback policy

pub mod word_set;
pub mod word_list;

pub use word_set::{Lexicon, WordSet};
pub use word_list::WordList;
