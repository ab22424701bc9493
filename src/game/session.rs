//! Game session wiring word list, lexicon, picker and engine.

use tracing::info;

use crate::core::config::RoundConfig;
use crate::core::rng::{RandomPicker, WordRng};
use crate::error::EngineError;
use crate::lexicon::{Lexicon, WordList, WordSet};
use crate::rules::{RoundEngine, SubmissionResult};

/// One player's game: draws titles and forwards submissions to the engine.
#[derive(Clone, Debug)]
pub struct WordScramble<L, P> {
    words: WordList,
    engine: RoundEngine<L>,
    picker: P,
}

impl<L: Lexicon, P: RandomPicker> WordScramble<L, P> {
    /// Create a session. No round is started yet.
    ///
    /// An empty `words` list is replaced by the configured fallback word.
    pub fn new(words: WordList, lexicon: L, picker: P, config: RoundConfig) -> Self {
        let words = words.or_fallback(&config.fallback_word);
        Self {
            words,
            engine: RoundEngine::with_config(lexicon, config),
            picker,
        }
    }

    /// Pick a random title and start a fresh round with it.
    ///
    /// Returns the new title.
    pub fn new_round(&mut self) -> Result<&str, EngineError> {
        let title = self
            .picker
            .pick(self.words.words())
            .unwrap_or(&self.engine.config().fallback_word)
            .to_string();
        info!(title = title.as_str(), pool = self.words.len(), "title drawn");
        self.engine.start_round(&title)?;
        Ok(self.engine.title().unwrap_or_default())
    }

    /// Submit a candidate to the live round.
    pub fn submit(&mut self, candidate: &str) -> Result<SubmissionResult, EngineError> {
        self.engine.submit(candidate)
    }

    /// Title of the live round.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.engine.title()
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.engine.used_words()
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn engine(&self) -> &RoundEngine<L> {
        &self.engine
    }
}

/// Builder for creating a `WordScramble`.
#[derive(Clone, Debug, Default)]
pub struct WordScrambleBuilder {
    config: RoundConfig,
    words: Option<WordList>,
    dictionary: Option<WordSet>,
}

impl WordScrambleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RoundConfig) -> Self {
        self.config = config;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.config = self.config.with_min_length(min_length);
        self
    }

    pub fn fallback_word(mut self, word: impl Into<String>) -> Self {
        self.config = self.config.with_fallback_word(word);
        self
    }

    /// Start words titles are drawn from.
    pub fn words(mut self, words: WordList) -> Self {
        self.words = Some(words);
        self
    }

    /// Dictionary for the Real rule. Defaults to the start words.
    pub fn dictionary(mut self, dictionary: WordSet) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Build a session with a seeded RNG and start the first round.
    pub fn build(self, seed: u64) -> Result<WordScramble<WordSet, WordRng>, EngineError> {
        self.build_with_picker(WordRng::new(seed))
    }

    /// Build a session with a custom picker and start the first round.
    pub fn build_with_picker<P: RandomPicker>(
        self,
        picker: P,
    ) -> Result<WordScramble<WordSet, P>, EngineError> {
        let words = self
            .words
            .unwrap_or_default()
            .or_fallback(&self.config.fallback_word);
        let dictionary = self.dictionary.unwrap_or_else(|| words.to_word_set());

        let mut game = WordScramble::new(words, dictionary, picker, self.config);
        game.new_round()?;
        Ok(game)
    }
}
