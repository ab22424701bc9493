//! Round engine: owns the live round and classifies submissions.
//!
//! ## State machine
//!
//! - **No round**: after construction. `submit` fails with
//!   `EngineError::NoActiveRound`.
//! - **In round**: after `start_round`. Every later `start_round` replaces
//!   the round and clears its history.
//!
//! Classification is a pure function of the title, history, candidate and
//! lexicon. The only side effect of `submit` is recording an accepted word,
//! which happens after the pipeline has run.
//!
//! The engine has no internal locking. Callers sharing it between threads
//! must serialize `start_round` and `submit` themselves.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::RoundConfig;
use crate::core::word::normalize;
use crate::error::EngineError;
use crate::lexicon::Lexicon;

use super::rejection::{RejectionMessage, RejectionReason};
use super::round::Round;
use super::rule::{first_violation, RuleContext};

/// Outcome of classifying one candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionResult {
    /// Word accepted; holds the normalized word.
    Accepted(String),
    /// Word rejected by the first failing rule.
    Rejected {
        reason: RejectionReason,
        message: RejectionMessage,
    },
}

impl SubmissionResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted(_))
    }

    /// Rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            SubmissionResult::Accepted(_) => None,
            SubmissionResult::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// Accepted word, if any.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            SubmissionResult::Accepted(word) => Some(word.as_str()),
            SubmissionResult::Rejected { .. } => None,
        }
    }
}

/// Validation engine for one player.
///
/// Generic over the lexicon so tests can plug in a fixed in-memory set
/// and callers can share one lexicon through `&L` or `Arc<L>`.
///
/// ## Example
///
/// ```
/// use word_scramble::lexicon::WordSet;
/// use word_scramble::rules::{RejectionReason, RoundEngine};
///
/// let mut engine = RoundEngine::new(WordSet::from_lines("cat\nact\ntac"));
/// engine.start_round("cat").unwrap();
///
/// assert!(engine.submit("act").unwrap().is_accepted());
/// assert_eq!(
///     engine.submit("ACT").unwrap().reason(),
///     Some(RejectionReason::NotOriginal)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine<L> {
    lexicon: L,
    config: RoundConfig,
    round: Option<Round>,
}

impl<L: Lexicon> RoundEngine<L> {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new(lexicon: L) -> Self {
        Self::with_config(lexicon, RoundConfig::default())
    }

    /// Create an engine with a custom configuration.
    #[must_use]
    pub fn with_config(lexicon: L, config: RoundConfig) -> Self {
        Self {
            lexicon,
            config,
            round: None,
        }
    }

    /// Start a new round, discarding the previous one.
    pub fn start_round(&mut self, title: &str) -> Result<(), EngineError> {
        if title.is_empty() {
            return Err(EngineError::EmptyTitle);
        }
        info!(title, "round started");
        self.round = Some(Round::new(title));
        Ok(())
    }

    /// Resume from a saved round snapshot.
    ///
    /// A round with an empty title is refused and the live round is kept.
    pub fn restore_round(&mut self, round: Round) -> Result<(), EngineError> {
        if round.title().is_empty() {
            return Err(EngineError::EmptyTitle);
        }
        info!(title = round.title(), accepted = round.accepted_count(), "round restored");
        self.round = Some(round);
        Ok(())
    }

    /// Classify a candidate without recording it.
    pub fn classify(&self, candidate: &str) -> Result<SubmissionResult, EngineError> {
        let round = self.round.as_ref().ok_or(EngineError::NoActiveRound)?;
        let candidate = normalize(candidate);

        let ctx = RuleContext {
            candidate: &candidate,
            round,
            lexicon: &self.lexicon,
            min_length: self.config.min_length,
        };

        let result = match first_violation(&ctx) {
            None => SubmissionResult::Accepted(candidate),
            Some(reason) => SubmissionResult::Rejected {
                reason,
                message: reason.message(&candidate, round.title_key(), self.config.min_length),
            },
        };
        Ok(result)
    }

    /// Classify a candidate and record it if accepted.
    pub fn submit(&mut self, candidate: &str) -> Result<SubmissionResult, EngineError> {
        let result = self.classify(candidate)?;

        match &result {
            SubmissionResult::Accepted(word) => {
                debug!(candidate, word = word.as_str(), "word accepted");
                if let Some(round) = self.round.as_mut() {
                    round.record(word.clone());
                }
            }
            SubmissionResult::Rejected { reason, .. } => {
                debug!(candidate, reason = %reason, "word rejected");
            }
        }

        Ok(result)
    }

    /// Check if a round is live.
    #[must_use]
    pub fn in_round(&self) -> bool {
        self.round.is_some()
    }

    /// The live round, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Title of the live round in display casing.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.round.as_ref().map(Round::title)
    }

    /// Accepted words, most recent first. Empty before the first round.
    pub fn used_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.round
            .iter()
            .flat_map(|round| round.used_words().iter())
            .map(String::as_str)
    }

    #[must_use]
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }
}
