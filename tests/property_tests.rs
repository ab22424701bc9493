//! Property tests for the validation pipeline.
//!
//! Titles and candidates are drawn from a small alphabet so that letter
//! collisions (and therefore both possible and impossible candidates) are
//! common.

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use word_scramble::{RejectionReason, RoundEngine, WordSet};

/// Reference multiset check, independent of `LetterPool`.
fn is_sub_multiset(candidate: &str, title: &str) -> bool {
    let mut counts: FxHashMap<char, i32> = FxHashMap::default();
    for c in title.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in candidate.chars() {
        let count = counts.entry(c).or_insert(0);
        *count -= 1;
        if *count < 0 {
            return false;
        }
    }
    true
}

/// A title plus a strictly shorter word spelled from its letters.
fn title_and_subword() -> impl Strategy<Value = (String, String)> {
    "[a-e]{4,8}".prop_flat_map(|title| {
        let letters: Vec<char> = title.chars().collect();
        let len = letters.len();
        (Just(title), prop::sample::subsequence(letters, 3..len))
    })
    .prop_map(|(title, letters)| (title, letters.into_iter().collect::<String>()))
}

/// A title plus one of its prefixes shorter than three characters.
fn title_and_short_prefix() -> impl Strategy<Value = (String, String)> {
    ("[a-e]{3,8}", 0usize..3).prop_map(|(title, n)| {
        let prefix: String = title.chars().take(n).collect();
        (title, prefix)
    })
}

proptest! {
    /// NotPossible is reported exactly when the letters don't fit.
    #[test]
    fn prop_not_possible_iff_not_sub_multiset(
        title in "[a-e]{1,8}",
        candidate in "[a-f]{0,6}",
    ) {
        let mut engine = RoundEngine::new(WordSet::new());
        engine.start_round(&title).unwrap();

        let result = engine.submit(&candidate).unwrap();
        let not_possible = result.reason() == Some(RejectionReason::NotPossible);

        prop_assert_eq!(not_possible, !is_sub_multiset(&candidate, &title));
    }

    /// Anything shorter than three characters that fits is TooShort, even if real.
    #[test]
    fn prop_short_words_rejected((title, sub) in title_and_short_prefix()) {
        let mut engine = RoundEngine::new(WordSet::from_lines(&sub));
        engine.start_round(&title).unwrap();

        prop_assert_eq!(engine.submit(&sub).unwrap().reason(), Some(RejectionReason::TooShort));
    }

    /// An accepted word resubmitted in any case is NotOriginal.
    #[test]
    fn prop_resubmission_not_original((title, sub) in title_and_subword()) {
        let mut engine = RoundEngine::new(WordSet::from_lines(&sub));
        engine.start_round(&title).unwrap();

        prop_assert!(engine.submit(&sub).unwrap().is_accepted());
        prop_assert_eq!(
            engine.submit(&sub.to_uppercase()).unwrap().reason(),
            Some(RejectionReason::NotOriginal)
        );
        prop_assert_eq!(engine.used_words().count(), 1);
    }

    /// Spellable, long enough, not the title, but unknown: NotReal.
    #[test]
    fn prop_unknown_words_not_real((title, sub) in title_and_subword()) {
        let mut engine = RoundEngine::new(WordSet::new());
        engine.start_round(&title).unwrap();

        prop_assert_eq!(engine.submit(&sub).unwrap().reason(), Some(RejectionReason::NotReal));
    }

    /// The title itself is always EqualsTitle, even when it is in the lexicon.
    #[test]
    fn prop_title_rejected(title in "[a-e]{3,8}") {
        let mut engine = RoundEngine::new(WordSet::from_lines(&title));
        engine.start_round(&title).unwrap();

        prop_assert_eq!(
            engine.submit(&title.to_uppercase()).unwrap().reason(),
            Some(RejectionReason::EqualsTitle)
        );
    }

    /// A new round forgets everything accepted under the old one.
    #[test]
    fn prop_start_round_resets((title, sub) in title_and_subword()) {
        let mut engine = RoundEngine::new(WordSet::from_lines(&sub));
        engine.start_round(&title).unwrap();
        prop_assert!(engine.submit(&sub).unwrap().is_accepted());

        engine.start_round(&title).unwrap();
        prop_assert_eq!(engine.used_words().count(), 0);
        prop_assert!(engine.submit(&sub).unwrap().is_accepted());
    }
}
