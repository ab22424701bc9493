//! The ordered validation rules.
//!
//! Each rule is a yes/no check of a normalized candidate against the live
//! round and the lexicon. `Rule::PIPELINE` fixes the evaluation order;
//! the engine stops at the first failing rule.

use serde::{Deserialize, Serialize};

use crate::core::word::{can_spell, char_len};
use crate::lexicon::Lexicon;

use super::rejection::RejectionReason;
use super::round::Round;

/// Inputs every rule sees.
pub struct RuleContext<'a, L: ?Sized> {
    /// Lowercased candidate.
    pub candidate: &'a str,
    pub round: &'a Round,
    pub lexicon: &'a L,
    pub min_length: usize,
}

/// A single validation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Spellable from the title's letters, each used at most once.
    Possible,
    /// Not already accepted this round.
    Original,
    /// At least `min_length` characters.
    LongEnough,
    /// Not the title itself.
    NotTitle,
    /// Known to the lexicon.
    Real,
}

impl Rule {
    /// Evaluation order.
    pub const PIPELINE: [Rule; 5] = [
        Rule::Possible,
        Rule::Original,
        Rule::LongEnough,
        Rule::NotTitle,
        Rule::Real,
    ];

    /// Check whether the candidate satisfies this rule.
    pub fn check<L: Lexicon + ?Sized>(self, ctx: &RuleContext<'_, L>) -> bool {
        match self {
            Rule::Possible => can_spell(ctx.round.title_key(), ctx.candidate),
            Rule::Original => !ctx.round.is_used(ctx.candidate),
            Rule::LongEnough => char_len(ctx.candidate) >= ctx.min_length,
            Rule::NotTitle => ctx.candidate != ctx.round.title_key(),
            Rule::Real => ctx.lexicon.contains(ctx.candidate),
        }
    }

    /// Reason reported when this rule fails.
    #[must_use]
    pub const fn rejection(self) -> RejectionReason {
        match self {
            Rule::Possible => RejectionReason::NotPossible,
            Rule::Original => RejectionReason::NotOriginal,
            Rule::LongEnough => RejectionReason::TooShort,
            Rule::NotTitle => RejectionReason::EqualsTitle,
            Rule::Real => RejectionReason::NotReal,
        }
    }
}

/// Run the pipeline and return the first violated rule's reason.
pub fn first_violation<L: Lexicon + ?Sized>(ctx: &RuleContext<'_, L>) -> Option<RejectionReason> {
    Rule::PIPELINE
        .iter()
        .find(|rule| !rule.check(ctx))
        .map(|rule| rule.rejection())
}
