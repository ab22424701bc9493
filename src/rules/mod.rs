//! Word-validation rules and the round engine.
//!
//! A submission is normalized to lowercase and run through five rules in
//! a fixed order:
//!
//! 1. Possible: spellable from the title's letters
//! 2. Original: not already accepted this round
//! 3. LongEnough: at least the minimum length
//! 4. NotTitle: not the title word
//! 5. Real: present in the lexicon
//!
//! The first failing rule decides the `RejectionReason`.

pub mod rejection;
pub mod round;
pub mod rule;
pub mod engine;

pub use rejection::{RejectionMessage, RejectionReason};
pub use round::Round;
pub use rule::{first_violation, Rule, RuleContext};
pub use engine::{RoundEngine, SubmissionResult};
