//! Rejection reasons and their display messages.

use serde::{Deserialize, Serialize};

/// Why a candidate was rejected.
///
/// Exactly one reason is reported per submission: the first rule of the
/// pipeline that fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Uses letters the title does not have (or not enough copies).
    NotPossible,
    /// Already accepted this round.
    NotOriginal,
    /// Shorter than the minimum length.
    TooShort,
    /// Same as the title word.
    EqualsTitle,
    /// Not in the lexicon.
    NotReal,
}

impl RejectionReason {
    /// All reasons, in pipeline order.
    pub const ALL: [RejectionReason; 5] = [
        RejectionReason::NotPossible,
        RejectionReason::NotOriginal,
        RejectionReason::TooShort,
        RejectionReason::EqualsTitle,
        RejectionReason::NotReal,
    ];

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            RejectionReason::NotPossible => "not_possible",
            RejectionReason::NotOriginal => "not_original",
            RejectionReason::TooShort => "too_short",
            RejectionReason::EqualsTitle => "equals_title",
            RejectionReason::NotReal => "not_real",
        }
    }

    /// Build the player-facing message for this reason.
    ///
    /// `candidate` and `title` are interpolated in lowercase.
    #[must_use]
    pub fn message(self, candidate: &str, title: &str, min_length: usize) -> RejectionMessage {
        match self {
            RejectionReason::NotPossible => RejectionMessage::new(
                "Word not possible",
                format!("You can't spell {candidate} from {title}"),
            ),
            RejectionReason::NotOriginal => {
                RejectionMessage::new("Word already used", "Be original!")
            }
            RejectionReason::TooShort => RejectionMessage::new(
                "Word too short",
                format!("Words must be at least {min_length} letters long"),
            ),
            RejectionReason::EqualsTitle => {
                RejectionMessage::new("Word is the title", "You can't just use the start word!")
            }
            RejectionReason::NotReal => {
                RejectionMessage::new("Word not recognized", "You can't just make them up!")
            }
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Title and body of a rejection, ready for an alert or status line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionMessage {
    pub title: String,
    pub body: String,
}

impl RejectionMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl std::fmt::Display for RejectionMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes: rustc_hash::FxHashSet<_> =
            RejectionReason::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), RejectionReason::ALL.len());
    }

    #[test]
    fn test_not_possible_names_words() {
        let msg = RejectionReason::NotPossible.message("dog", "cat", 3);
        assert_eq!(msg.body, "You can't spell dog from cat");
    }

    #[test]
    fn test_too_short_names_length() {
        let msg = RejectionReason::TooShort.message("at", "cat", 3);
        assert!(msg.body.contains('3'));
    }

    #[test]
    fn test_messages_are_reason_specific() {
        let titles: rustc_hash::FxHashSet<_> = RejectionReason::ALL
            .iter()
            .map(|r| r.message("x", "y", 3).title)
            .collect();
        assert_eq!(titles.len(), 5);
    }

    #[test]
    fn test_message_display() {
        let msg = RejectionMessage::new("Word already used", "Be original!");
        assert_eq!(msg.to_string(), "Word already used: Be original!");
    }

    #[test]
    fn test_reason_serde() {
        let json = serde_json::to_string(&RejectionReason::EqualsTitle).unwrap();
        assert_eq!(json, "\"EqualsTitle\"");
        let back: RejectionReason = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RejectionReason::EqualsTitle);
    }
}
