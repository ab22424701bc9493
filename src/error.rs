//! Error types.
//!
//! Rejected words are not errors; they come back as
//! `SubmissionResult::Rejected`. These types cover contract violations by
//! the caller and failures loading word lists.

use std::path::PathBuf;

use thiserror::Error;

/// Misuse of the round engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `submit` was called before any round was started.
    #[error("no active round: call start_round before submitting words")]
    NoActiveRound,

    /// `start_round` was given an empty title.
    #[error("title word must not be empty")]
    EmptyTitle,
}

/// Failure reading a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
