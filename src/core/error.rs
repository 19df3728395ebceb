//! Error types for session operations.

use thiserror::Error;

use super::player::PlayerId;

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// The custom delta field did not hold an integer.
    #[error("invalid life delta: {input:?}")]
    InvalidDelta { input: String },

    /// No player with this id is seated.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),
}

/// Result alias for session operations.
pub type LifeResult<T> = Result<T, LifeError>;
