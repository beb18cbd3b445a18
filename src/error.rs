//! Error types for the tournament service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application. Specific failures are raised as [`TournamentError`]
//! variants and can be recovered by callers with `downcast_ref`.

use crate::types::PlayerId;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Broad classification of a [`TournamentError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The persistence collaborator is unreachable or failing
    StoreUnavailable,
    /// The caller asked for something the current data cannot satisfy
    InvalidInput,
    /// Stored players and matches disagree with each other
    DataInconsistency,
}

/// Custom error types for specific tournament scenarios
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("Player store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Cannot pair an odd number of players ({count})")]
    OddPlayerCount { count: usize },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    #[error("Invalid match report: {reason}")]
    InvalidMatch { reason: String },

    #[error("Data inconsistency: {reason}")]
    DataInconsistency { reason: String },
}

impl TournamentError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TournamentError::StoreUnavailable { .. } => ErrorKind::StoreUnavailable,
            TournamentError::OddPlayerCount { .. }
            | TournamentError::PlayerNotFound { .. }
            | TournamentError::InvalidMatch { .. } => ErrorKind::InvalidInput,
            TournamentError::DataInconsistency { .. } => ErrorKind::DataInconsistency,
        }
    }
}

/// Classify an `anyhow` error raised anywhere in the crate.
///
/// Returns `None` for errors that did not originate as a [`TournamentError`].
pub fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<TournamentError>().map(TournamentError::kind)
}
