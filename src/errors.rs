use crate::battle::state::MatchState;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Starter Duel engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// A match operation was rejected
    #[error("Match error: {0}")]
    Match(#[from] MatchError),
    /// A roster file could not be loaded
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
}

/// Errors reported by the match controller.
///
/// Every variant is raised before any mutation, so the controller is left
/// exactly as it was before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A starter or move index outside `0..len`
    #[error("Invalid selection index {index} (expected 0..{len})")]
    InvalidSelectionIndex { index: usize, len: usize },
    /// The operation is not available in the current match state
    #[error("Cannot {action} while the match is in {state}")]
    InvalidStateTransition {
        action: &'static str,
        state: MatchState,
    },
    /// An opponent is drawn from the roster entries the player did not pick
    #[error("A match needs at least 2 creatures in the roster, found {0}")]
    InsufficientRoster(usize),
}

/// Errors related to loading roster files
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed JSON roster: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed RON roster: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Unsupported roster format: {} (expected .json or .ron)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using MatchError
pub type MatchResult<T> = Result<T, MatchError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;
