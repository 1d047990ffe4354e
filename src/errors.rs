//! Error types for reviewrank operations.
//!
//! Library code returns `ReviewRankError` for domain failures; the binary
//! layer wraps I/O and parsing with `anyhow` context. Vote counts are
//! unsigned throughout, so "negative count" errors are unrepresentable by
//! construction and do not appear here.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReviewRankError {
    /// Confidence level outside the open interval (0, 1).
    #[error("confidence must be within (0, 1), got {0}")]
    InvalidConfidence(f64),

    /// Time weights must be non-negative and sum to 100.
    #[error("invalid time weights ({reason}): {weights:?}")]
    InvalidWeights { weights: [f64; 4], reason: String },

    /// A review claims more helpful votes than total votes.
    #[error("review {id}: helpful_up {helpful_up} exceeds total_votes {total_votes}")]
    InconsistentVotes {
        id: String,
        helpful_up: u64,
        total_votes: u64,
    },
}

pub type Result<T> = std::result::Result<T, ReviewRankError>;
