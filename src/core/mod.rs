//! Core record types shared across the crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ReviewRankError};

/// Seam between the ranker and arbitrary record types.
///
/// The scorers only care about vote counts; anything carrying them can be
/// ranked, with the rest of the record passing through untouched.
pub trait VoteCounts {
    fn helpful_up(&self) -> u64;
    fn helpful_down(&self) -> u64;
}

/// A product review as loaded from input data.
///
/// `helpful_up` counts users who marked the review helpful; `total_votes`
/// counts all helpfulness votes. The unhelpful count is derived, mirroring
/// datasets that ship `(helpful_yes, total_vote)` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub reviewer: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Star rating given with the review (typically 1.0-5.0).
    pub rating: f64,
    pub review_time: NaiveDate,
    pub helpful_up: u64,
    pub total_votes: u64,
}

impl Review {
    /// Check the vote-count invariant `helpful_up <= total_votes`.
    ///
    /// Run at load time so the scorers never see inconsistent records.
    pub fn validate(&self) -> Result<()> {
        if self.helpful_up > self.total_votes {
            return Err(ReviewRankError::InconsistentVotes {
                id: self.id.clone(),
                helpful_up: self.helpful_up,
                total_votes: self.total_votes,
            });
        }
        Ok(())
    }

    /// Age of the review in days at `as_of`, clamped at zero.
    ///
    /// Future-dated reviews count as written today rather than erroring.
    pub fn age_days(&self, as_of: NaiveDate) -> u32 {
        (as_of - self.review_time).num_days().max(0) as u32
    }
}

impl VoteCounts for Review {
    fn helpful_up(&self) -> u64 {
        self.helpful_up
    }

    // Saturating keeps the accessor total even if a caller skips validate().
    fn helpful_down(&self) -> u64 {
        self.total_votes.saturating_sub(self.helpful_up)
    }
}
