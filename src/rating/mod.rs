//! Product rating estimation from review star ratings.
//!
//! Two estimators: the plain arithmetic mean, and a time-based weighted
//! average that buckets reviews by age and weights recent buckets more
//! heavily. Recent opinion tracks the product as currently sold (sellers
//! fix defects, firmware updates land), so it gets a larger share.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Review;
use crate::errors::{Result, ReviewRankError};

/// Weight percentages for the four review-age buckets.
///
/// Buckets by age in days: `0..=30`, `31..=90`, `91..=180`, `>180`.
/// Weights must be non-negative and sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWeights {
    /// Reviews up to 30 days old.
    #[serde(default = "default_recent")]
    pub recent: f64,
    /// Reviews 31-90 days old.
    #[serde(default = "default_quarter")]
    pub quarter: f64,
    /// Reviews 91-180 days old.
    #[serde(default = "default_half_year")]
    pub half_year: f64,
    /// Reviews older than 180 days.
    #[serde(default = "default_older")]
    pub older: f64,
}

fn default_recent() -> f64 {
    28.0
}
fn default_quarter() -> f64 {
    26.0
}
fn default_half_year() -> f64 {
    24.0
}
fn default_older() -> f64 {
    22.0
}

impl Default for TimeWeights {
    fn default() -> Self {
        Self {
            recent: default_recent(),
            quarter: default_quarter(),
            half_year: default_half_year(),
            older: default_older(),
        }
    }
}

impl TimeWeights {
    pub fn new(recent: f64, quarter: f64, half_year: f64, older: f64) -> Result<Self> {
        let weights = Self {
            recent,
            quarter,
            half_year,
            older,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        let weights = self.as_array();
        if weights.iter().any(|w| *w < 0.0) {
            return Err(ReviewRankError::InvalidWeights {
                weights,
                reason: "negative weight".to_string(),
            });
        }
        let total: f64 = weights.iter().sum();
        if (total - 100.0).abs() > 1e-9 {
            return Err(ReviewRankError::InvalidWeights {
                weights,
                reason: format!("weights sum to {total}, expected 100"),
            });
        }
        Ok(())
    }

    fn as_array(&self) -> [f64; 4] {
        [self.recent, self.quarter, self.half_year, self.older]
    }
}

/// Bucket index for a review age: recent, quarter, half-year, older.
fn bucket_index(age_days: u32) -> usize {
    match age_days {
        0..=30 => 0,
        31..=90 => 1,
        91..=180 => 2,
        _ => 3,
    }
}

/// Arithmetic mean of all star ratings; 0.0 for an empty slice.
pub fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64
}

/// Time-based weighted average rating as of a given date.
///
/// Each age bucket contributes its mean rating, weighted by the bucket's
/// percentage. Empty buckets drop out and the remaining weights are
/// renormalized, so a product with no recent reviews still gets a valid
/// rating instead of NaN. Returns 0.0 for an empty slice.
pub fn time_weighted_rating(reviews: &[Review], weights: &TimeWeights, as_of: NaiveDate) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    // (rating sum, count) per bucket: recent, quarter, half_year, older
    let mut sums = [0.0f64; 4];
    let mut counts = [0u64; 4];
    for review in reviews {
        let bucket = bucket_index(review.age_days(as_of));
        sums[bucket] += review.rating;
        counts[bucket] += 1;
    }

    let bucket_weights = weights.as_array();
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for i in 0..4 {
        if counts[i] > 0 {
            let bucket_mean = sums[i] / counts[i] as f64;
            weighted_sum += bucket_mean * bucket_weights[i];
            weight_total += bucket_weights[i];
        }
    }

    if weight_total == 0.0 {
        // All populated buckets carry zero weight; fall back to the mean.
        return mean_rating(reviews);
    }
    weighted_sum / weight_total
}
