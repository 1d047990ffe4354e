//! Pure vote-scoring functions for review helpfulness.
//!
//! Three strategies over `(helpful_up, helpful_down)` vote counts:
//!
//! - [`score_diff`] — positive minus negative votes. Simple, but a review
//!   with 600 up / 400 down outranks one with 50 up / 0 down.
//! - [`score_proportion`] — raw helpful fraction. Overrates tiny samples:
//!   1 up / 0 down scores a perfect 1.0.
//! - [`score_wilson_lower_bound`] — lower bound of the Wilson score
//!   confidence interval for the true helpful proportion. The bound drops
//!   as the sample shrinks, which is the correct penalty for
//!   low-confidence scores. This is the ranking default.
//!
//! All functions are pure and total over unsigned counts with n > 0; the
//! zero-vote case returns 0.0 by policy so unvoted reviews sink to the
//! bottom of any ranking.

pub mod normal;

use crate::errors::{Result, ReviewRankError};
use normal::probit;

/// Default confidence level for the Wilson lower bound.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Difference score: helpful votes minus unhelpful votes.
pub fn score_diff(helpful_up: u64, helpful_down: u64) -> i64 {
    helpful_up as i64 - helpful_down as i64
}

/// Raw proportion of helpful votes.
///
/// Returns 0.0 when the review has no votes at all. That is a deliberate
/// policy, not an error: unvoted reviews rank below everything that has at
/// least one helpful vote.
pub fn score_proportion(helpful_up: u64, helpful_down: u64) -> f64 {
    let n = helpful_up.saturating_add(helpful_down);
    if n == 0 {
        return 0.0;
    }
    helpful_up as f64 / n as f64
}

/// Wilson score interval lower bound at the default 95% confidence.
///
/// See <https://www.evanmiller.org/how-not-to-sort-by-average-rating.html>.
/// Returns a value in [0, 1]; 0.0 when the review has no votes.
pub fn score_wilson_lower_bound(helpful_up: u64, helpful_down: u64) -> f64 {
    wilson_lower_bound(helpful_up, helpful_down, z_for_confidence(DEFAULT_CONFIDENCE))
}

/// Wilson score interval lower bound at a caller-supplied confidence level.
///
/// `confidence` must lie in the open interval (0, 1); anything else is
/// rejected with [`ReviewRankError::InvalidConfidence`] rather than clamped.
pub fn score_wilson_lower_bound_at(
    helpful_up: u64,
    helpful_down: u64,
    confidence: f64,
) -> Result<f64> {
    let scorer = wilson_scorer(confidence)?;
    Ok(scorer(helpful_up, helpful_down))
}

/// Build a Wilson lower-bound scorer for a fixed confidence level.
///
/// Validates the confidence once and captures the critical value, so the
/// returned closure is infallible and cheap to call per record. This is the
/// entry point the ranker uses: a bad parameter fails the whole ranking
/// up-front instead of surfacing per record.
pub fn wilson_scorer(confidence: f64) -> Result<impl Fn(u64, u64) -> f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(ReviewRankError::InvalidConfidence(confidence));
    }
    let z = z_for_confidence(confidence);
    Ok(move |up, down| wilson_lower_bound(up, down, z))
}

/// Two-tailed critical value for a confidence level in (0, 1).
fn z_for_confidence(confidence: f64) -> f64 {
    probit(1.0 - (1.0 - confidence) / 2.0)
}

fn wilson_lower_bound(helpful_up: u64, helpful_down: u64, z: f64) -> f64 {
    let n = helpful_up.saturating_add(helpful_down) as f64;
    if n == 0.0 {
        return 0.0;
    }
    let phat = helpful_up as f64 / n;
    let z2 = z * z;
    (phat + z2 / (2.0 * n) - z * ((phat * (1.0 - phat) + z2 / (4.0 * n)) / n).sqrt())
        / (1.0 + z2 / n)
}
