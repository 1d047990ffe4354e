//! Review helpfulness ranking and product rating estimation.
//!
//! The core is a set of pure scoring functions over helpful/unhelpful vote
//! counts — most importantly the Wilson score interval lower bound, which
//! ranks reviews without overrating tiny perfect samples — plus a stable
//! ranking pipeline that selects the top K reviews for display. A second
//! component estimates a product's rating by blending recency-weighted
//! bucket averages.
//!
//! ```
//! use reviewrank::scoring::score_wilson_lower_bound;
//!
//! // 1 helpful / 0 unhelpful is a perfect proportion but carries almost
//! // no confidence; the lower bound reflects that.
//! let tiny = score_wilson_lower_bound(1, 0);
//! let solid = score_wilson_lower_bound(900, 100);
//! assert!(solid > tiny);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod ranking;
pub mod rating;
pub mod scoring;

// Re-export the primary API surface
pub use crate::core::{Review, VoteCounts};
pub use crate::errors::ReviewRankError;
pub use crate::ranking::{select_top_k, select_top_k_with, Scored};
pub use crate::rating::{mean_rating, time_weighted_rating, TimeWeights};
pub use crate::scoring::{
    score_diff, score_proportion, score_wilson_lower_bound, score_wilson_lower_bound_at,
    wilson_scorer, DEFAULT_CONFIDENCE,
};
