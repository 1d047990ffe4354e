//! Input loading and output writing.
//!
//! The core ranking and rating logic is storage-agnostic; this module is
//! the thin collaborator that feeds it. Input is a JSON array of review
//! records, validated at load time so downstream code never sees a record
//! claiming more helpful votes than total votes.

pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::Review;

/// Read and validate a JSON array of reviews.
pub fn read_reviews(path: &Path) -> Result<Vec<Review>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reviews from {}", path.display()))?;
    let reviews: Vec<Review> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse reviews from {}", path.display()))?;
    for review in &reviews {
        review.validate()?;
    }
    log::info!("Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}
