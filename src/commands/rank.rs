use anyhow::Result;
use std::path::PathBuf;

use crate::cli::{OutputFormat, ScoreMethod};
use crate::config::ReviewRankConfig;
use crate::core::Review;
use crate::io::output::{create_writer, RankReport, RankedReview};
use crate::ranking::{select_top_k_with, Scored};
use crate::scoring;

/// Characters of review text shown in the terminal table.
const EXCERPT_LEN: usize = 60;

#[derive(Debug)]
pub struct RankConfig {
    pub path: PathBuf,
    pub top: Option<usize>,
    pub confidence: Option<f64>,
    pub method: ScoreMethod,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run_rank(config: RankConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => ReviewRankConfig::from_file(path)?,
        None => ReviewRankConfig::load()?,
    };
    let top = config.top.unwrap_or(file_config.rank.top);
    let confidence = config.confidence.unwrap_or(file_config.rank.confidence);

    let reviews = crate::io::read_reviews(&config.path)?;
    let total_reviews = reviews.len();
    log::info!(
        "Ranking {} reviews, selecting top {} by {:?}",
        total_reviews,
        top,
        config.method
    );

    let ranked = rank_reviews(reviews, top, config.method, confidence)?;
    let report = RankReport {
        method: method_name(config.method).to_string(),
        confidence: matches!(config.method, ScoreMethod::Wilson).then_some(confidence),
        total_reviews,
        items: ranked
            .into_iter()
            .enumerate()
            .map(|(i, scored)| to_row(i + 1, scored))
            .collect(),
    };

    let mut writer = create_writer(config.format.into(), config.output)?;
    writer.write_rank(&report)
}

fn rank_reviews(
    reviews: Vec<Review>,
    top: usize,
    method: ScoreMethod,
    confidence: f64,
) -> Result<Vec<Scored<Review>>> {
    let ranked = match method {
        ScoreMethod::Wilson => {
            // Validated up-front: a bad confidence fails the whole ranking
            // before any record is scored.
            let scorer = scoring::wilson_scorer(confidence)?;
            select_top_k_with(reviews, top, scorer)
        }
        ScoreMethod::Proportion => select_top_k_with(reviews, top, scoring::score_proportion),
        ScoreMethod::Diff => {
            select_top_k_with(reviews, top, |up, down| scoring::score_diff(up, down) as f64)
        }
    };
    Ok(ranked)
}

fn method_name(method: ScoreMethod) -> &'static str {
    match method {
        ScoreMethod::Wilson => "wilson_lower_bound",
        ScoreMethod::Proportion => "proportion",
        ScoreMethod::Diff => "diff",
    }
}

fn to_row(rank: usize, scored: Scored<Review>) -> RankedReview {
    let review = scored.record;
    RankedReview {
        rank,
        id: review.id.clone(),
        score: scored.score,
        helpful_up: review.helpful_up,
        helpful_down: review.total_votes.saturating_sub(review.helpful_up),
        rating: review.rating,
        excerpt: review.text.as_deref().map(excerpt),
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LEN {
        text.to_string()
    } else {
        let cut: String = text.chars().take(EXCERPT_LEN).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_truncates_long_text() {
        let long = "x".repeat(200);
        let short = excerpt(&long);
        assert_eq!(short.chars().count(), EXCERPT_LEN + 3);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn test_excerpt_keeps_short_text() {
        assert_eq!(excerpt("great product"), "great product");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(method_name(ScoreMethod::Wilson), "wilson_lower_bound");
        assert_eq!(method_name(ScoreMethod::Proportion), "proportion");
        assert_eq!(method_name(ScoreMethod::Diff), "diff");
    }
}
