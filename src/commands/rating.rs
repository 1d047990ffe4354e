use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::ReviewRankConfig;
use crate::io::output::{create_writer, RatingReport};
use crate::rating::{mean_rating, time_weighted_rating, TimeWeights};

#[derive(Debug)]
pub struct RatingConfig {
    pub path: PathBuf,
    pub as_of: Option<NaiveDate>,
    pub weights: Option<Vec<f64>>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run_rating(config: RatingConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => ReviewRankConfig::from_file(path)?,
        None => ReviewRankConfig::load()?,
    };
    let weights = match &config.weights {
        Some(w) => TimeWeights::new(w[0], w[1], w[2], w[3])?,
        None => file_config.rating.weights,
    };
    let as_of = config
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let reviews = crate::io::read_reviews(&config.path)?;
    log::info!(
        "Estimating rating from {} reviews as of {}",
        reviews.len(),
        as_of
    );

    let report = RatingReport {
        review_count: reviews.len(),
        mean_rating: mean_rating(&reviews),
        time_weighted_rating: time_weighted_rating(&reviews, &weights, as_of),
        as_of,
        weights,
    };

    let mut writer = create_writer(config.format.into(), config.output)?;
    writer.write_rating(&report)
}
