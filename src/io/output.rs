//! Report types and output writers.
//!
//! Two report shapes (ranked reviews, rating estimate) and two writers:
//! JSON for machine consumption, terminal tables for people. Writers go
//! through the `OutputWriter` trait so commands stay format-agnostic.

use chrono::NaiveDate;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::rating::TimeWeights;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// One ranked review row, ready for display.
#[derive(Debug, Serialize)]
pub struct RankedReview {
    pub rank: usize,
    pub id: String,
    pub score: f64,
    pub helpful_up: u64,
    pub helpful_down: u64,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RankReport {
    /// Scoring method used ("wilson_lower_bound", "proportion", "diff").
    pub method: String,
    /// Confidence level; present only for the Wilson method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub total_reviews: usize,
    pub items: Vec<RankedReview>,
}

#[derive(Debug, Serialize)]
pub struct RatingReport {
    pub review_count: usize,
    pub mean_rating: f64,
    pub time_weighted_rating: f64,
    pub as_of: NaiveDate,
    pub weights: TimeWeights,
}

pub trait OutputWriter {
    fn write_rank(&mut self, report: &RankReport) -> anyhow::Result<()>;
    fn write_rating(&mut self, report: &RatingReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_rank(&mut self, report: &RankReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_rating(&mut self, report: &RatingReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_rank(&mut self, report: &RankReport) -> anyhow::Result<()> {
        print_rank_header(report);

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "#", "Review", "Score", "Helpful", "Unhelpful", "Stars",
        ]);
        for item in &report.items {
            table.add_row(vec![
                item.rank.to_string(),
                display_label(item),
                format!("{:.5}", item.score),
                item.helpful_up.to_string(),
                item.helpful_down.to_string(),
                format!("{:.1}", item.rating),
            ]);
        }
        println!("{table}");
        Ok(())
    }

    fn write_rating(&mut self, report: &RatingReport) -> anyhow::Result<()> {
        println!("{}", "Product Rating Estimate".bold().blue());
        println!("{}", "=======================".blue());
        println!();
        println!("  Reviews considered: {}", report.review_count);
        println!("  Plain mean rating: {:.5}", report.mean_rating);
        println!(
            "  Time-weighted rating: {} (as of {})",
            format!("{:.5}", report.time_weighted_rating).bold().green(),
            report.as_of
        );
        println!(
            "  Bucket weights: {}% / {}% / {}% / {}% (<=30d / 31-90d / 91-180d / >180d)",
            report.weights.recent,
            report.weights.quarter,
            report.weights.half_year,
            report.weights.older
        );
        Ok(())
    }
}

fn print_rank_header(report: &RankReport) {
    println!("{}", "Top Reviews by Helpfulness".bold().blue());
    println!("{}", "==========================".blue());
    match report.confidence {
        Some(confidence) => println!(
            "  Method: {} (confidence {:.2})",
            report.method, confidence
        ),
        None => println!("  Method: {}", report.method),
    }
    println!(
        "  Showing {} of {} reviews",
        report.items.len(),
        report.total_reviews
    );
    println!();
}

fn display_label(item: &RankedReview) -> String {
    match &item.excerpt {
        Some(excerpt) => format!("{}: {}", item.id, excerpt),
        None => item.id.clone(),
    }
}

/// Build a writer for the requested format, targeting a file when `output`
/// is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Terminal, _) => Ok(Box::new(TerminalWriter::new())),
    }
}
