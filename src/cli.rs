use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Terminal,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoreMethod {
    /// Wilson score interval lower bound (default, small-sample safe)
    Wilson,
    /// Raw helpful-vote proportion
    Proportion,
    /// Helpful minus unhelpful votes
    Diff,
}

#[derive(Parser, Debug)]
#[command(name = "reviewrank")]
#[command(about = "Review helpfulness ranking and product rating estimation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank reviews by estimated helpfulness and show the top K
    Rank {
        /// JSON file with an array of review records
        path: PathBuf,

        /// Number of top reviews to select
        #[arg(long, visible_alias = "head")]
        top: Option<usize>,

        /// Confidence level for the Wilson lower bound, in (0, 1)
        #[arg(long)]
        confidence: Option<f64>,

        /// Scoring method
        #[arg(long, value_enum, default_value = "wilson")]
        method: ScoreMethod,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./reviewrank.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Estimate the product rating from review star ratings
    Rating {
        /// JSON file with an array of review records
        path: PathBuf,

        /// Evaluation date for review ages (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<chrono::NaiveDate>,

        /// Bucket weight percentages: recent,quarter,half-year,older
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./reviewrank.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
        }
    }
}
