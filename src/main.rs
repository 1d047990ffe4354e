use anyhow::Result;
use clap::Parser;
use reviewrank::cli::{Cli, Commands};
use reviewrank::commands::{run_rank, run_rating, RankConfig, RatingConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Rank {
            path,
            top,
            confidence,
            method,
            format,
            output,
            config,
        } => run_rank(RankConfig {
            path,
            top,
            confidence,
            method,
            format,
            output,
            config,
        }),
        Commands::Rating {
            path,
            as_of,
            weights,
            format,
            output,
            config,
        } => run_rating(RatingConfig {
            path,
            as_of,
            weights,
            format,
            output,
            config,
        }),
    }
}
