//! CLI command implementations.
//!
//! Each submodule wires one subcommand: load reviews, run the core logic,
//! hand the report to an output writer. All orchestration, no algorithms.

pub mod rank;
pub mod rating;

pub use rank::{run_rank, RankConfig};
pub use rating::{run_rating, RatingConfig};
