//! Optional configuration file support.
//!
//! Settings live in `reviewrank.toml` next to the data being analyzed.
//! Everything has a sensible default; CLI flags override file values.
//!
//! ```toml
//! [rank]
//! confidence = 0.95
//! top = 20
//!
//! [rating]
//! weights = { recent = 28.0, quarter = 26.0, half_year = 24.0, older = 22.0 }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::rating::TimeWeights;

pub const CONFIG_FILE_NAME: &str = "reviewrank.toml";

/// Ranking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankSettings {
    /// Confidence level for the Wilson lower bound, in (0, 1).
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// How many top reviews to select for display.
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_confidence() -> f64 {
    crate::scoring::DEFAULT_CONFIDENCE
}

fn default_top() -> usize {
    20
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            top: default_top(),
        }
    }
}

/// Rating settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingSettings {
    #[serde(default)]
    pub weights: TimeWeights,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewRankConfig {
    #[serde(default)]
    pub rank: RankSettings,

    #[serde(default)]
    pub rating: RatingSettings,
}

impl ReviewRankConfig {
    /// Load configuration from an explicit path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `reviewrank.toml` from the current directory if present,
    /// otherwise fall back to defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            log::debug!("Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.rank.confidence > 0.0 && self.rank.confidence < 1.0) {
            anyhow::bail!(
                "rank.confidence must be within (0, 1), got {}",
                self.rank.confidence
            );
        }
        self.rating.weights.validate()?;
        Ok(())
    }
}
