use crate::{PuzzleError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for ranking candidate words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of puzzles to keep
    pub top_n: usize,

    /// How a candidate's populations turn into a score
    pub scoring: Scoring,

    /// What happens when two words produce the same flag sequence
    pub duplicates: DuplicatePolicy,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            scoring: Scoring::default(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl PuzzleConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(PuzzleError::invalid_config("top_n must be > 0"));
        }
        Ok(())
    }
}

/// Scoring strategy for an accepted word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scoring {
    /// `min(population) * len(word)`.
    /// Rewards long words whose every tile is a sizeable country; one large
    /// country can't hide several tiny ones.
    #[default]
    MinPopulation,

    /// `round(mean(population) / len(word) * 2)`, ties to even.
    /// Favours short words of populous countries.
    MeanPopulation,
}

impl Scoring {
    pub fn score(self, populations: &[u64], word_len: usize) -> u64 {
        if populations.is_empty() || word_len == 0 {
            return 0;
        }
        match self {
            Scoring::MinPopulation => {
                let min = populations.iter().copied().min().unwrap_or(0);
                min.saturating_mul(word_len as u64)
            }
            Scoring::MeanPopulation => {
                let total: u128 = populations.iter().map(|&p| u128::from(p)).sum();
                let mean = total as f64 / populations.len() as f64;
                (mean / word_len as f64 * 2.0).round_ties_even() as u64
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Scoring::MinPopulation => "min-population",
            Scoring::MeanPopulation => "mean-population",
        }
    }
}

/// Collision rule for two words that tile into the same flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later word replaces the earlier one's word and score but keeps its
    /// discovery position.
    #[default]
    LastWriteWins,

    /// The first word seen for a flag sequence is kept.
    FirstWriteWins,
}
