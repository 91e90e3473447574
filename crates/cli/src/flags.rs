use clap::ValueEnum;
use flagword_puzzle::{DuplicatePolicy, Scoring};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum ScoringFlag {
    /// Smallest population times word length
    MinPopulation,
    /// Mean population divided by word length, doubled
    MeanPopulation,
}

impl ScoringFlag {
    pub(crate) const fn as_domain(self) -> Scoring {
        match self {
            ScoringFlag::MinPopulation => Scoring::MinPopulation,
            ScoringFlag::MeanPopulation => Scoring::MeanPopulation,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum DuplicatesFlag {
    /// A later word with the same flags replaces the earlier one
    LastWins,
    /// The first word with a given flag sequence is kept
    FirstWins,
}

impl DuplicatesFlag {
    pub(crate) const fn as_domain(self) -> DuplicatePolicy {
        match self {
            DuplicatesFlag::LastWins => DuplicatePolicy::LastWriteWins,
            DuplicatesFlag::FirstWins => DuplicatePolicy::FirstWriteWins,
        }
    }
}
