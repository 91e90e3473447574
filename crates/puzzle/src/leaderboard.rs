use crate::{Candidate, DuplicatePolicy};
use flagword_countries::IsoCode;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// A ranked word ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub word: String,
    pub codes: Vec<IsoCode>,
    pub countries: Vec<String>,
    pub flags: Vec<PathBuf>,
    pub score: u64,
}

impl From<Candidate> for Puzzle {
    fn from(candidate: Candidate) -> Self {
        Self {
            word: candidate.word,
            codes: candidate.codes,
            countries: candidate.countries,
            flags: candidate.flags,
            score: candidate.score,
        }
    }
}

/// Accepted candidates keyed by their flag sequence.
///
/// Entries remember the order in which each flag sequence was first seen;
/// that order breaks score ties in [`Leaderboard::top`].
#[derive(Debug, Clone)]
pub struct Leaderboard {
    policy: DuplicatePolicy,
    entries: Vec<Puzzle>,
    slots: HashMap<Vec<PathBuf>, usize>,
    accepted: usize,
}

impl Leaderboard {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
            slots: HashMap::new(),
            accepted: 0,
        }
    }

    pub fn insert(&mut self, candidate: Candidate) {
        self.accepted += 1;
        match self.slots.get(&candidate.flags) {
            Some(&slot) => match self.policy {
                DuplicatePolicy::LastWriteWins => {
                    log::debug!(
                        "{} replaces {} (same flags)",
                        candidate.word,
                        self.entries[slot].word
                    );
                    self.entries[slot] = candidate.into();
                }
                DuplicatePolicy::FirstWriteWins => {
                    log::debug!(
                        "{} dropped, {} has the same flags",
                        candidate.word,
                        self.entries[slot].word
                    );
                }
            },
            None => {
                self.slots.insert(candidate.flags.clone(), self.entries.len());
                self.entries.push(candidate.into());
            }
        }
    }

    /// Best `n` entries, highest score first; ties keep discovery order.
    pub fn top(&self, n: usize) -> Vec<Puzzle> {
        let mut ranked: Vec<&Puzzle> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.into_iter().take(n).cloned().collect()
    }

    /// Score stored for a flag sequence, if any.
    pub fn score_of(&self, flags: &[PathBuf]) -> Option<u64> {
        self.slots.get(flags).map(|&slot| self.entries[slot].score)
    }

    /// Distinct flag sequences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidates inserted, duplicates included.
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}
