use crate::leaderboard::Leaderboard;
use crate::tiling::tile;
use crate::{PuzzleConfig, Result, Scoring};
use flagword_countries::{Country, CountryTable, IsoCode};
use flagword_flag_cache::FlagCache;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Source of flag images for accepted words.
pub trait FlagLookup {
    /// Image for `country`, or `None` when it isn't available. Errors are
    /// fatal for the whole run.
    fn lookup(&mut self, country: &Country) -> Result<Option<PathBuf>>;
}

impl<W: Write> FlagLookup for FlagCache<W> {
    fn lookup(&mut self, country: &Country) -> Result<Option<PathBuf>> {
        let path = self.resolve(&country.display_name, country.index)?;
        Ok(path.exists().then_some(path))
    }
}

/// A word whose every tile is a known, scorable country with a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub word: String,
    pub codes: Vec<IsoCode>,
    pub countries: Vec<String>,
    pub flags: Vec<PathBuf>,
    pub score: u64,
}

pub struct Decomposer<'a> {
    table: &'a CountryTable,
    scoring: Scoring,
}

impl<'a> Decomposer<'a> {
    pub fn new(table: &'a CountryTable, scoring: Scoring) -> Self {
        Self { table, scoring }
    }

    /// Tile `word` into country codes and score it.
    ///
    /// Returns `Ok(None)` when the tiling fails, a code is unknown, a country
    /// has no population, or a flag is unavailable. Table checks run before
    /// any flag lookup, so rejected words never touch the cache.
    pub fn try_score<L: FlagLookup + ?Sized>(
        &self,
        word: &str,
        flags: &mut L,
    ) -> Result<Option<Candidate>> {
        let Some(codes) = tile(word) else {
            return Ok(None);
        };

        let mut countries = Vec::with_capacity(codes.len());
        let mut populations = Vec::with_capacity(codes.len());
        for code in &codes {
            let Some(country) = self.table.get(code) else {
                log::trace!("{word}: unknown code {code}");
                return Ok(None);
            };
            let Some(population) = country.population else {
                log::trace!("{word}: no population for {code}");
                return Ok(None);
            };
            countries.push(country);
            populations.push(population);
        }

        let mut paths = Vec::with_capacity(countries.len());
        for country in &countries {
            match flags.lookup(country)? {
                Some(path) => paths.push(path),
                None => {
                    log::debug!("{word}: no flag for {}", country.iso_code);
                    return Ok(None);
                }
            }
        }

        Ok(Some(Candidate {
            word: word.to_string(),
            codes,
            countries: countries.iter().map(|c| c.display_name.clone()).collect(),
            flags: paths,
            score: self.scoring.score(&populations, word.len()),
        }))
    }

    /// Score every word and collect the accepted ones.
    pub fn rank<'w, L, I>(
        &self,
        words: I,
        flags: &mut L,
        config: &PuzzleConfig,
    ) -> Result<Leaderboard>
    where
        L: FlagLookup + ?Sized,
        I: IntoIterator<Item = &'w str>,
    {
        let mut board = Leaderboard::new(config.duplicates);
        let mut seen = 0usize;
        for word in words {
            seen += 1;
            if let Some(candidate) = self.try_score(word, flags)? {
                board.insert(candidate);
            }
        }
        log::info!(
            "{} of {seen} words tile into scorable countries ({} distinct flag sequences)",
            board.accepted(),
            board.len()
        );
        Ok(board)
    }
}
