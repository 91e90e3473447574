//! # Flagword Puzzle
//!
//! Turns dictionary words into flag puzzles.
//!
//! ## Pipeline
//!
//! ```text
//! word ("canada")
//!     │
//!     ├──> tiling: CA NA DA
//!     │
//!     ├──> country table: every tile known, every population known
//!     │
//!     ├──> flag lookup: one image per tile, left to right
//!     │
//!     ├──> scoring strategy (min population × length by default)
//!     │
//!     └──> leaderboard keyed by flag sequence → top N puzzles
//! ```
//!
//! ## Example
//!
//! ```rust
//! use flagword_countries::{Country, CountryTable, IsoCode};
//! use flagword_puzzle::{Decomposer, FlagLookup, Scoring};
//! use std::path::PathBuf;
//!
//! struct Flat;
//!
//! impl FlagLookup for Flat {
//!     fn lookup(&mut self, country: &Country) -> flagword_puzzle::Result<Option<PathBuf>> {
//!         Ok(Some(PathBuf::from(format!("flag{}.png", country.index))))
//!     }
//! }
//!
//! let table = CountryTable::from_countries(vec![
//!     Country { iso_code: IsoCode::parse("AA")?, display_name: "Alphaland".into(), index: 1, population: Some(1000) },
//!     Country { iso_code: IsoCode::parse("BB")?, display_name: "Betaland".into(), index: 2, population: Some(2000) },
//! ])?;
//!
//! let decomposer = Decomposer::new(&table, Scoring::MinPopulation);
//! let candidate = decomposer.try_score("aabb", &mut Flat)?.unwrap();
//! assert_eq!(candidate.score, 4000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod decomposer;
mod dictionary;
mod error;
mod leaderboard;
mod tiling;

pub use config::{DuplicatePolicy, PuzzleConfig, Scoring};
pub use decomposer::{Candidate, Decomposer, FlagLookup};
pub use dictionary::{candidate_words, load_words, DEFAULT_DICTIONARY};
pub use error::{PuzzleError, Result};
pub use leaderboard::{Leaderboard, Puzzle};
pub use tiling::{tile, MIN_WORD_LEN};
