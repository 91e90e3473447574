//! # Flagword Countries
//!
//! The country table every other flagword crate consumes: ISO codes, display
//! names, flag indexes and (optional) populations.
//!
//! ## Example
//!
//! ```rust
//! use flagword_countries::CountryTable;
//!
//! let csv = "ISO-3166 Code,Country,Index,Population\nCA,Canada,42,38000000\n";
//! let table = CountryTable::from_reader(csv.as_bytes()).unwrap();
//!
//! let canada = table.get_str("CA").unwrap();
//! assert_eq!(canada.index, 42);
//! assert_eq!(canada.population, Some(38_000_000));
//! ```

mod error;
mod loader;
mod types;

pub use error::{CountryError, Result};
pub use types::{Country, CountryTable, IsoCode};
