use crate::{CountryError, Result};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Two-letter ISO-3166 country code, always stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoCode([u8; 2]);

impl IsoCode {
    /// Build a code from two ASCII letters (either case).
    pub fn from_letters(first: u8, second: u8) -> Option<Self> {
        if first.is_ascii_alphabetic() && second.is_ascii_alphabetic() {
            Some(Self([
                first.to_ascii_uppercase(),
                second.to_ascii_uppercase(),
            ]))
        } else {
            None
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        match text.trim().as_bytes() {
            [first, second] => Self::from_letters(*first, *second)
                .ok_or_else(|| CountryError::InvalidIsoCode(text.to_string())),
            _ => Err(CountryError::InvalidIsoCode(text.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IsoCode {
    type Err = CountryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for IsoCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of the country table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub iso_code: IsoCode,
    pub display_name: String,

    /// Flag asset index, unique per country
    pub index: u32,

    /// `None` when the table has no usable figure; such countries keep their
    /// flag slot but can't be scored.
    pub population: Option<u64>,
}

/// Immutable lookup table keyed by ISO code. Iteration follows table order.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    rows: Vec<Country>,
    by_code: HashMap<IsoCode, usize>,
}

impl CountryTable {
    /// Build a table, rejecting duplicated codes or flag indexes.
    pub fn from_countries(rows: Vec<Country>) -> Result<Self> {
        let mut by_code = HashMap::with_capacity(rows.len());
        let mut by_index: HashMap<u32, IsoCode> = HashMap::with_capacity(rows.len());

        for (pos, country) in rows.iter().enumerate() {
            if by_code.insert(country.iso_code, pos).is_some() {
                return Err(CountryError::DuplicateCode(country.iso_code.to_string()));
            }
            if let Some(first) = by_index.insert(country.index, country.iso_code) {
                return Err(CountryError::DuplicateIndex {
                    index: country.index,
                    first: first.to_string(),
                    second: country.iso_code.to_string(),
                });
            }
        }

        Ok(Self { rows, by_code })
    }

    pub fn get(&self, code: &IsoCode) -> Option<&Country> {
        self.by_code.get(code).map(|&pos| &self.rows[pos])
    }

    /// Convenience lookup by string; invalid codes simply miss.
    pub fn get_str(&self, code: &str) -> Option<&Country> {
        IsoCode::parse(code).ok().and_then(|code| self.get(&code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
