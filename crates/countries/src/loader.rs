use crate::{Country, CountryError, CountryTable, IsoCode, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row; validation happens in [`RawRow::into_country`].
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "ISO-3166 Code")]
    iso_code: String,

    #[serde(rename = "Country")]
    name: String,

    #[serde(rename = "Index")]
    index: String,

    #[serde(rename = "Population", default)]
    population: String,
}

impl RawRow {
    fn into_country(self, line: u64) -> Result<Country> {
        let iso_code = IsoCode::parse(&self.iso_code).map_err(|_| {
            CountryError::invalid_record(line, format!("bad ISO code {:?}", self.iso_code))
        })?;

        let index: u32 = self.index.trim().parse().map_err(|_| {
            CountryError::invalid_record(line, format!("bad index {:?}", self.index))
        })?;
        if index == 0 {
            return Err(CountryError::invalid_record(line, "index must be positive"));
        }

        let population = parse_population(&self.population).map_err(|_| {
            CountryError::invalid_record(line, format!("bad population {:?}", self.population))
        })?;

        Ok(Country {
            iso_code,
            display_name: self.name.trim().to_string(),
            index,
            population,
        })
    }
}

/// Empty and `"0"` both mean "unknown".
fn parse_population(text: &str) -> std::result::Result<Option<u64>, std::num::ParseIntError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value: u64 = text.parse()?;
    Ok((value != 0).then_some(value))
}

impl CountryTable {
    /// Load the table from a CSV file with the `ISO-3166 Code`, `Country`,
    /// `Index` and `Population` columns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        log::info!(
            "Loaded {} countries ({} with population) from {}",
            table.len(),
            table.iter().filter(|c| c.population.is_some()).count(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line());
            let raw: RawRow = record.deserialize(Some(&headers))?;
            rows.push(raw.into_country(line)?);
        }

        Self::from_countries(rows)
    }
}
