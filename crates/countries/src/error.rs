use thiserror::Error;

/// Result type for country table operations
pub type Result<T> = std::result::Result<T, CountryError>;

/// Errors that can occur while building the country table
#[derive(Error, Debug)]
pub enum CountryError {
    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV layer rejected the input (bad quoting, missing column, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Not exactly two ASCII letters
    #[error("Invalid ISO code: {0:?}")]
    InvalidIsoCode(String),

    /// A row that parsed but violates the table invariants
    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// Two rows claim the same ISO code
    #[error("Duplicate ISO code: {0}")]
    DuplicateCode(String),

    /// Two rows claim the same flag index
    #[error("Duplicate flag index {index} ({first} and {second})")]
    DuplicateIndex {
        index: u32,
        first: String,
        second: String,
    },
}

impl CountryError {
    /// Create an invalid record error
    pub fn invalid_record(line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }
}
