use thiserror::Error;

/// Result type for puzzle operations
pub type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Error, Debug)]
pub enum PuzzleError {
    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Flag lookup hit a fatal cache error
    #[error("Flag cache error: {0}")]
    FlagCache(#[from] flagword_flag_cache::FlagCacheError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PuzzleError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
