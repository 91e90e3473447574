use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlagCacheError>;

#[derive(Error, Debug)]
pub enum FlagCacheError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Failed to read cache entry: {0}")]
    GlobError(#[from] glob::GlobError),

    /// A saved page without its `<stem>_files` folder can't be archived.
    #[error("Saved page {} has no asset folder {}", page.display(), bundle.display())]
    MissingBundle { page: PathBuf, bundle: PathBuf },

    #[error("Copy {} -> {}: {source}", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}
