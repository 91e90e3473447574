use thiserror::Error;

/// Result type for compositing operations
pub type Result<T> = std::result::Result<T, ComposeError>;

#[derive(Error, Debug)]
pub enum ComposeError {
    /// Nothing to stack
    #[error("No images to compose")]
    NoImages,

    /// Summed heights don't fit an image dimension
    #[error("Composed image too tall: {0} pixels")]
    TooLarge(u64),

    /// Decoding or encoding failed
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
