use std::path::PathBuf;

/// Errors produced while loading or converting an image
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// The image file could not be opened or decoded
    #[error("failed to load image '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A scale name that matches none of the built-in ramps
    #[error("unknown scale '{0}', expected one of STANDARD, TEN, COLOR")]
    UnknownScale(String),

    /// Configuration values outside their valid range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AsciiError>;
