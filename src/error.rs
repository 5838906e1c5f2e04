//! Unified error type for framemark.

use thiserror::Error;

/// Errors that can occur while annotating and saving a frame.
#[derive(Debug, Error)]
pub enum MarkError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image library failed to decode or encode a frame.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
