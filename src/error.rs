//! Error types for asset generation

use thiserror::Error;

/// Result type alias for asset-generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating assets
#[derive(Error, Debug)]
pub enum Error {
    /// No candidate font loaded and the system font database is empty
    #[error("No usable font found: all candidates failed and the system has no loadable fonts")]
    FontUnavailable,

    /// Failed to parse or render an SVG document
    #[error("SVG rasterization failed: {0}")]
    Svg(String),

    /// An asset spec describes an impossible canvas
    #[error("Invalid asset spec: {0}")]
    InvalidSpec(String),

    /// Failed to encode or persist an image
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
