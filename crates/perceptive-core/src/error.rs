use std::convert::Infallible;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the perceptive library
#[derive(Error, Debug)]
pub enum Error {
    /// The image has no pixel data to hash
    #[error("perceptive: nil image")]
    NilImage,

    /// The requested hash kind is not one of the supported algorithms
    #[error("perceptive: invalid perceptual hash: {0}")]
    InvalidHash(String),

    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

// Lets `HashKind` itself flow through APIs that accept `TryInto<HashKind>`.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
