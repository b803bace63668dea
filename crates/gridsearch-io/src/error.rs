//! Errors from reading and writing pixel images
//!
//! PNG failures from the `png` crate are wrapped as strings; PBM problems
//! are detected by the reader itself and reported as [`IoError::InvalidData`].

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File or stream error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format not recognized, or its cargo feature is disabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed file: bad PBM header, truncated body, dimensions larger
    /// than the data, or a PNG palette index out of range
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The PNG decoder failed
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder failed or the image cannot be encoded
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded pixels did not form a valid `PixelImage`
    #[error("core error: {0}")]
    Core(#[from] gridsearch_core::Error),
}

/// Result of an image read or write
pub type IoResult<T> = Result<T, IoError>;
