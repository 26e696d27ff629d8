//! Error types for I/O operations.
//!
//! Covers decoding and encoding sprites and running export jobs.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded data does not form a valid image.
    #[error(transparent)]
    Image(#[from] rcx_core::Error),

    /// Context wrapper naming the file an error came from.
    #[error("{path}: {source}")]
    File {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<IoError>,
    },
}

impl IoError {
    /// Attaches the file path to an error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
