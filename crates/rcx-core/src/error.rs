//! Error types for rcx-core operations.
//!
//! The recolor engine itself is total: building a mapping or remapping an
//! image never fails on well-formed data. Errors only arise at the edges of
//! the crate, when raw input is turned into typed values:
//!
//! - parsing a hex color string ([`Error::InvalidColor`])
//! - wrapping raw pixel data into an [`crate::ImageBuffer`]
//!   ([`Error::InvalidDimensions`])
//! - constructing a [`crate::ColorRange`] from an arbitrary color list
//!   ([`Error::AnchorCount`])
//!
//! # Usage
//!
//! ```rust
//! use rcx_core::{Color, Error};
//!
//! let err = Color::from_hex("#12345").unwrap_err();
//! assert!(matches!(err, Error::InvalidColor { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building core values from raw input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string does not denote a valid RGB color.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor {
        /// The offending input
        value: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Pixel data does not match the declared image dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// A color range was given the wrong number of anchor colors.
    #[error("color range '{id}' needs exactly 4 colors (mid, max, min, rep), got {got}")]
    AnchorCount {
        /// Range identifier
        id: String,
        /// Number of colors supplied
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
