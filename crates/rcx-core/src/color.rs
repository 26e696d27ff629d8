//! RGB color values and packed ARGB pixel helpers.
//!
//! Palette and range colors are plain 24-bit RGB ([`Color`]). Image pixels
//! are packed `0xAARRGGBB` words; the alpha byte never takes part in color
//! lookups, so the helpers here split a pixel into its [`Color`] and alpha
//! and join them back.
//!
//! # Example
//!
//! ```
//! use rcx_core::color::{self, Color};
//!
//! let red = Color::from_hex("#FF0000").unwrap();
//! let px = red.with_alpha(0x80);
//! assert_eq!(px, 0x80FF0000);
//! assert_eq!(Color::from_argb(px), red);
//! assert_eq!(color::alpha(px), 0x80);
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    /// Pure white.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    /// Pure red, the base tone of all team-colored source art.
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Returns the color as `0xRRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Extracts the RGB part of a packed `0xAARRGGBB` pixel.
    #[inline]
    pub const fn from_argb(px: u32) -> Self {
        Self::from_u32(px)
    }

    /// Packs the color with an alpha value into `0xAARRGGBB`.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> u32 {
        ((alpha as u32) << 24) | self.to_u32()
    }

    /// Channels as an array `[r, g, b]`.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Luminance used to position a color along a color range.
    ///
    /// This is the unweighted mean of the three channels, in `[0, 255]`.
    #[inline]
    pub fn luminance(self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / 3.0
    }

    /// Linear interpolation between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// Each channel is interpolated independently, rounded to the nearest
    /// integer and clamped to `[0, 255]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Parses `#RRGGBB` or `#RGB`. The leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for empty input, a wrong number of
    /// digits, or non-hex characters.
    pub fn from_hex(text: &str) -> Result<Self> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.is_empty() {
            return Err(Error::invalid_color(text, "empty color string"));
        }

        let nibble = |c: u8| -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        };

        let bytes = hex.as_bytes();
        let digits: Option<Vec<u8>> = bytes.iter().map(|&c| nibble(c)).collect();
        let digits = digits.ok_or_else(|| Error::invalid_color(text, "invalid hex digits"))?;

        match digits.len() {
            3 => Ok(Self::new(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            6 => Ok(Self::new(
                digits[0] << 4 | digits[1],
                digits[2] << 4 | digits[3],
                digits[4] << 4 | digits[5],
            )),
            _ => Err(Error::invalid_color(text, "invalid hex length")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<u32> for Color {
    fn from(rgb: u32) -> Self {
        Self::from_u32(rgb)
    }
}

/// Alpha byte of a packed `0xAARRGGBB` pixel.
#[inline]
pub const fn alpha(px: u32) -> u8 {
    (px >> 24) as u8
}
