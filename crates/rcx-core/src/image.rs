//! ARGB image buffer.
//!
//! [`ImageBuffer`] is the canonical in-memory form every decoded image is
//! expanded to before it enters the recolor engine: one packed `0xAARRGGBB`
//! word per pixel, row-major, top-to-bottom, no padding.
//!
//! ```text
//! Memory: [px(0,0) px(1,0) ... px(w-1,0)]  <- Row 0
//!         [px(0,1) px(1,1) ... px(w-1,1)]  <- Row 1
//!         ...
//! ```
//!
//! # Memory Management
//!
//! Pixel storage lives in an [`Arc<Vec<u32>>`], so cloning a buffer is cheap
//! and a single source image can be shared read-only by several export jobs
//! running on different threads. Use [`ImageBuffer::make_mut`] to obtain an
//! exclusive copy before writing.
//!
//! # Usage
//!
//! ```rust
//! use rcx_core::{Color, ImageBuffer};
//!
//! let mut img = ImageBuffer::new(2, 2);
//! img.set_pixel(1, 0, Color::RED.with_alpha(0xFF));
//! assert_eq!(img.pixel(1, 0), 0xFFFF0000);
//! assert_eq!(img.pixel(0, 0), 0);
//! ```

use crate::{Color, Error, Result};
use std::sync::Arc;

/// Owned ARGB image buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Packed pixels (Arc for cheap cloning)
    data: Arc<Vec<u32>>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl ImageBuffer {
    /// Creates a fully transparent black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Creates an image with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: u32) -> Self {
        let count = width as usize * height as usize;
        Self {
            data: Arc::new(vec![px; count]),
            width,
            height,
        }
    }

    /// Creates an image from packed ARGB pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Wraps pixels already known to match the dimensions.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Creates an image from interleaved 8-bit RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the byte count does not match.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} RGBA bytes, got {}", expected, bytes.len()),
            ));
        }
        let data = bytes
            .chunks_exact(4)
            .map(|p| Color::new(p[0], p[1], p[2]).with_alpha(p[3]))
            .collect();
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Interleaved 8-bit RGBA bytes, the layout most encoders expect.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for &px in self.data.iter() {
            let c = Color::from_argb(px);
            out.extend_from_slice(&[c.r, c.g, c.b, crate::color::alpha(px)]);
        }
        out
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for a zero-area image.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Sets the pixel at `(x, y)`, copying the buffer first if it is shared.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: u32) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = y as usize * self.width as usize + x as usize;
        self.make_mut()[idx] = px;
    }

    /// Exclusive mutable access to the pixels.
    ///
    /// Clones the underlying storage if other buffers still share it.
    #[inline]
    pub fn make_mut(&mut self) -> &mut [u32] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Number of distinct RGB values in the image (alpha ignored).
    pub fn distinct_colors(&self) -> usize {
        let mut seen: std::collections::HashSet<Color> = std::collections::HashSet::new();
        for &px in self.data.iter() {
            seen.insert(Color::from_argb(px));
        }
        seen.len()
    }
}
