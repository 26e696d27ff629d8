//! Pixel remapping.
//!
//! [`remap_image`] applies a [`ColorMapping`] to every pixel of an
//! [`ImageBuffer`]:
//!
//! - mapped pixels take the destination RGB and keep their own alpha
//! - unmapped pixels are copied verbatim and mark the result incomplete
//!
//! The source buffer is never modified; the output is a fresh allocation of
//! the same size. Lookups hit the mapping's hash table once per pixel, with a
//! one-entry cache in front of it since sprite rows are mostly runs of one
//! color.
//!
//! # Example
//!
//! ```rust
//! use rcx_core::{remap_image, Color, ColorMapping, ImageBuffer};
//!
//! let src = ImageBuffer::filled(4, 4, Color::RED.with_alpha(0x7F));
//! let map: ColorMapping = [(Color::RED, Color::WHITE)].into_iter().collect();
//!
//! let out = remap_image(&src, &map);
//! assert!(out.all_mapped);
//! assert_eq!(out.image.pixel(3, 3), Color::WHITE.with_alpha(0x7F));
//! ```

use crate::color::alpha;
use crate::{Color, ColorMapping, ImageBuffer};
use tracing::trace;

/// Result of [`remap_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapOutcome {
    /// The recolored image, same dimensions as the source.
    pub image: ImageBuffer,
    /// `true` if every pixel's color had an entry in the mapping.
    ///
    /// Vacuously `true` for a zero-pixel image.
    pub all_mapped: bool,
}

/// Applies `mapping` to every pixel of `source`.
pub fn remap_image(source: &ImageBuffer, mapping: &ColorMapping) -> RemapOutcome {
    let mut out = Vec::with_capacity(source.pixel_count());
    let mut all_mapped = true;
    let mut cache: Option<(Color, Option<Color>)> = None;

    for &px in source.pixels() {
        let from = Color::from_argb(px);
        let to = match cache {
            Some((key, hit)) if key == from => hit,
            _ => {
                let hit = mapping.get(from);
                cache = Some((from, hit));
                hit
            }
        };

        match to {
            Some(c) => out.push(c.with_alpha(alpha(px))),
            None => {
                all_mapped = false;
                out.push(px);
            }
        }
    }

    trace!(
        width = source.width(),
        height = source.height(),
        entries = mapping.len(),
        all_mapped,
        "remap_image"
    );

    let (width, height) = source.dimensions();
    RemapOutcome {
        image: ImageBuffer::from_parts(width, height, out),
        all_mapped,
    }
}
