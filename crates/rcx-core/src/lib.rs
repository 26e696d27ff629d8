//! # rcx-core
//!
//! Recolor engine for indexed-color game sprites.
//!
//! Sprites mark their "team color" areas with a fixed key palette. This crate
//! turns a chosen target (a [`ColorRange`] or a [`Palette`]) into a
//! [`ColorMapping`] from key colors to output colors, and applies it to an
//! [`ImageBuffer`] pixel by pixel:
//!
//! - [`Color`], [`ImageBuffer`] - RGB value and ARGB image buffer
//! - [`ColorRange`], [`Palette`] - recolor targets
//! - [`build_mapping`] - luminance range mapping or positional palette swap
//! - [`remap_image`] - apply a mapping, reporting whether every pixel matched
//! - [`Catalog`] - built-ins merged with user definitions
//! - [`parse_color_list`] - lenient free-text color list parser
//!
//! ## Example
//!
//! ```rust
//! use rcx_core::{build_mapping, builtin, remap_image, Catalog, Color, ImageBuffer, TransformSpec};
//!
//! let catalog = Catalog::builtin();
//! let blue = catalog.range("blue").unwrap().clone();
//! let reference = builtin::reference_palette();
//!
//! let mapping = build_mapping(&TransformSpec::Range(blue.clone()), reference.colors());
//! let sprite = ImageBuffer::filled(8, 8, Color::RED.with_alpha(0xFF));
//! let out = remap_image(&sprite, &mapping);
//!
//! assert!(out.all_mapped);
//! assert_eq!(out.image.pixel(0, 0), blue.mid().with_alpha(0xFF));
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! rcx-core (this crate)
//!    ^
//!    |
//!    +-- rcx-config (user definitions on disk)
//!    +-- rcx-io (PNG codec, export naming, batch export)
//!    +-- rcx-cli (command line front end)
//! ```
//!
//! Everything here is pure and synchronous. Values are immutable once built,
//! so mappings, catalogs and images can be shared across threads freely.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builtin;
pub mod catalog;
pub mod color;
pub mod error;
pub mod image;
pub mod mapping;
pub mod palette;
pub mod parse;
pub mod range;
pub mod remap;

// Re-exports for convenience
pub use catalog::{Catalog, Entry, Origin};
pub use color::Color;
pub use error::*;
pub use image::ImageBuffer;
pub use mapping::{
    build_mapping, build_palette_mapping, build_range_mapping, ColorMapping, TransformSpec,
};
pub use palette::Palette;
pub use parse::parse_color_list;
pub use range::ColorRange;
pub use remap::{remap_image, RemapOutcome};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rcx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{Catalog, Origin};
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::image::ImageBuffer;
    pub use crate::mapping::{build_mapping, ColorMapping, TransformSpec};
    pub use crate::palette::Palette;
    pub use crate::range::ColorRange;
    pub use crate::remap::{remap_image, RemapOutcome};
}
