//! Color mapping construction.
//!
//! A [`ColorMapping`] is the finite source-RGB → destination-RGB table that
//! one recolor job applies to an image. Two builders produce it:
//!
//! - [`build_range_mapping`] stretches reference colors onto a target
//!   [`ColorRange`], preserving shading.
//! - [`build_palette_mapping`] substitutes colors index-for-index between two
//!   palettes.
//!
//! [`build_mapping`] is the single entry point over both, driven by a
//! [`TransformSpec`].
//!
//! # Range Interpolation
//!
//! Each reference color is placed on the luminance axis of the canonical
//! reference range ([`ColorRange::reference`]: black, red, white). With
//! luminance the mean of the channels:
//!
//! ```text
//! lum <= lum(mid):  t = (lum - lum(min)) / (lum(mid) - lum(min));  out = lerp(min, mid, t)
//! lum >  lum(mid):  t = (lum - lum(mid)) / (lum(max) - lum(mid));  out = lerp(mid, max, t)
//! ```
//!
//! where `min`/`mid`/`max` on the right-hand side are the *target* anchors.
//! A color exactly at the mid luminance takes the lower half with `t = 1`
//! and so maps exactly to the target `mid`.
//!
//! Both builders are pure and total: they never fail and never touch
//! anything but their inputs.
//!
//! # Example
//!
//! ```rust
//! use rcx_core::{build_range_mapping, builtin, Color};
//!
//! let blue = builtin::ranges().into_iter().find(|r| r.id() == "blue").unwrap();
//! let reference = builtin::reference_palette();
//! let map = build_range_mapping(&blue, reference.colors());
//! assert_eq!(map.get(Color::RED), Some(blue.mid()));
//! assert_eq!(map.get(Color::WHITE), Some(blue.max()));
//! assert_eq!(map.get(Color::BLACK), Some(blue.min()));
//! ```

use crate::{Color, ColorRange, Palette};
use std::collections::HashMap;
use std::collections::hash_map;

/// Source RGB → destination RGB table for one recolor job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMapping {
    table: HashMap<Color, Color>,
}

impl ColorMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mapping with room for `n` entries.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            table: HashMap::with_capacity(n),
        }
    }

    /// Adds or replaces the entry for `from`.
    #[inline]
    pub fn insert(&mut self, from: Color, to: Color) {
        self.table.insert(from, to);
    }

    /// Destination color for `from`, if mapped.
    #[inline]
    pub fn get(&self, from: Color) -> Option<Color> {
        self.table.get(&from).copied()
    }

    /// Returns `true` if `from` has an entry.
    #[inline]
    pub fn contains(&self, from: Color) -> bool {
        self.table.contains_key(&from)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterates over `(from, to)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, Color)> + '_ {
        self.table.iter().map(|(&k, &v)| (k, v))
    }
}

impl FromIterator<(Color, Color)> for ColorMapping {
    fn from_iter<I: IntoIterator<Item = (Color, Color)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ColorMapping {
    type Item = (Color, Color);
    type IntoIter = hash_map::IntoIter<Color, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}

/// Which recolor convention a job uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformSpec {
    /// Stretch the reference palette onto a target color range.
    Range(ColorRange),
    /// Swap the reference palette index-for-index with a target palette.
    Palette(Palette),
}

impl TransformSpec {
    /// Identifier of the target range or palette.
    pub fn target_id(&self) -> &str {
        match self {
            Self::Range(r) => r.id(),
            Self::Palette(p) => p.id(),
        }
    }
}

/// Builds the mapping for `spec`, using `reference` as the source colors.
///
/// For [`TransformSpec::Range`] the reference is the palette whose colors are
/// stretched onto the range; for [`TransformSpec::Palette`] it is the source
/// side of the index correspondence.
pub fn build_mapping(spec: &TransformSpec, reference: &[Color]) -> ColorMapping {
    match spec {
        TransformSpec::Range(range) => build_range_mapping(range, reference),
        TransformSpec::Palette(target) => build_palette_mapping(reference, target.colors()),
    }
}

/// Builds a mapping that retargets `reference_palette` onto `target`.
///
/// Every color in `reference_palette` gets an entry; nothing else does.
pub fn build_range_mapping(target: &ColorRange, reference_palette: &[Color]) -> ColorMapping {
    let axis = LuminanceAxis::of(&ColorRange::reference());
    let mut map = ColorMapping::with_capacity(reference_palette.len());

    for &c in reference_palette {
        let mapped = match axis.locate(c.luminance()) {
            Segment::Lower(t) => target.min().lerp(target.mid(), t),
            Segment::Upper(t) => target.mid().lerp(target.max(), t),
        };
        map.insert(c, mapped);
    }

    map
}

/// Builds a positional mapping `source[i] -> target[i]`.
///
/// Only the overlapping prefix is used. A color repeated in `source` keeps the
/// target of its last occurrence.
pub fn build_palette_mapping(source: &[Color], target: &[Color]) -> ColorMapping {
    source.iter().copied().zip(target.iter().copied()).collect()
}

/// Luminance positions of a range's `min`, `mid` and `max` anchors.
#[derive(Debug, Clone, Copy)]
struct LuminanceAxis {
    min: f64,
    mid: f64,
    max: f64,
}

/// Half of the axis a color falls in, with its rescaled position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment {
    Lower(f64),
    Upper(f64),
}

impl LuminanceAxis {
    fn of(range: &ColorRange) -> Self {
        Self {
            min: range.min().luminance(),
            mid: range.mid().luminance(),
            max: range.max().luminance(),
        }
    }

    fn locate(&self, lum: f64) -> Segment {
        if lum <= self.mid {
            Segment::Lower(ratio(lum - self.min, self.mid - self.min))
        } else {
            Segment::Upper(ratio(lum - self.mid, self.max - self.mid))
        }
    }
}

/// `num / den` clamped to `[0, 1]`; a collapsed segment counts as its far end.
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        (num / den).clamp(0.0, 1.0)
    } else {
        1.0
    }
}
