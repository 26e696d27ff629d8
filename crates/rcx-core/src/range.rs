//! Four-anchor color ranges.
//!
//! A [`ColorRange`] describes a tint family with four colors:
//!
//! | Anchor | Role |
//! |--------|------|
//! | `mid`  | base tone; reference colors at the reference mid luminance land here |
//! | `max`  | highlight anchor |
//! | `min`  | shadow anchor |
//! | `rep`  | flat representative color for swatches (minimap, flags) |
//!
//! Ranges are immutable once built. Malformed definitions (wrong number of
//! anchors) are rejected by [`ColorRange::from_colors`], so everything that
//! reaches the mapping builder is already valid.

use crate::{Color, Error, Result};

/// A named 4-point color range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorRange {
    id: String,
    name: String,
    mid: Color,
    max: Color,
    min: Color,
    rep: Color,
}

impl ColorRange {
    /// Creates a range from its anchors.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mid: Color,
        max: Color,
        min: Color,
        rep: Color,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mid,
            max,
            min,
            rep,
        }
    }

    /// Creates a range from a `[mid, max, min, rep]` color list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorCount`] unless exactly four colors are given.
    pub fn from_colors(
        id: impl Into<String>,
        name: impl Into<String>,
        colors: &[Color],
    ) -> Result<Self> {
        let id = id.into();
        match *colors {
            [mid, max, min, rep] => Ok(Self::new(id, name, mid, max, min, rep)),
            _ => Err(Error::AnchorCount {
                id,
                got: colors.len(),
            }),
        }
    }

    /// The canonical reference range all source art is drawn against:
    /// pure red base, white highlights, black shadows.
    pub fn reference() -> Self {
        Self::new("red", "Red", Color::RED, Color::WHITE, Color::BLACK, Color::RED)
    }

    /// Identifier, unique within a catalog.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base tone.
    #[inline]
    pub fn mid(&self) -> Color {
        self.mid
    }

    /// Highlight anchor.
    #[inline]
    pub fn max(&self) -> Color {
        self.max
    }

    /// Shadow anchor.
    #[inline]
    pub fn min(&self) -> Color {
        self.min
    }

    /// Flat representative color.
    #[inline]
    pub fn rep(&self) -> Color {
        self.rep
    }

    /// Swatch color for non-interpolated contexts. Same as [`Self::rep`].
    #[inline]
    pub fn swatch(&self) -> Color {
        self.rep
    }

    /// Anchors in storage order `[mid, max, min, rep]`.
    pub fn colors(&self) -> [Color; 4] {
        [self.mid, self.max, self.min, self.rep]
    }

    /// Same colors under a different display name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}
