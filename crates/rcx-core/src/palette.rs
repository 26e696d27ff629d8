//! Named, ordered color lists.

use crate::Color;

/// A named palette. Color order is significant: it defines index
/// correspondence for palette swaps and ramp position for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    id: String,
    name: String,
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette.
    pub fn new(id: impl Into<String>, name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors,
        }
    }

    /// Creates a palette from `0xRRGGBB` values.
    pub fn from_u32s(id: impl Into<String>, name: impl Into<String>, rgb: &[u32]) -> Self {
        Self::new(id, name, rgb.iter().map(|&v| Color::from_u32(v)).collect())
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

    /// Colors in ramp order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Same colors under a different display name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}
