//! Merged catalog of color ranges and palettes.
//!
//! A [`Catalog`] is an immutable snapshot of everything the engine can
//! recolor with: the built-ins merged with the user's own definitions. It is
//! rebuilt from scratch by [`Catalog::merge`] whenever the user definitions
//! change; callers simply replace the snapshot they hold.
//!
//! # Merge Rules
//!
//! - Built-ins come first, in built-in order.
//! - A user entry with a built-in identifier replaces that built-in's colors
//!   but keeps its display name and its slot ([`Origin::Override`]).
//! - Remaining user entries follow, sorted by identifier ([`Origin::User`]).
//!   An empty display name falls back to the capitalized identifier.
//! - Among user entries sharing an identifier, the last one wins.
//!
//! ```rust
//! use rcx_core::{Catalog, Color, ColorRange};
//!
//! let mine = ColorRange::new("blue", "My Blue", Color::from_u32(0x0000AA),
//!     Color::WHITE, Color::BLACK, Color::from_u32(0x0000AA));
//! let catalog = Catalog::merge([mine], []);
//!
//! let blue = catalog.range("blue").unwrap();
//! assert_eq!(blue.name(), "Blue");
//! assert_eq!(blue.mid(), Color::from_u32(0x0000AA));
//! assert_eq!(catalog.range_ordinal("blue"), Some(2));
//! ```

use crate::{ColorRange, Palette, builtin};
use std::collections::BTreeMap;
use tracing::debug;

/// Where a catalog entry's data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Built-in, untouched.
    Builtin,
    /// Built-in slot whose colors the user redefined.
    Override,
    /// User-only definition.
    User,
}

impl Origin {
    /// Short label for listings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Override => "override",
            Self::User => "user",
        }
    }
}

/// A catalog item together with its [`Origin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    /// The range or palette, with merged colors and display name.
    pub item: T,
    /// Where it came from.
    pub origin: Origin,
}

/// Snapshot of the effective ranges and palettes, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    ranges: Vec<Entry<ColorRange>>,
    palettes: Vec<Entry<Palette>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Access to the fields the merge needs, shared by ranges and palettes.
trait Named: Clone {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn renamed(&self, name: String) -> Self;
}

impl Named for ColorRange {
    fn id(&self) -> &str {
        ColorRange::id(self)
    }
    fn name(&self) -> &str {
        ColorRange::name(self)
    }
    fn renamed(&self, name: String) -> Self {
        ColorRange::renamed(self, name)
    }
}

impl Named for Palette {
    fn id(&self) -> &str {
        Palette::id(self)
    }
    fn name(&self) -> &str {
        Palette::name(self)
    }
    fn renamed(&self, name: String) -> Self {
        Palette::renamed(self, name)
    }
}

impl Catalog {
    /// Built-ins only.
    pub fn builtin() -> Self {
        Self::merge([], [])
    }

    /// Merges user definitions over the built-ins.
    pub fn merge(
        user_ranges: impl IntoIterator<Item = ColorRange>,
        user_palettes: impl IntoIterator<Item = Palette>,
    ) -> Self {
        Self {
            ranges: merge_entries(builtin::ranges(), user_ranges),
            palettes: merge_entries(builtin::palettes(), user_palettes),
        }
    }

    /// Ranges in display order.
    pub fn ranges(&self) -> impl Iterator<Item = &ColorRange> + '_ {
        self.ranges.iter().map(|e| &e.item)
    }

    /// Ranges with their origin, in display order.
    pub fn range_entries(&self) -> &[Entry<ColorRange>] {
        &self.ranges
    }

    /// Looks up a range by identifier.
    pub fn range(&self, id: &str) -> Option<&ColorRange> {
        self.ranges.iter().map(|e| &e.item).find(|r| r.id() == id)
    }

    /// 1-based position of a range in display order.
    pub fn range_ordinal(&self, id: &str) -> Option<usize> {
        self.ranges
            .iter()
            .position(|e| e.item.id() == id)
            .map(|i| i + 1)
    }

    /// Palettes in display order.
    pub fn palettes(&self) -> impl Iterator<Item = &Palette> + '_ {
        self.palettes.iter().map(|e| &e.item)
    }

    /// Palettes with their origin, in display order.
    pub fn palette_entries(&self) -> &[Entry<Palette>] {
        &self.palettes
    }

    /// Looks up a palette by identifier.
    pub fn palette(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().map(|e| &e.item).find(|p| p.id() == id)
    }
}

fn merge_entries<T: Named>(builtins: Vec<T>, user: impl IntoIterator<Item = T>) -> Vec<Entry<T>> {
    let mut user: BTreeMap<String, T> = user
        .into_iter()
        .map(|item| (item.id().to_string(), item))
        .collect();

    let mut merged = Vec::with_capacity(builtins.len() + user.len());

    for builtin in builtins {
        match user.remove(builtin.id()) {
            Some(redefined) => {
                debug!(id = builtin.id(), "user definition overrides built-in colors");
                merged.push(Entry {
                    item: redefined.renamed(builtin.name().to_string()),
                    origin: Origin::Override,
                });
            }
            None => merged.push(Entry {
                item: builtin,
                origin: Origin::Builtin,
            }),
        }
    }

    for (id, item) in user {
        let item = if item.name().trim().is_empty() {
            item.renamed(capitalize(&id))
        } else {
            item
        };
        merged.push(Entry {
            item,
            origin: Origin::User,
        });
    }

    merged
}

/// Uppercases the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
