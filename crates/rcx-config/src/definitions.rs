//! User definitions file.
//!
//! Holds the color ranges and palettes the user has added or redefined on
//! top of the built-ins. On disk this is a small YAML document:
//!
//! ```yaml
//! ranges:
//!   - id: ocean
//!     name: Ocean
//!     colors: ["#2E419B", "#FFFFFF", "#0F0F0F", "#0000FF"]
//! palettes:
//!   - id: mine
//!     name: Mine
//!     colors: ["#FF00FF", "#AA00AA"]
//! ```
//!
//! Range colors are listed as `mid, max, min, rep`. Every record is validated
//! when loaded, so a [`UserDefinitions`] value only ever holds well-formed
//! ranges and palettes.
//!
//! # Example
//!
//! ```ignore
//! use rcx_config::UserDefinitions;
//!
//! let path = rcx_config::default_path()?;
//! let mut defs = UserDefinitions::load(&path)?;
//! defs.remove_range("ocean");
//! defs.save(&path)?;
//!
//! let catalog = defs.catalog();
//! ```

use std::path::{Path, PathBuf};

use rcx_core::{Catalog, Color, ColorRange, Palette};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ConfigError, ConfigResult};

/// File name under the `rcx` config directory.
pub const DEFINITIONS_FILE: &str = "definitions.yaml";

/// Platform location of the definitions file, e.g.
/// `~/.config/rcx/definitions.yaml` on Linux.
pub fn default_path() -> ConfigResult<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join("rcx").join(DEFINITIONS_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

// ============================================================================
// Raw YAML records
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
struct RawDefinitions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ranges: Vec<RawEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    palettes: Vec<RawEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
struct RawEntry {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    colors: Vec<String>,
}

impl RawEntry {
    fn parse_colors(&self, kind: &'static str) -> ConfigResult<Vec<Color>> {
        self.colors
            .iter()
            .map(|c| {
                Color::from_hex(c.trim()).map_err(|source| ConfigError::Invalid {
                    kind,
                    id: self.id.clone(),
                    source,
                })
            })
            .collect()
    }

    fn into_range(self) -> ConfigResult<ColorRange> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::EmptyId { kind: "range" });
        }
        let colors = self.parse_colors("range")?;
        ColorRange::from_colors(self.id.clone(), self.name, &colors).map_err(|source| {
            ConfigError::Invalid {
                kind: "range",
                id: self.id,
                source,
            }
        })
    }

    fn into_palette(self) -> ConfigResult<Palette> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::EmptyId { kind: "palette" });
        }
        let colors = self.parse_colors("palette")?;
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette { id: self.id });
        }
        Ok(Palette::new(self.id, self.name, colors))
    }

    fn from_range(range: &ColorRange) -> Self {
        Self {
            id: range.id().to_string(),
            name: range.name().to_string(),
            colors: range.colors().iter().map(Color::to_string).collect(),
        }
    }

    fn from_palette(palette: &Palette) -> Self {
        Self {
            id: palette.id().to_string(),
            name: palette.name().to_string(),
            colors: palette.colors().iter().map(Color::to_string).collect(),
        }
    }
}

// ============================================================================
// UserDefinitions
// ============================================================================

/// Validated user ranges and palettes, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDefinitions {
    ranges: Vec<ColorRange>,
    palettes: Vec<Palette>,
}

impl UserDefinitions {
    /// Creates empty definitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads definitions from `path`. A missing file yields empty definitions.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no user definitions file");
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::from(e).in_file(path))?;
        let defs = Self::from_yaml_str(&content).map_err(|e| e.in_file(path))?;
        debug!(
            path = %path.display(),
            ranges = defs.ranges.len(),
            palettes = defs.palettes.len(),
            "loaded user definitions"
        );
        Ok(defs)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        // An empty document deserializes to unit, not to a map
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let raw: RawDefinitions = serde_yaml::from_str(yaml)?;
        let ranges = raw
            .ranges
            .into_iter()
            .map(RawEntry::into_range)
            .collect::<ConfigResult<Vec<_>>>()?;
        let palettes = raw
            .palettes
            .into_iter()
            .map(RawEntry::into_palette)
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Self { ranges, palettes })
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        let raw = RawDefinitions {
            ranges: self.ranges.iter().map(RawEntry::from_range).collect(),
            palettes: self.palettes.iter().map(RawEntry::from_palette).collect(),
        };
        Ok(serde_yaml::to_string(&raw)?)
    }

    /// Writes definitions to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let yaml = self.to_yaml_string()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::from(e).in_file(path))?;
        }
        std::fs::write(path, yaml).map_err(|e| ConfigError::from(e).in_file(path))?;
        trace!(path = %path.display(), "saved user definitions");
        Ok(())
    }

    /// User ranges in file order.
    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    /// User palettes in file order.
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Adds a range, replacing any existing one with the same id in place.
    pub fn add_or_update_range(&mut self, range: ColorRange) {
        match self.ranges.iter_mut().find(|r| r.id() == range.id()) {
            Some(slot) => *slot = range,
            None => self.ranges.push(range),
        }
    }

    /// Adds a palette, replacing any existing one with the same id in place.
    pub fn add_or_update_palette(&mut self, palette: Palette) {
        match self.palettes.iter_mut().find(|p| p.id() == palette.id()) {
            Some(slot) => *slot = palette,
            None => self.palettes.push(palette),
        }
    }

    /// Removes every range with `id`. Returns `true` if one was removed.
    pub fn remove_range(&mut self, id: &str) -> bool {
        let before = self.ranges.len();
        self.ranges.retain(|r| r.id() != id);
        self.ranges.len() != before
    }

    /// Removes every palette with `id`. Returns `true` if one was removed.
    pub fn remove_palette(&mut self, id: &str) -> bool {
        let before = self.palettes.len();
        self.palettes.retain(|p| p.id() != id);
        self.palettes.len() != before
    }

    /// Merged catalog snapshot: built-ins overlaid with these definitions.
    pub fn catalog(&self) -> Catalog {
        Catalog::merge(self.ranges.iter().cloned(), self.palettes.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
ranges:
  - id: ocean
    name: Ocean
    colors: ["#2E419B", "#FFFFFF", "#0F0F0F", "#0000FF"]
  - id: blue
    name: Ignored Name
    colors: ["#0000AA", "#AAAAFF", "#000022", "#0000AA"]
palettes:
  - id: mine
    colors: ["#FF00FF", "aa00aa"]
"##;

    #[test]
    fn test_parse_sample() {
        let defs = UserDefinitions::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(defs.ranges().len(), 2);
        assert_eq!(defs.ranges()[0].mid(), Color::from_u32(0x2E419B));
        assert_eq!(defs.ranges()[0].rep(), Color::from_u32(0x0000FF));
        assert_eq!(defs.palettes()[0].colors(), &[Color::from_u32(0xFF00FF), Color::from_u32(0xAA00AA)]);
        assert_eq!(defs.palettes()[0].name(), "");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(UserDefinitions::from_yaml_str("").unwrap(), UserDefinitions::new());
        assert_eq!(UserDefinitions::from_yaml_str("ranges: []\n").unwrap(), UserDefinitions::new());
    }

    #[test]
    fn test_range_needs_four_colors() {
        let yaml = "ranges:\n  - id: x\n    colors: [\"#000000\", \"#FFFFFF\"]\n";
        let err = UserDefinitions::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { source: rcx_core::Error::AnchorCount { got: 2, .. }, .. }
        ));
    }

    #[test]
    fn test_bad_hex_rejected() {
        let yaml = "palettes:\n  - id: p\n    colors: [\"#GG0000\"]\n";
        let err = UserDefinitions::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { kind: "palette", .. }));
    }

    #[test]
    fn test_empty_palette_and_id_rejected() {
        let yaml = "palettes:\n  - id: p\n    colors: []\n";
        assert!(matches!(
            UserDefinitions::from_yaml_str(yaml),
            Err(ConfigError::EmptyPalette { .. })
        ));
        let yaml = "ranges:\n  - id: \"\"\n    colors: [\"#000\", \"#FFF\", \"#000\", \"#FFF\"]\n";
        assert!(matches!(
            UserDefinitions::from_yaml_str(yaml),
            Err(ConfigError::EmptyId { kind: "range" })
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let defs = UserDefinitions::from_yaml_str(SAMPLE).unwrap();
        let yaml = defs.to_yaml_string().unwrap();
        assert!(yaml.contains("#2E419B"));
        assert_eq!(UserDefinitions::from_yaml_str(&yaml).unwrap(), defs);
    }

    #[test]
    fn test_add_update_remove() {
        let mut defs = UserDefinitions::new();
        let a = ColorRange::new("a", "A", Color::RED, Color::WHITE, Color::BLACK, Color::RED);
        defs.add_or_update_range(a.clone());
        defs.add_or_update_range(ColorRange::new("b", "B", Color::RED, Color::WHITE, Color::BLACK, Color::RED));
        defs.add_or_update_range(a.renamed("A2"));
        assert_eq!(defs.ranges().len(), 2);
        assert_eq!(defs.ranges()[0].name(), "A2");

        assert!(defs.remove_range("a"));
        assert!(!defs.remove_range("a"));
        assert_eq!(defs.ranges().len(), 1);

        defs.add_or_update_palette(Palette::from_u32s("p", "P", &[1]));
        assert!(defs.remove_palette("p"));
        assert!(defs.palettes().is_empty());
    }

    #[test]
    fn test_catalog_applies_overrides() {
        let defs = UserDefinitions::from_yaml_str(SAMPLE).unwrap();
        let catalog = defs.catalog();
        let blue = catalog.range("blue").unwrap();
        assert_eq!(blue.name(), "Blue");
        assert_eq!(blue.mid(), Color::from_u32(0x0000AA));
        assert_eq!(catalog.range_ordinal("ocean"), Some(16));
        assert_eq!(catalog.palette("mine").unwrap().name(), "Mine");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let defs = UserDefinitions::load(dir.path().join("nope.yaml")).unwrap();
        assert_eq!(defs, UserDefinitions::new());
    }

    #[test]
    fn test_save_creates_dirs_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rcx").join(DEFINITIONS_FILE);
        let defs = UserDefinitions::from_yaml_str(SAMPLE).unwrap();
        defs.save(&path).unwrap();
        assert_eq!(UserDefinitions::load(&path).unwrap(), defs);
    }

    #[test]
    fn test_load_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "ranges: [oops").unwrap();
        let err = UserDefinitions::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::File { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }
}
