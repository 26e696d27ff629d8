//! Editing user range and palette definitions.

use crate::{PaletteAddArgs, RangeAddArgs, RemoveArgs};
use anyhow::{bail, Context, Result};
use rcx_config::UserDefinitions;
use rcx_core::{builtin, catalog::capitalize, parse_color_list, ColorRange, Palette};
use std::path::Path;
use tracing::{info, trace};

fn display_name(id: &str, name: Option<String>) -> String {
    name.filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| capitalize(id))
}

fn check_id(id: &str) -> Result<()> {
    if id.trim().is_empty() || id.chars().any(|c| c.is_whitespace()) {
        bail!("Invalid id '{}': must be non-empty and contain no whitespace", id);
    }
    Ok(())
}

fn save(defs: &UserDefinitions, path: &Path) -> Result<()> {
    defs.save(path)
        .with_context(|| format!("Failed to save definitions: {}", path.display()))
}

/// Adds or replaces a user range.
pub fn run_range_add(args: RangeAddArgs, config: Option<&Path>) -> Result<()> {
    trace!(id = %args.id, "define::run_range_add");
    check_id(&args.id)?;

    let path = super::config_path(config)?;
    let mut defs = super::load_definitions(&path)?;

    if builtin::is_builtin_range(&args.id) {
        info!(id = %args.id, "overriding built-in range colors");
    }
    let name = display_name(&args.id, args.name);
    let rep = args.rep.unwrap_or(args.mid);
    defs.add_or_update_range(ColorRange::new(&args.id, name, args.mid, args.max, args.min, rep));
    save(&defs, &path)?;

    println!("Saved range '{}' to {}", args.id, path.display());
    Ok(())
}

/// Removes a user range. Built-ins cannot be removed, only their override.
pub fn run_range_remove(args: RemoveArgs, config: Option<&Path>) -> Result<()> {
    trace!(id = %args.id, "define::run_range_remove");
    let path = super::config_path(config)?;
    let mut defs = super::load_definitions(&path)?;

    if !defs.remove_range(&args.id) {
        if builtin::is_builtin_range(&args.id) {
            bail!("'{}' is a built-in range without a user override", args.id);
        }
        bail!("No user range '{}'", args.id);
    }
    save(&defs, &path)?;

    if builtin::is_builtin_range(&args.id) {
        println!("Restored built-in range '{}'", args.id);
    } else {
        println!("Removed range '{}'", args.id);
    }
    Ok(())
}

/// Adds or replaces a user palette from a free-text color list.
pub fn run_palette_add(args: PaletteAddArgs, config: Option<&Path>) -> Result<()> {
    trace!(id = %args.id, "define::run_palette_add");
    check_id(&args.id)?;

    let colors = parse_color_list(&args.colors);
    if colors.is_empty() {
        bail!("No valid colors in '{}'", args.colors);
    }

    let path = super::config_path(config)?;
    let mut defs = super::load_definitions(&path)?;

    if builtin::is_builtin_palette(&args.id) {
        info!(id = %args.id, "overriding built-in palette colors");
    }
    let count = colors.len();
    let name = display_name(&args.id, args.name);
    defs.add_or_update_palette(Palette::new(&args.id, name, colors));
    save(&defs, &path)?;

    println!("Saved palette '{}' ({} colors) to {}", args.id, count, path.display());
    Ok(())
}

/// Removes a user palette.
pub fn run_palette_remove(args: RemoveArgs, config: Option<&Path>) -> Result<()> {
    trace!(id = %args.id, "define::run_palette_remove");
    let path = super::config_path(config)?;
    let mut defs = super::load_definitions(&path)?;

    if !defs.remove_palette(&args.id) {
        if builtin::is_builtin_palette(&args.id) {
            bail!("'{}' is a built-in palette without a user override", args.id);
        }
        bail!("No user palette '{}'", args.id);
    }
    save(&defs, &path)?;

    if builtin::is_builtin_palette(&args.id) {
        println!("Restored built-in palette '{}'", args.id);
    } else {
        println!("Removed palette '{}'", args.id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcx_core::Color;

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name("ocean", None), "Ocean");
        assert_eq!(display_name("ocean", Some("  ".into())), "Ocean");
        assert_eq!(display_name("ocean", Some("Deep Sea".into())), "Deep Sea");
    }

    #[test]
    fn test_check_id() {
        assert!(check_id("ocean").is_ok());
        assert!(check_id("").is_err());
        assert!(check_id("two words").is_err());
    }

    #[test]
    fn test_add_and_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defs.yaml");

        run_range_add(
            RangeAddArgs {
                id: "ocean".into(),
                name: None,
                mid: Color::from_u32(0x2E419B),
                max: Color::WHITE,
                min: Color::from_u32(0x0F0F0F),
                rep: None,
            },
            Some(&path),
        )
        .unwrap();
        run_palette_add(
            PaletteAddArgs {
                id: "mine".into(),
                name: Some("Mine".into()),
                colors: "#FF00FF, bogus, AA00AA".into(),
            },
            Some(&path),
        )
        .unwrap();

        let catalog = UserDefinitions::load(&path).unwrap().catalog();
        let ocean = catalog.range("ocean").unwrap();
        assert_eq!(ocean.name(), "Ocean");
        assert_eq!(ocean.rep(), ocean.mid());
        assert_eq!(catalog.palette("mine").unwrap().len(), 2);

        run_range_remove(RemoveArgs { id: "ocean".into() }, Some(&path)).unwrap();
        assert!(run_range_remove(RemoveArgs { id: "ocean".into() }, Some(&path)).is_err());
        assert!(run_palette_remove(RemoveArgs { id: "magenta".into() }, Some(&path)).is_err());
    }

    #[test]
    fn test_palette_add_rejects_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defs.yaml");
        let args = PaletteAddArgs {
            id: "p".into(),
            name: None,
            colors: ", nope ,".into(),
        };
        assert!(run_palette_add(args, Some(&path)).is_err());
        assert!(!path.exists());
    }
}
