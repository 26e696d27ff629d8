//! Catalog listing commands.

use anyhow::Result;
use rcx_core::{Color, Origin};
use std::path::Path;
use tracing::trace;

/// Colors shown per palette line before eliding.
const PALETTE_PREVIEW: usize = 6;

/// Lists ranges with their 1-based ordinal, as used in output names.
pub fn run_ranges(config: Option<&Path>) -> Result<()> {
    trace!("list::run_ranges");
    let catalog = super::load_catalog(config)?;

    println!(
        "{:>3}  {:<14} {:<16} {:<8} {:<8} {:<8} {:<8}",
        "#", "ID", "NAME", "MID", "MAX", "MIN", "SWATCH"
    );
    for (i, entry) in catalog.range_entries().iter().enumerate() {
        let r = &entry.item;
        println!(
            "{:>3}  {:<14} {:<16} {:<8} {:<8} {:<8} {:<8}{}",
            i + 1,
            r.id(),
            r.name(),
            r.mid().to_string(),
            r.max().to_string(),
            r.min().to_string(),
            r.swatch().to_string(),
            marker(entry.origin)
        );
    }
    Ok(())
}

/// Lists palettes; `-v` prints every color.
pub fn run_palettes(config: Option<&Path>, verbose: u8) -> Result<()> {
    trace!("list::run_palettes");
    let catalog = super::load_catalog(config)?;

    println!("{:>3}  {:<14} {:<20} {:>6}  COLORS", "#", "ID", "NAME", "COUNT");
    for (i, entry) in catalog.palette_entries().iter().enumerate() {
        let p = &entry.item;
        let limit = if verbose > 0 { p.len() } else { PALETTE_PREVIEW };
        println!(
            "{:>3}  {:<14} {:<20} {:>6}  {}{}",
            i + 1,
            p.id(),
            p.name(),
            p.len(),
            color_list(p.colors(), limit),
            marker(entry.origin)
        );
    }
    Ok(())
}

fn marker(origin: Origin) -> String {
    match origin {
        Origin::Builtin => String::new(),
        other => format!("  [{}]", other.label()),
    }
}

fn color_list(colors: &[Color], limit: usize) -> String {
    let shown: Vec<String> = colors.iter().take(limit).map(Color::to_string).collect();
    let mut out = shown.join(" ");
    if colors.len() > limit {
        out.push_str(&format!(" ... (+{})", colors.len() - limit));
    }
    out
}
