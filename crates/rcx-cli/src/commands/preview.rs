//! Single-transform preview.

use crate::PreviewArgs;
use anyhow::{bail, Context, Result};
use rcx_core::{build_mapping, remap_image, TransformSpec};
use rcx_io::{provenance, OpenOutcome};
use std::path::Path;
use tracing::trace;

/// Applies one range or palette swap to one image and writes the result.
pub fn run(args: PreviewArgs, config: Option<&Path>) -> Result<()> {
    trace!(input = %args.input.display(), "preview::run");

    let catalog = super::load_catalog(config)?;
    let key = super::find_palette(&catalog, &args.palette)?;
    let spec = match (&args.range, &args.to) {
        (Some(id), _) => TransformSpec::Range(super::find_range(&catalog, id)?.clone()),
        (None, Some(id)) => TransformSpec::Palette(super::find_palette(&catalog, id)?.clone()),
        (None, None) => bail!("Either --range or --to is required"),
    };

    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let source = match rcx_io::open(Some(args.input.as_path()))
        .with_context(|| format!("Failed to load: {}", args.input.display()))?
    {
        OpenOutcome::Opened(source) => source,
        OpenOutcome::NoSelection => bail!("No input selected"),
    };

    let mapping = build_mapping(&spec, key.colors());
    let outcome = remap_image(&source.image, &mapping);

    let stamp = provenance();
    rcx_io::write_with_text(
        &args.output,
        &outcome.image,
        &[(rcx_io::export::PROVENANCE_KEYWORD, stamp.as_str())],
    )
    .with_context(|| format!("Failed to save: {}", args.output.display()))?;

    println!("{}", args.output.display());
    if outcome.all_mapped {
        println!("All {} pixels mapped", source.image.pixel_count());
    } else {
        eprintln!(
            "Warning: some colors are not in palette '{}' and were left unchanged",
            key.id()
        );
    }
    Ok(())
}
