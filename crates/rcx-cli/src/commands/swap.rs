//! Palette-mode export.

use crate::SwapArgs;
use anyhow::Result;
use rcx_io::{ExportPlan, OutputNaming};
use std::path::Path;
use tracing::{info, trace};

/// Exports every input with `--from` colors replaced by `--to` colors.
pub fn run(args: SwapArgs, config: Option<&Path>) -> Result<()> {
    trace!(input = %args.input, from = %args.from, to = %args.to, "swap::run");

    let catalog = super::load_catalog(config)?;
    let source_palette = super::find_palette(&catalog, &args.from)?;
    let target_palette = super::find_palette(&catalog, &args.to)?;
    if source_palette.len() != target_palette.len() {
        info!(
            from = source_palette.len(),
            to = target_palette.len(),
            "palette sizes differ, mapping the common prefix"
        );
    }

    let sources = super::open_sources(&args.input)?;
    if sources.is_empty() {
        println!("No input files match '{}'", args.input);
        return Ok(());
    }
    super::ensure_output_dir(&args.output)?;

    let plans: Vec<ExportPlan> = sources
        .iter()
        .map(|source| {
            let naming =
                OutputNaming::for_source(&args.output, &source.path).with_extension(&args.ext);
            ExportPlan::palette_swap(source_palette, target_palette, &naming)
        })
        .collect();
    super::run_batch(&sources, &plans, args.force)?.finish()
}
