//! Range-mode batch export.

use crate::RecolorArgs;
use anyhow::Result;
use rcx_io::{ExportPlan, OutputNaming};
use std::path::Path;
use tracing::{info, trace};

/// Exports one recolored copy of every input per selected range.
pub fn run(args: RecolorArgs, config: Option<&Path>) -> Result<()> {
    trace!(input = %args.input, palette = %args.palette, "recolor::run");

    let catalog = super::load_catalog(config)?;
    let key = super::find_palette(&catalog, &args.palette)?;
    for id in &args.ranges {
        super::find_range(&catalog, id)?;
    }
    let selection: Vec<&str> = args.ranges.iter().map(String::as_str).collect();

    let sources = super::open_sources(&args.input)?;
    if sources.is_empty() {
        println!("No input files match '{}'", args.input);
        return Ok(());
    }
    super::ensure_output_dir(&args.output)?;

    info!(files = sources.len(), key = key.id(), "starting range export");

    let plans: Vec<ExportPlan> = sources
        .iter()
        .map(|source| {
            let naming =
                OutputNaming::for_source(&args.output, &source.path).with_extension(&args.ext);
            ExportPlan::ranges(&catalog, key, &selection, &naming)
        })
        .collect();
    super::run_batch(&sources, &plans, args.force)?.finish()
}
