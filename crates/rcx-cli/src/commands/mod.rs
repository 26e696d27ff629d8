//! CLI command implementations

pub mod define;
pub mod list;
pub mod preview;
pub mod recolor;
pub mod swap;

use anyhow::{bail, Context, Result};
use rcx_config::UserDefinitions;
use rcx_core::{Catalog, ColorRange, Palette};
use rcx_io::{ExportPlan, ExportReport, OpenOutcome, SourceImage};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolves the definitions file: explicit path or platform default.
pub fn config_path(config: Option<&Path>) -> Result<PathBuf> {
    match config {
        Some(path) => Ok(path.to_path_buf()),
        None => rcx_config::default_path().context("Cannot locate user definitions"),
    }
}

/// Loads user definitions.
pub fn load_definitions(path: &Path) -> Result<UserDefinitions> {
    UserDefinitions::load(path)
        .with_context(|| format!("Failed to load definitions: {}", path.display()))
}

/// Builds the merged catalog.
pub fn load_catalog(config: Option<&Path>) -> Result<Catalog> {
    let path = config_path(config)?;
    Ok(load_definitions(&path)?.catalog())
}

/// Looks up a range or fails with the known ids.
pub fn find_range<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a ColorRange> {
    match catalog.range(id) {
        Some(range) => Ok(range),
        None => {
            let known: Vec<_> = catalog.ranges().map(|r| r.id()).collect();
            bail!("Unknown color range '{}' (known: {})", id, known.join(", "))
        }
    }
}

/// Looks up a palette or fails with the known ids.
pub fn find_palette<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Palette> {
    match catalog.palette(id) {
        Some(palette) => Ok(palette),
        None => {
            let known: Vec<_> = catalog.palettes().map(|p| p.id()).collect();
            bail!("Unknown palette '{}' (known: {})", id, known.join(", "))
        }
    }
}

/// Expands an input argument: an existing path as-is, otherwise a glob.
pub fn expand_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(pattern);
    if path.exists() {
        return Ok(vec![path.to_path_buf()]);
    }
    let files: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("Invalid input pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    debug!(pattern, files = files.len(), "expanded inputs");
    Ok(files)
}

/// Opens every file the input argument selects.
///
/// An empty selection is not an error; the caller gets an empty list.
pub fn open_sources(pattern: &str) -> Result<Vec<SourceImage>> {
    let files = expand_inputs(pattern)?;
    let selections: Vec<Option<&Path>> = if files.is_empty() {
        vec![None]
    } else {
        files.iter().map(|p| Some(p.as_path())).collect()
    };

    let mut sources = Vec::with_capacity(files.len());
    for selection in selections {
        let outcome = rcx_io::open(selection).with_context(|| {
            format!(
                "Failed to load: {}",
                selection.map(|p| p.display().to_string()).unwrap_or_default()
            )
        })?;
        match outcome {
            OpenOutcome::Opened(source) => sources.push(source),
            OpenOutcome::NoSelection => warn!(pattern, "no input files selected"),
        }
    }
    Ok(sources)
}

/// Creates the output directory.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

/// Runs one plan per source, checking every planned output first.
///
/// Duplicate output names are fatal even with `force`. Without `force`, any
/// existing output cancels the whole batch before a file is written.
pub fn run_batch(sources: &[SourceImage], plans: &[ExportPlan], force: bool) -> Result<Summary> {
    let duplicates = rcx_io::duplicate_outputs(plans);
    if !duplicates.is_empty() {
        for path in &duplicates {
            eprintln!("  duplicate: {}", path.display());
        }
        bail!(
            "{} output name(s) would be written by more than one input",
            duplicates.len()
        );
    }

    if !force {
        let conflicts: Vec<PathBuf> = plans.iter().flat_map(|p| p.conflicts()).collect();
        if !conflicts.is_empty() {
            for path in &conflicts {
                eprintln!("  exists: {}", path.display());
            }
            bail!(
                "Export canceled: {} output file(s) already exist (use --force to overwrite)",
                conflicts.len()
            );
        }
    }

    let mut summary = Summary::default();
    for (source, plan) in sources.iter().zip(plans) {
        debug!(source = %source.path.display(), jobs = plan.jobs().len(), "exporting");
        summary.add(&rcx_io::run_jobs(&source.image, plan));
    }
    Ok(summary)
}

/// Tally of written files across all sources.
#[derive(Debug, Default)]
pub struct Summary {
    pub written: usize,
    pub incomplete: usize,
    pub failed: usize,
}

impl Summary {
    /// Prints and accumulates one export report.
    fn add(&mut self, report: &ExportReport) {
        for path in report.succeeded() {
            println!("{}", path.display());
        }
        for path in report.incomplete() {
            eprintln!("Warning: unmapped colors left unchanged in {}", path.display());
        }
        for (path, err) in report.failed() {
            eprintln!("Error: {}: {}", path.display(), err);
        }
        self.written += report.succeeded().count();
        self.incomplete += report.incomplete().count();
        self.failed += report.failed().count();
    }

    /// Prints the final line and fails if any job failed.
    pub fn finish(self) -> Result<()> {
        println!(
            "Wrote {} file(s), {} incomplete, {} failed",
            self.written, self.incomplete, self.failed
        );
        if self.failed > 0 {
            bail!("{} file(s) failed", self.failed);
        }
        Ok(())
    }
}
