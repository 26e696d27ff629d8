//! Export planning and execution.
//!
//! An export turns one source sprite into one output file per transform.
//! Planning and running are separate steps so a front end can inspect the
//! planned outputs (and their conflicts with existing files) first:
//!
//! ```text
//! ExportPlan::ranges / ExportPlan::palette_swap   -> output names, specs
//!          |
//!          v
//! export(source, plan, force)
//!          |
//!          +-- conflicts and !force -> ExportOutcome::Canceled
//!          +-- otherwise run jobs   -> ExportOutcome::Written(report)
//! ```
//!
//! # Output Naming
//!
//! | Mode | Pattern |
//! |------|---------|
//! | Range | `<base>-RC-<keyPalette>-<ordinal>-<range>.<ext>` |
//! | Palette swap | `<base>-PAL-<sourcePalette>-<targetPalette>.<ext>` |
//!
//! `<ordinal>` is the 1-based position of the range in catalog display
//! order, so names stay stable no matter which subset is exported.
//!
//! Jobs share the source pixels and run in parallel with the `parallel`
//! feature. A job whose mapping leaves pixels untouched is still written and
//! reported as [`JobStatus::Incomplete`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rcx_core::{build_mapping, remap_image, Catalog, Color, ImageBuffer, Palette, TransformSpec};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// `tEXt` keyword carrying [`provenance`].
pub const PROVENANCE_KEYWORD: &str = "Software";

/// Provenance string stamped into every exported file.
pub fn provenance() -> String {
    format!("Generated by rcx v{}", env!("CARGO_PKG_VERSION"))
}

/// File name for a range-mode output.
pub fn range_output_name(
    base: &str,
    key_palette_id: &str,
    ordinal: usize,
    range_id: &str,
    ext: &str,
) -> String {
    format!("{base}-RC-{key_palette_id}-{ordinal}-{range_id}.{ext}")
}

/// File name for a palette-swap output.
pub fn palette_output_name(base: &str, source_id: &str, target_id: &str, ext: &str) -> String {
    format!("{base}-PAL-{source_id}-{target_id}.{ext}")
}

// ============================================================================
// Planning
// ============================================================================

/// One planned output file.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Transform producing this output.
    pub spec: TransformSpec,
    /// Destination path.
    pub output: PathBuf,
}

/// Where and under which base name outputs go.
#[derive(Debug, Clone)]
pub struct OutputNaming {
    dir: PathBuf,
    base: String,
    ext: String,
}

impl OutputNaming {
    /// Outputs in `dir`, named after `base`, as PNG.
    pub fn new(dir: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base: base.into(),
            ext: "png".to_string(),
        }
    }

    /// Outputs named after the stem of `source`.
    pub fn for_source(dir: impl Into<PathBuf>, source: &Path) -> Self {
        let base = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(dir, base)
    }

    /// Overrides the output extension.
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: String) -> PathBuf {
        self.dir.join(name)
    }
}

/// The full set of jobs for one source image.
#[derive(Debug, Clone)]
pub struct ExportPlan {
    key: Vec<Color>,
    jobs: Vec<ExportJob>,
}

impl ExportPlan {
    /// Range mode: one job per selected range, keyed on `key_palette`.
    ///
    /// `selection` lists range ids to export; empty means every range.
    /// Jobs follow catalog display order and unknown ids are ignored.
    pub fn ranges(
        catalog: &Catalog,
        key_palette: &Palette,
        selection: &[&str],
        naming: &OutputNaming,
    ) -> Self {
        let jobs = catalog
            .ranges()
            .enumerate()
            .filter(|(_, r)| selection.is_empty() || selection.iter().any(|id| *id == r.id()))
            .map(|(i, range)| ExportJob {
                output: naming.path(range_output_name(
                    &naming.base,
                    key_palette.id(),
                    i + 1,
                    range.id(),
                    &naming.ext,
                )),
                spec: TransformSpec::Range(range.clone()),
            })
            .collect();

        Self {
            key: key_palette.colors().to_vec(),
            jobs,
        }
    }

    /// Palette mode: a single job mapping `source` onto `target` by index.
    pub fn palette_swap(source: &Palette, target: &Palette, naming: &OutputNaming) -> Self {
        let job = ExportJob {
            output: naming.path(palette_output_name(
                &naming.base,
                source.id(),
                target.id(),
                &naming.ext,
            )),
            spec: TransformSpec::Palette(target.clone()),
        };
        Self {
            key: source.colors().to_vec(),
            jobs: vec![job],
        }
    }

    /// Planned jobs in order.
    pub fn jobs(&self) -> &[ExportJob] {
        &self.jobs
    }

    /// Key colors every mapping is built over.
    pub fn key(&self) -> &[Color] {
        &self.key
    }

    /// Planned outputs that already exist on disk.
    pub fn conflicts(&self) -> Vec<PathBuf> {
        self.jobs
            .iter()
            .filter(|j| j.output.exists())
            .map(|j| j.output.clone())
            .collect()
    }
}

/// Output paths planned more than once across `plans`, in first-seen order.
///
/// Sources with the same file stem in different directories land on the
/// same output name when exported into one directory.
pub fn duplicate_outputs(plans: &[ExportPlan]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for job in plans.iter().flat_map(|p| p.jobs.iter()) {
        if !seen.insert(job.output.as_path()) && !duplicates.contains(&job.output) {
            duplicates.push(job.output.clone());
        }
    }
    duplicates
}

// ============================================================================
// Execution
// ============================================================================

/// Outcome of one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Written, every pixel matched a key color.
    Complete,
    /// Written, but some pixels were not in the mapping and kept their color.
    Incomplete,
    /// Not written.
    Failed(String),
}

/// Outcome of one job together with its output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    /// Destination path.
    pub output: PathBuf,
    /// What happened.
    pub status: JobStatus,
}

/// Per-file results of a finished export, in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// One entry per job.
    pub results: Vec<JobResult>,
}

impl ExportReport {
    /// Files that were written (complete or not).
    pub fn succeeded(&self) -> impl Iterator<Item = &Path> + '_ {
        self.results
            .iter()
            .filter(|r| !matches!(r.status, JobStatus::Failed(_)))
            .map(|r| r.output.as_path())
    }

    /// Jobs that failed, with their error messages.
    pub fn failed(&self) -> impl Iterator<Item = (&Path, &str)> + '_ {
        self.results.iter().filter_map(|r| match &r.status {
            JobStatus::Failed(msg) => Some((r.output.as_path(), msg.as_str())),
            _ => None,
        })
    }

    /// Files written with unmapped pixels.
    pub fn incomplete(&self) -> impl Iterator<Item = &Path> + '_ {
        self.results
            .iter()
            .filter(|r| r.status == JobStatus::Incomplete)
            .map(|r| r.output.as_path())
    }

    /// `true` if no job failed.
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }
}

/// Result of [`export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Jobs were run.
    Written(ExportReport),
    /// Nothing was written because outputs already exist.
    Canceled {
        /// Existing files that would have been overwritten.
        conflicts: Vec<PathBuf>,
    },
}

/// Runs `plan` against `source`.
///
/// Without `force`, any existing output cancels the whole export before a
/// single file is touched.
pub fn export(source: &ImageBuffer, plan: &ExportPlan, force: bool) -> ExportOutcome {
    if !force {
        let conflicts = plan.conflicts();
        if !conflicts.is_empty() {
            debug!(conflicts = conflicts.len(), "export canceled");
            return ExportOutcome::Canceled { conflicts };
        }
    }
    ExportOutcome::Written(run_jobs(source, plan))
}

/// Runs every job of `plan` unconditionally.
pub fn run_jobs(source: &ImageBuffer, plan: &ExportPlan) -> ExportReport {
    let stamp = provenance();

    #[cfg(feature = "parallel")]
    let results: Vec<JobResult> = plan
        .jobs
        .par_iter()
        .map(|job| run_job(source, &plan.key, job, &stamp))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<JobResult> = plan
        .jobs
        .iter()
        .map(|job| run_job(source, &plan.key, job, &stamp))
        .collect();

    let report = ExportReport { results };
    info!(
        written = report.succeeded().count(),
        failed = report.failed().count(),
        incomplete = report.incomplete().count(),
        "export finished"
    );
    report
}

fn run_job(source: &ImageBuffer, key: &[Color], job: &ExportJob, stamp: &str) -> JobResult {
    let mapping = build_mapping(&job.spec, key);
    let remapped = remap_image(source, &mapping);
    debug!(
        target_id = job.spec.target_id(),
        output = %job.output.display(),
        entries = mapping.len(),
        "export job"
    );

    let status = match crate::write_with_text(
        &job.output,
        &remapped.image,
        &[(PROVENANCE_KEYWORD, stamp)],
    ) {
        Ok(()) if remapped.all_mapped => JobStatus::Complete,
        Ok(()) => {
            warn!(output = %job.output.display(), "some pixels had no mapping and were left unchanged");
            JobStatus::Incomplete
        }
        Err(e) => JobStatus::Failed(e.to_string()),
    };

    JobResult {
        output: job.output.clone(),
        status,
    }
}
