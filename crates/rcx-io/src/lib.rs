//! # rcx-io
//!
//! Image I/O and export jobs for rcx.
//!
//! Sprites are decoded into the canonical ARGB [`rcx_core::ImageBuffer`]
//! whatever their on-disk layout, recolored in memory, and written back as
//! 8-bit RGBA with a provenance `tEXt` chunk.
//!
//! - [`read`] / [`write`] - format auto-detection over the codecs below
//! - [`open()`] - open a selected source, or report that nothing was selected
//! - [`export()`] - plan and run a batch of recolor jobs
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rcx_core::Catalog;
//! use rcx_io::{export, open, ExportOutcome, ExportPlan, OpenOutcome, OutputNaming};
//!
//! let OpenOutcome::Opened(src) = open(Some("knight.png".as_ref()))? else { return Ok(()) };
//! let catalog = Catalog::builtin();
//! let key = catalog.palette("magenta").unwrap();
//! let plan = ExportPlan::ranges(&catalog, key, &[], &OutputNaming::for_source("out", &src.path));
//!
//! match export(&src.image, &plan, false) {
//!     ExportOutcome::Written(report) => println!("{} written", report.succeeded().count()),
//!     ExportOutcome::Canceled { conflicts } => println!("{} files exist", conflicts.len()),
//! }
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths | Features |
//! |--------|------|-------|------------|----------|
//! | PNG | Yes | Yes | 1-16 in, 8 out | Indexed, gray, alpha, tRNS, tEXt |
//!
//! # Feature Flags
//!
//! - `parallel` - Run export jobs on the rayon thread pool (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
pub mod export;
pub mod open;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use export::{
    duplicate_outputs, export, provenance, run_jobs, ExportJob, ExportOutcome, ExportPlan,
    ExportReport, JobResult, JobStatus, OutputNaming,
};
pub use open::{open, OpenOutcome, SourceImage};

use rcx_core::ImageBuffer;
use std::path::Path;

/// Reads an image, detecting its format from magic bytes or extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let path = path.as_ref();
    let result = match Format::detect(path)? {
        Format::Png => png::read(path),
        Format::Unknown => Err(unsupported(path)),
    };
    result.map_err(|e| e.in_file(path))
}

/// Writes an image, choosing the format from the file extension.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> IoResult<()> {
    write_with_text(path, image, &[])
}

/// Writes an image with `(keyword, text)` metadata, where the format has
/// a place for it.
pub fn write_with_text<P: AsRef<Path>>(
    path: P,
    image: &ImageBuffer,
    text: &[(&str, &str)],
) -> IoResult<()> {
    let path = path.as_ref();
    let result = match Format::from_extension(path) {
        Format::Png => png::write_with_text(path, image, text),
        Format::Unknown => Err(unsupported(path)),
    };
    result.map_err(|e| e.in_file(path))
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}
