//! Opening source sprites.
//!
//! A front end may have nothing to open (an empty file dialog, a glob that
//! matched nothing). That is reported as [`OpenOutcome::NoSelection`], a
//! normal outcome rather than an error.

use crate::IoResult;
use rcx_core::ImageBuffer;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A decoded source sprite and where it came from.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// File the image was read from.
    pub path: PathBuf,
    /// Decoded ARGB pixels.
    pub image: ImageBuffer,
}

impl SourceImage {
    /// File name without its final extension, used as the output base name.
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Result of [`open`].
#[derive(Debug, Clone)]
pub enum OpenOutcome {
    /// The selected file was decoded.
    Opened(SourceImage),
    /// Nothing was selected.
    NoSelection,
}

/// Opens the selected file, if any.
pub fn open(selection: Option<&Path>) -> IoResult<OpenOutcome> {
    let Some(path) = selection else {
        return Ok(OpenOutcome::NoSelection);
    };
    let image = crate::read(path)?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        colors = image.distinct_colors(),
        "opened source image"
    );
    Ok(OpenOutcome::Opened(SourceImage {
        path: path.to_path_buf(),
        image,
    }))
}
