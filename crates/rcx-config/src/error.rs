//! Error types for user definition files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading, validating or saving definitions.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing the definitions file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse or serialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A range or palette record has an empty identifier.
    #[error("{kind} definition with empty id")]
    EmptyId {
        /// "range" or "palette".
        kind: &'static str,
    },

    /// A palette record lists no colors.
    #[error("palette '{id}' has no colors")]
    EmptyPalette {
        /// Palette identifier.
        id: String,
    },

    /// A record holds a malformed color or the wrong number of anchors.
    #[error("invalid {kind} '{id}': {source}")]
    Invalid {
        /// "range" or "palette".
        kind: &'static str,
        /// Record identifier.
        id: String,
        /// Underlying validation error.
        #[source]
        source: rcx_core::Error,
    },

    /// No platform config directory could be determined.
    #[error("no config directory available; pass an explicit path")]
    NoConfigDir,

    /// Context wrapper naming the file an error came from.
    #[error("{path}: {source}")]
    File {
        /// Definitions file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Attaches the file path to an error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
