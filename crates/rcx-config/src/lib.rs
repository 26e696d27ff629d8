//! # rcx-config
//!
//! User-defined color ranges and palettes for rcx.
//!
//! The built-in catalog lives in [`rcx_core::builtin`]. This crate loads the
//! user's own additions and overrides from a YAML file, validates them, and
//! produces the merged [`rcx_core::Catalog`] the rest of the tool works with.
//!
//! - [`UserDefinitions`] - load, edit, save
//! - [`default_path`] - platform location of the definitions file
//! - [`ConfigError`] - everything that can go wrong on the way

#![warn(missing_docs)]

pub mod definitions;
pub mod error;

pub use definitions::{default_path, UserDefinitions, DEFINITIONS_FILE};
pub use error::{ConfigError, ConfigResult};
