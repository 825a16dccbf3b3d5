//! Config file discovery, reading and creation.
//!
//! This is the caller side of [`crate::load`]: it materializes the raw input
//! from disk and raises `FileNotFound` before the loader is ever invoked.

mod paths;
mod reader;
mod template;


pub use paths::{create_default_config, default_config_path, find_config, CONFIG_FILE_NAMES};
pub use reader::{parse_raw, read_raw, ConfigFormat};

use crate::loader::{load_with, LoadOptions};
use crate::schema::Configuration;
use breeze_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Read, validate and normalize the config file at `path`.
pub fn load_from_path(path: &Path, options: &LoadOptions) -> Result<Configuration, ConfigError> {
    let raw = read_raw(path)?;
    let config = load_with(&raw, options)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Locate the config file in `root` and load it.
pub fn load_project(root: &Path, options: &LoadOptions) -> Result<Configuration, ConfigError> {
    let path = find_config(root)?;
    load_from_path(&path, options)
}
