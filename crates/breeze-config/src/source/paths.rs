//! Config file discovery and default file creation.

use breeze_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Well-known config file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "breeze.config.toml",
    "breeze.config.json",
    "breeze.config.yaml",
    "breeze.config.yml",
];

/// Where `init` writes a new config in `root`.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAMES[0])
}

/// Find the config file in the project root.
pub fn find_config(root: &Path) -> Result<PathBuf, ConfigError> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ConfigError::FileNotFound(default_config_path(root)))
}

/// Write the default TOML config, with documentation comments, to `path`.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::WriteError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
