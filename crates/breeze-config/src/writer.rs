//! Write a [`Configuration`] to disk in its canonical raw form.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write.

use std::path::Path;

use breeze_common::ConfigError;

use crate::schema::Configuration;
use crate::source::ConfigFormat;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Serialize `config` in `format`.
pub fn render_config(config: &Configuration, format: ConfigFormat) -> Result<String, ConfigError> {
    let raw = config.to_raw();
    let rendered = match format {
        ConfigFormat::Toml => toml::to_string_pretty(&raw).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::to_string_pretty(&raw).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::to_string(&raw).map_err(|e| e.to_string()),
    };
    rendered.map_err(|e| {
        ConfigError::WriteError(format!("failed to serialize config to {}: {e}", format.name()))
    })
}

/// Write config to `path`, in the format implied by its extension.
///
/// Creates parent directories if they don't exist. Uses atomic write
/// (write to `.tmp` file, then rename) to prevent partial writes.
pub fn save_config_to_path(config: &Configuration, path: &Path) -> Result<(), ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = render_config(config, format)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    // Atomic write: write to .tmp, then rename
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, &content).map_err(|e| {
        ConfigError::WriteError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename failed, try direct write (Windows compat)
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &content).map_err(|e2| {
            ConfigError::WriteError(format!("failed to write config to {}: {e2}", path.display()))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
