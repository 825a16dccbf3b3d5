//! Read a config file into the raw object graph.

use breeze_common::ConfigError;
use serde_json::Value;
use std::path::Path;

/// On-disk config formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::ParseError(format!(
                "unsupported config format for {} (expected .toml, .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Parse file contents in `format` into a raw value.
pub fn parse_raw(content: &str, format: ConfigFormat) -> Result<Value, ConfigError> {
    let parsed = match format {
        ConfigFormat::Toml => toml::from_str::<Value>(content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| ConfigError::ParseError(format!("failed to parse {}: {e}", format.name())))
}

/// Read and parse the config file at `path`.
///
/// A missing file is [`ConfigError::FileNotFound`]; the loader is never
/// reached in that case.
pub fn read_raw(path: &Path) -> Result<Value, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    parse_raw(&content, format)
}
