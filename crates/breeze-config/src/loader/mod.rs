//! Raw input to validated [`Configuration`].
//!
//! The walk is an allow-list over the top-level keys: each recognized key is
//! handed to its section parser, anything else falls through to a catch-all
//! branch that logs and discards it.

mod sections;
pub(crate) mod walk;


use crate::schema::{Configuration, ContainerOptions};
use crate::validation;
use breeze_common::ConfigError;
use serde_json::Value;
use tracing::debug;

use walk::{child, expect_object, present};

/// Which kind of build the configuration is loaded for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Lenient: an empty content set only warns.
    #[default]
    Development,
    /// Strict: content must select at least one file pattern.
    Production,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub mode: BuildMode,
}

impl LoadOptions {
    pub fn production() -> Self {
        Self {
            mode: BuildMode::Production,
        }
    }
}

/// Validate and normalize `raw` with default (development) options.
pub fn load(raw: &Value) -> Result<Configuration, ConfigError> {
    load_with(raw, &LoadOptions::default())
}

/// Validate and normalize `raw`.
///
/// Pure: performs no I/O. Either every invariant holds for the returned
/// configuration or an error citing the offending field is returned.
pub fn load_with(raw: &Value, options: &LoadOptions) -> Result<Configuration, ConfigError> {
    let root = expect_object(raw, "<root>")?;
    let mut config = Configuration::default();
    let mut theme_container = None;

    for (key, value) in root {
        let path = child("", key);
        let Some(value) = present(Some(value)) else {
            continue;
        };
        match key.as_str() {
            "darkMode" => config.dark_mode = sections::parse_dark_mode(value, &path)?,
            "content" => config.content = sections::parse_content(value, &path)?,
            "theme" => {
                let (theme, container) = sections::parse_theme(value, &path)?;
                config.theme = theme;
                theme_container = container;
            }
            // Applied after the loop so it wins over `theme.container`.
            "container" => {}
            "plugins" => config.plugins = sections::parse_plugins(value, &path)?,
            "prefix" => config.prefix = sections::parse_prefix(value, &path)?,
            "important" => config.important = sections::parse_important(value, &path)?,
            "safelist" => config.safelist = sections::parse_safelist(value, &path)?,
            other => debug!(field = other, "ignoring unrecognized config field"),
        }
    }

    let mut container = ContainerOptions::default();
    if let Some(value) = theme_container {
        container = sections::parse_container(value, "theme.container", container)?;
    }
    if let Some(value) = present(root.get("container")) {
        container = sections::parse_container(value, "container", container)?;
    }
    config.container = container;

    validation::validate(&config, options)?;
    Ok(config)
}
