//! Theme defaults and merging.
//!
//! The effective theme is built from an immutable default table. Category
//! overrides replace defaults wholesale; plugin contributions and
//! `theme.extend` are merged key by key on top.

mod defaults;
mod merge;

pub use defaults::default_theme;
pub use merge::{apply_overrides, merge_tokens, resolve_theme_with};

use crate::plugins::PluginRegistry;
use crate::schema::{Configuration, ThemeTokens};
use breeze_common::ConfigError;

/// Resolve `config`'s theme against the built-in defaults.
pub fn resolve_theme(
    config: &Configuration,
    registry: &PluginRegistry,
) -> Result<ThemeTokens, ConfigError> {
    resolve_theme_with(default_theme(), config, registry)
}
