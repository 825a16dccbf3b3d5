//! Cross-field configuration validation.
//!
//! Runs after the schema walk, once every section has been normalized.
//! Type and syntax problems are caught by the walk itself; these checks
//! cover invariants that depend on the build mode or on several sections.

mod container;
mod content;
mod plugins;

#[cfg(test)]
mod tests;

use crate::loader::LoadOptions;
use crate::schema::Configuration;
use breeze_common::ConfigError;

/// Run all cross-field checks, stopping at the first failure.
pub fn validate(config: &Configuration, options: &LoadOptions) -> Result<(), ConfigError> {
    content::validate_content(config, options.mode)?;
    container::validate_container(config)?;
    plugins::validate_plugins(config);
    Ok(())
}
