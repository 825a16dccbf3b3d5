//! Pure theme merging.

use crate::plugins::PluginRegistry;
use crate::schema::{Configuration, ThemeTokens};
use breeze_common::ConfigError;
use tracing::debug;

/// Merge `layers` over `base`, in order.
///
/// Categories are merged independently. Within a category the last layer to
/// define a token wins; tokens no layer mentions keep their base value.
pub fn merge_tokens(base: &ThemeTokens, layers: &[&ThemeTokens]) -> ThemeTokens {
    let mut merged = base.clone();
    for layer in layers {
        for (category, tokens) in layer.iter() {
            let target = merged.entry(category.clone()).or_default();
            for (name, value) in tokens {
                target.insert(name.clone(), value.clone());
            }
        }
    }
    merged
}

/// Replace whole categories of `base` with those in `overrides`.
pub fn apply_overrides(base: &ThemeTokens, overrides: &ThemeTokens) -> ThemeTokens {
    let mut out = base.clone();
    for (category, tokens) in overrides {
        out.insert(category.clone(), tokens.clone());
    }
    out
}

/// Resolve the effective theme for `config`.
///
/// Order: `base` defaults, then category overrides, then each plugin's
/// contributions in declared order, then the user's `theme.extend`.
pub fn resolve_theme_with(
    base: &ThemeTokens,
    config: &Configuration,
    registry: &PluginRegistry,
) -> Result<ThemeTokens, ConfigError> {
    let with_overrides = apply_overrides(base, &config.theme.overrides);

    let mut contributions = Vec::with_capacity(config.plugins.len());
    for name in &config.plugins {
        let plugin = registry
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPlugin(name.clone()))?;
        debug!(plugin = %name, "applying plugin theme contributions");
        contributions.push(plugin.theme_contributions());
    }

    let mut layers: Vec<&ThemeTokens> = contributions.iter().collect();
    layers.push(&config.theme.extend);
    Ok(merge_tokens(&with_overrides, &layers))
}
