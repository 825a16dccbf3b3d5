//! Container padding must reference known breakpoints.

use crate::schema::{Configuration, ContainerPadding};
use crate::theme::default_theme;
use breeze_common::ConfigError;
use std::collections::BTreeSet;

/// Breakpoint names visible to the container utility.
///
/// The container's own `screens` win; otherwise the theme's `screens`
/// (override or default) plus any `theme.extend.screens`.
fn known_screens(config: &Configuration) -> BTreeSet<&str> {
    if let Some(ref screens) = config.container.screens {
        return screens.keys().map(String::as_str).collect();
    }

    let base = config
        .theme
        .overrides
        .get("screens")
        .or_else(|| default_theme().get("screens"));
    base.into_iter()
        .chain(config.theme.extend.get("screens"))
        .flat_map(|tokens| tokens.keys().map(String::as_str))
        .collect()
}

pub(crate) fn validate_container(config: &Configuration) -> Result<(), ConfigError> {
    let Some(ContainerPadding::PerScreen(ref padding)) = config.container.padding else {
        return Ok(());
    };

    let screens = known_screens(config);
    for key in padding.keys() {
        if key != "DEFAULT" && !screens.contains(key.as_str()) {
            return Err(ConfigError::invalid(
                format!("container.padding.{key}"),
                format!("unknown screen \"{key}\""),
            ));
        }
    }
    Ok(())
}
