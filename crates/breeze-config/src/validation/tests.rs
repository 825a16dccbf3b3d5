//! Tests for cross-field validation.

use super::*;
use crate::loader::BuildMode;
use crate::schema::*;
use std::collections::BTreeMap;

fn with_content(patterns: &[&str]) -> Configuration {
    Configuration {
        content: ContentConfig {
            files: patterns.iter().map(|p| p.to_string()).collect(),
            relative: false,
        },
        ..Default::default()
    }
}

fn production() -> LoadOptions {
    LoadOptions {
        mode: BuildMode::Production,
    }
}

fn padding(keys: &[&str]) -> Option<ContainerPadding> {
    Some(ContainerPadding::PerScreen(
        keys.iter()
            .map(|k| (k.to_string(), "1rem".to_string()))
            .collect(),
    ))
}

#[test]
fn default_config_validates_in_development() {
    assert!(validate(&Configuration::default(), &LoadOptions::default()).is_ok());
}

#[test]
fn empty_content_fails_in_production() {
    let err = validate(&Configuration::default(), &production()).unwrap_err();
    assert_eq!(err.field_path(), Some("content"));
}

#[test]
fn exclusion_only_content_fails_in_production() {
    let config = with_content(&["!./dist/**"]);
    assert!(validate(&config, &LoadOptions::default()).is_ok());
    let err = validate(&config, &production()).unwrap_err();
    assert!(err.to_string().contains("exclusion"));
}

#[test]
fn populated_content_passes_in_production() {
    let config = with_content(&["*.html", "!./dist/**"]);
    assert!(validate(&config, &production()).is_ok());
}

#[test]
fn padding_keys_checked_against_default_screens() {
    let mut config = Configuration::default();
    config.container.padding = padding(&["DEFAULT", "sm", "2xl"]);
    assert!(validate(&config, &LoadOptions::default()).is_ok());

    config.container.padding = padding(&["DEFAULT", "tablet"]);
    let err = validate(&config, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.field_path(), Some("container.padding.tablet"));
}

#[test]
fn padding_keys_see_extended_screens() {
    let mut config = Configuration::default();
    config.theme.extend.insert(
        "screens".into(),
        TokenMap::from([("tablet".to_string(), TokenValue::from("900px"))]),
    );
    config.container.padding = padding(&["tablet", "lg"]);
    assert!(validate(&config, &LoadOptions::default()).is_ok());
}

#[test]
fn container_screens_replace_theme_screens() {
    let mut config = Configuration::default();
    config.container.screens = Some(BTreeMap::from([("wide".to_string(), "1400px".to_string())]));
    config.container.padding = padding(&["wide"]);
    assert!(validate(&config, &LoadOptions::default()).is_ok());

    config.container.padding = padding(&["lg"]);
    assert!(validate(&config, &LoadOptions::default()).is_err());
}

#[test]
fn uniform_padding_needs_no_screens() {
    let mut config = Configuration::default();
    config.container.padding = Some(ContainerPadding::Uniform("2rem".into()));
    assert!(validate(&config, &LoadOptions::default()).is_ok());
}

#[test]
fn duplicate_plugins_only_warn() {
    let config = Configuration {
        plugins: vec!["@breeze/aspect-ratio".into(), "@breeze/aspect-ratio".into()],
        ..Default::default()
    };
    assert!(validate(&config, &LoadOptions::default()).is_ok());
}
