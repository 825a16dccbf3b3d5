//! Breeze configuration system.
//!
//! Turns a raw style-build configuration (already parsed into an object
//! graph) into a validated, normalized [`Configuration`]. Every recognized
//! field has a default, unrecognized fields are ignored, and any invalid
//! field fails the whole load with an error naming it.
//!
//! # Quick Start
//!
//! ```rust
//! use breeze_config::{load, schema::DarkModeStrategy};
//! use serde_json::json;
//!
//! let config = load(&json!({
//!     "darkMode": "class",
//!     "content": { "files": ["*.html", "./src/**/*.rs"] },
//!     "container": { "center": true },
//! }))
//! .expect("valid config");
//! assert_eq!(config.dark_mode, DarkModeStrategy::class_toggle());
//! ```

pub mod globs;
pub mod loader;
pub mod plugins;
pub mod schema;
pub mod source;
pub mod theme;
pub mod validation;
pub mod writer;

// Re-export core types for convenience
pub use loader::{load, load_with, BuildMode, LoadOptions};
pub use plugins::{PluginRegistry, ThemePlugin};
pub use schema::Configuration;
pub use source::{find_config, load_from_path, load_project};
pub use theme::resolve_theme;
pub use writer::save_config_to_path;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &Configuration) -> String {
    serde_json::to_string_pretty(&config.to_raw())
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&Configuration::default());
        for key in [
            "\"darkMode\"",
            "\"content\"",
            "\"theme\"",
            "\"container\"",
            "\"plugins\"",
            "\"prefix\"",
            "\"important\"",
            "\"safelist\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
    }

    #[test]
    fn json_output_loads_back_to_same_config() {
        let config = load(&json!({
            "darkMode": ["class", ".night"],
            "content": ["*.html"],
            "plugins": ["@breeze/container-queries"],
        }))
        .unwrap();

        let raw: serde_json::Value = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(load(&raw).unwrap(), config);
    }

    #[test]
    fn load_then_resolve_with_builtin_plugins() {
        let config = load(&json!({
            "plugins": ["@breeze/aspect-ratio"],
            "theme": { "extend": { "aspectRatio": { "16": "16 / 9" } } },
        }))
        .unwrap();

        let theme = resolve_theme(&config, &PluginRegistry::with_builtins()).unwrap();
        let ratios = &theme["aspectRatio"];
        assert_eq!(ratios.len(), 16);
        assert_eq!(ratios["16"], schema::TokenValue::from("16 / 9"));
    }
}
