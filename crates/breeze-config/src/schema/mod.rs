//! Configuration schema types for Breeze.
//!
//! A [`Configuration`] only exists in validated form: it is produced by
//! [`crate::load`] and never mutated afterwards by the library. Every
//! section has a documented default so partial inputs work.

mod container;
mod content;
mod dark_mode;
mod output;
mod tokens;

pub use container::*;
pub use content::*;
pub use dark_mode::*;
pub use output::*;
pub use tokens::*;

use serde_json::{json, Value};

/// Root configuration handed to the style-generation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub dark_mode: DarkModeStrategy,
    pub content: ContentConfig,
    pub theme: ThemeConfig,
    pub container: ContainerOptions,
    /// Plugin identifiers, applied in this order.
    pub plugins: Vec<String>,
    pub prefix: String,
    pub important: Important,
    pub safelist: Vec<SafelistEntry>,
}

impl Configuration {
    /// The content patterns (`contentSources`).
    pub fn content_sources(&self) -> impl Iterator<Item = &str> {
        self.content.files.iter().map(String::as_str)
    }

    /// User theme extensions (`theme.extend`).
    pub fn theme_extensions(&self) -> &ThemeTokens {
        &self.theme.extend
    }

    pub fn is_safelisted(&self, class: &str) -> bool {
        self.safelist.iter().any(|entry| entry.matches(class))
    }

    /// Canonical raw form. Loading it again yields an equal configuration.
    pub fn to_raw(&self) -> Value {
        json!({
            "darkMode": self.dark_mode.to_raw(),
            "content": self.content.to_raw(),
            "theme": self.theme.to_raw(),
            "container": self.container.to_raw(),
            "plugins": self.plugins,
            "prefix": self.prefix,
            "important": self.important.to_raw(),
            "safelist": self.safelist.iter().map(SafelistEntry::to_raw).collect::<Vec<_>>(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.dark_mode, DarkModeStrategy::MediaQuery);
        assert!(config.content.is_empty());
        assert!(!config.content.relative);
        assert!(config.theme_extensions().is_empty());
        assert!(!config.container.center);
        assert!(config.plugins.is_empty());
        assert_eq!(config.prefix, "");
        assert_eq!(config.important, Important::Off);
        assert!(config.safelist.is_empty());
    }

    #[test]
    fn default_raw_form() {
        let raw = Configuration::default().to_raw();
        assert_eq!(
            raw,
            json!({
                "darkMode": "media",
                "content": { "files": [], "relative": false },
                "theme": { "extend": {} },
                "container": { "center": false },
                "plugins": [],
                "prefix": "",
                "important": false,
                "safelist": [],
            })
        );
    }

    #[test]
    fn safelist_lookup_checks_every_entry() {
        let config = Configuration {
            safelist: vec![
                SafelistEntry::Class("hidden".into()),
                SafelistEntry::pattern("^grid-cols-").unwrap(),
            ],
            ..Default::default()
        };
        assert!(config.is_safelisted("hidden"));
        assert!(config.is_safelisted("grid-cols-3"));
        assert!(!config.is_safelisted("flex"));
    }
}
