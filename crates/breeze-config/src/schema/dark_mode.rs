//! Dark-mode activation strategy.

use serde_json::{json, Value};

/// Marker selector used by `darkMode = "class"`.
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

/// How dark-mode-conditional styles are activated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DarkModeStrategy {
    /// Follow the OS/browser `prefers-color-scheme` preference.
    #[default]
    MediaQuery,
    /// Activate when an ancestor matches `selector`.
    ClassToggle { selector: String },
}

impl DarkModeStrategy {
    /// Class toggle with the default `.dark` marker.
    pub fn class_toggle() -> Self {
        Self::ClassToggle {
            selector: DEFAULT_DARK_SELECTOR.into(),
        }
    }

    pub fn is_class_toggle(&self) -> bool {
        matches!(self, Self::ClassToggle { .. })
    }

    pub fn to_raw(&self) -> Value {
        match self {
            Self::MediaQuery => json!("media"),
            Self::ClassToggle { selector } if selector == DEFAULT_DARK_SELECTOR => json!("class"),
            Self::ClassToggle { selector } => json!(["class", selector]),
        }
    }
}
