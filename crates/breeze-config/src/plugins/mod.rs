//! Plugin registry.
//!
//! A configuration names plugins by identifier only. The registry maps
//! those identifiers to implementations that contribute theme tokens.

mod builtin;

pub use builtin::{AspectRatio, ContainerQueries};

use crate::schema::ThemeTokens;
use std::collections::BTreeMap;

/// A plugin that contributes theme tokens.
pub trait ThemePlugin: Send + Sync {
    /// Identifier used in the `plugins` list.
    fn name(&self) -> &str;

    /// Tokens merged into the theme when the plugin is listed.
    fn theme_contributions(&self) -> ThemeTokens;
}

/// Identifier-to-plugin lookup table.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<String, Box<dyn ThemePlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ContainerQueries));
        registry.register(Box::new(AspectRatio));
        registry
    }

    /// Add a plugin, replacing any previous one with the same name.
    pub fn register(&mut self, plugin: Box<dyn ThemePlugin>) {
        self.plugins.insert(plugin.name().to_string(), plugin);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ThemePlugin> {
        self.plugins.get(name).map(|p| p.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
