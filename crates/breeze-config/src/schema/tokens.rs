//! Theme token types.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A single design-token value.
///
/// Most tokens are plain strings (`"1rem"`, `"#0ea5e9"`); font stacks and
/// similar ordered values are kept as lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Scalar(String),
    List(Vec<String>),
}

impl TokenValue {
    pub fn to_raw(&self) -> Value {
        match self {
            Self::Scalar(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

/// Token name to value, within one category.
pub type TokenMap = BTreeMap<String, TokenValue>;

/// Category (`spacing`, `colors`, ...) to its tokens.
pub type ThemeTokens = BTreeMap<String, TokenMap>;

/// The `theme` section of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Categories given directly under `theme`; each replaces the defaults
    /// for that category.
    pub overrides: ThemeTokens,
    /// `theme.extend`; merged key-by-key over defaults.
    pub extend: ThemeTokens,
}

impl ThemeConfig {
    /// Canonical raw form. Overrides sit beside `extend`, as in the input.
    pub fn to_raw(&self) -> Value {
        let mut theme = tokens_to_raw(&self.overrides);
        theme.insert("extend".into(), Value::Object(tokens_to_raw(&self.extend)));
        Value::Object(theme)
    }
}

fn tokens_to_raw(tokens: &ThemeTokens) -> serde_json::Map<String, Value> {
    tokens
        .iter()
        .map(|(category, map)| {
            let entries = map
                .iter()
                .map(|(name, value)| (name.clone(), value.to_raw()))
                .collect();
            (category.clone(), Value::Object(entries))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_value_serializes_untagged() {
        let scalar = TokenValue::from("1rem");
        let list = TokenValue::List(vec!["Inter".into(), "sans-serif".into()]);
        assert_eq!(serde_json::to_value(&scalar).unwrap(), json!("1rem"));
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!(["Inter", "sans-serif"])
        );
    }

    #[test]
    fn empty_theme_raw_has_only_extend() {
        assert_eq!(ThemeConfig::default().to_raw(), json!({ "extend": {} }));
    }

    #[test]
    fn theme_raw_places_overrides_beside_extend() {
        let mut theme = ThemeConfig::default();
        theme
            .overrides
            .entry("colors".into())
            .or_default()
            .insert("brand".into(), "#123456".into());
        theme
            .extend
            .entry("spacing".into())
            .or_default()
            .insert("128".into(), "32rem".into());

        assert_eq!(
            theme.to_raw(),
            json!({
                "colors": { "brand": "#123456" },
                "extend": { "spacing": { "128": "32rem" } }
            })
        );
    }
}
