//! Content sources scanned for utility-class usage.

use serde_json::{json, Value};
use std::collections::BTreeSet;

/// Glob patterns naming the files to scan.
///
/// A pattern starting with `!` excludes matching files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentConfig {
    pub files: BTreeSet<String>,
    /// Resolve patterns relative to the config file instead of the
    /// working directory.
    pub relative: bool,
}

impl ContentConfig {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Patterns that select files.
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|p| !p.starts_with('!'))
    }

    /// Exclusion patterns, without the leading `!`.
    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.files.iter().filter_map(|p| p.strip_prefix('!'))
    }

    pub fn to_raw(&self) -> Value {
        json!({
            "files": self.files.iter().collect::<Vec<_>>(),
            "relative": self.relative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_includes_and_excludes() {
        let content = ContentConfig {
            files: ["./src/**/*.rs", "!./src/generated/**", "*.html"]
                .into_iter()
                .map(String::from)
                .collect(),
            relative: false,
        };
        let includes: Vec<_> = content.includes().collect();
        let excludes: Vec<_> = content.excludes().collect();
        assert_eq!(includes, vec!["*.html", "./src/**/*.rs"]);
        assert_eq!(excludes, vec!["./src/generated/**"]);
    }

    #[test]
    fn raw_form_is_object() {
        let content = ContentConfig {
            files: BTreeSet::from(["*.html".to_string()]),
            relative: true,
        };
        assert_eq!(
            content.to_raw(),
            json!({ "files": ["*.html"], "relative": true })
        );
    }
}
