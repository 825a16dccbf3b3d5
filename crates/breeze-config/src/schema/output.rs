//! Output-shaping options: `important` and `safelist`.

use regex::Regex;
use serde_json::{json, Value};

/// Whether generated utilities are marked `!important`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Important {
    #[default]
    Off,
    On,
    /// Scope utilities under this selector instead of using `!important`.
    Selector(String),
}

impl Important {
    pub fn to_raw(&self) -> Value {
        match self {
            Self::Off => Value::Bool(false),
            Self::On => Value::Bool(true),
            Self::Selector(s) => Value::String(s.clone()),
        }
    }
}

/// A class that is generated regardless of content scanning.
#[derive(Debug, Clone)]
pub enum SafelistEntry {
    Class(String),
    /// Regular expression matched against candidate class names, compiled
    /// once when the config is loaded.
    Pattern(Regex),
}

impl SafelistEntry {
    /// Compile a pattern entry.
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::Pattern)
    }

    pub fn matches(&self, class: &str) -> bool {
        match self {
            Self::Class(name) => name == class,
            Self::Pattern(re) => re.is_match(class),
        }
    }

    pub fn to_raw(&self) -> Value {
        match self {
            Self::Class(name) => Value::String(name.clone()),
            Self::Pattern(re) => json!({ "pattern": re.as_str() }),
        }
    }
}

// Patterns compare by source text.
impl PartialEq for SafelistEntry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Class(a), Self::Class(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for SafelistEntry {}
