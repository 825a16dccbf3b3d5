//! Layout-container utility options.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Horizontal padding applied by the container utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerPadding {
    /// Same padding at every breakpoint.
    Uniform(String),
    /// Breakpoint name (`DEFAULT`, `sm`, ...) to padding.
    PerScreen(BTreeMap<String, String>),
}

impl ContainerPadding {
    pub fn to_raw(&self) -> Value {
        match self {
            Self::Uniform(s) => Value::String(s.clone()),
            Self::PerScreen(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerOptions {
    /// Auto-apply `margin-inline: auto`.
    pub center: bool,
    pub padding: Option<ContainerPadding>,
    /// Breakpoints used by the container only; `None` means the theme's
    /// `screens`.
    pub screens: Option<BTreeMap<String, String>>,
}

impl ContainerOptions {
    pub fn to_raw(&self) -> Value {
        let mut raw = Map::new();
        raw.insert("center".into(), Value::Bool(self.center));
        if let Some(ref padding) = self.padding {
            raw.insert("padding".into(), padding.to_raw());
        }
        if let Some(ref screens) = self.screens {
            raw.insert(
                "screens".into(),
                Value::Object(
                    screens
                        .iter()
                        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                        .collect(),
                ),
            );
        }
        Value::Object(raw)
    }
}
