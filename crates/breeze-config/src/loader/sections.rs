//! Per-section parsers for the schema walk.
//!
//! Each parser receives the raw value of one recognized field plus its
//! path, and either returns the normalized section or a `ValidationError`
//! at the innermost offending path.

use crate::globs;
use crate::schema::{
    ContainerOptions, ContainerPadding, ContentConfig, DarkModeStrategy, Important,
    SafelistEntry, ThemeConfig, ThemeTokens, TokenMap, TokenValue,
};
use breeze_common::ConfigError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

use super::walk::{
    child, expect_array, expect_bool, expect_object, expect_str, expect_string_list,
    expect_string_map, index, present, type_error,
};

/// Characters allowed in a class prefix.
static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("prefix regex is valid"));

pub(crate) fn parse_dark_mode(value: &Value, path: &str) -> Result<DarkModeStrategy, ConfigError> {
    match value {
        Value::String(s) => match s.as_str() {
            "media" => Ok(DarkModeStrategy::MediaQuery),
            "class" => Ok(DarkModeStrategy::class_toggle()),
            other => Err(ConfigError::invalid(
                path,
                format!("unrecognized value \"{other}\" (expected \"media\" or \"class\")"),
            )),
        },
        Value::Array(items) => {
            let [mode, selector] = items.as_slice() else {
                return Err(ConfigError::invalid(
                    path,
                    format!("expected [\"class\", <selector>], found {} elements", items.len()),
                ));
            };
            let mode_path = index(path, 0);
            if expect_str(mode, &mode_path)? != "class" {
                return Err(ConfigError::invalid(
                    mode_path,
                    "only \"class\" accepts a custom selector",
                ));
            }
            let selector_path = index(path, 1);
            let selector = expect_str(selector, &selector_path)?.trim();
            if selector.is_empty() {
                return Err(ConfigError::invalid(selector_path, "selector must not be empty"));
            }
            Ok(DarkModeStrategy::ClassToggle {
                selector: selector.to_string(),
            })
        }
        other => Err(type_error(path, "string or array", other)),
    }
}

pub(crate) fn parse_content(value: &Value, path: &str) -> Result<ContentConfig, ConfigError> {
    let mut content = ContentConfig::default();

    let (files_value, files_path) = match value {
        Value::Array(_) => (Some(value), path.to_string()),
        Value::Object(map) => {
            for (key, item) in map {
                match key.as_str() {
                    "files" => {}
                    "relative" => {
                        if let Some(item) = present(Some(item)) {
                            content.relative = expect_bool(item, &child(path, key))?;
                        }
                    }
                    other => debug!(field = %child(path, other), "ignoring unrecognized field"),
                }
            }
            (present(map.get("files")), child(path, "files"))
        }
        other => return Err(type_error(path, "array or object", other)),
    };

    if let Some(files) = files_value {
        for pattern in expect_string_list(files, &files_path)? {
            globs::validate_pattern(&pattern)?;
            content.files.insert(pattern);
        }
    }
    Ok(content)
}

/// Parse `theme`. Returns the theme and the raw `theme.container`, which is
/// merged with the top-level `container` by the caller.
pub(crate) fn parse_theme<'a>(
    value: &'a Value,
    path: &str,
) -> Result<(ThemeConfig, Option<&'a Value>), ConfigError> {
    let mut theme = ThemeConfig::default();
    let mut container = None;

    for (key, item) in expect_object(value, path)? {
        let item_path = child(path, key);
        let Some(item) = present(Some(item)) else {
            continue;
        };
        match key.as_str() {
            "extend" => theme.extend = parse_categories(item, &item_path)?,
            "container" => container = Some(item),
            category => {
                theme
                    .overrides
                    .insert(category.to_string(), parse_tokens(item, &item_path)?);
            }
        }
    }
    Ok((theme, container))
}

fn parse_categories(value: &Value, path: &str) -> Result<ThemeTokens, ConfigError> {
    let mut categories = ThemeTokens::new();
    for (category, item) in expect_object(value, path)? {
        let Some(item) = present(Some(item)) else {
            continue;
        };
        categories.insert(category.clone(), parse_tokens(item, &child(path, category))?);
    }
    Ok(categories)
}

/// Parse one category's tokens, flattening nested objects into dash-joined
/// names. A nested `DEFAULT` key names the parent itself.
pub(crate) fn parse_tokens(value: &Value, path: &str) -> Result<TokenMap, ConfigError> {
    let mut tokens = TokenMap::new();
    flatten_tokens(value, path, "", &mut tokens)?;
    Ok(tokens)
}

fn flatten_tokens(
    value: &Value,
    path: &str,
    prefix: &str,
    out: &mut TokenMap,
) -> Result<(), ConfigError> {
    for (key, item) in expect_object(value, path)? {
        let item_path = child(path, key);
        let name = if prefix.is_empty() {
            key.clone()
        } else if key == "DEFAULT" {
            prefix.to_string()
        } else {
            format!("{prefix}-{key}")
        };

        match item {
            Value::String(s) => {
                out.insert(name, TokenValue::Scalar(s.clone()));
            }
            Value::Number(n) => {
                out.insert(name, TokenValue::Scalar(n.to_string()));
            }
            Value::Array(_) => {
                out.insert(name, TokenValue::List(expect_string_list(item, &item_path)?));
            }
            Value::Object(_) => flatten_tokens(item, &item_path, &name, out)?,
            other => {
                return Err(type_error(
                    &item_path,
                    "string, number, array or object",
                    other,
                ))
            }
        }
    }
    Ok(())
}

/// Apply the keys present in a raw container object over `base`.
pub(crate) fn parse_container(
    value: &Value,
    path: &str,
    base: ContainerOptions,
) -> Result<ContainerOptions, ConfigError> {
    let mut options = base;
    for (key, item) in expect_object(value, path)? {
        let item_path = child(path, key);
        let Some(item) = present(Some(item)) else {
            continue;
        };
        match key.as_str() {
            "center" => options.center = expect_bool(item, &item_path)?,
            "padding" => {
                options.padding = Some(match item {
                    Value::String(s) => ContainerPadding::Uniform(s.clone()),
                    Value::Object(_) => {
                        ContainerPadding::PerScreen(expect_string_map(item, &item_path)?)
                    }
                    other => return Err(type_error(&item_path, "string or object", other)),
                });
            }
            "screens" => options.screens = Some(expect_string_map(item, &item_path)?),
            other => debug!(field = %child(path, other), "ignoring unrecognized field"),
        }
    }
    Ok(options)
}

pub(crate) fn parse_plugins(value: &Value, path: &str) -> Result<Vec<String>, ConfigError> {
    let plugins = expect_string_list(value, path)?;
    for (i, name) in plugins.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ConfigError::invalid(
                index(path, i),
                "plugin identifier must not be empty",
            ));
        }
    }
    Ok(plugins)
}

pub(crate) fn parse_prefix(value: &Value, path: &str) -> Result<String, ConfigError> {
    let prefix = expect_str(value, path)?;
    if !PREFIX_RE.is_match(prefix) {
        return Err(ConfigError::invalid(
            path,
            format!("\"{prefix}\" may only contain letters, digits, `-` and `_`"),
        ));
    }
    Ok(prefix.to_string())
}

pub(crate) fn parse_important(value: &Value, path: &str) -> Result<Important, ConfigError> {
    match value {
        Value::Bool(true) => Ok(Important::On),
        Value::Bool(false) => Ok(Important::Off),
        Value::String(s) if s.trim().is_empty() => {
            Err(ConfigError::invalid(path, "selector must not be empty"))
        }
        Value::String(s) => Ok(Important::Selector(s.trim().to_string())),
        other => Err(type_error(path, "boolean or string", other)),
    }
}

pub(crate) fn parse_safelist(value: &Value, path: &str) -> Result<Vec<SafelistEntry>, ConfigError> {
    let mut entries = Vec::new();
    for (i, item) in expect_array(value, path)?.iter().enumerate() {
        let item_path = index(path, i);
        let entry = match item {
            Value::String(class) => SafelistEntry::Class(class.clone()),
            Value::Object(map) => {
                let pattern_path = child(&item_path, "pattern");
                let pattern = present(map.get("pattern"))
                    .ok_or_else(|| ConfigError::invalid(&item_path, "missing `pattern`"))?;
                let pattern = expect_str(pattern, &pattern_path)?;
                SafelistEntry::pattern(pattern).map_err(|e| {
                    ConfigError::invalid(&pattern_path, format!("invalid regex: {e}"))
                })?
            }
            other => return Err(type_error(&item_path, "string or object", other)),
        };
        entries.push(entry);
    }
    Ok(entries)
}
