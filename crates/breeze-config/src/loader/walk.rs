//! Typed accessors over the raw object graph.
//!
//! Every accessor takes the dotted field path of the value it inspects so
//! that a type mismatch is reported against the exact field.

use breeze_common::ConfigError;
use serde_json::{Map, Value};

/// JSON-ish name of a value's type, for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `parent.key`, or just `key` at the root.
pub(crate) fn child(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// `parent[index]`.
pub(crate) fn index(parent: &str, i: usize) -> String {
    format!("{parent}[{i}]")
}

pub(crate) fn type_error(path: &str, expected: &str, found: &Value) -> ConfigError {
    ConfigError::invalid(path, format!("expected {expected}, found {}", type_name(found)))
}

pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    value
        .as_object()
        .ok_or_else(|| type_error(path, "object", value))
}

pub(crate) fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], ConfigError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| type_error(path, "array", value))
}

pub(crate) fn expect_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| type_error(path, "string", value))
}

pub(crate) fn expect_bool(value: &Value, path: &str) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| type_error(path, "boolean", value))
}

/// Array of strings, each checked at `path[i]`.
pub(crate) fn expect_string_list(value: &Value, path: &str) -> Result<Vec<String>, ConfigError> {
    expect_array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, item)| expect_str(item, &index(path, i)).map(str::to_string))
        .collect()
}

/// Object of strings, each checked at `path.key`.
pub(crate) fn expect_string_map(
    value: &Value,
    path: &str,
) -> Result<std::collections::BTreeMap<String, String>, ConfigError> {
    expect_object(value, path)?
        .iter()
        .map(|(key, item)| {
            expect_str(item, &child(path, key)).map(|s| (key.clone(), s.to_string()))
        })
        .collect()
}

/// Recognized fields treat an explicit `null` as omitted.
pub(crate) fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}
