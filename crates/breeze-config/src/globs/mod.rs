//! Content pattern validation.
//!
//! A pattern is accepted when, after stripping one leading `!` and
//! expanding brace groups, every alternative parses as a `glob::Pattern`.

mod expand;

#[cfg(test)]
mod tests;

pub use expand::expand_braces;

use breeze_common::ConfigError;

/// Check that `pattern` is a usable content glob.
pub fn validate_pattern(pattern: &str) -> Result<(), ConfigError> {
    let syntax_error = |message: String| ConfigError::GlobSyntaxError {
        pattern: pattern.to_string(),
        message,
    };

    let body = pattern.strip_prefix('!').unwrap_or(pattern);
    if body.trim().is_empty() {
        return Err(syntax_error("pattern is empty".into()));
    }

    for alternative in expand_braces(body).map_err(syntax_error)? {
        glob::Pattern::new(&alternative).map_err(|e| syntax_error(e.msg.to_string()))?;
    }
    Ok(())
}
