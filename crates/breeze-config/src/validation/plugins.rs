//! Plugin list checks.

use crate::schema::Configuration;
use std::collections::HashSet;
use tracing::warn;

/// Warn on plugins listed more than once. Repeats are harmless: the later
/// occurrence re-applies the same contributions.
pub(crate) fn validate_plugins(config: &Configuration) {
    let mut seen = HashSet::new();
    for (i, name) in config.plugins.iter().enumerate() {
        if !seen.insert(name.as_str()) {
            warn!(plugin = %name, index = i, "plugin listed more than once");
        }
    }
}
