//! Content source checks that depend on the build mode.

use crate::loader::BuildMode;
use crate::schema::Configuration;
use breeze_common::ConfigError;
use tracing::warn;

pub(crate) fn validate_content(config: &Configuration, mode: BuildMode) -> Result<(), ConfigError> {
    let problem = if config.content.is_empty() {
        "no content sources configured; no utility classes will be detected"
    } else if config.content.includes().next().is_none() {
        "content only has exclusion patterns; no files will be scanned"
    } else {
        return Ok(());
    };

    match mode {
        BuildMode::Production => Err(ConfigError::invalid("content", problem)),
        BuildMode::Development => {
            warn!("{problem}");
            Ok(())
        }
    }
}
