use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error at `{path}`: {message}")]
    ValidationError { path: String, message: String },

    #[error("invalid glob pattern '{pattern}': {message}")]
    GlobSyntaxError { pattern: String, message: String },

    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

impl ConfigError {
    /// Shorthand for a [`ConfigError::ValidationError`] at `path`.
    pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The offending field path, for validation errors.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Self::ValidationError { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BreezeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/breeze.config.toml"));
        assert_eq!(
            err.to_string(),
            "config file not found: /tmp/breeze.config.toml"
        );

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::invalid("darkMode", "unrecognized value \"toggle\"");
        assert_eq!(
            err.to_string(),
            "config validation error at `darkMode`: unrecognized value \"toggle\""
        );

        let err = ConfigError::GlobSyntaxError {
            pattern: "src/[abc".into(),
            message: "invalid range pattern".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid glob pattern 'src/[abc': invalid range pattern"
        );

        let err = ConfigError::UnknownPlugin("@breeze/nope".into());
        assert_eq!(err.to_string(), "unknown plugin: @breeze/nope");
    }

    #[test]
    fn field_path_only_for_validation_errors() {
        let err = ConfigError::invalid("content.files[2]", "expected string");
        assert_eq!(err.field_path(), Some("content.files[2]"));

        let err = ConfigError::ParseError("bad toml".into());
        assert_eq!(err.field_path(), None);
    }

    #[test]
    fn breeze_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: BreezeError = config_err.into();
        assert!(matches!(err, BreezeError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn breeze_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BreezeError = io_err.into();
        assert!(matches!(err, BreezeError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn breeze_error_other() {
        let err = BreezeError::Other("refusing to overwrite".into());
        assert_eq!(err.to_string(), "refusing to overwrite");
    }
}
