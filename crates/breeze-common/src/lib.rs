pub mod errors;

pub use errors::{BreezeError, ConfigError};

pub type Result<T> = std::result::Result<T, BreezeError>;
