//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config: {0}")]
    Io(String),
    /// The text is not valid TOML for this schema.
    #[error("cannot parse config: {0}")]
    Parse(String),
    #[error("cannot serialize config: {0}")]
    Serialize(String),
    /// Parsed, but a value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
