//! Error type for the facade.

use falak_base::BaseError;
use falak_config::ConfigError;
use falak_time::TimeError;
use faraid::FaraidError;
use thiserror::Error;

/// Any failure surfaced by the facade.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FalakError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Faraid(#[from] FaraidError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Civil offset outside UTC-12..UTC+14 or not finite.
    #[error("invalid timezone offset {0} hours")]
    InvalidTimezone(f64),
    /// No city with that name in the configured table.
    #[error("unknown city: {0}")]
    UnknownCity(String),
}
