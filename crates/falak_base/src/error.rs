//! Error types for the solar solvers.

use falak_time::TimeError;
use thiserror::Error;

/// Errors from coordinate validation and angle parsing.
///
/// The solvers themselves are total; these errors come from the
/// validation and parsing helpers that sit in front of them.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
    /// Text is not a `D°M'S"` angle.
    #[error("invalid DMS angle: {0}")]
    InvalidDms(String),
    /// Error from date or time handling.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
