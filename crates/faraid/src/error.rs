//! Error types for the inheritance engine.

use thiserror::Error;

/// Errors from inheritance input validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FaraidError {
    /// Estate is zero, negative, NaN or infinite.
    #[error("invalid estate {0}: must be a finite amount greater than zero")]
    InvalidEstate(f64),
    /// Husband and wife were both marked alive.
    #[error("husband and wife cannot both be surviving heirs of the same deceased")]
    ConflictingSpouses,
}
