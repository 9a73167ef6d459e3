//! Error types for shipfee

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Fee calculation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Weight was outside the accepted range (strictly positive, at most 50 units).
    #[error("invalid weight")]
    InvalidWeight,

    /// Zone string did not exactly match a recognized zone. Carries the
    /// offending string for diagnostics.
    #[error("invalid zone: {0}")]
    InvalidZone(String),
}
