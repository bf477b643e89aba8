//! Coordinate resolution error types.

use std::time::Duration;

use crate::domain::DomainError;

/// Errors from resolving a trail name.
///
/// Any of these is fatal to the request: no provider is consulted.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No trail with this name
    #[error("unknown trail: {0}")]
    UnknownTrail(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Lookup service returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Lookup did not complete within the configured timeout
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Lookup returned coordinates outside the valid range
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(#[from] DomainError),
}
