//! Provider error types.

use std::time::Duration;

/// Errors from a single provider call.
///
/// These never abort a request: the aggregator records them per provider
/// and reports them in the response's `errors` list.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, connect failure, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Rate limited by the upstream
    #[error("rate limited by upstream")]
    RateLimited,

    /// Upstream returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Call did not settle within the configured timeout
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}
