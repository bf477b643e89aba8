//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::aggregate::MountainData;

/// Message returned when one or more providers failed.
pub const PROVIDER_ERRORS_MESSAGE: &str = "Errors occurred";

/// Query parameters for `/mountain-info`.
#[derive(Debug, Deserialize)]
pub struct MountainInfoQuery {
    /// Trail to look up
    #[serde(rename = "trailName")]
    pub trail_name: Option<String>,
}

impl MountainInfoQuery {
    /// The trail name, trimmed, if present and non-empty.
    pub fn trail_name(&self) -> Option<&str> {
        self.trail_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Body returned when at least one provider failed.
#[derive(Debug, Serialize)]
pub struct PartialFailureResponse {
    pub message: &'static str,

    /// One entry per failed provider
    pub errors: Vec<String>,

    /// Values from the providers that succeeded
    pub data: MountainData,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
