//! Generic JSON-over-HTTP provider client.
//!
//! Issues `GET {base_url}?lat=..&lng=..` and decodes the body straight into
//! the report type. Upstream-specific request building and parsing live in
//! the upstream services themselves, not here.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use super::Provider;
use super::error::ProviderError;
use crate::domain::Coordinates;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How much of an error or undecodable body to keep.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for a provider client.
#[derive(Debug, Clone)]
pub struct ProviderClientConfig {
    /// Endpoint queried with `lat` and `lng` parameters
    pub base_url: String,
    /// Optional key sent in the `x-apikey` header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderClientConfig {
    /// Create a new config for the given endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for one upstream provider returning `T` as JSON.
#[derive(Debug)]
pub struct ProviderClient<T> {
    http: reqwest::Client,
    base_url: String,
    _report: PhantomData<fn() -> T>,
}

impl<T> ProviderClient<T> {
    /// Create a new provider client with the given configuration.
    pub fn new(config: ProviderClientConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| ProviderError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert(HeaderName::from_static("x-apikey"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            _report: PhantomData,
        })
    }
}

#[async_trait]
impl<T> Provider<T> for ProviderClient<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self, at: Coordinates) -> Result<T, ProviderError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("lat", at.lat.to_string()), ("lng", at.lng.to_string())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}
