//! HTTP trail lookup client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::CoordinateResolver;
use super::error::ResolveError;
use crate::domain::Coordinates;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How much of an error body to keep.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the lookup client.
#[derive(Debug, Clone)]
pub struct ResolverClientConfig {
    /// Endpoint queried with a `trailName` parameter
    pub base_url: String,
    /// Optional key sent in the `x-apikey` header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ResolverClientConfig {
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

/// Resolves trail names through an HTTP lookup service.
///
/// Expects `GET {base_url}?trailName=<name>` to answer `{"lat": .., "lng": ..}`,
/// or 404 for unknown trails.
#[derive(Debug, Clone)]
pub struct ResolverClient {
    http: reqwest::Client,
    base_url: String,
}

impl ResolverClient {
    /// Create a new lookup client.
    pub fn new(config: ResolverClientConfig) -> Result<Self, ResolveError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| ResolveError::Api {
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
        })
    }
}

#[async_trait]
impl CoordinateResolver for ResolverClient {
    async fn resolve(&self, trail_name: &str) -> Result<Coordinates, ResolveError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("trailName", trail_name)])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolveError::UnknownTrail(trail_name.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResolveError::Api {
                status: status.as_u16(),
                message: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        let coords: Coordinates = serde_json::from_str(&body).map_err(|e| ResolveError::Json {
            message: e.to_string(),
        })?;
        coords.validate()?;

        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use axum::{
        Json, Router, extract::Query, http::StatusCode, response::IntoResponse, routing::get,
    };
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/trails")
    }

    fn lookup_router() -> Router {
        Router::new().route(
            "/trails",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                match q.get("trailName").map(String::as_str) {
                    Some("Bukhansan") => Json(json!({"lat": 37.6586, "lng": 126.978})).into_response(),
                    Some("Broken") => Json(json!({"lat": 370.0, "lng": 0.0})).into_response(),
                    Some("Garbled") => (StatusCode::OK, "not json").into_response(),
                    Some("Flaky") => (StatusCode::SERVICE_UNAVAILABLE, "down").into_response(),
                    _ => StatusCode::NOT_FOUND.into_response(),
                }
            }),
        )
    }

    #[test]
    fn config_builder() {
        let config = ResolverClientConfig::new("http://localhost/trails")
            .with_api_key("k")
            .with_timeout(2);
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn config_defaults() {
        let config = ResolverClientConfig::new("http://localhost/trails");
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[tokio::test]
    async fn resolves_known_trail() {
        let url = serve(lookup_router()).await;
        let client = ResolverClient::new(ResolverClientConfig::new(url)).unwrap();

        let coords = client.resolve("Bukhansan").await.unwrap();
        assert_eq!(coords, Coordinates::new(37.6586, 126.978).unwrap());
    }

    #[tokio::test]
    async fn maps_failures() {
        let url = serve(lookup_router()).await;
        let client = ResolverClient::new(ResolverClientConfig::new(url)).unwrap();

        assert!(matches!(
            client.resolve("Atlantis").await,
            Err(ResolveError::UnknownTrail(_))
        ));
        assert!(matches!(
            client.resolve("Broken").await,
            Err(ResolveError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            client.resolve("Garbled").await,
            Err(ResolveError::Json { .. })
        ));
        assert!(matches!(
            client.resolve("Flaky").await,
            Err(ResolveError::Api { status: 503, .. })
        ));
    }
}
