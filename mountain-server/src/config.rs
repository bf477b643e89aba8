//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::providers::ProviderClientConfig;

/// Default bind address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default bound on each upstream call, in seconds.
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Default trail catalog location.
const DEFAULT_TRAILS_FILE: &str = "data/trails.json";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable has a value that cannot be parsed
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Where trail coordinates come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverSource {
    /// JSON catalog on disk
    Catalog(PathBuf),
    /// HTTP lookup service
    Remote {
        base_url: String,
        api_key: Option<String>,
    },
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// Bound on coordinate resolution and on each provider call
    pub provider_timeout: Duration,

    pub resolver: ResolverSource,

    pub weather: ProviderClientConfig,
    pub air_quality: ProviderClientConfig,
    pub sun_times: ProviderClientConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let addr_text = get("MOUNTAIN_INFO_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_text.parse().map_err(|_| ConfigError::Invalid {
            var: "MOUNTAIN_INFO_ADDR",
            value: addr_text.clone(),
        })?;

        let timeout_secs = match get("PROVIDER_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "PROVIDER_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => DEFAULT_PROVIDER_TIMEOUT_SECS,
        };

        let resolver = match get("TRAIL_RESOLVER_URL") {
            Some(base_url) => ResolverSource::Remote {
                base_url,
                api_key: get("TRAIL_RESOLVER_API_KEY"),
            },
            None => ResolverSource::Catalog(
                get("TRAILS_FILE")
                    .unwrap_or_else(|| DEFAULT_TRAILS_FILE.to_string())
                    .into(),
            ),
        };

        let provider = |url_var: &'static str, key_var: &str| {
            let url = get(url_var).ok_or(ConfigError::Missing(url_var))?;
            let config = ProviderClientConfig::new(url).with_timeout(timeout_secs);
            Ok::<_, ConfigError>(match get(key_var) {
                Some(key) => config.with_api_key(key),
                None => config,
            })
        };

        Ok(Self {
            addr,
            provider_timeout: Duration::from_secs(timeout_secs),
            resolver,
            weather: provider("WEATHER_API_URL", "WEATHER_API_KEY")?,
            air_quality: provider("AIR_QUALITY_API_URL", "AIR_QUALITY_API_KEY")?,
            sun_times: provider("SUN_TIMES_API_URL", "SUN_TIMES_API_KEY")?,
        })
    }
}
