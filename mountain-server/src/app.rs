//! Startup wiring: configuration to application state.

use std::sync::Arc;

use tracing::info;

use crate::config::{ConfigError, ResolverSource, ServerConfig};
use crate::domain::{AirQualityReport, SunTimes, WeatherReport};
use crate::providers::{ProviderClient, ProviderError, Providers};
use crate::resolver::{
    CatalogError, CoordinateResolver, ResolveError, ResolverClient, ResolverClientConfig,
    TrailCatalog,
};
use crate::web::AppState;

/// Errors that prevent the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load trail catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to create resolver client: {0}")]
    Resolver(#[from] ResolveError),

    #[error("failed to create provider client: {0}")]
    Provider(#[from] ProviderError),

    #[error("failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the shared state from configuration.
pub fn build_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let resolver: Arc<dyn CoordinateResolver> = match &config.resolver {
        ResolverSource::Catalog(path) => {
            let catalog = TrailCatalog::load(path)?;
            info!(trails = catalog.len(), path = %path.display(), "loaded trail catalog");
            Arc::new(catalog)
        }
        ResolverSource::Remote { base_url, api_key } => {
            let mut client_config = ResolverClientConfig::new(base_url.clone())
                .with_timeout(config.provider_timeout.as_secs());
            if let Some(key) = api_key {
                client_config = client_config.with_api_key(key.clone());
            }
            info!(%base_url, "using remote trail resolver");
            Arc::new(ResolverClient::new(client_config)?)
        }
    };

    let providers = Providers::new(
        Arc::new(ProviderClient::<WeatherReport>::new(config.weather.clone())?),
        Arc::new(ProviderClient::<AirQualityReport>::new(config.air_quality.clone())?),
        Arc::new(ProviderClient::<SunTimes>::new(config.sun_times.clone())?),
    );

    Ok(AppState::new(resolver, providers, config.provider_timeout))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use std::time::Duration;

    use crate::providers::ProviderClientConfig;

    fn config(resolver: ResolverSource) -> ServerConfig {
        ServerConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            provider_timeout: Duration::from_secs(2),
            resolver,
            weather: ProviderClientConfig::new("http://weather.local"),
            air_quality: ProviderClientConfig::new("http://air.local"),
            sun_times: ProviderClientConfig::new("http://sun.local"),
        }
    }

    #[tokio::test]
    async fn builds_from_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "Jirisan", "lat": 35.3369, "lng": 127.7306}]"#)
            .unwrap();

        let state = build_state(&config(ResolverSource::Catalog(file.path().into()))).unwrap();

        assert_eq!(state.timeout, Duration::from_secs(2));
        let at = state.resolver.resolve("jirisan").await.unwrap();
        assert_eq!(at.lng, 127.7306);
    }

    #[test]
    fn builds_with_remote_resolver() {
        let source = ResolverSource::Remote {
            base_url: "http://geo.local/trails".to_string(),
            api_key: Some("key".to_string()),
        };
        assert!(build_state(&config(source)).is_ok());
    }

    #[test]
    fn missing_catalog_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = ResolverSource::Catalog(dir.path().join("trails.json"));

        let err = build_state(&config(source)).err().unwrap();
        assert!(matches!(err, StartupError::Catalog(CatalogError::Io { .. })));
    }

    #[test]
    fn bad_provider_key_fails() {
        let mut config = config(ResolverSource::Remote {
            base_url: "http://geo.local".to_string(),
            api_key: None,
        });
        config.sun_times = config.sun_times.with_api_key("line\nbreak");

        let err = build_state(&config).err().unwrap();
        assert!(matches!(err, StartupError::Provider(_)));
    }
}
