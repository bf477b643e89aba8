//! Upstream data providers.
//!
//! Each provider maps a pair of coordinates to one category of data
//! (weather, air quality, sun times). The [`Provider`] trait is the seam
//! the aggregator depends on; [`ProviderClient`] is a generic JSON-over-HTTP
//! implementation for upstreams that already return the report shapes.

mod client;
mod error;

use std::sync::Arc;

use async_trait::async_trait;

pub use client::{ProviderClient, ProviderClientConfig};
pub use error::ProviderError;

use crate::domain::{AirQualityReport, Coordinates, SunTimes, WeatherReport};

/// Source of one category of data for a location.
#[async_trait]
pub trait Provider<T>: Send + Sync {
    /// Fetch data for the given coordinates.
    async fn fetch(&self, at: Coordinates) -> Result<T, ProviderError>;
}

/// The three providers consulted for every request.
#[derive(Clone)]
pub struct Providers {
    pub weather: Arc<dyn Provider<WeatherReport>>,
    pub air_quality: Arc<dyn Provider<AirQualityReport>>,
    pub sun_times: Arc<dyn Provider<SunTimes>>,
}

impl Providers {
    pub fn new(
        weather: Arc<dyn Provider<WeatherReport>>,
        air_quality: Arc<dyn Provider<AirQualityReport>>,
        sun_times: Arc<dyn Provider<SunTimes>>,
    ) -> Self {
        Self {
            weather,
            air_quality,
            sun_times,
        }
    }
}
