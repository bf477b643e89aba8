//! Test doubles for the resolver and providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::{AirQualityReport, Coordinates, SunTimes, WeatherReport};
use crate::providers::{Provider, ProviderError};
use crate::resolver::{CoordinateResolver, ResolveError};

pub fn sample_weather() -> WeatherReport {
    WeatherReport {
        temperature: 14.3,
        condition: 1,
        wind_speed: 4.2,
        rain_warning: false,
        wind_warning: false,
    }
}

pub fn sample_air_quality() -> AirQualityReport {
    AirQualityReport {
        fine_dust_index: 35,
        ultrafine_dust_index: 18,
        fine_dust_status: "good".to_string(),
        ultrafine_dust_status: "moderate".to_string(),
    }
}

pub fn sample_sun_times() -> SunTimes {
    SunTimes {
        sunrise: "06:12".to_string(),
        sunset: "19:03".to_string(),
    }
}

/// Provider that returns a fixed value, optionally after a delay.
pub struct StubProvider<T> {
    value: T,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl<T> StubProvider<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T> Provider<T> for StubProvider<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn fetch(&self, _at: Coordinates) -> Result<T, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        Ok(self.value.clone())
    }
}

/// Provider that always fails with an API error.
pub struct FailingProvider {
    status: u16,
    calls: AtomicUsize,
}

impl FailingProvider {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T> Provider<T> for FailingProvider
where
    T: Send + 'static,
{
    async fn fetch(&self, _at: Coordinates) -> Result<T, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Api {
            status: self.status,
            message: "upstream unavailable".to_string(),
        })
    }
}

/// Resolver with scripted behaviour.
pub enum StubResolver {
    /// Every name resolves to these coordinates
    Fixed(Coordinates, AtomicUsize),
    /// Every name is unknown
    Unknown(AtomicUsize),
    /// Resolution sleeps this long, then resolves to the origin
    Slow(Duration),
    /// Resolution panics
    Panics,
}

impl StubResolver {
    pub fn fixed(lat: f64, lng: f64) -> Self {
        let coords = Coordinates { lat, lng };
        StubResolver::Fixed(coords, AtomicUsize::new(0))
    }

    pub fn unknown() -> Self {
        StubResolver::Unknown(AtomicUsize::new(0))
    }

    pub fn calls(&self) -> usize {
        match self {
            StubResolver::Fixed(_, calls) | StubResolver::Unknown(calls) => {
                calls.load(Ordering::SeqCst)
            }
            StubResolver::Slow(_) | StubResolver::Panics => 0,
        }
    }
}

#[async_trait]
impl CoordinateResolver for StubResolver {
    async fn resolve(&self, trail_name: &str) -> Result<Coordinates, ResolveError> {
        match self {
            StubResolver::Fixed(coords, calls) => {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(*coords)
            }
            StubResolver::Unknown(calls) => {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ResolveError::UnknownTrail(trail_name.to_string()))
            }
            StubResolver::Slow(delay) => {
                sleep(*delay).await;
                Ok(Coordinates { lat: 0.0, lng: 0.0 })
            }
            StubResolver::Panics => panic!("resolver exploded"),
        }
    }
}
