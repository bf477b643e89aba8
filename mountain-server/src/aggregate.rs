//! Concurrent fan-out to the three providers.
//!
//! All three calls are polled together on the current task and every
//! outcome is kept: a failing or slow provider never cancels or delays its
//! siblings beyond its own timeout. Outcomes are merged in the fixed order
//! weather, air quality, sun times.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::domain::{AirQualityReport, Coordinates, ProviderKind, SunTimes, WeatherReport};
use crate::providers::{ProviderError, Providers};

/// Settled outcome of every provider for one request.
#[derive(Debug)]
pub struct MountainInfo {
    pub weather: Result<WeatherReport, ProviderError>,
    pub air_quality: Result<AirQualityReport, ProviderError>,
    pub sun_times: Result<SunTimes, ProviderError>,
}

/// Provider values with `None` for each failed provider.
///
/// Serializes with all three keys present, failed ones as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountainData {
    pub weather: Option<WeatherReport>,
    pub air_quality: Option<AirQualityReport>,
    pub sun_times: Option<SunTimes>,
}

impl MountainInfo {
    /// True iff every provider succeeded.
    pub fn is_complete(&self) -> bool {
        self.weather.is_ok() && self.air_quality.is_ok() && self.sun_times.is_ok()
    }

    /// Description of each failure, in key order.
    pub fn errors(&self) -> Vec<String> {
        ProviderKind::all()
            .iter()
            .filter_map(|&kind| self.error(kind).map(|e| format!("{kind} provider failed: {e}")))
            .collect()
    }

    /// The failure recorded for one provider, if it failed.
    pub fn error(&self, kind: ProviderKind) -> Option<&ProviderError> {
        match kind {
            ProviderKind::Weather => self.weather.as_ref().err(),
            ProviderKind::AirQuality => self.air_quality.as_ref().err(),
            ProviderKind::SunTimes => self.sun_times.as_ref().err(),
        }
    }

    /// Drop the errors, keeping whatever values were fetched.
    pub fn into_data(self) -> MountainData {
        MountainData {
            weather: self.weather.ok(),
            air_quality: self.air_quality.ok(),
            sun_times: self.sun_times.ok(),
        }
    }
}

/// Query all three providers concurrently and wait for every one to settle.
///
/// Each call is bounded by `limit`; expiry is recorded as
/// [`ProviderError::Timeout`] for that provider only.
pub async fn gather(providers: &Providers, at: Coordinates, limit: Duration) -> MountainInfo {
    let (weather, air_quality, sun_times) = tokio::join!(
        settle(ProviderKind::Weather, providers.weather.fetch(at), limit),
        settle(ProviderKind::AirQuality, providers.air_quality.fetch(at), limit),
        settle(ProviderKind::SunTimes, providers.sun_times.fetch(at), limit),
    );

    MountainInfo {
        weather,
        air_quality,
        sun_times,
    }
}

/// Run one provider call to completion, failure or timeout.
async fn settle<T>(
    kind: ProviderKind,
    call: impl Future<Output = Result<T, ProviderError>>,
    limit: Duration,
) -> Result<T, ProviderError> {
    let started = Instant::now();

    let outcome = match tokio::time::timeout(limit, call).await {
        Ok(outcome) => outcome,
        Err(_) => Err(ProviderError::Timeout(limit)),
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    match &outcome {
        Ok(_) => debug!(provider = %kind, elapsed_ms, "provider succeeded"),
        Err(e) => warn!(provider = %kind, elapsed_ms, error = %e, "provider failed"),
    }

    outcome
}
