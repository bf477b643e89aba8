//! Data returned by the upstream providers.
//!
//! The server treats these as opaque: values are passed through to the
//! response exactly as the provider returned them.

use serde::{Deserialize, Serialize};

/// Current weather and alert flags at a trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Air temperature in °C
    pub temperature: f64,

    /// Provider condition code (e.g. sky state or precipitation type)
    pub condition: i32,

    /// Wind speed in m/s
    pub wind_speed: f64,

    /// Rain alert in effect
    pub rain_warning: bool,

    /// Strong wind alert in effect
    pub wind_warning: bool,
}

/// Particulate matter readings and their status labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityReport {
    /// PM10 index
    pub fine_dust_index: i32,

    /// PM2.5 index
    pub ultrafine_dust_index: i32,

    pub fine_dust_status: String,

    pub ultrafine_dust_status: String,
}

/// Sunrise and sunset, already localized by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
}
