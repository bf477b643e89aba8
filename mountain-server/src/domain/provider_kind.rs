//! Identifiers for the three upstream data providers.

use std::fmt;

/// Which upstream provider an outcome belongs to.
///
/// The order of [`ProviderKind::all`] is the order of keys in every
/// response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Weather,
    AirQuality,
    SunTimes,
}

impl ProviderKind {
    /// Wire name, as used for response keys and error labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Weather => "weather",
            ProviderKind::AirQuality => "airQuality",
            ProviderKind::SunTimes => "sunTimes",
        }
    }

    /// Every provider, in response key order.
    pub const fn all() -> &'static [ProviderKind] {
        &[
            ProviderKind::Weather,
            ProviderKind::AirQuality,
            ProviderKind::SunTimes,
        ]
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
