//! Geographic coordinates of a trail.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A WGS84 latitude/longitude pair.
///
/// Resolved once per request and passed by value to every provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting values outside the valid ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let coords = Self { lat, lng };
        coords.validate()?;
        Ok(coords)
    }

    /// Check that both components are finite and in range.
    ///
    /// Coordinates arriving through deserialization skip `new`, so callers
    /// that accept them from outside should validate explicitly.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(DomainError::LatitudeOutOfRange(self.lat));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(DomainError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}
