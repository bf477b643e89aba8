//! Core domain types for the mountain info server.
//!
//! This module contains the types shared by the resolver, the providers
//! and the web layer. They carry no I/O and are cheap to copy or clone.

mod coordinates;
mod error;
mod provider_kind;
mod report;

pub use coordinates::Coordinates;
pub use error::DomainError;
pub use provider_kind::ProviderKind;
pub use report::{AirQualityReport, SunTimes, WeatherReport};
