//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::providers::Providers;
use crate::resolver::CoordinateResolver;

/// Shared application state.
///
/// Read-only after startup: requests share the clients but never
/// anything they write to.
#[derive(Clone)]
pub struct AppState {
    /// Trail name lookup
    pub resolver: Arc<dyn CoordinateResolver>,

    /// Weather, air quality and sun time providers
    pub providers: Providers,

    /// Bound on resolution and on each provider call
    pub timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        resolver: Arc<dyn CoordinateResolver>,
        providers: Providers,
        timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            providers,
            timeout,
        }
    }
}
