//! Trail name to coordinate resolution.
//!
//! The handler depends only on [`CoordinateResolver`]. Two implementations
//! are provided: [`TrailCatalog`], an in-memory table loaded from a JSON
//! file, and [`ResolverClient`], which delegates to an HTTP lookup service.

mod catalog;
mod client;
mod error;

use async_trait::async_trait;

pub use catalog::{CatalogError, TrailCatalog, TrailEntry};
pub use client::{ResolverClient, ResolverClientConfig};
pub use error::ResolveError;

use crate::domain::Coordinates;

/// Maps a trail name to its coordinates.
#[async_trait]
pub trait CoordinateResolver: Send + Sync {
    /// Resolve `trail_name`, failing with [`ResolveError::UnknownTrail`]
    /// if no such trail is known.
    async fn resolve(&self, trail_name: &str) -> Result<Coordinates, ResolveError>;
}
