//! File-backed trail catalog.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use super::CoordinateResolver;
use super::error::ResolveError;
use crate::domain::{Coordinates, DomainError};

/// One trail as stored in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct TrailEntry {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Errors from loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Catalog file is not a JSON array of trails
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries normalize to the same name
    #[error("duplicate trail name: {0}")]
    Duplicate(String),

    /// An entry has out-of-range coordinates
    #[error("trail {name}: {source}")]
    InvalidCoordinates { name: String, source: DomainError },
}

/// In-memory trail name → coordinates table.
///
/// Immutable after construction; lookups are case-insensitive and ignore
/// surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct TrailCatalog {
    trails: HashMap<String, Coordinates>,
}

impl TrailCatalog {
    /// Build a catalog from entries, validating each one.
    pub fn from_entries(entries: Vec<TrailEntry>) -> Result<Self, CatalogError> {
        let mut trails = HashMap::with_capacity(entries.len());

        for entry in entries {
            let coords = Coordinates::new(entry.lat, entry.lng).map_err(|source| {
                CatalogError::InvalidCoordinates {
                    name: entry.name.clone(),
                    source,
                }
            })?;

            if trails.insert(normalize(&entry.name), coords).is_some() {
                return Err(CatalogError::Duplicate(entry.name));
            }
        }

        Ok(Self { trails })
    }

    /// Parse a catalog from a JSON array of `{name, lat, lng}` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<TrailEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Look up a trail by name.
    pub fn get(&self, trail_name: &str) -> Option<Coordinates> {
        self.trails.get(&normalize(trail_name)).copied()
    }

    /// Number of trails in the catalog.
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}

#[async_trait]
impl CoordinateResolver for TrailCatalog {
    async fn resolve(&self, trail_name: &str) -> Result<Coordinates, ResolveError> {
        self.get(trail_name)
            .ok_or_else(|| ResolveError::UnknownTrail(trail_name.to_string()))
    }
}

/// Lookup key for a trail name.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
