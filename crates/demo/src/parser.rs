//! Catalog file parser.

use crate::catalog::Catalog;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading catalogs or writing reports.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dimension in {entry}: {source}")]
    InvalidDimension {
        entry: String,
        #[source]
        source: cuboid_fit::Error,
    },
}

/// Parser for JSON catalog files.
#[derive(Debug, Default)]
pub struct CatalogParser;

impl CatalogParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a catalog from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path)?;
        self.parse_json(&content)
    }

    /// Parses a catalog from a JSON string and checks every edge.
    pub fn parse_json(&self, json: &str) -> Result<Catalog, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.container_cuboids()?;
        catalog.box_cuboids()?;
        Ok(catalog)
    }

    /// Writes a catalog as pretty-printed JSON.
    pub fn save_file(&self, catalog: &Catalog, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(catalog)?;
        fs::write(path, json)?;
        Ok(())
    }
}
