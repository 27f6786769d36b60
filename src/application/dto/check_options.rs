//! Check options DTO

use crate::core::CatalogLoadError;
use crate::domain::entities::PROBE_CAPACITY;
use crate::domain::services::Catalog;
use crate::infrastructure::catalog::{ByteParsePolicy, JsonCatalogSource, load_from};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for checking files
///
/// Can be built in code or read from a JSON file such as
/// `{"catalog_path": "sigs.json", "byte_policy": "lenient", "probe_size": 64}`.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOptions {
    /// External catalog file (None = bundled catalog)
    pub catalog_path: Option<PathBuf>,
    /// How invalid byte values in the catalog are handled
    pub byte_policy: ByteParsePolicy,
    /// Number of leading bytes to read, 1..=PROBE_CAPACITY; raised to the
    /// catalog's longest pattern once the catalog is loaded
    pub probe_size: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            catalog_path: None,
            byte_policy: ByteParsePolicy::Strict,
            probe_size: PROBE_CAPACITY,
        }
    }
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads options from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        let options: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid options in {}", path.display()))?;
        let probe_size = options.probe_size;
        Ok(options.with_probe_size(probe_size))
    }

    /// Loads the signature catalog from an external file
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_byte_policy(mut self, policy: ByteParsePolicy) -> Self {
        self.byte_policy = policy;
        self
    }

    /// Sets the probe size, clamped to 1..=PROBE_CAPACITY
    ///
    /// `ClassifyFileUseCase` raises it further to the longest pattern of the
    /// loaded catalog.
    pub fn with_probe_size(mut self, size: usize) -> Self {
        self.probe_size = size.clamp(1, PROBE_CAPACITY);
        self
    }

    /// Returns the catalog source these options describe
    pub fn catalog_source(&self) -> JsonCatalogSource {
        let source = match &self.catalog_path {
            Some(path) => JsonCatalogSource::from_path(path),
            None => JsonCatalogSource::bundled(),
        };
        source.with_policy(self.byte_policy)
    }

    pub fn load_catalog(&self) -> std::result::Result<Catalog, CatalogLoadError> {
        load_from(&self.catalog_source())
    }
}
