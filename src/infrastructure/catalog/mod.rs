//! Catalog source implementations
//!
//! `JsonCatalogSource` is the default; `BuiltinCatalogSource` carries the
//! same signatures as a compiled-in table.

mod builtin;
mod json_source;

pub use builtin::BuiltinCatalogSource;
pub use json_source::{BUNDLED_CATALOG_JSON, ByteParsePolicy, JsonCatalogSource, parse_catalog};

use crate::core::CatalogLoadError;
use crate::domain::repositories::CatalogSource;
use crate::domain::services::Catalog;
use std::sync::OnceLock;

static BUNDLED: OnceLock<Catalog> = OnceLock::new();

/// Loads a catalog from `source`, logging what was loaded
pub fn load_from(source: &dyn CatalogSource) -> Result<Catalog, CatalogLoadError> {
    tracing::info!("Loading signature catalog from {}", source.describe());

    let catalog = source.load().inspect_err(|e| {
        tracing::error!("Failed to load catalog from {}: {}", source.describe(), e);
    })?;

    tracing::info!(
        "Loaded {} file types ({} patterns, longest {} bytes)",
        catalog.len(),
        catalog.pattern_count(),
        catalog.max_pattern_len()
    );
    warn_shadowed(&catalog);
    Ok(catalog)
}

/// Logs every pattern an earlier entry makes unreachable, returning how many
fn warn_shadowed(catalog: &Catalog) -> usize {
    let shadowed = catalog.shadowed_patterns();
    for s in &shadowed {
        tracing::warn!(
            "Pattern {} of '{}' can never match: '{}' is declared earlier and covers it",
            s.pattern,
            s.label,
            s.shadowed_by
        );
    }
    shadowed.len()
}

/// Process-wide catalog parsed from the bundled asset
///
/// Parsed on first call and shared read-only afterwards. A parse failure
/// is returned on every call rather than cached as an empty catalog.
pub fn bundled_catalog() -> Result<&'static Catalog, CatalogLoadError> {
    if let Some(catalog) = BUNDLED.get() {
        return Ok(catalog);
    }
    let catalog = load_from(&JsonCatalogSource::bundled())?;
    Ok(BUNDLED.get_or_init(|| catalog))
}
