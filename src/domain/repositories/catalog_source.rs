//! Catalog source trait
//!
//! Where the signature catalog comes from. A hardcoded table and a
//! declarative data file are interchangeable behind this trait.

use crate::core::CatalogLoadError;
use crate::domain::services::Catalog;

/// Trait for loading the signature catalog
///
/// Implementations must preserve the declared order of file types and of
/// each type's alternative patterns, since order decides match precedence.
/// A failed load is reported, never replaced by an empty catalog.
///
/// # Example
///
/// ```
/// use filechecker::domain::repositories::CatalogSource;
/// use filechecker::infrastructure::catalog::JsonCatalogSource;
///
/// let catalog = JsonCatalogSource::bundled().load().unwrap();
/// assert_eq!(catalog.classify(b"%PDF-1.7").label(), "pdf");
/// ```
pub trait CatalogSource {
    /// Short description of the source for log messages
    fn describe(&self) -> String;

    /// Parses and validates the catalog
    fn load(&self) -> Result<Catalog, CatalogLoadError>;
}
