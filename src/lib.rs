//! File type identification by magic bytes
//!
//! The leading bytes of a file are matched against an ordered catalog of
//! signatures; the first entry with a matching pattern names the type.
//!
//! ```
//! use filechecker::{ClassificationResult, bundled_catalog};
//!
//! let catalog = bundled_catalog().unwrap();
//! let header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
//! assert_eq!(catalog.classify(&header), ClassificationResult::Matched("png".into()));
//! assert_eq!(catalog.classify(&[]).label(), "failed to read file!");
//! ```

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use application::ClassifyFileUseCase;
pub use application::dto::CheckOptions;
pub use crate::core::{CatalogLoadError, ProbeError};
pub use domain::entities::{ClassificationResult, FileTypeEntry, ProbeBuffer, SignaturePattern};
pub use domain::services::{Catalog, classify};
pub use infrastructure::catalog::{ByteParsePolicy, bundled_catalog};
