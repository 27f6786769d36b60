//! Shared error types

mod error;

pub use error::{CatalogLoadError, ProbeError};
