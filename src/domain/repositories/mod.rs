//! Repository traits (interfaces)
//!
//! Contracts for the two collaborators the core depends on: the source of
//! the signature catalog and the reader that supplies probe buffers.

mod catalog_source;
mod probe_reader;

pub use catalog_source::CatalogSource;
pub use probe_reader::ProbeReader;
