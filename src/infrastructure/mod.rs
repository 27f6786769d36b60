//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories: catalog sources
//! and the filesystem probe reader.

pub mod catalog;
pub mod probe;
