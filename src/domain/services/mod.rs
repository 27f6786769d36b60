//! Domain services
//!
//! The signature catalog and the matcher that runs buffers against it.

mod catalog;
mod matcher;

pub use catalog::{Catalog, ShadowedPattern};
pub use matcher::classify;
