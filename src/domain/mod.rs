//! Domain layer - Core identification logic
//!
//! Signature entities, the catalog and matcher services, and the
//! repository traits for the catalog source and probe reader. Nothing
//! in here performs I/O.

pub mod entities;
pub mod repositories;
pub mod services;
