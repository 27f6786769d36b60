//! Application layer
//!
//! Use cases that connect the probe reader, the catalog and the matcher.

mod classify_file;
pub mod dto;

pub use classify_file::ClassifyFileUseCase;
