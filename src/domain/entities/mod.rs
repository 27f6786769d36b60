//! Domain entities
//!
//! Core objects of file type identification: signatures, the buffer
//! they are matched against, and the outcome of a match.

mod classification;
mod file_signature;
mod probe_buffer;

pub use classification::{ClassificationResult, READ_FAILURE_LABEL, UNKNOWN_LABEL};
pub use file_signature::{FileTypeEntry, SignaturePattern};
pub use probe_buffer::{PROBE_CAPACITY, ProbeBuffer};
