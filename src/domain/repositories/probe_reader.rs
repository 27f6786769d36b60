//! Probe reader trait
//!
//! Reads the leading bytes of a candidate file. Reads may block on
//! storage, so callers run them off any latency-sensitive context.

use crate::core::ProbeError;
use crate::domain::entities::ProbeBuffer;

/// Trait for reading the first bytes of a file
pub trait ProbeReader: Send + Sync {
    /// Reads up to `limit` bytes (capped at the probe capacity) from the
    /// start of `path`
    ///
    /// A zero-length file yields an empty buffer, not an error.
    fn read_probe(&self, path: &str, limit: usize) -> Result<ProbeBuffer, ProbeError>;
}
