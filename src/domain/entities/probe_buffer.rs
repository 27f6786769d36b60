//! Probe buffer entity
//!
//! Fixed-capacity holder for the leading bytes of a file. The capacity
//! leaves headroom over the longest cataloged signature (35 bytes for the
//! PEM certificate-request boundary).

/// Maximum number of leading bytes read for classification
pub const PROBE_CAPACITY: usize = 100;

/// The first bytes of a candidate file
#[derive(Clone)]
pub struct ProbeBuffer {
    data: [u8; PROBE_CAPACITY],
    len: usize,
}

impl ProbeBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self {
            data: [0; PROBE_CAPACITY],
            len: 0,
        }
    }

    /// Copies up to `PROBE_CAPACITY` bytes from `bytes`
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        let n = bytes.len().min(PROBE_CAPACITY);
        buffer.data[..n].copy_from_slice(&bytes[..n]);
        buffer.len = n;
        buffer
    }

    /// Returns the bytes read so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == PROBE_CAPACITY
    }

    /// Unfilled tail, for readers filling the buffer in place
    pub fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.len..]
    }

    /// Marks `n` more bytes of the unfilled tail as read
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.len + n <= PROBE_CAPACITY, "advance past capacity");
        self.len = (self.len + n).min(PROBE_CAPACITY);
    }
}

impl Default for ProbeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProbeBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeBuffer")
            .field("len", &self.len)
            .field("data", &self.as_bytes())
            .finish()
    }
}
