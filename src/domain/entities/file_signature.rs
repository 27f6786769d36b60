//! File signature entities
//!
//! A signature is the run of magic bytes at the start of a file that
//! identifies its format. Some formats leave gaps inside the signature
//! (RIFF containers carry a length field between "RIFF" and the form type),
//! so every position is either an exact byte or a wildcard.

use std::fmt;

/// A byte pattern matched against the start of a buffer
///
/// Each slot is `Some(byte)` for an exact match or `None` for a wildcard
/// that accepts any byte at that offset. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignaturePattern {
    bytes: Vec<Option<u8>>,
}

impl SignaturePattern {
    /// Creates a pattern, returning `None` for an empty slot list
    pub fn new(bytes: Vec<Option<u8>>) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        Some(Self { bytes })
    }

    /// Creates a pattern without wildcards
    pub fn exact(bytes: &[u8]) -> Option<Self> {
        Self::new(bytes.iter().copied().map(Some).collect())
    }

    /// Returns the pattern slots
    pub fn bytes(&self) -> &[Option<u8>] {
        &self.bytes
    }

    /// Number of bytes a buffer needs for this pattern to match
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn wildcard_count(&self) -> usize {
        self.bytes.iter().filter(|b| b.is_none()).count()
    }

    /// Checks whether `data` starts with this pattern
    ///
    /// A buffer shorter than the pattern never matches, even when the
    /// missing tail would only cover wildcard slots.
    #[inline]
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.bytes.len() {
            return false;
        }
        self.bytes
            .iter()
            .zip(data)
            .all(|(expected, actual)| expected.is_none_or(|b| b == *actual))
    }
}

impl fmt::Display for SignaturePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Some(b) => write!(f, "{:02X}", b)?,
                None => f.write_str("??")?,
            }
        }
        Ok(())
    }
}

/// A file type label together with its alternative signatures
///
/// Alternatives are tried in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypeEntry {
    label: String,
    patterns: Vec<SignaturePattern>,
}

impl FileTypeEntry {
    pub fn new(label: impl Into<String>, patterns: Vec<SignaturePattern>) -> Self {
        Self {
            label: label.into(),
            patterns,
        }
    }

    /// Returns the label reported when this entry matches (e.g. "png")
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn patterns(&self) -> &[SignaturePattern] {
        &self.patterns
    }

    /// Returns the first alternative that matches `data`
    pub fn find_match(&self, data: &[u8]) -> Option<&SignaturePattern> {
        self.patterns.iter().find(|p| p.matches(data))
    }

    /// Length of the longest alternative
    pub fn max_pattern_len(&self) -> usize {
        self.patterns.iter().map(SignaturePattern::len).max().unwrap_or(0)
    }
}
