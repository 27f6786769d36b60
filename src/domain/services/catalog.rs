//! Signature catalog
//!
//! The ordered, immutable set of known file type signatures. Order is
//! significant: the matcher stops at the first entry that matches, so
//! narrower signatures have to be declared before broader ones that are
//! their byte prefixes (JPEG+EXIF before plain JPEG).

use crate::core::CatalogLoadError;
use crate::domain::entities::{ClassificationResult, FileTypeEntry, PROBE_CAPACITY, SignaturePattern};
use crate::domain::services::matcher;

/// Ordered catalog of file type signatures
///
/// Built once through [`Catalog::new`] (usually by a
/// [`CatalogSource`](crate::domain::repositories::CatalogSource)) and
/// read-only afterwards. Safe to share across threads without locking.
///
/// # Example
///
/// ```
/// use filechecker::domain::entities::{FileTypeEntry, SignaturePattern};
/// use filechecker::domain::services::Catalog;
///
/// let png = SignaturePattern::exact(&[0x89, 0x50, 0x4E, 0x47]).unwrap();
/// let catalog = Catalog::new(vec![FileTypeEntry::new("png", vec![png])]).unwrap();
/// assert_eq!(catalog.classify(&[0x89, 0x50, 0x4E, 0x47, 0x0D]).label(), "png");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<FileTypeEntry>,
}

/// A pattern that can never win because an earlier entry matches every
/// buffer it would match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedPattern {
    pub label: String,
    pub pattern: usize,
    pub shadowed_by: String,
}

impl Catalog {
    /// Validates and wraps an ordered list of entries
    ///
    /// Every entry needs at least one pattern, and no pattern may be longer
    /// than the probe buffer, otherwise it could never match.
    pub fn new(entries: Vec<FileTypeEntry>) -> Result<Self, CatalogLoadError> {
        for entry in &entries {
            if entry.patterns().is_empty() {
                return Err(CatalogLoadError::EmptyEntry(entry.label().to_string()));
            }
            for (idx, pattern) in entry.patterns().iter().enumerate() {
                if pattern.len() > PROBE_CAPACITY {
                    return Err(CatalogLoadError::PatternTooLong {
                        label: entry.label().to_string(),
                        pattern: idx,
                        len: pattern.len(),
                        max: PROBE_CAPACITY,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// A catalog with no entries; every non-empty buffer classifies as `NoMatch`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the entries in match order
    pub fn entries(&self) -> &[FileTypeEntry] {
        &self.entries
    }

    /// Returns the number of file types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of patterns across all file types
    pub fn pattern_count(&self) -> usize {
        self.entries.iter().map(|e| e.patterns().len()).sum()
    }

    /// Length of the longest pattern, i.e. the minimum useful probe size
    pub fn max_pattern_len(&self) -> usize {
        self.entries
            .iter()
            .map(FileTypeEntry::max_pattern_len)
            .max()
            .unwrap_or(0)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FileTypeEntry::label)
    }

    /// Looks up the first entry with the given label
    pub fn get(&self, label: &str) -> Option<&FileTypeEntry> {
        self.entries.iter().find(|e| e.label() == label)
    }

    /// Classifies `data` against this catalog
    pub fn classify(&self, data: &[u8]) -> ClassificationResult {
        matcher::classify(data, self)
    }

    /// Finds patterns hidden behind an earlier entry's broader pattern
    ///
    /// This only reports authoring mistakes; it does not change match order.
    pub fn shadowed_patterns(&self) -> Vec<ShadowedPattern> {
        let mut shadowed = Vec::new();

        for (i, entry) in self.entries.iter().enumerate() {
            for (idx, pattern) in entry.patterns().iter().enumerate() {
                let earlier = self.entries[..i]
                    .iter()
                    .filter(|e| e.label() != entry.label())
                    .find(|e| e.patterns().iter().any(|p| covers(p, pattern)));

                if let Some(earlier) = earlier {
                    shadowed.push(ShadowedPattern {
                        label: entry.label().to_string(),
                        pattern: idx,
                        shadowed_by: earlier.label().to_string(),
                    });
                }
            }
        }

        shadowed
    }
}

/// True when every buffer matching `later` also matches `earlier`
fn covers(earlier: &SignaturePattern, later: &SignaturePattern) -> bool {
    if earlier.len() > later.len() {
        return false;
    }
    earlier
        .bytes()
        .iter()
        .zip(later.bytes())
        .all(|(e, l)| match (e, l) {
            (None, _) => true,
            (Some(a), Some(b)) => a == b,
            (Some(_), None) => false,
        })
}
