//! Signature matcher
//!
//! Linear first-match scan over the catalog. Catalogs hold a few dozen
//! short patterns and the probe is at most 100 bytes, so a straight scan
//! in declared order is both the cheapest option and the one that keeps
//! precedence obvious.

use crate::domain::entities::ClassificationResult;
use crate::domain::services::Catalog;

/// Classifies a probe buffer against the catalog
///
/// Entries are tried in declared order and, inside an entry, alternatives
/// in declared order. The first entry with a matching alternative wins;
/// later entries are not consulted even if they would also match.
///
/// An empty buffer means nothing could be read and yields
/// `BufferTooShort` without touching the catalog. A non-empty buffer that
/// is too short for every pattern yields `NoMatch`.
pub fn classify(buffer: &[u8], catalog: &Catalog) -> ClassificationResult {
    if buffer.is_empty() {
        return ClassificationResult::BufferTooShort;
    }

    catalog
        .entries()
        .iter()
        .find(|entry| entry.find_match(buffer).is_some())
        .map(|entry| ClassificationResult::Matched(entry.label().to_string()))
        .unwrap_or(ClassificationResult::NoMatch)
}
