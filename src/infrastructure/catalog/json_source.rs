//! Declarative catalog source
//!
//! Reads the catalog from JSON shaped as an object mapping each file type
//! label to its list of patterns. A pattern is an array of integers 0-255,
//! with `null` marking a wildcard slot:
//!
//! ```json
//! {
//!   "png": [[137, 80, 78, 71, 13, 10, 26, 10]],
//!   "wav": [[82, 73, 70, 70, null, null, null, null, 87, 65, 86, 69]]
//! }
//! ```
//!
//! Object keys are read in document order, which is also match order.

use crate::core::CatalogLoadError;
use crate::domain::entities::{FileTypeEntry, SignaturePattern};
use crate::domain::repositories::CatalogSource;
use crate::domain::services::Catalog;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Catalog shipped with the crate, embedded at build time
pub const BUNDLED_CATALOG_JSON: &str = include_str!("../../../assets/signatures.json");

/// How to treat pattern slots that are neither `null` nor an integer 0-255
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteParsePolicy {
    /// Fail the load with `CatalogLoadError::InvalidByte`
    #[default]
    Strict,
    /// Treat the slot as a wildcard and log a warning
    Lenient,
}

#[derive(Debug, Clone)]
enum Origin {
    Bundled,
    Text(String),
    File(PathBuf),
}

/// Catalog source reading the JSON format described in the module docs
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    origin: Origin,
    policy: ByteParsePolicy,
}

impl JsonCatalogSource {
    /// Uses the catalog embedded in the binary
    pub fn bundled() -> Self {
        Self {
            origin: Origin::Bundled,
            policy: ByteParsePolicy::default(),
        }
    }

    /// Uses an in-memory JSON document
    pub fn from_json(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Text(text.into()),
            policy: ByteParsePolicy::default(),
        }
    }

    /// Reads the JSON document from disk at load time
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
            policy: ByteParsePolicy::default(),
        }
    }

    /// Sets the policy for invalid byte values
    pub fn with_policy(mut self, policy: ByteParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ByteParsePolicy {
        self.policy
    }
}

impl CatalogSource for JsonCatalogSource {
    fn describe(&self) -> String {
        match &self.origin {
            Origin::Bundled => "bundled signatures.json".to_string(),
            Origin::Text(_) => "inline JSON".to_string(),
            Origin::File(path) => path.display().to_string(),
        }
    }

    fn load(&self) -> Result<Catalog, CatalogLoadError> {
        match &self.origin {
            Origin::Bundled => parse_catalog(BUNDLED_CATALOG_JSON, self.policy),
            Origin::Text(text) => parse_catalog(text, self.policy),
            Origin::File(path) => {
                let raw = fs::read(path).map_err(|source| CatalogLoadError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                let text = std::str::from_utf8(&raw).map_err(|e| {
                    CatalogLoadError::Malformed(format!("{} is not UTF-8: {}", path.display(), e))
                })?;
                parse_catalog(text, self.policy)
            }
        }
    }
}

/// Parses a JSON catalog document
///
/// Shape errors (non-object root, non-array pattern lists) are always
/// fatal. Bad slot values follow `policy`.
pub fn parse_catalog(json: &str, policy: ByteParsePolicy) -> Result<Catalog, CatalogLoadError> {
    let OrderedEntries(raw_entries) = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(raw_entries.len());
    let mut entries = Vec::with_capacity(raw_entries.len());

    for (label, raw_patterns) in raw_entries {
        if !seen.insert(label.clone()) {
            return Err(CatalogLoadError::Malformed(format!(
                "duplicate file type '{}'",
                label
            )));
        }

        let mut patterns = Vec::with_capacity(raw_patterns.len());
        for (idx, slots) in raw_patterns.iter().enumerate() {
            let bytes = slots
                .iter()
                .enumerate()
                .map(|(offset, slot)| parse_slot(slot, policy, &label, idx, offset))
                .collect::<Result<Vec<_>, _>>()?;

            let pattern = SignaturePattern::new(bytes).ok_or_else(|| {
                CatalogLoadError::EmptyPattern {
                    label: label.clone(),
                    pattern: idx,
                }
            })?;
            patterns.push(pattern);
        }

        entries.push(FileTypeEntry::new(label, patterns));
    }

    Catalog::new(entries)
}

fn parse_slot(
    slot: &Value,
    policy: ByteParsePolicy,
    label: &str,
    pattern: usize,
    offset: usize,
) -> Result<Option<u8>, CatalogLoadError> {
    let byte = match slot {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        _ => None,
    };

    match (byte, policy) {
        (Some(b), _) => Ok(Some(b)),
        (None, ByteParsePolicy::Lenient) => {
            tracing::warn!(
                "Treating {} in '{}' pattern {} at offset {} as a wildcard",
                slot,
                label,
                pattern,
                offset
            );
            Ok(None)
        }
        (None, ByteParsePolicy::Strict) => Err(CatalogLoadError::InvalidByte {
            label: label.to_string(),
            pattern,
            offset,
            value: slot.to_string(),
        }),
    }
}

/// Label → pattern lists in document order, duplicates kept
struct OrderedEntries(Vec<(String, Vec<Vec<Value>>)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping file type labels to lists of byte patterns")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Vec<Vec<Value>>>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
