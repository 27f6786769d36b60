//! Classification outcome

use std::fmt;

/// Label shown when no catalog entry matches
pub const UNKNOWN_LABEL: &str = "unknown";

/// Label shown when no bytes could be read from the file
pub const READ_FAILURE_LABEL: &str = "failed to read file!";

/// Result of classifying a probe buffer against a catalog
///
/// `NoMatch` and `BufferTooShort` are normal outcomes, not errors, and
/// render to distinct labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassificationResult {
    /// Label of the first catalog entry whose pattern matched
    Matched(String),
    /// The buffer satisfied no pattern
    NoMatch,
    /// No usable bytes were available (empty file, failed or cancelled read)
    BufferTooShort,
}

impl ClassificationResult {
    /// Returns the human-readable label for presentation
    pub fn label(&self) -> &str {
        match self {
            ClassificationResult::Matched(label) => label,
            ClassificationResult::NoMatch => UNKNOWN_LABEL,
            ClassificationResult::BufferTooShort => READ_FAILURE_LABEL,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, ClassificationResult::Matched(_))
    }

    /// Returns the matched label, if any
    pub fn matched_label(&self) -> Option<&str> {
        match self {
            ClassificationResult::Matched(label) => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
