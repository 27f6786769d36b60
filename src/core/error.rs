use std::io;
use thiserror::Error;

/// Errors that can occur while loading the signature catalog
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Catalog source {path} unavailable: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Malformed(String),

    #[error("Invalid byte {value} in '{label}' pattern {pattern} at offset {offset}")]
    InvalidByte {
        label: String,
        pattern: usize,
        offset: usize,
        value: String,
    },

    #[error("Empty pattern {pattern} in '{label}'")]
    EmptyPattern { label: String, pattern: usize },

    #[error("File type '{0}' declares no patterns")]
    EmptyEntry(String),

    #[error("Pattern {pattern} in '{label}' is {len} bytes, probe capacity is {max}")]
    PatternTooLong {
        label: String,
        pattern: usize,
        len: usize,
        max: usize,
    },
}

impl From<serde_json::Error> for CatalogLoadError {
    fn from(err: serde_json::Error) -> Self {
        CatalogLoadError::Malformed(err.to_string())
    }
}

/// Errors that can occur when reading the leading bytes of a file
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ProbeError {
    /// Maps an open/read failure to the matching variant, keeping the path for context
    pub fn from_io(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ProbeError::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => ProbeError::PermissionDenied(path.to_string()),
            _ => ProbeError::Io(err),
        }
    }
}
