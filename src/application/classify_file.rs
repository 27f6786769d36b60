//! Classify file use case
//!
//! Reads the leading bytes of a file and classifies them. Reading is the
//! only blocking step; the async and batch variants move it onto tokio's
//! blocking pool or rayon's workers and share one catalog across them.

use crate::application::dto::CheckOptions;
use crate::domain::entities::{ClassificationResult, PROBE_CAPACITY};
use crate::domain::repositories::ProbeReader;
use crate::domain::services::{Catalog, classify};
use crate::infrastructure::probe::FileProbeReader;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::sync::Arc;

/// Classify file use case
///
/// Every read failure (missing file, permission denied, cancelled task)
/// and every empty read resolves to `BufferTooShort`, so callers only
/// ever deal with the three classification outcomes.
pub struct ClassifyFileUseCase<R: ProbeReader = FileProbeReader> {
    catalog: Arc<Catalog>,
    reader: Arc<R>,
    probe_size: usize,
}

impl ClassifyFileUseCase<FileProbeReader> {
    /// Creates a use case reading from the local filesystem
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_reader(catalog, FileProbeReader::new())
    }

    /// Loads the catalog described by `options`
    pub fn from_options(options: &CheckOptions) -> Result<Self> {
        let catalog = options
            .load_catalog()
            .context("Failed to load signature catalog")?;
        Ok(Self::new(Arc::new(catalog)).with_probe_size(options.probe_size))
    }
}

impl<R: ProbeReader + 'static> ClassifyFileUseCase<R> {
    /// Creates a use case with a custom probe reader
    pub fn with_reader(catalog: Arc<Catalog>, reader: R) -> Self {
        Self {
            catalog,
            reader: Arc::new(reader),
            probe_size: PROBE_CAPACITY,
        }
    }

    /// Sets how many leading bytes are read
    ///
    /// Clamped to `catalog.max_pattern_len()..=PROBE_CAPACITY`: a probe shorter
    /// than the longest pattern could never see that pattern in full.
    pub fn with_probe_size(mut self, size: usize) -> Self {
        let floor = self.catalog.max_pattern_len().max(1);
        if size < floor {
            tracing::warn!(
                "Probe size {} is below the longest signature ({} bytes), using {}",
                size,
                floor,
                floor
            );
        }
        self.probe_size = size.clamp(floor, PROBE_CAPACITY);
        self
    }

    pub fn probe_size(&self) -> usize {
        self.probe_size
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Classifies the file at `path` on the calling thread
    pub fn execute(&self, path: &str) -> ClassificationResult {
        classify_path(self.reader.as_ref(), &self.catalog, path, self.probe_size)
    }

    /// Classifies the file at `path` on tokio's blocking pool
    pub async fn execute_async(&self, path: impl Into<String>) -> ClassificationResult {
        let catalog = Arc::clone(&self.catalog);
        let reader = Arc::clone(&self.reader);
        let probe_size = self.probe_size;
        let path = path.into();

        let task = tokio::task::spawn_blocking(move || {
            classify_path(reader.as_ref(), &catalog, &path, probe_size)
        });

        match task.await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Classification task did not complete: {}", e);
                ClassificationResult::BufferTooShort
            }
        }
    }

    /// Classifies many files in parallel, keeping input order
    pub fn execute_batch<S: AsRef<str> + Sync>(
        &self,
        paths: &[S],
    ) -> Vec<(String, ClassificationResult)> {
        tracing::info!("Classifying {} files", paths.len());

        paths
            .par_iter()
            .map(|path| {
                let path = path.as_ref();
                (path.to_string(), self.execute(path))
            })
            .collect()
    }
}

fn classify_path<R: ProbeReader + ?Sized>(
    reader: &R,
    catalog: &Catalog,
    path: &str,
    probe_size: usize,
) -> ClassificationResult {
    let probe = match reader.read_probe(path, probe_size) {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path, e);
            return ClassificationResult::BufferTooShort;
        }
    };

    if probe.is_empty() {
        tracing::warn!("No bytes could be read from {}", path);
    }

    let result = classify(probe.as_bytes(), catalog);
    tracing::debug!("{} ({} bytes read) -> {}", path, probe.len(), result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProbeError;
    use crate::domain::entities::{FileTypeEntry, ProbeBuffer, SignaturePattern};

    /// Reader that returns canned bytes for any path except "denied"
    struct FixedReader(Vec<u8>);

    impl ProbeReader for FixedReader {
        fn read_probe(&self, path: &str, limit: usize) -> Result<ProbeBuffer, ProbeError> {
            if path == "denied" {
                return Err(ProbeError::PermissionDenied(path.to_string()));
            }
            let n = limit.min(self.0.len());
            Ok(ProbeBuffer::from_slice(&self.0[..n]))
        }
    }

    fn gz_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![FileTypeEntry::new(
                "gz",
                vec![SignaturePattern::exact(&[0x1F, 0x8B]).unwrap()],
            )])
            .unwrap(),
        )
    }

    #[test]
    fn read_failure_is_buffer_too_short() {
        let use_case = ClassifyFileUseCase::with_reader(gz_catalog(), FixedReader(vec![0x1F, 0x8B]));
        assert_eq!(use_case.execute("denied"), ClassificationResult::BufferTooShort);
        assert_eq!(use_case.execute("ok"), ClassificationResult::Matched("gz".into()));
    }

    #[test]
    fn probe_size_never_drops_below_longest_pattern() {
        let use_case = ClassifyFileUseCase::with_reader(gz_catalog(), FixedReader(vec![0x1F, 0x8B]))
            .with_probe_size(1);
        assert_eq!(use_case.probe_size(), 2);
        assert_eq!(use_case.execute("ok"), ClassificationResult::Matched("gz".into()));
    }

    #[test]
    fn probe_size_is_capped_at_capacity() {
        let use_case = ClassifyFileUseCase::with_reader(gz_catalog(), FixedReader(vec![0x1F, 0x8B]))
            .with_probe_size(4096);
        assert_eq!(use_case.probe_size(), PROBE_CAPACITY);
    }

    #[test]
    fn empty_read_is_buffer_too_short() {
        let use_case = ClassifyFileUseCase::with_reader(gz_catalog(), FixedReader(Vec::new()));
        assert_eq!(use_case.execute("ok"), ClassificationResult::BufferTooShort);
    }
}
