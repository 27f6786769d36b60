//! File probe reader
//!
//! Reads the leading bytes of a regular file with plain buffered I/O.

use crate::core::ProbeError;
use crate::domain::entities::{PROBE_CAPACITY, ProbeBuffer};
use crate::domain::repositories::ProbeReader;
use std::fs::File;
use std::io::{ErrorKind, Read};

/// Probe reader backed by the local filesystem
///
/// # Example
///
/// ```no_run
/// use filechecker::domain::repositories::ProbeReader;
/// use filechecker::infrastructure::probe::FileProbeReader;
///
/// # fn main() -> Result<(), filechecker::ProbeError> {
/// let probe = FileProbeReader::new().read_probe("/tmp/photo.jpg", 100)?;
/// println!("read {} bytes", probe.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProbeReader;

impl FileProbeReader {
    pub fn new() -> Self {
        Self
    }
}

impl ProbeReader for FileProbeReader {
    fn read_probe(&self, path: &str, limit: usize) -> Result<ProbeBuffer, ProbeError> {
        let file = File::open(path).map_err(|e| ProbeError::from_io(path, e))?;
        fill_probe(file, limit).map_err(|e| ProbeError::from_io(path, e))
    }
}

/// Fills a probe buffer from any reader
///
/// Loops over short reads so pipes and network filesystems still deliver
/// a full probe; stops early only at end of stream.
pub fn fill_probe<R: Read>(mut reader: R, limit: usize) -> std::io::Result<ProbeBuffer> {
    let limit = limit.min(PROBE_CAPACITY);
    let mut buffer = ProbeBuffer::new();

    while buffer.len() < limit {
        let want = limit - buffer.len();
        match reader.read(&mut buffer.unfilled_mut()[..want]) {
            Ok(0) => break,
            Ok(n) => buffer.advance(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that hands out at most two bytes per call
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = buf.len().min(2);
            self.0.read(&mut buf[..n])
        }
    }

    #[test]
    fn short_reads_are_accumulated() {
        let data: Vec<u8> = (0..20).collect();
        let probe = fill_probe(Trickle(Cursor::new(data.clone())), 16).unwrap();
        assert_eq!(probe.as_bytes(), &data[..16]);
    }

    #[test]
    fn stops_at_end_of_stream() {
        let probe = fill_probe(Cursor::new(vec![1, 2, 3]), PROBE_CAPACITY).unwrap();
        assert_eq!(probe.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn limit_is_capped_at_capacity() {
        let probe = fill_probe(Cursor::new(vec![7u8; 500]), 10_000).unwrap();
        assert_eq!(probe.len(), PROBE_CAPACITY);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = FileProbeReader::new()
            .read_probe("/nonexistent/path/file.bin", PROBE_CAPACITY)
            .unwrap_err();
        assert!(matches!(err, ProbeError::NotFound(_)));
    }
}
