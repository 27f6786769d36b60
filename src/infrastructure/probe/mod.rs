//! Probe reader implementations

mod file_probe;

pub use file_probe::{FileProbeReader, fill_probe};
