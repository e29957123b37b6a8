//! Core data types for bundling outcomes.
//!
//! The per-file try/skip behavior is modeled explicitly: every attempted
//! file ends as either a written block or a [`SkippedFile`] carrying a
//! classified [`SkipReason`], so callers and tests can assert on why a
//! file was left out instead of inspecting log text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a discovered file was skipped instead of bundled.
///
/// Skips are always non-fatal: the bundler records the reason and moves
/// on to the next file.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// The file's bytes are not valid UTF-8 (binary content).
    #[error("stream did not contain valid UTF-8")]
    NotText,

    /// The file exists but could not be opened for reading.
    #[error("permission denied")]
    PermissionDenied,

    /// The file disappeared between discovery and read (concurrent deletion).
    #[error("file vanished before it could be read")]
    Vanished,

    /// Any other I/O failure.
    #[error("{0}")]
    Io(io::Error),
}

impl From<io::Error> for SkipReason {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            // read_to_string reports non-UTF-8 content as InvalidData
            io::ErrorKind::InvalidData => SkipReason::NotText,
            io::ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            io::ErrorKind::NotFound => SkipReason::Vanished,
            _ => SkipReason::Io(err),
        }
    }
}

/// A file that was discovered but not bundled.
#[derive(Debug)]
pub struct SkippedFile {
    /// Path as constructed during traversal (matches the would-be header).
    pub path: PathBuf,
    /// Why the file was skipped.
    pub reason: SkipReason,
}

/// Outcome of a complete bundling run.
///
/// A summary is returned even when files were skipped; skips never fail
/// the run.
#[derive(Debug, Default)]
pub struct BundleSummary {
    /// Number of file blocks written to the output artifact.
    pub files_written: usize,
    /// Total content bytes copied (headers excluded).
    pub bytes_written: u64,
    /// Files that were attempted but skipped, in traversal order.
    pub skipped: Vec<SkippedFile>,
}

impl BundleSummary {
    /// Total number of files the traversal attempted.
    pub fn files_attempted(&self) -> usize {
        self.files_written + self.skipped.len()
    }
}
