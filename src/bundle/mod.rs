//! The bundler: walks a tree and writes the combined output artifact.
//!
//! One linear pass. The output file is created (truncating any previous
//! run's content) before traversal starts, then each discovered file is
//! read as UTF-8 text and appended behind a `--- <path> ---` header.
//! Files that cannot be read as text are logged and skipped; only a
//! failure to write the artifact itself aborts the run.

use crate::models::{BundleSummary, SkipReason, SkippedFile};
use crate::scanner;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Bundles the files under a root directory into one output artifact.
pub struct Bundler {
    root: PathBuf,
    output: PathBuf,
    sorted: bool,
}

impl Bundler {
    /// Create a new bundler.
    pub fn new(root: PathBuf, output: PathBuf, sorted: bool) -> Self {
        Self {
            root,
            output,
            sorted,
        }
    }

    /// Run the full bundling pass and return a summary of what happened.
    ///
    /// Per-file read failures never propagate; they are recorded in the
    /// summary and the pass continues. Errors creating or writing the
    /// output artifact do propagate.
    pub fn run(&self) -> Result<BundleSummary> {
        let file = File::create(&self.output).with_context(|| {
            format!("Failed to create output file: {}", self.output.display())
        })?;
        let mut writer = BufWriter::new(file);

        let files = scanner::scan(&self.root, self.sorted);
        let mut summary = BundleSummary::default();

        for path in files {
            // The artifact may sit inside the root; bundling the
            // half-written output into itself is never useful.
            if self.is_output_artifact(&path) {
                debug!("Not bundling the output artifact itself: {}", path.display());
                continue;
            }

            println!("Trying: {}", path.display());

            match fs::read_to_string(&path) {
                Ok(content) => {
                    write!(writer, "\n\n--- {} ---\n", path.display()).with_context(|| {
                        format!("Failed to write to {}", self.output.display())
                    })?;
                    writer.write_all(content.as_bytes()).with_context(|| {
                        format!("Failed to write to {}", self.output.display())
                    })?;

                    summary.files_written += 1;
                    summary.bytes_written += content.len() as u64;
                }
                Err(e) => {
                    let reason = SkipReason::from(e);
                    println!("Skipped: {} | Reason: {}", path.display(), reason);
                    warn!("Skipped {}: {}", path.display(), reason);
                    summary.skipped.push(SkippedFile { path, reason });
                }
            }
        }

        writer
            .flush()
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        Ok(summary)
    }

    /// Whether a discovered path is the output artifact itself.
    fn is_output_artifact(&self, path: &Path) -> bool {
        let canonical_output = fs::canonicalize(&self.output)
            .unwrap_or_else(|_| self.output.clone());
        let canonical_path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        canonical_path == canonical_output
    }
}
