//! Directory traversal for discovering files to bundle.
//!
//! Every regular file under the root is a candidate, hidden files
//! included. Whether a file is actually bundled is decided later, when
//! the bundler tries to read it as text.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Walk the tree rooted at `root` and return the paths of all regular
/// files, in depth-first traversal order.
///
/// Paths come back exactly as the walk constructs them: a relative root
/// yields relative paths (e.g. `config/sub/app.yaml`), which is what
/// ends up in the output headers.
///
/// Traversal problems are never fatal. Unreadable directories are
/// logged and stepped over, and a root that does not exist at all
/// simply yields an empty list.
pub fn scan(root: &Path, sorted: bool) -> Vec<PathBuf> {
    let walker = if sorted {
        WalkDir::new(root).sort_by_file_name()
    } else {
        WalkDir::new(root)
    };

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Cannot traverse {:?}: {}", e.path(), e);
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    debug!("Discovered {} files under {}", files.len(), root.display());
    files
}
