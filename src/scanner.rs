//! Directory scanner: the immediate regular files of the watched directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// List every immediate child of `dir` that the filesystem reports as a
/// regular file. No recursion into subdirectories; symlinks are followed for
/// the file-or-not judgement.
///
/// The result is a `BTreeSet`, so iteration order is lexicographic and the
/// reconciler's append order is reproducible for identical directory states.
///
/// Files whose name is not valid UTF-8 are skipped (and logged): playlist
/// entries carry their path as a string, and a path that cannot round-trip
/// through that string would be re-identified on every cycle.
///
/// Fails with `DirectoryUnavailable` when `dir` is missing, not a directory,
/// or cannot be read; callers treat that as "skip this cycle", not as fatal.
/// An error on an individual child (e.g. a file deleted mid-scan) only
/// excludes that child; the next cycle re-scans fresh.
pub fn scan(dir: &Path) -> Result<BTreeSet<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryUnavailable(dir.to_path_buf()));
    }

    let mut files = BTreeSet::new();
    for entry in WalkDir::new(dir).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            // A failure on the directory itself (unreadable, vanished) means
            // there is no usable snapshot; returning an empty set here would
            // make the reconciler drop every entry.
            Err(e) if e.path().is_none_or(|p| p == dir) => {
                return Err(Error::DirectoryUnavailable(dir.to_path_buf()));
            }
            Err(e) => {
                warn!("skipping unreadable directory entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.to_str().is_none() {
            warn!(path = %path.display(), "skipping file with non-UTF-8 name");
            continue;
        }
        files.insert(path.to_path_buf());
    }

    Ok(files)
}
