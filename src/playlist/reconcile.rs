//! The reconciliation core: merge a playlist with a directory scan.

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::model::PlaylistEntry;
use super::sort::{SortSpec, sort_entries};

/// Produce the minimal metadata-preserving merge of `current` and `scanned`,
/// sorted per `spec`, plus whether the result differs from `current`.
///
/// Three passes over the data:
/// 1. removal: entries whose file is gone are dropped; survivors keep every
///    field, including ones this daemon does not model;
/// 2. addition: scanned paths with no surviving entry are appended as fresh
///    entries, in the scanner's sorted enumeration order;
/// 3. sort: the merged list is ordered per `spec`.
///
/// The returned flag is true iff the result differs from the input in
/// length, order, or any field of any entry. Callers write back only when it
/// is set, so an already-reconciled playlist never causes a redundant write.
///
/// A scanned path equal to an existing entry's path is the same file no
/// matter how its contents or mtime changed; identity is never regenerated
/// for it. If the input carries duplicate entries for one path, all of them
/// survive while the file exists, and the addition pass will not add another.
pub fn reconcile(
    current: &[PlaylistEntry],
    scanned: &BTreeSet<PathBuf>,
    spec: SortSpec,
) -> (Vec<PlaylistEntry>, bool) {
    let mut merged: Vec<PlaylistEntry> = current
        .iter()
        .filter(|e| scanned.contains(e.as_path()))
        .cloned()
        .collect();

    for path in scanned {
        let known = merged.iter().any(|e| e.as_path() == path);
        if !known {
            merged.push(PlaylistEntry::new(path));
        }
    }

    sort_entries(&mut merged, spec);

    let changed = merged.as_slice() != current;
    (merged, changed)
}
