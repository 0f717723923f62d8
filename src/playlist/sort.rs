//! Sort strategy: per-mode key extraction plus direction handling.

use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::error::{Error, Result};

use super::model::PlaylistEntry;

/// Which property of an entry's file drives the ordering.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortMode {
    /// Last-modified timestamp, nanosecond precision.
    ModifiedTime,
    /// Filename without extension.
    NameOnly,
    /// Filename with extension.
    NameAndExtension,
}

impl SortMode {
    /// Parse a configured sort mode name.
    ///
    /// Accepts kebab-case with underscore aliases. Anything else is
    /// `Error::InvalidSortMode`; callers keep their previous mode in that
    /// case rather than guessing a default.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "modified-time" | "modified_time" | "modified" | "mtime" => Ok(Self::ModifiedTime),
            "name" | "name-only" | "name_only" | "filename" => Ok(Self::NameOnly),
            "name-and-extension" | "name_and_extension" | "filename-and-extension" => {
                Ok(Self::NameAndExtension)
            }
            other => Err(Error::InvalidSortMode(other.to_string())),
        }
    }
}

/// A full sort specification, immutable for the duration of one cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub mode: SortMode,
    pub descending: bool,
}

/// Sort key for one entry. Ord is derived, so `Time` keys and `Name` keys
/// each compare within their own mode.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Time(u128),
    Name(String),
}

fn mtime_ns(path: &Path) -> u128 {
    // A file deleted between scan and sort has no timestamp; epoch zero keeps
    // the ordering total and stable.
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_nanos())
        .unwrap_or(0)
}

fn sort_key(entry: &PlaylistEntry, mode: SortMode) -> SortKey {
    let path = entry.as_path();
    match mode {
        SortMode::ModifiedTime => SortKey::Time(mtime_ns(path)),
        SortMode::NameOnly => SortKey::Name(
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        ),
        SortMode::NameAndExtension => SortKey::Name(
            path.file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        ),
    }
}

/// Sort `entries` in place according to `spec`.
///
/// Keys are computed once per entry (one mtime read each in time mode), then
/// a stable ascending sort runs on the key sequence: ties keep their
/// first-seen relative order. Descending order is the whole ascending result
/// reversed, not a reversed comparator.
pub fn sort_entries(entries: &mut Vec<PlaylistEntry>, spec: SortSpec) {
    let mut keyed: Vec<(SortKey, PlaylistEntry)> = entries
        .drain(..)
        .map(|e| (sort_key(&e, spec.mode), e))
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    if spec.descending {
        keyed.reverse();
    }

    entries.extend(keyed.into_iter().map(|(_, e)| e));
}
