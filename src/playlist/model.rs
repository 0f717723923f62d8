//! The playlist entry record.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One file reference inside a target's playlist.
///
/// The wire keys (`value`, `uuid`) match what the supported target kinds
/// store in their settings documents. `selected` and `hidden` belong to the
/// target; this daemon carries them through untouched. Any field it does not
/// know about lands in `extra` and is round-tripped unchanged.
///
/// Derived equality is field-by-field including `extra`, so comparing two
/// playlists element-wise detects any difference worth writing back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Absolute path of the backing file; the identity key when matching
    /// against a directory scan.
    #[serde(rename = "value")]
    pub path: String,

    /// Stable identifier, assigned once when the entry is created and never
    /// regenerated while the entry survives.
    #[serde(rename = "uuid")]
    pub id: String,

    #[serde(default)]
    pub selected: bool,

    #[serde(default)]
    pub hidden: bool,

    /// Fields the target stores on an entry that this daemon does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlaylistEntry {
    /// Create a fresh entry for a newly-appeared file.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            id: Uuid::new_v4().to_string(),
            selected: false,
            hidden: false,
            extra: serde_json::Map::new(),
        }
    }

    /// The entry's path viewed as a `Path` for comparisons against scanned
    /// files.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }
}
