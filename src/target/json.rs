//! File-backed targets: one JSON document per target name.
//!
//! A registry directory holds `<name>.json` documents shaped like the source
//! settings the external players persist:
//!
//! ```json
//! {
//!   "id": "vlc_source",
//!   "media_state": "idle",
//!   "settings": { "playlist": [ { "value": "...", "uuid": "..." } ] }
//! }
//! ```
//!
//! The player owns the document; this daemon only rewrites the file-list key
//! inside `settings` and leaves everything else alone.
//!
//! This registry resolves strictly by name on every cycle and emits no
//! `RegistryEvent`s: a renamed document simply resolves under its new name
//! (and stops resolving under the old one). Rename events are for registries
//! that can observe a rename of a live component and tell the session to
//! follow it.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::playlist::PlaylistEntry;

use super::kind::TargetKind;
use super::{PlaybackState, Target, TargetRegistry};

/// Registry resolving names against a directory of JSON target documents.
pub struct JsonRegistry {
    dir: PathBuf,
}

impl JsonRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TargetRegistry for JsonRegistry {
    fn resolve(&self, name: &str) -> Option<Box<dyn Target>> {
        let path = self.dir.join(format!("{name}.json"));
        if !path.is_file() {
            return None;
        }

        let doc = match read_document(name, &path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(target_name = name, "unreadable target document: {e}");
                return None;
            }
        };

        let id = doc.get("id").and_then(Value::as_str).unwrap_or("");
        match TargetKind::from_id(id) {
            Ok(kind) => Some(Box::new(JsonTarget {
                name: name.to_string(),
                path,
                kind,
            })),
            Err(e) => {
                tracing::warn!(target_name = name, "{e}");
                None
            }
        }
    }
}

/// One resolved JSON-document target.
struct JsonTarget {
    name: String,
    path: PathBuf,
    kind: TargetKind,
}

fn read_document(name: &str, path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| Error::TargetIo {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| Error::MalformedSnapshot {
        target: name.to_string(),
        reason: e.to_string(),
    })
}

impl JsonTarget {
    /// Re-read the document; the external player may rewrite it between any
    /// two calls, so nothing is cached.
    fn load(&self) -> Result<Value> {
        read_document(&self.name, &self.path)
    }

    fn malformed(&self, reason: impl Into<String>) -> Error {
        Error::MalformedSnapshot {
            target: self.name.clone(),
            reason: reason.into(),
        }
    }
}

impl Target for JsonTarget {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    fn playback_state(&self) -> PlaybackState {
        // The player maintains this field; a document without one simply
        // cannot report a state.
        let state = self
            .load()
            .ok()
            .and_then(|doc| doc.get("media_state").and_then(Value::as_str).map(String::from));
        match state.as_deref() {
            Some("playing") => PlaybackState::Playing,
            Some("paused") => PlaybackState::Paused,
            Some("idle") | Some("stopped") | Some("ended") => PlaybackState::Idle,
            _ => PlaybackState::Unknown,
        }
    }

    fn read_playlist(&self) -> Result<Vec<PlaylistEntry>> {
        let doc = self.load()?;
        match doc.get("settings").and_then(|s| s.get(self.kind.list_key())) {
            // A target that has never held a list reads as empty.
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(list) => serde_json::from_value(list.clone())
                .map_err(|e| self.malformed(e.to_string())),
        }
    }

    fn write_playlist(&mut self, entries: &[PlaylistEntry]) -> Result<()> {
        let mut doc = self.load()?;
        let root = doc
            .as_object_mut()
            .ok_or_else(|| self.malformed("document root is not an object"))?;

        let settings = root
            .entry("settings")
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        let settings = settings
            .as_object_mut()
            .ok_or_else(|| self.malformed("\"settings\" is not an object"))?;

        let list = serde_json::to_value(entries).map_err(|e| self.malformed(e.to_string()))?;
        settings.insert(self.kind.list_key().to_string(), list);

        let text = serde_json::to_string_pretty(&doc).map_err(|e| self.malformed(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| Error::TargetIo {
            path: self.path.clone(),
            source: e,
        })
    }
}
