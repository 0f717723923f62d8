//! Target abstraction: the external components that own a playlist.
//!
//! The sync session only ever talks to a target through the traits here:
//! resolve it by name, ask whether it is playing, read a full playlist
//! snapshot and write a full replacement. `json` provides the production
//! transport (one JSON document per target); tests supply in-memory fakes.

mod json;
mod kind;

pub use json::JsonRegistry;
pub use kind::TargetKind;

use crate::error::Result;
use crate::playlist::PlaylistEntry;

/// What a target reports about its playback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Unknown,
}

impl PlaybackState {
    /// Whether updating the target now could interrupt playback.
    ///
    /// Only `Playing` and `Paused` count; `Unknown` is treated as safe to
    /// update, matching targets that cannot report a state at all.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

/// A resolved playlist-holding component.
pub trait Target {
    fn kind(&self) -> TargetKind;

    fn playback_state(&self) -> PlaybackState;

    /// Deserialize the target's stored file list. A target with no list yet
    /// reads as an empty playlist; a list that cannot be parsed fails with
    /// `MalformedSnapshot`.
    fn read_playlist(&self) -> Result<Vec<PlaylistEntry>>;

    /// Replace the target's stored file list, leaving every other piece of
    /// its settings untouched.
    fn write_playlist(&mut self, entries: &[PlaylistEntry]) -> Result<()>;
}

/// Resolves target names to live targets.
///
/// Resolution happens on every cycle, so a target that vanished simply
/// resolves to `None` and the cycle degrades to a no-op.
pub trait TargetRegistry {
    fn resolve(&self, name: &str) -> Option<Box<dyn Target>>;
}

/// Notifications a registry can deliver to a running session.
///
/// Delivered over an mpsc channel and drained at the start of each cycle;
/// the session's only reaction to a rename is updating its remembered target
/// name so the next resolution uses the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    Renamed { old: String, new: String },
}
