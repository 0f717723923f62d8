//! The supported target kinds and their document ids.

use crate::error::{Error, Result};

/// The three playlist-holding component kinds this daemon knows how to
/// update.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// Media Playlist Source. Handles file changes without stopping the
    /// currently playing item.
    MediaPlaylist,
    /// VLC video source. Writing the playlist restarts playback.
    Vlc,
    /// Image slideshow. Writing the playlist restarts playback.
    Slideshow,
}

impl TargetKind {
    /// Map a target document's `id` to a kind.
    ///
    /// The mapping is explicit and closed: anything else is
    /// `UnsupportedTargetKind`, checked when the target is resolved rather
    /// than discovered mid-write.
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "media_playlist_source_codeyan" => Ok(Self::MediaPlaylist),
            "vlc_source" => Ok(Self::Vlc),
            "slideshow" => Ok(Self::Slideshow),
            other => Err(Error::UnsupportedTargetKind(other.to_string())),
        }
    }

    /// The settings key under which this kind stores its file list.
    pub fn list_key(self) -> &'static str {
        match self {
            Self::MediaPlaylist | Self::Vlc => "playlist",
            Self::Slideshow => "files",
        }
    }
}
