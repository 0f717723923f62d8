//! Error types for sync cycles.
//!
//! Every variant here is recoverable: a failing cycle is logged, skipped and
//! retried on the next timer tick.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured target name does not currently resolve to a live target.
    #[error("target not found: {0}")]
    TargetUnresolved(String),

    /// The watched directory is missing or not accessible.
    #[error("directory unavailable: {}", .0.display())]
    DirectoryUnavailable(PathBuf),

    /// The target's stored playlist could not be parsed into entries.
    /// A cycle hitting this never writes back a partially-understood list.
    #[error("malformed playlist snapshot on \"{target}\": {reason}")]
    MalformedSnapshot { target: String, reason: String },

    /// The configured sort mode is not one of the recognized values.
    #[error("unrecognized sort mode: \"{0}\"")]
    InvalidSortMode(String),

    /// A target document declares a kind this daemon does not know how to
    /// update.
    #[error("unsupported target kind: \"{0}\"")]
    UnsupportedTargetKind(String),

    /// Reading or writing a target document failed at the filesystem level.
    #[error("target i/o error on {}: {source}", .path.display())]
    TargetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
