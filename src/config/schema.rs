use serde::Deserialize;

/// Smallest accepted check interval. Anything lower is clamped on apply.
pub const MIN_CHECK_INTERVAL_MS: u64 = 100;

/// Top-level daemon settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/listsync/config.toml` or
/// `~/.config/listsync/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LISTSYNC__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub target: TargetSettings,
    pub sync: SyncSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: TargetSettings::default(),
            sync: SyncSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetSettings {
    /// Name of the playlist source to keep in sync. Empty means no target is
    /// bound and every cycle is a no-op.
    pub name: String,

    /// Directory holding one JSON source document per target name
    /// (`<name>.json`).
    pub registry_dir: String,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            registry_dir: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// How often to run a reconciliation cycle (milliseconds, minimum 100).
    pub check_interval_ms: u64,

    /// The watched directory whose files drive the playlist.
    pub directory: String,

    /// Sort key for the playlist: "modified-time", "name" or
    /// "name-and-extension".
    ///
    /// An unrecognized value is logged and the last valid mode stays in
    /// effect; it is never silently replaced with a default.
    pub sort_mode: String,

    /// Reverse the sorted order as a whole (ties keep first-seen order).
    pub descending: bool,

    /// Skip cycles while the target reports it is playing or paused. Needed
    /// for target kinds that restart playback when their playlist is
    /// rewritten.
    pub update_only_when_stopped: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            check_interval_ms: 10_000,
            directory: String::new(),
            sort_mode: "modified-time".to_string(),
            descending: false,
            update_only_when_stopped: false,
        }
    }
}
