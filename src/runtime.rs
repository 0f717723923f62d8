//! Timer-driven daemon loop.
//!
//! One cycle runs to completion, its outcome is logged, then the loop sleeps
//! for the session's current interval. Cycles never overlap. Between ticks
//! the config file's mtime is checked so operator edits (including interval
//! changes) take effect without a restart.

use std::path::Path;
use std::sync::mpsc;
use std::time::SystemTime;
use std::{fs, thread};

use tracing::{debug, info, warn};

use crate::config::{self, Settings};
use crate::sync::{CycleOutcome, Session};
use crate::target::JsonRegistry;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();
    let registry = JsonRegistry::new(&settings.target.registry_dir);

    // The JSON registry has no rename notifications; the sender side stays
    // unused but the session drains the channel either way.
    let (_event_tx, event_rx) = mpsc::channel();
    let mut session = Session::new(Box::new(registry), event_rx, &settings);

    let config_path = config::resolve_config_path();
    let mut config_stamp = config_path.as_deref().and_then(mtime_of);

    info!(
        target_name = session.target_name(),
        interval_ms = session.check_interval().as_millis() as u64,
        "listsync started"
    );

    loop {
        if session.target_name().is_empty() {
            debug!("no target configured, skipping cycle");
        } else {
            match session.run_cycle() {
                Ok(CycleOutcome::Updated { entries }) => {
                    info!(target_name = session.target_name(), entries, "playlist updated");
                }
                Ok(CycleOutcome::Unchanged) => {
                    debug!("playlist already in sync");
                }
                Ok(CycleOutcome::SkippedActive) => {
                    debug!("target is playing, skipping cycle");
                }
                Err(e) => warn!("cycle skipped: {e}"),
            }
        }

        thread::sleep(session.check_interval());

        if let Some(path) = config_path.as_deref() {
            let stamp = mtime_of(path);
            if stamp != config_stamp {
                config_stamp = stamp;
                reload_settings(&mut session, path);
            }
        }
    }
}

fn mtime_of(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Load settings at startup; config is optional and failures fall back to
/// defaults rather than preventing the daemon from starting.
fn load_settings() -> Settings {
    match Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            warn!("failed to load config, using defaults: {e}");
            Settings::default()
        }
    }
}

/// Re-apply an edited config file. A file that no longer loads or validates
/// keeps the previous settings in place.
fn reload_settings(session: &mut Session, path: &Path) {
    match Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => {
                info!(path = %path.display(), "config changed, reloading");
                session.apply_settings(&s);
            }
            Err(msg) => warn!("ignoring config change: {msg}"),
        },
        Err(e) => warn!("ignoring unreadable config change: {e}"),
    }
}
