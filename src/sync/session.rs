//! The per-daemon session object driving reconciliation cycles.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{MIN_CHECK_INTERVAL_MS, Settings};
use crate::error::{Error, Result};
use crate::playlist::{SortMode, SortSpec, reconcile};
use crate::scanner;
use crate::target::{RegistryEvent, TargetRegistry};

/// What one cycle did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The reconciled playlist differed and was written back.
    Updated { entries: usize },
    /// The playlist already matched the directory; nothing was written.
    Unchanged,
    /// The target reported active playback and the stop-policy is on; the
    /// cycle was skipped without reading or writing.
    SkippedActive,
}

/// All mutable state the daemon owns between cycles.
///
/// Everything else (the playlist itself, the directory contents, playback
/// state) belongs to external components and is re-read fresh on every
/// cycle. Constructing independent sessions is cheap, which keeps cycles
/// testable without process-wide state.
pub struct Session {
    registry: Box<dyn TargetRegistry>,
    events: Receiver<RegistryEvent>,

    target_name: String,
    directory: PathBuf,
    sort_mode: Option<SortMode>,
    raw_sort_mode: String,
    descending: bool,
    update_only_when_stopped: bool,
    check_interval: Duration,
}

impl Session {
    /// Build a session over `registry`, applying `settings`.
    ///
    /// `events` carries registry notifications (currently renames); it is
    /// drained at the start of every cycle.
    pub fn new(
        registry: Box<dyn TargetRegistry>,
        events: Receiver<RegistryEvent>,
        settings: &Settings,
    ) -> Self {
        let mut session = Self {
            registry,
            events,
            target_name: String::new(),
            directory: PathBuf::new(),
            sort_mode: None,
            raw_sort_mode: String::new(),
            descending: false,
            update_only_when_stopped: false,
            check_interval: Duration::from_millis(MIN_CHECK_INTERVAL_MS),
        };
        session.apply_settings(settings);
        session
    }

    /// Re-apply operator configuration.
    ///
    /// An unrecognized sort mode is logged and the previously valid mode (if
    /// any) stays in effect. The check interval is clamped to the minimum.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.target_name = settings.target.name.clone();
        self.directory = PathBuf::from(&settings.sync.directory);
        self.descending = settings.sync.descending;
        self.update_only_when_stopped = settings.sync.update_only_when_stopped;
        self.check_interval = Duration::from_millis(
            settings.sync.check_interval_ms.max(MIN_CHECK_INTERVAL_MS),
        );

        self.raw_sort_mode = settings.sync.sort_mode.clone();
        match SortMode::parse(&settings.sync.sort_mode) {
            Ok(mode) => self.sort_mode = Some(mode),
            Err(e) => warn!("{e}; keeping previous sort mode"),
        }
    }

    /// The cadence the timer loop should use between cycles.
    pub fn check_interval(&self) -> Duration {
        self.check_interval
    }

    /// The name the session currently resolves its target under.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    fn drain_registry_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                RegistryEvent::Renamed { old, new } => {
                    if old == self.target_name {
                        debug!(%old, %new, "target renamed, following");
                        self.target_name = new;
                    }
                }
            }
        }
    }

    /// Run one reconciliation cycle.
    ///
    /// Every error is non-fatal: the caller logs it, skips this cycle and
    /// retries on the next tick.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome> {
        self.drain_registry_events();

        let Some(mode) = self.sort_mode else {
            return Err(Error::InvalidSortMode(self.raw_sort_mode.clone()));
        };
        let spec = SortSpec {
            mode,
            descending: self.descending,
        };

        let mut target = self
            .registry
            .resolve(&self.target_name)
            .ok_or_else(|| Error::TargetUnresolved(self.target_name.clone()))?;

        if self.update_only_when_stopped && target.playback_state().is_active() {
            return Ok(CycleOutcome::SkippedActive);
        }

        let scanned = scanner::scan(&self.directory)?;
        let current = target.read_playlist()?;

        let (entries, changed) = reconcile(&current, &scanned, spec);
        if !changed {
            return Ok(CycleOutcome::Unchanged);
        }

        target.write_playlist(&entries)?;
        Ok(CycleOutcome::Updated {
            entries: entries.len(),
        })
    }
}
