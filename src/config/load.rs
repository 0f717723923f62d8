use std::{env, path::PathBuf};

use super::schema::{MIN_CHECK_INTERVAL_MS, Settings};

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `LISTSYNC__`),
/// then an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("LISTSYNC")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    ///
    /// The sort mode is deliberately not checked here: a bad mode must not
    /// discard the rest of the settings, it is handled per cycle (last valid
    /// mode stays in effect).
    pub fn validate(&self) -> Result<(), String> {
        if self.sync.check_interval_ms < MIN_CHECK_INTERVAL_MS {
            return Err(format!(
                "sync.check_interval_ms must be >= {MIN_CHECK_INTERVAL_MS}"
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `LISTSYNC_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("LISTSYNC_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/listsync/config.toml`
/// or `~/.config/listsync/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("listsync").join("config.toml"))
}
