use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_listsync_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("LISTSYNC_CONFIG_PATH", "/tmp/listsync-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/listsync-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("listsync")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("listsync")
            .join("config.toml")
    );
}

#[test]
fn settings_defaults_are_sensible() {
    let s = Settings::default();
    assert_eq!(s.sync.check_interval_ms, 10_000);
    assert_eq!(s.sync.sort_mode, "modified-time");
    assert!(!s.sync.descending);
    assert!(!s.sync.update_only_when_stopped);
    assert!(s.target.name.is_empty());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[target]
name = "wallboard"
registry_dir = "/var/lib/listsync/targets"

[sync]
check_interval_ms = 2500
directory = "/srv/media/loop"
sort_mode = "name"
descending = true
update_only_when_stopped = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("LISTSYNC_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("LISTSYNC__SYNC__CHECK_INTERVAL_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.target.name, "wallboard");
    assert_eq!(s.target.registry_dir, "/var/lib/listsync/targets");
    assert_eq!(s.sync.check_interval_ms, 2500);
    assert_eq!(s.sync.directory, "/srv/media/loop");
    assert_eq!(s.sync.sort_mode, "name");
    assert!(s.sync.descending);
    assert!(s.sync.update_only_when_stopped);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[sync]
check_interval_ms = 5000
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("LISTSYNC_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("LISTSYNC__SYNC__CHECK_INTERVAL_MS", "750");

    let s = Settings::load().unwrap();
    assert_eq!(s.sync.check_interval_ms, 750);
}

#[test]
fn validate_rejects_too_small_interval() {
    let mut s = Settings::default();
    s.sync.check_interval_ms = 50;
    assert!(s.validate().is_err());
}
