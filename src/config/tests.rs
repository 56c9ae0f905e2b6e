use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
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
fn resolve_config_path_prefers_discshelf_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("DISCSHELF_CONFIG_PATH", "/tmp/discshelf-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/discshelf-test-config.toml")
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
        PathBuf::from("/tmp/xdg-config-home")
            .join("discshelf")
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
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("discshelf")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_classic_layout() {
    let s = Settings::default();
    assert_eq!(s.catalog.path, PathBuf::from("albums.txt"));
    assert_eq!(s.catalog.artwork_dir, PathBuf::from("images"));
    assert_eq!(s.browse.visible_albums, 3);
    assert_eq!(s.browse.max_tracks_displayed, 5);
    assert!(!s.playback.repeat);
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
[catalog]
path = "/srv/music/albums.txt"
artwork_dir = "covers"

[browse]
visible_albums = 2
max_tracks_displayed = 7

[playback]
repeat = true
progress_step = 0.01

[ui]
tick_ms = 30
title = " shelf "

[log]
level = "debug"
file = "/tmp/discshelf.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DISCSHELF_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("DISCSHELF__BROWSE__VISIBLE_ALBUMS");

    let s = Settings::load().unwrap();
    assert_eq!(s.catalog.path, PathBuf::from("/srv/music/albums.txt"));
    assert_eq!(s.catalog.artwork_dir, PathBuf::from("covers"));
    assert_eq!(s.browse.visible_albums, 2);
    assert_eq!(s.browse.max_tracks_displayed, 7);
    assert!(s.playback.repeat);
    assert!((s.playback.progress_step - 0.01).abs() < f32::EPSILON);
    assert_eq!(s.ui.tick_ms, 30);
    assert_eq!(s.ui.title, " shelf ");
    assert_eq!(s.log.level, "debug");
    assert_eq!(s.log.file, Some(PathBuf::from("/tmp/discshelf.log")));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[browse]
visible_albums = 3
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DISCSHELF_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("DISCSHELF__BROWSE__VISIBLE_ALBUMS", "1");

    let s = Settings::load().unwrap();
    assert_eq!(s.browse.visible_albums, 1);
}

#[test]
fn validate_rejects_windows_larger_than_the_canvas() {
    let mut s = Settings::default();
    s.browse.visible_albums = 4;
    assert!(s.validate().unwrap_err().contains("visible_albums"));

    let mut s = Settings::default();
    s.browse.max_tracks_displayed = 0;
    assert!(s.validate().unwrap_err().contains("max_tracks_displayed"));
}

#[test]
fn validate_rejects_bad_progress_and_tick() {
    let mut s = Settings::default();
    s.playback.progress_step = 0.0;
    assert!(s.validate().is_err());
    s.playback.progress_step = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.tick_ms = 0;
    assert!(s.validate().is_err());
}
