use std::{env, path::PathBuf};

use crate::layout::{ALBUM_SLOTS, TRACK_ROWS_MAX};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then applies environment
/// variables (prefix `DISCSHELF__`) on top, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("DISCSHELF")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Check values the canvas or the frame loop cannot honor.
    pub fn validate(&self) -> Result<(), String> {
        let albums = self.browse.visible_albums;
        if !(1..=ALBUM_SLOTS).contains(&albums) {
            return Err(format!(
                "browse.visible_albums must be between 1 and {ALBUM_SLOTS}, got {albums}"
            ));
        }
        let tracks = self.browse.max_tracks_displayed;
        if !(1..=TRACK_ROWS_MAX).contains(&tracks) {
            return Err(format!(
                "browse.max_tracks_displayed must be between 1 and {TRACK_ROWS_MAX}, got {tracks}"
            ));
        }
        let step = self.playback.progress_step;
        if !(step > 0.0 && step <= 1.0) {
            return Err(format!("playback.progress_step must be in (0, 1], got {step}"));
        }
        if self.ui.tick_ms == 0 {
            return Err("ui.tick_ms must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `DISCSHELF_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("DISCSHELF_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/discshelf/config.toml`
/// or `~/.config/discshelf/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("discshelf").join("config.toml"))
}
