use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/discshelf/config.toml` or `~/.config/discshelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DISCSHELF__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub browse: BrowseSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file read at startup. The first command-line argument wins over this.
    pub path: PathBuf,
    /// Directory holding album artwork, relative to the catalog file when not absolute.
    pub artwork_dir: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("albums.txt"),
            artwork_dir: PathBuf::from("images"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowseSettings {
    /// Album tiles shown at once.
    pub visible_albums: usize,
    /// Track rows shown at once.
    pub max_tracks_displayed: usize,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            visible_albums: 3,
            max_tracks_displayed: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether repeat starts enabled.
    pub repeat: bool,
    /// Fraction of the progress bar filled per tick while a track plays.
    pub progress_step: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            repeat: false,
            progress_step: 0.0003,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Milliseconds between frame ticks.
    pub tick_ms: u64,
    /// Title drawn on the canvas border.
    pub title: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            title: " discshelf ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `env_logger` filter, e.g. "info" or "discshelf=debug".
    pub level: String,
    /// Log file. Without one, logging stays off unless `RUST_LOG` is set,
    /// since stderr belongs to the terminal UI.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
