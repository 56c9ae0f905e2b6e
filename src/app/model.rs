//! Application model types: `App` and `SessionState`.
//!
//! `App` owns the read-only catalog, the browse windows over albums and
//! tracks, the current selection and the playback session it observes.

use std::ops::Range;

use ratatui::layout::Position;

use crate::catalog::{Album, Catalog, Track, TrackRef};
use crate::config::Settings;
use crate::layout::Geometry;
use crate::playback::{Playback, PlayerState};

/// Lifecycle of the current track session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Playing,
    /// Played to the end.
    Finished,
    /// Could not be started.
    Failed,
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    pub geometry: Geometry,

    pub start_album: usize,
    pub current_album: Option<usize>,
    pub start_track: usize,
    /// Index into the current album's tracks.
    pub current_track: Option<usize>,

    pub repeat: bool,
    pub progress: f32,
    pub progress_step: f32,
    /// Track of the most recent play request, kept for display after it stops.
    pub last_played: Option<TrackRef>,
    pub session: SessionState,

    /// Message for the status line (failed playback and the like).
    pub status: Option<String>,
    /// Last known pointer position, for hover highlighting.
    pub pointer: Option<Position>,

    player: Box<dyn Playback>,
}

impl App {
    /// Create a new `App` over `catalog`, sized and seeded from `settings`.
    pub fn new(catalog: Catalog, settings: &Settings, player: Box<dyn Playback>) -> Self {
        Self {
            catalog,
            geometry: Geometry::new(
                settings.browse.visible_albums,
                settings.browse.max_tracks_displayed,
            ),
            start_album: 0,
            current_album: None,
            start_track: 0,
            current_track: None,
            repeat: settings.playback.repeat,
            progress: 0.0,
            progress_step: settings.playback.progress_step,
            last_played: None,
            session: SessionState::Idle,
            status: None,
            pointer: None,
            player,
        }
    }

    pub fn visible_album_count(&self) -> usize {
        self.geometry.visible_albums
    }

    pub fn max_tracks_displayed(&self) -> usize {
        self.geometry.max_tracks
    }

    /// Catalog indices of the album tiles currently on screen.
    pub fn visible_albums(&self) -> Range<usize> {
        let end = (self.start_album + self.visible_album_count()).min(self.catalog.len());
        self.start_album.min(end)..end
    }

    /// Track indices of the current album currently on screen.
    pub fn visible_tracks(&self) -> Range<usize> {
        let total = self.current_album().map_or(0, |a| a.tracks.len());
        let end = (self.start_track + self.max_tracks_displayed()).min(total);
        self.start_track.min(end)..end
    }

    pub fn current_album(&self) -> Option<&Album> {
        self.current_album.and_then(|i| self.catalog.album(i))
    }

    /// Selected track as a catalog handle.
    pub fn current_track_ref(&self) -> Option<TrackRef> {
        Some(TrackRef::new(self.current_album?, self.current_track?))
    }

    /// Track to show in the now-playing panel: the selection, else the last one played.
    pub fn now_playing(&self) -> Option<(TrackRef, &Album, &Track)> {
        let r = self.current_track_ref().or(self.last_played)?;
        let album = self.catalog.album(r.album)?;
        let track = album.tracks.get(r.track)?;
        Some((r, album, track))
    }

    /// Whether the current album has more tracks than fit in the window.
    pub fn tracks_overflow(&self) -> bool {
        self.current_album()
            .is_some_and(|a| a.tracks.len() > self.max_tracks_displayed())
    }

    pub fn scroll_albums_left(&mut self) {
        if self.start_album > 0 {
            self.start_album -= 1;
        }
    }

    pub fn scroll_albums_right(&mut self) {
        if self.start_album + self.visible_album_count() < self.catalog.len() {
            self.start_album += 1;
        }
    }

    pub fn scroll_tracks_up(&mut self) {
        if self.start_track > 0 {
            self.start_track -= 1;
        }
    }

    pub fn scroll_tracks_down(&mut self) {
        let total = self.current_album().map_or(0, |a| a.tracks.len());
        if self.start_track + self.max_tracks_displayed() < total {
            self.start_track += 1;
        }
    }

    /// Make `index` the current album. Playback is left alone.
    pub fn select_album(&mut self, index: usize) {
        if index >= self.catalog.len() {
            return;
        }
        self.current_album = Some(index);
        self.current_track = None;
        self.start_track = 0;
    }

    /// Select track `index` of the current album and play it.
    pub fn select_track(&mut self, index: usize) {
        let Some(album) = self.current_album else {
            return;
        };
        let r = TrackRef::new(album, index);
        if self.catalog.track(r).is_none() {
            return;
        }
        self.current_track = Some(index);
        self.play_track(r);
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    /// Stop the current track, reset progress and start `r` without looping.
    pub fn play_track(&mut self, r: TrackRef) {
        let Some(track) = self.catalog.track(r) else {
            return;
        };
        let path = self.catalog.track_path(track);
        let name = track.name.clone();

        if self.session == SessionState::Playing {
            log::debug!("stopping current track for {name:?}");
            self.player.stop();
        }
        self.progress = 0.0;
        self.last_played = Some(r);

        if !path.is_file() {
            log::warn!("audio file missing: {}", path.display());
            self.status = Some(format!("Cannot play {name}: missing {}", path.display()));
            self.session = SessionState::Failed;
            return;
        }

        match self.player.play(&path) {
            Ok(()) => {
                self.status = None;
                self.session = SessionState::Playing;
            }
            Err(e) => {
                log::warn!("could not start {name:?}: {e}");
                self.status = Some(format!("Cannot play {name}: {e}"));
                self.session = SessionState::Failed;
            }
        }
    }

    /// Advance one frame: consume the observed playback state once.
    pub fn tick(&mut self) {
        if self.session != SessionState::Playing {
            return;
        }

        match self.player.state() {
            PlayerState::Playing => {
                self.progress = (self.progress + self.progress_step).min(1.0);
            }
            PlayerState::Finished | PlayerState::Idle => {
                self.session = SessionState::Finished;
                if self.repeat {
                    if let Some(r) = self.current_track_ref() {
                        log::debug!("repeating track {r:?}");
                        self.play_track(r);
                    }
                }
            }
            PlayerState::Failed(reason) => {
                self.session = SessionState::Failed;
                self.status = Some(reason);
            }
        }
    }

    /// Stop audio and release the player before exit.
    pub fn shutdown(&mut self) {
        self.player.shutdown();
    }
}
