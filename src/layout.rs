//! Canvas geometry shared by the renderer and the input dispatcher.
//!
//! Everything is laid out on a fixed canvas measured in terminal cells and
//! anchored at the top-left corner of the terminal. Drawing and hit-testing
//! both read from this module, so what is clicked is always what was drawn.

use ratatui::layout::{Position, Rect};

const fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

pub const CANVAS: Rect = rect(0, 0, 100, 30);

/// Number of album tiles the canvas has room for.
pub const ALBUM_SLOTS: usize = 3;
pub const ALBUM_ORIGIN_X: u16 = 8;
pub const ALBUM_Y: u16 = 2;
pub const ALBUM_TILE_WIDTH: u16 = 20;
pub const ALBUM_TILE_HEIGHT: u16 = 8;
pub const ALBUM_SPACING: u16 = 10;

pub const SCROLL_LEFT: Rect = rect(2, 5, 4, 3);
pub const SCROLL_RIGHT: Rect = rect(94, 5, 4, 3);

pub const TRACK_HEADER: Rect = rect(2, 12, 36, 1);
/// Number of track rows the canvas has room for.
pub const TRACK_ROWS_MAX: usize = 8;
pub const TRACK_LIST_X: u16 = 2;
pub const TRACK_LIST_Y: u16 = 14;
pub const TRACK_ROW_WIDTH: u16 = 30;
pub const TRACK_ROW_HEIGHT: u16 = 1;
pub const TRACK_NAV_X: u16 = 33;
pub const TRACK_NAV_WIDTH: u16 = 3;

pub const NOW_PLAYING_ART: Rect = rect(40, 12, 16, 8);
pub const NOW_PLAYING_INFO: Rect = rect(58, 12, 40, 4);
pub const REPEAT_BUTTON: Rect = rect(58, 17, 16, 3);
pub const PROGRESS_BAR: Rect = rect(40, 22, 56, 1);
pub const STATUS_LINE: Rect = rect(2, 25, 96, 1);
pub const CONTROLS_LINE: Rect = rect(2, 27, 96, 1);

/// What a pointer position landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hit {
    /// Album tile by slot (0 = leftmost visible tile).
    Album(usize),
    /// Track row by row (0 = topmost visible row).
    Track(usize),
    ScrollLeft,
    ScrollRight,
    TracksUp,
    TracksDown,
    Repeat,
}

/// Geometry for a configured window size.
///
/// The track down arrow sits on the last track row, so it moves with
/// `max_tracks`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Geometry {
    pub visible_albums: usize,
    pub max_tracks: usize,
}

impl Geometry {
    pub fn new(visible_albums: usize, max_tracks: usize) -> Self {
        Self {
            visible_albums: visible_albums.clamp(1, ALBUM_SLOTS),
            max_tracks: max_tracks.clamp(1, TRACK_ROWS_MAX),
        }
    }

    pub fn album_tile(&self, slot: usize) -> Rect {
        let x = ALBUM_ORIGIN_X + slot as u16 * (ALBUM_TILE_WIDTH + ALBUM_SPACING);
        rect(x, ALBUM_Y, ALBUM_TILE_WIDTH, ALBUM_TILE_HEIGHT)
    }

    /// Caption row directly under an album tile.
    pub fn album_caption(&self, slot: usize) -> Rect {
        let tile = self.album_tile(slot);
        rect(tile.x, tile.y + tile.height, tile.width, 1)
    }

    pub fn track_row(&self, row: usize) -> Rect {
        rect(
            TRACK_LIST_X,
            TRACK_LIST_Y + row as u16 * TRACK_ROW_HEIGHT,
            TRACK_ROW_WIDTH,
            TRACK_ROW_HEIGHT,
        )
    }

    pub fn tracks_up(&self) -> Rect {
        rect(TRACK_NAV_X, TRACK_LIST_Y, TRACK_NAV_WIDTH, TRACK_ROW_HEIGHT)
    }

    pub fn tracks_down(&self) -> Rect {
        // Never share a cell with the up arrow, even with a one-row window.
        let last = self.track_row(self.max_tracks.max(2) - 1);
        rect(TRACK_NAV_X, last.y, TRACK_NAV_WIDTH, TRACK_ROW_HEIGHT)
    }

    /// Visible album slot under `pos`, considering only the `shown` populated slots.
    pub fn album_slot_at(&self, pos: Position, shown: usize) -> Option<usize> {
        (0..shown.min(self.visible_albums)).find(|&slot| self.album_tile(slot).contains(pos))
    }

    /// Visible track row under `pos`, considering only the `shown` populated rows.
    pub fn track_row_at(&self, pos: Position, shown: usize) -> Option<usize> {
        (0..shown.min(self.max_tracks)).find(|&row| self.track_row(row).contains(pos))
    }

    /// Resolve a pointer position against every clickable region.
    ///
    /// The track arrows only count when `track_nav` is set, matching when they are drawn.
    pub fn hit_test(
        &self,
        pos: Position,
        shown_albums: usize,
        shown_tracks: usize,
        track_nav: bool,
    ) -> Option<Hit> {
        if let Some(slot) = self.album_slot_at(pos, shown_albums) {
            return Some(Hit::Album(slot));
        }
        if let Some(row) = self.track_row_at(pos, shown_tracks) {
            return Some(Hit::Track(row));
        }
        if SCROLL_LEFT.contains(pos) {
            Some(Hit::ScrollLeft)
        } else if SCROLL_RIGHT.contains(pos) {
            Some(Hit::ScrollRight)
        } else if track_nav && self.tracks_up().contains(pos) {
            Some(Hit::TracksUp)
        } else if track_nav && self.tracks_down().contains(pos) {
            Some(Hit::TracksDown)
        } else if REPEAT_BUTTON.contains(pos) {
            Some(Hit::Repeat)
        } else {
            None
        }
    }
}
