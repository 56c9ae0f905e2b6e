//! Pointer dispatch: turns canvas positions into browse-state operations.

use ratatui::layout::Position;

use crate::layout::Hit;

use super::model::App;

impl App {
    /// Select the album whose visible tile contains `pos`. Returns whether one was hit.
    pub fn select_album_at(&mut self, pos: Position) -> bool {
        let shown = self.visible_albums();
        match self.geometry.album_slot_at(pos, shown.len()) {
            Some(slot) => {
                self.select_album(shown.start + slot);
                true
            }
            None => false,
        }
    }

    /// Select and play the visible track row that contains `pos`.
    pub fn select_track_at(&mut self, pos: Position) -> bool {
        let shown = self.visible_tracks();
        match self.geometry.track_row_at(pos, shown.len()) {
            Some(row) => {
                self.select_track(shown.start + row);
                true
            }
            None => false,
        }
    }

    /// What is under `pos` right now, given the populated tiles and rows.
    pub fn hit_at(&self, pos: Position) -> Option<Hit> {
        self.geometry.hit_test(
            pos,
            self.visible_albums().len(),
            self.visible_tracks().len(),
            self.tracks_overflow(),
        )
    }

    /// Handle a primary-button click at `pos`.
    pub fn click(&mut self, pos: Position) -> Option<Hit> {
        self.pointer = Some(pos);
        let hit = self.hit_at(pos)?;
        match hit {
            Hit::Album(_) => {
                self.select_album_at(pos);
            }
            Hit::Track(_) => {
                self.select_track_at(pos);
            }
            Hit::ScrollLeft => self.scroll_albums_left(),
            Hit::ScrollRight => self.scroll_albums_right(),
            Hit::TracksUp => self.scroll_tracks_up(),
            Hit::TracksDown => self.scroll_tracks_down(),
            Hit::Repeat => self.toggle_repeat(),
        }
        Some(hit)
    }

    pub fn hover(&mut self, pos: Position) {
        self.pointer = Some(pos);
    }

    /// Whether the pointer is over `hit`, for highlighting.
    pub fn is_hovered(&self, hit: Hit) -> bool {
        self.pointer.and_then(|p| self.hit_at(p)) == Some(hit)
    }
}
