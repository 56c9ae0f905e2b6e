use super::*;
use crate::catalog::{Album, Catalog, Track};
use crate::config::Settings;
use crate::error::PlaybackError;
use crate::playback::{Playback, PlayerState};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Position};
use std::path::Path;

struct SilentPlayer;

impl Playback for SilentPlayer {
    fn play(&mut self, _path: &Path) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn stop(&mut self) {}

    fn state(&self) -> PlayerState {
        PlayerState::Playing
    }
}

fn rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(buf: &Buffer, needle: &str) -> bool {
    rows(buf).iter().any(|r| r.contains(needle))
}

fn app(dir: &Path) -> App {
    let albums = (0..4)
        .map(|a| Album {
            title: format!("Record {a}"),
            artist: format!("Band {a}"),
            artwork: format!("{a}.png"),
            tracks: (0..7)
                .map(|t| Track {
                    name: format!("Song {a}-{t}"),
                    location: format!("{a}-{t}.mp3"),
                })
                .collect(),
        })
        .collect();
    let catalog = Catalog::new(albums).with_base_dir(dir);
    App::new(catalog, &Settings::default(), Box::new(SilentPlayer))
}

fn render(app: &App, artwork: &mut ArtworkCache, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let ui = Settings::default().ui;
    terminal.draw(|f| draw(f, app, artwork, &ui)).unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn draws_albums_placeholders_and_controls() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let mut artwork = ArtworkCache::new(dir.path());

    let buf = render(&app, &mut artwork, 100, 30);
    assert!(screen_contains(&buf, "discshelf"));
    assert!(screen_contains(&buf, "Record 0"));
    assert!(screen_contains(&buf, "Record 2"));
    assert!(!screen_contains(&buf, "Record 3"));
    assert!(screen_contains(&buf, "no artwork"));
    assert!(screen_contains(&buf, "Select an album"));
    assert!(screen_contains(&buf, "Nothing is playing"));
    assert!(screen_contains(&buf, "Repeat: OFF"));
    assert!(screen_contains(&buf, "[q] quit"));
}

#[test]
fn draws_track_window_and_now_playing() {
    let dir = tempfile::tempdir().unwrap();
    for t in 0..7 {
        std::fs::write(dir.path().join(format!("1-{t}.mp3")), b"x").unwrap();
    }
    let mut app = app(dir.path());
    let mut artwork = ArtworkCache::new(dir.path());

    app.select_album(1);
    app.scroll_tracks_down();
    app.select_track(4);
    app.toggle_repeat();

    let buf = render(&app, &mut artwork, 100, 30);
    assert!(screen_contains(&buf, "Tracks: Record 1"));
    assert!(!screen_contains(&buf, "Song 1-0"));
    assert!(screen_contains(&buf, "Song 1-1"));
    assert!(screen_contains(&buf, "Song 1-5"));
    assert!(!screen_contains(&buf, "Song 1-6"));
    assert!(screen_contains(&buf, "Artist: Band 1"));
    assert!(screen_contains(&buf, "Album: Record 1"));
    assert!(screen_contains(&buf, "Repeat: ON"));
    assert!(screen_contains(&buf, "▲"));
    assert!(screen_contains(&buf, "▼"));
    assert!(rows(&buf)[layout::PROGRESS_BAR.y as usize].contains('%'));
}

#[test]
fn missing_audio_reports_on_status_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(dir.path());
    let mut artwork = ArtworkCache::new(dir.path());

    app.select_album(0);
    app.select_track(0);

    let buf = render(&app, &mut artwork, 100, 30);
    let status = &rows(&buf)[layout::STATUS_LINE.y as usize];
    assert!(status.contains("Cannot play Song 0-0"));
    // Nothing started, so there is no progress bar.
    assert!(!rows(&buf)[layout::PROGRESS_BAR.y as usize].contains('%'));
}

#[test]
fn hovered_track_row_is_highlighted() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(dir.path());
    let mut artwork = ArtworkCache::new(dir.path());
    app.select_album(0);

    let row = app.geometry.track_row(1);
    app.hover(Position::new(row.x + 2, row.y));

    let buf = render(&app, &mut artwork, 100, 30);
    assert_eq!(buf[(row.x, row.y)].bg, HOVER);
    let other = app.geometry.track_row(2);
    assert_ne!(buf[(other.x, other.y)].bg, HOVER);
}

#[test]
fn small_terminal_gets_a_notice() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let mut artwork = ArtworkCache::new(dir.path());

    let buf = render(&app, &mut artwork, 60, 10);
    assert!(screen_contains(&buf, "too small"));
    assert!(!screen_contains(&buf, "Repeat"));
}
