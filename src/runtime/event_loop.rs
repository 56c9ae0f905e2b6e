use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position};

use crate::app::App;
use crate::artwork::ArtworkCache;
use crate::config;
use crate::error::AppError;
use crate::ui;

/// Main terminal event loop: draws, dispatches input and runs the frame tick
/// every `ui.tick_ms`. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    artwork: &mut ArtworkCache,
) -> Result<(), AppError> {
    let tick = Duration::from_millis(settings.ui.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app, artwork, &settings.ui))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && handle_key_event(key, app) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            app.tick();
            last_tick = Instant::now();
        }
    }
}

/// Apply a key press to `app`. Returns `true` when the user asked to quit.
pub(super) fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Left | KeyCode::Char('h') => app.scroll_albums_left(),
        KeyCode::Right | KeyCode::Char('l') => app.scroll_albums_right(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_tracks_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_tracks_down(),
        KeyCode::Char('r') => app.toggle_repeat(),
        _ => {}
    }
    false
}

pub(super) fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(hit) = app.click(pos) {
                log::debug!("click at {pos:?} hit {hit:?}");
            }
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => app.hover(pos),
        MouseEventKind::ScrollUp => app.scroll_tracks_up(),
        MouseEventKind::ScrollDown => app.scroll_tracks_down(),
        MouseEventKind::ScrollLeft => app.scroll_albums_left(),
        MouseEventKind::ScrollRight => app.scroll_albums_right(),
        _ => {}
    }
}
