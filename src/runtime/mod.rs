use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::artwork::ArtworkCache;
use crate::catalog;
use crate::error::AppError;
use crate::playback::AudioPlayer;

mod event_loop;
mod logging;
mod settings;


pub fn run() -> Result<(), AppError> {
    let settings = settings::load_settings();
    logging::init(&settings.log);

    let catalog_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.catalog.path.clone());

    // Fail before touching the terminal so the error stays readable.
    let catalog = catalog::load(&catalog_path)?;
    log::info!(
        "loaded {} albums from {}",
        catalog.len(),
        catalog_path.display()
    );

    let mut artwork = ArtworkCache::new(catalog.resolve(&settings.catalog.artwork_dir));
    let mut app = App::new(catalog, &settings, Box::new(AudioPlayer::new()));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut artwork);

    app.shutdown();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    run_result
}
