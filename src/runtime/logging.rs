use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::LogSettings;

/// Route `log` output away from the terminal the UI is drawing on.
///
/// With a `file`, records at `level` (or `RUST_LOG`) are appended there.
/// Without one, logging stays off unless `RUST_LOG` asks for it.
pub fn init(settings: &LogSettings) {
    let mut builder = match &settings.file {
        Some(path) => {
            let file = match OpenOptions::new().create(true).append(true).open(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("discshelf: cannot open log file {}: {e}", path.display());
                    return;
                }
            };
            let mut b = Builder::from_env(Env::default().default_filter_or(settings.level.as_str()));
            b.target(Target::Pipe(Box::new(file)));
            b
        }
        None => Builder::from_env(Env::default().default_filter_or("off")),
    };

    if builder.try_init().is_err() {
        eprintln!("discshelf: logger already initialized");
    }
}
