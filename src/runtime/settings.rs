use crate::config;

/// Load settings, falling back to defaults when the file is unreadable or invalid.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("discshelf: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; a broken file should not keep the shelf closed.
            eprintln!("discshelf: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
