mod app;
mod artwork;
mod catalog;
mod config;
mod error;
mod layout;
mod playback;
mod runtime;
mod ui;

fn main() {
    if let Err(e) = runtime::run() {
        eprintln!("discshelf: {e}");
        std::process::exit(1);
    }
}
