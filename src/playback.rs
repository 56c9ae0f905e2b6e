//! Playback adapter: a small seam between the browse state and `rodio`.
//!
//! The `Playback` trait is what the app talks to. `AudioPlayer` implements it
//! by forwarding commands to a dedicated audio thread that owns the output
//! stream and the current sink.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::*;
