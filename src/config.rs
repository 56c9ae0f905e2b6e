//! Configuration loader and schema types.
//!
//! This module exposes the settings that shape the browse window, playback
//! progress, the frame loop and logging, plus helpers to load them from disk.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
