//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or parsing the album catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The text ended before a field the counts promised. `line` is 1-based.
    #[error("catalog ended early at line {line}: expected {expected}")]
    Truncated { line: usize, expected: &'static str },
    #[error("catalog line {line}: expected a count, found {found:?}")]
    InvalidCount { line: usize, found: String },
}

/// Failures starting playback of a track.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("no audio output device: {0}")]
    Device(String),
    #[error("audio thread is not running")]
    Disconnected,
}

/// Errors that end the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
