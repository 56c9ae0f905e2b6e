//! Playback-related types: the adapter trait, commands and shared status.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::PlaybackError;

/// What the adapter currently observes for the last requested track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerState {
    /// Nothing was requested, or playback was stopped explicitly.
    Idle,
    Playing,
    /// The track played to its end.
    Finished,
    /// The track could not be started.
    Failed(String),
}

/// The song-like object the browse state drives.
///
/// Playback never loops on its own; repeat is handled by the caller.
pub trait Playback {
    /// Stop whatever is playing and start `path` from the beginning.
    fn play(&mut self, path: &Path) -> Result<(), PlaybackError>;
    fn stop(&mut self);
    fn state(&self) -> PlayerState;
    /// Release audio resources before exit.
    fn shutdown(&mut self) {}
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Start `path`; `session` identifies this request in `PlaybackStatus`.
    Play { session: u64, path: PathBuf },
    /// Stop playback immediately.
    Stop,
    /// Stop and leave the audio thread.
    Quit,
}

/// Results published by the audio thread.
///
/// Sessions increase with every play request, so a report about an older
/// session never affects the one currently requested.
#[derive(Debug, Clone, Default)]
pub struct PlaybackStatus {
    /// Highest session that finished or failed.
    pub ended: u64,
    /// Last failure and the session it belongs to.
    pub failure: Option<(u64, String)>,
}

impl PlaybackStatus {
    pub fn finish(&mut self, session: u64) {
        self.ended = self.ended.max(session);
    }

    pub fn fail(&mut self, session: u64, reason: String) {
        self.failure = Some((session, reason));
        self.finish(session);
    }

    /// State of `session`, or `Idle` when there is none.
    pub fn state_of(&self, session: Option<u64>) -> PlayerState {
        let Some(session) = session else {
            return PlayerState::Idle;
        };
        match &self.failure {
            Some((failed, reason)) if *failed == session => PlayerState::Failed(reason.clone()),
            _ if self.ended >= session => PlayerState::Finished,
            _ => PlayerState::Playing,
        }
    }
}

pub type StatusHandle = Arc<Mutex<PlaybackStatus>>;
