use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::error::PlaybackError;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, Playback, PlaybackStatus, PlayerState, StatusHandle};

/// `rodio`-backed playback running on its own thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    status: StatusHandle,
    join: Option<JoinHandle<()>>,
    session: Option<u64>,
    next_session: u64,
}

impl AudioPlayer {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let status: StatusHandle = Arc::new(Mutex::new(PlaybackStatus::default()));
        let join = spawn_audio_thread(rx, status.clone());

        Self {
            tx,
            status,
            join: Some(join),
            session: None,
            next_session: 0,
        }
    }
}

impl Playback for AudioPlayer {
    fn play(&mut self, path: &Path) -> Result<(), PlaybackError> {
        self.next_session += 1;
        let session = self.next_session;
        self.tx
            .send(AudioCmd::Play {
                session,
                path: path.to_path_buf(),
            })
            .map_err(|_| PlaybackError::Disconnected)?;
        self.session = Some(session);
        Ok(())
    }

    fn stop(&mut self) {
        let _ = self.tx.send(AudioCmd::Stop);
        self.session = None;
    }

    fn state(&self) -> PlayerState {
        self.status
            .lock()
            .map(|st| st.state_of(self.session))
            .unwrap_or(PlayerState::Idle)
    }

    fn shutdown(&mut self) {
        let _ = self.tx.send(AudioCmd::Quit);
        self.session = None;
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
