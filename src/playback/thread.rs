use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use crate::error::PlaybackError;

use super::sink::create_sink;
use super::types::{AudioCmd, StatusHandle};

/// How often the thread checks whether the current sink ran dry.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub(super) fn spawn_audio_thread(rx: Receiver<AudioCmd>, status: StatusHandle) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut device_error: Option<String> = None;
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when the stream is dropped, which would
                // scribble over the terminal UI.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                log::error!("no audio output device: {e}");
                device_error = Some(e.to_string());
                None
            }
        };

        let mut sink: Option<Sink> = None;
        let mut session: u64 = 0;

        loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(AudioCmd::Play { session: s, path }) => {
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                    session = s;

                    let opened = match (&stream, &device_error) {
                        (Some(stream), _) => create_sink(stream, &path),
                        (None, reason) => Err(PlaybackError::Device(
                            reason.clone().unwrap_or_default(),
                        )),
                    };
                    match opened {
                        Ok(new_sink) => {
                            new_sink.play();
                            sink = Some(new_sink);
                            log::info!("playing {} (session {s})", path.display());
                        }
                        Err(e) => {
                            log::warn!("could not play {}: {e}", path.display());
                            if let Ok(mut st) = status.lock() {
                                st.fail(s, e.to_string());
                            }
                        }
                    }
                }
                Ok(AudioCmd::Stop) => {
                    if let Some(old) = sink.take() {
                        old.stop();
                        log::debug!("stopped session {session}");
                    }
                }
                Ok(AudioCmd::Quit) => {
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {
                    if sink.as_ref().is_some_and(Sink::empty) {
                        sink = None;
                        log::debug!("session {session} finished");
                        if let Ok(mut st) = status.lock() {
                            st.finish(session);
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
