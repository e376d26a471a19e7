//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per current song)
//! - command loop + fixed-period ticks
//!
//! Emits PlayerEvent back via a channel.
//! No iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::{PlayerCommand, PlayerEvent};
use crate::core::error::PlaybackError;

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    sink: Option<Sink>,
    current_path: Option<PathBuf>,

    tick: Duration,
    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>, tick: Duration) -> Result<Self, PlaybackError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Device(e.to_string()))?;

        Ok(Self {
            stream,
            sink: None,
            current_path: None,
            tick,
            event_tx,
        })
    }

    /// Runs until Shutdown or until every controller handle is dropped.
    ///
    /// Ticks are scheduled against a deadline so commands arriving in between
    /// do not shorten the period.
    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let mut next_tick = Instant::now() + self.tick;

        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());

            match command_rx.recv_timeout(wait) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    continue;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.on_tick();
            next_tick += self.tick;
        }

        self.stop_internal();
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.event_tx.send(event);
    }

    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        tracing::trace!(?cmd, "engine command");

        match cmd {
            PlayerCommand::PlayFile(path) => {
                if let Err(err) = self.play_file(path) {
                    self.emit(PlayerEvent::Error(err));
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    self.emit(PlayerEvent::Paused);
                }
            }
            PlayerCommand::Resume => {
                if let Some(sink) = &self.sink {
                    sink.play();
                    self.emit(PlayerEvent::Resumed);
                }
            }
            PlayerCommand::Seek(pos) => {
                if let Some(sink) = &self.sink
                    && let Err(e) = sink.try_seek(pos)
                {
                    self.emit(PlayerEvent::Error(PlaybackError::Seek(e.to_string())));
                }
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn on_tick(&mut self) {
        let Some(sink) = &self.sink else { return };

        if sink.empty() && self.current_path.is_some() {
            self.stop_internal();
            self.emit(PlayerEvent::TrackEnded);
            return;
        }

        if !sink.is_paused() {
            let position = sink.get_pos();
            self.emit(PlayerEvent::Tick { position });
        }
    }

    fn play_file(&mut self, path: PathBuf) -> Result<(), PlaybackError> {
        self.stop_internal();

        let file = File::open(&path).map_err(|e| PlaybackError::Open(e.to_string()))?;
        let decoder =
            Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode(e.to_string()))?;
        let duration = decoder.total_duration();

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(decoder);
        sink.play();

        self.current_path = Some(path.clone());
        self.sink = Some(sink);

        self.emit(PlayerEvent::Started { path, duration });

        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current_path = None;
    }
}
