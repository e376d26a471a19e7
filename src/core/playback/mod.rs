//! core/playback/mod.rs
//! Playback service: the capability the controller is handed, plus the
//! rodio-backed implementation used by the binary.
//!
//! - [`Playback`] is everything the controller may ask or tell the service.
//! - [`Refresh`] is how the service pushes "this projection is stale" back.
//! - [`MusicPlayer`] mirrors engine state and turns engine events into refreshes.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

mod engine;
mod player;

pub use engine::PlaybackEngine;
pub use player::MusicPlayer;

use super::error::PlaybackError;
use super::types::Song;

/// Queries + commands the controller depends on.
///
/// Commands are fire-and-forget; the service reports the outcome later
/// through [`Playback::drain`].
pub trait Playback {
    fn is_playing(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);

    /// Whole seconds from the start of the current song.
    fn seek(&mut self, seconds: u32);

    fn now_playing(&self) -> Option<&Song>;
    fn time_passed(&self) -> String;
    fn time_remaining(&self) -> String;

    /// Songs the service can play, in order.
    fn queue(&self) -> &[Song];

    /// Pending refresh notifications, oldest first.
    fn drain(&mut self) -> Vec<Refresh>;
}

/// Which controller projection must be re-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    PlayPauseIcon,
    NowPlaying,
    InitTimeSlider,
    TimeSlider,
    InitTimeLabels,
    TimeLabels,
}

#[derive(Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send. Returns false if the engine died and the command
    /// was dropped.
    pub fn send(&self, cmd: PlayerCommand) -> bool {
        let delivered = self.command_tx.send(cmd).is_ok();
        if !delivered {
            tracing::debug!("playback engine is gone; command dropped");
        }
        delivered
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    PlayFile(PathBuf),
    Pause,
    Resume,
    Seek(Duration),
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Started {
        path: PathBuf,
        duration: Option<Duration>,
    },
    Paused,
    Resumed,
    /// Fixed-period heartbeat while audio is running.
    Tick {
        position: Duration,
    },
    TrackEnded,
    Error(PlaybackError),
}

/// Spawns the engine thread and returns:
/// - PlaybackController (commands in)
/// - Receiver<PlayerEvent> (events out, drained by `MusicPlayer`)
pub fn start_playback(tick: Duration) -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(event_tx.clone(), tick) {
            Ok(e) => e,
            Err(err) => {
                tracing::error!(%err, "playback engine failed to start");
                let _ = event_tx.send(PlayerEvent::Error(err));
                return;
            }
        };

        engine.run(command_rx);
    });

    (PlaybackController { command_tx }, event_rx)
}
