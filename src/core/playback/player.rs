//! core/playback/player.rs
//! `MusicPlayer`: the `Playback` implementation the binary runs with.
//!
//! - Commands update state optimistically; engine events confirm it.
//! - `drain` is the only place engine events are read.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use super::{Playback, PlaybackController, PlayerCommand, PlayerEvent, Refresh, start_playback};
use crate::core::error::PlaybackError;
use crate::core::types::{Song, fmt_duration};

pub struct MusicPlayer {
    controller: PlaybackController,
    events: Receiver<PlayerEvent>,

    queue: Vec<Song>,
    cursor: usize,

    /// A song has been handed to the engine and not finished/stopped.
    loaded: bool,
    playing: bool,
    position: Duration,
}

impl MusicPlayer {
    /// Spawn the engine thread and wrap it.
    pub fn start(queue: Vec<Song>, tick: Duration) -> Self {
        let (controller, events) = start_playback(tick);
        Self::with_channels(queue, controller, events)
    }

    pub(crate) fn with_channels(
        queue: Vec<Song>,
        controller: PlaybackController,
        events: Receiver<PlayerEvent>,
    ) -> Self {
        Self {
            controller,
            events,
            queue,
            cursor: 0,
            loaded: false,
            playing: false,
            position: Duration::ZERO,
        }
    }

    fn start_current(&mut self) {
        let Some(song) = self.queue.get(self.cursor) else {
            tracing::info!("nothing to play");
            return;
        };

        tracing::info!(title = %song.title, "play");
        if !self.controller.send(PlayerCommand::PlayFile(song.path.clone())) {
            return;
        }

        self.loaded = true;
        self.playing = true;
        self.position = Duration::ZERO;
    }

    fn reset(&mut self) {
        self.loaded = false;
        self.playing = false;
        self.position = Duration::ZERO;
    }

    /// Back to "nothing loaded": every projection that showed the song is stale.
    fn stop(&mut self, out: &mut Vec<Refresh>) {
        self.reset();
        out.extend([
            Refresh::PlayPauseIcon,
            Refresh::NowPlaying,
            Refresh::InitTimeSlider,
            Refresh::InitTimeLabels,
        ]);
    }

    fn apply(&mut self, event: PlayerEvent, out: &mut Vec<Refresh>) {
        match event {
            PlayerEvent::Started { path, duration } => {
                tracing::debug!(path = %path.display(), ?duration, "engine started song");
                self.loaded = true;
                self.playing = true;
                self.position = Duration::ZERO;

                // Tags can miss the length; the decoder knows better.
                if let (Some(d), Some(song)) = (duration, self.queue.get_mut(self.cursor))
                    && song.length.is_zero()
                {
                    song.length = d;
                }

                out.extend([
                    Refresh::PlayPauseIcon,
                    Refresh::NowPlaying,
                    Refresh::InitTimeSlider,
                    Refresh::InitTimeLabels,
                ]);
            }
            PlayerEvent::Paused => {
                self.playing = false;
                out.push(Refresh::PlayPauseIcon);
            }
            PlayerEvent::Resumed => {
                self.playing = true;
                out.push(Refresh::PlayPauseIcon);
            }
            PlayerEvent::Tick { position } => {
                self.position = position;
                out.extend([Refresh::TimeSlider, Refresh::TimeLabels]);
            }
            PlayerEvent::TrackEnded => {
                self.reset();
                if self.cursor + 1 < self.queue.len() {
                    self.cursor += 1;
                    self.start_current();
                }
                if !self.loaded {
                    self.cursor = 0;
                    self.stop(out);
                }
            }
            PlayerEvent::Error(err) => {
                tracing::warn!(%err, "playback error");
                // A failed seek leaves the current song running.
                if !matches!(err, PlaybackError::Seek(_)) {
                    self.stop(out);
                }
            }
        }
    }
}

impl Playback for MusicPlayer {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        if self.loaded {
            if self.controller.send(PlayerCommand::Resume) {
                self.playing = true;
            }
        } else {
            self.start_current();
        }
    }

    fn pause(&mut self) {
        if !self.loaded {
            return;
        }
        if self.controller.send(PlayerCommand::Pause) {
            self.playing = false;
        }
    }

    fn seek(&mut self, seconds: u32) {
        if !self.loaded {
            return;
        }
        let target = Duration::from_secs(u64::from(seconds));
        tracing::debug!(seconds, "seek");
        if self.controller.send(PlayerCommand::Seek(target)) {
            self.position = target;
        }
    }

    fn now_playing(&self) -> Option<&Song> {
        if self.loaded {
            self.queue.get(self.cursor)
        } else {
            None
        }
    }

    fn time_passed(&self) -> String {
        fmt_duration(self.position)
    }

    fn time_remaining(&self) -> String {
        let length = self.now_playing().map_or(Duration::ZERO, |s| s.length);
        fmt_duration(length.saturating_sub(self.position))
    }

    fn queue(&self) -> &[Song] {
        &self.queue
    }

    fn drain(&mut self) -> Vec<Refresh> {
        let mut drained = Vec::new();
        while let Ok(ev) = self.events.try_recv() {
            drained.push(ev);
        }

        let mut out = Vec::new();
        for ev in drained {
            self.apply(ev, &mut out);
        }
        out
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        let _ = self.controller.send(PlayerCommand::Shutdown);
    }
}
