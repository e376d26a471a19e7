//! gui/update/fake.rs
//! In-memory `Playback` for controller tests.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use crate::config::Config;
use crate::core::playback::{Playback, Refresh};
use crate::core::types::Song;
use crate::gui::state::Controller;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    Play,
    Pause,
    Seek(u32),
}

pub(crate) type Calls = Rc<RefCell<Vec<Call>>>;

#[derive(Default)]
pub(crate) struct FakePlayback {
    pub playing: bool,
    pub loaded: bool,
    pub queue: Vec<Song>,
    pub passed: String,
    pub remaining: String,
    pub pending: Vec<Refresh>,
    pub calls: Calls,
}

impl Playback for FakePlayback {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        self.calls.borrow_mut().push(Call::Play);
        self.playing = true;
        self.loaded = true;
    }

    fn pause(&mut self) {
        self.calls.borrow_mut().push(Call::Pause);
        self.playing = false;
    }

    fn seek(&mut self, seconds: u32) {
        self.calls.borrow_mut().push(Call::Seek(seconds));
    }

    fn now_playing(&self) -> Option<&Song> {
        if self.loaded { self.queue.first() } else { None }
    }

    fn time_passed(&self) -> String {
        self.passed.clone()
    }

    fn time_remaining(&self) -> String {
        self.remaining.clone()
    }

    fn queue(&self) -> &[Song] {
        &self.queue
    }

    fn drain(&mut self) -> Vec<Refresh> {
        std::mem::take(&mut self.pending)
    }
}

pub(crate) fn song(title: &str, secs: u64) -> Song {
    Song {
        path: PathBuf::from(format!("{title}.mp3")),
        title: title.into(),
        artist: "Some Artist".into(),
        album: "Some Album".into(),
        artwork: None,
        length: Duration::from_secs(secs),
    }
}

/// Controller over a fake; returns the shared call log.
pub(crate) fn controller(fake: FakePlayback) -> (Controller, Calls) {
    let calls = Rc::clone(&fake.calls);
    (Controller::new(Config::default(), Box::new(fake)), calls)
}
