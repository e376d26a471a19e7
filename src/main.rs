//! Aria
//!
//! # What this program is
//! A small desktop music player (built with the `iced` GUI library): a
//! collapsible sidebar, a center view picked from the sidebar, and a player bar
//! with play/pause, the now-playing song and a seek slider.
//!
//! # How the pieces talk
//! - `Controller` = all GUI state, including a boxed `Playback` service
//! - `Message` = something happened (click, drag, release, timer, frame)
//! - `update(state, message)` = the controller: reacts, sends playback commands
//! - `view(state)` = draws the widget model
//!
//! The playback service never touches widgets. It queues `Refresh` notices
//! ("the now-playing song changed", "one tick passed"); a timer subscription
//! drains them and the controller re-projects the matching widget.
//!
//! # Concurrency model
//! - iced processes messages one at a time on the UI thread.
//! - rodio lives on its own engine thread; commands go over a channel and
//!   events come back over another. Nothing on the UI thread blocks.
//!
//! # Config
//! See `config.rs`. Songs to play are listed there; without any the player
//! starts empty.

mod config;
mod core;
mod gui;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::playback::MusicPlayer;
use crate::core::tags::read_songs;
use crate::gui::Controller;

/// Engine heartbeat. The seek slider moves one quarter-second unit per tick,
/// so this must stay at 250 ms.
const TICK: Duration = Duration::from_millis(250);

const DEFAULT_LOG_FILTER: &str = "aria=info";

fn main() -> iced::Result {
    init_logging();

    let config = config::load();
    tracing::info!(
        songs = config.songs.len(),
        source = ?config.source,
        "starting"
    );

    iced::application(move || boot(config.clone()), gui::update, gui::view)
        .title("Aria")
        .subscription(gui::subscription)
        .run()
}

fn boot(config: Config) -> Controller {
    let songs = read_songs(&config.songs);
    tracing::info!(loaded = songs.len(), "songs ready");

    let player = MusicPlayer::start(songs, TICK);
    Controller::new(config, Box::new(player))
}

/// `RUST_LOG` wins; otherwise info for this crate only. Logs go to stderr.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
