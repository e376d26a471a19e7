//! gui/update/refresh.rs
//! Playback state -> widget properties.
//!
//! Each projection reads the playback service and writes exactly one widget.
//! They run when the service pushes a `Refresh`; nothing here polls state on
//! its own.

use iced::Task;
use iced::widget::image::Handle;

use super::super::icons::Icon;
use super::super::state::{Controller, Message, NowPlayingButton};
use super::transport::commit_seek;
use crate::core::playback::Refresh;

pub(crate) fn poll_playback(state: &mut Controller) -> Task<Message> {
    for refresh in state.player.drain() {
        apply(state, refresh);
    }

    Task::none()
}

pub(crate) fn apply(state: &mut Controller, refresh: Refresh) {
    match refresh {
        Refresh::PlayPauseIcon => update_play_pause_icon(state),
        Refresh::NowPlaying => update_now_playing_button(state),
        Refresh::InitTimeSlider => initialize_time_slider(state),
        Refresh::TimeSlider => update_time_slider(state),
        Refresh::InitTimeLabels => initialize_time_labels(state),
        Refresh::TimeLabels => update_time_labels(state),
    }
}

/// The button shows what it will do: pause while playing, play otherwise.
pub(crate) fn update_play_pause_icon(state: &mut Controller) {
    state.play_pause_icon = if state.player.is_playing() {
        Icon::Pause
    } else {
        Icon::Play
    };
}

pub(crate) fn update_now_playing_button(state: &mut Controller) {
    state.now_playing = match state.player.now_playing() {
        Some(song) => NowPlayingButton {
            title: song.title.clone(),
            artist: song.artist.clone(),
            artwork: song.artwork.clone().map(Handle::from_bytes),
        },
        None => NowPlayingButton::default(),
    };
}

/// Range `[0, length_secs * 4]`, thumb at 0, one unit per increment.
pub(crate) fn initialize_time_slider(state: &mut Controller) {
    let length_secs = state
        .player
        .now_playing()
        .map_or(0, |song| song.length.as_secs());

    let slider = &mut state.time_slider;
    slider.min = 0.0;
    slider.max = (length_secs * 4) as f32;
    slider.value = 0.0;
    slider.block_increment = 1.0;
    slider.changing = false;
    slider.moved = false;
}

/// One quarter-second forward. A change still in motion wins over the tick;
/// one that went quiet since the last tick is committed instead.
pub(crate) fn update_time_slider(state: &mut Controller) {
    let slider = &mut state.time_slider;
    if slider.changing {
        if !std::mem::take(&mut slider.moved) {
            commit_seek(state);
        }
        return;
    }
    slider.increment();
}

pub(crate) fn initialize_time_labels(state: &mut Controller) {
    state.time_passed = "0:00".into();
    state.time_remaining = state
        .player
        .now_playing()
        .map_or_else(|| "0:00".into(), |song| song.length_as_text());
}

pub(crate) fn update_time_labels(state: &mut Controller) {
    state.time_passed = state.player.time_passed();
    state.time_remaining = state.player.time_remaining();
}

#[cfg(test)]
mod tests {
    use super::super::fake::{FakePlayback, controller, song};
    use super::*;

    fn loaded(secs: u64) -> Controller {
        controller(FakePlayback {
            loaded: true,
            queue: vec![song("Track", secs)],
            ..FakePlayback::default()
        })
        .0
    }

    #[test]
    fn play_pause_icon_shows_the_available_action() {
        let (mut c, _) = controller(FakePlayback::default());

        c.player.play();
        update_play_pause_icon(&mut c);
        assert_eq!(c.play_pause_icon, Icon::Pause);

        c.player.pause();
        update_play_pause_icon(&mut c);
        assert_eq!(c.play_pause_icon, Icon::Play);
    }

    #[test]
    fn slider_range_is_quarter_seconds() {
        let mut c = loaded(125);
        c.time_slider.value = 33.0;
        initialize_time_slider(&mut c);

        assert_eq!(c.time_slider.min, 0.0);
        assert_eq!(c.time_slider.max, 500.0);
        assert_eq!(c.time_slider.value, 0.0);
        assert_eq!(c.time_slider.block_increment, 1.0);
    }

    #[test]
    fn slider_ticks_one_unit_and_stops_at_max() {
        let mut c = loaded(1);
        initialize_time_slider(&mut c);
        for _ in 0..3 {
            update_time_slider(&mut c);
        }
        assert_eq!(c.time_slider.value, 3.0);

        for _ in 0..10 {
            update_time_slider(&mut c);
        }
        assert_eq!(c.time_slider.value, 4.0);
    }

    #[test]
    fn slider_tick_does_not_fight_a_drag() {
        let mut c = loaded(10);
        initialize_time_slider(&mut c);
        c.time_slider.value = 12.5;
        c.time_slider.changing = true;
        c.time_slider.moved = true;
        update_time_slider(&mut c);
        assert_eq!(c.time_slider.value, 12.5);
        assert!(c.time_slider.changing);
    }

    #[test]
    fn ended_song_clears_the_player_bar() {
        let (mut c, _) = controller(FakePlayback {
            pending: vec![
                Refresh::PlayPauseIcon,
                Refresh::NowPlaying,
                Refresh::InitTimeSlider,
                Refresh::InitTimeLabels,
            ],
            ..FakePlayback::default()
        });
        c.now_playing.title = "Finished Song".into();
        c.play_pause_icon = Icon::Pause;
        c.time_slider.max = 40.0;
        c.time_slider.value = 40.0;
        c.time_remaining = "0:00".into();
        c.time_passed = "0:10".into();

        let _ = poll_playback(&mut c);
        assert_eq!(c.now_playing.title, "Nothing playing");
        assert_eq!(c.play_pause_icon, Icon::Play);
        assert_eq!((c.time_slider.max, c.time_slider.value), (0.0, 0.0));
        assert_eq!(c.time_passed, "0:00");
    }

    #[test]
    fn now_playing_button_mirrors_the_song() {
        let mut c = loaded(10);
        update_now_playing_button(&mut c);
        assert_eq!(c.now_playing.title, "Track");
        assert_eq!(c.now_playing.artist, "Some Artist");
        assert!(c.now_playing.artwork.is_none());
    }

    #[test]
    fn now_playing_button_resets_when_nothing_is_loaded() {
        let (mut c, _) = controller(FakePlayback::default());
        c.now_playing.title = "stale".into();
        update_now_playing_button(&mut c);
        assert_eq!(c.now_playing.title, "Nothing playing");
    }

    #[test]
    fn time_labels_initialize_then_follow_the_service() {
        let (mut c, _) = controller(FakePlayback {
            loaded: true,
            queue: vec![song("Track", 125)],
            passed: "0:42".into(),
            remaining: "1:23".into(),
            ..FakePlayback::default()
        });

        initialize_time_labels(&mut c);
        assert_eq!((c.time_passed.as_str(), c.time_remaining.as_str()), ("0:00", "2:05"));

        update_time_labels(&mut c);
        assert_eq!((c.time_passed.as_str(), c.time_remaining.as_str()), ("0:42", "1:23"));
    }

    #[test]
    fn poll_applies_pushed_refreshes_in_order() {
        let (mut c, _) = controller(FakePlayback {
            playing: true,
            loaded: true,
            queue: vec![song("Track", 2)],
            pending: vec![
                Refresh::PlayPauseIcon,
                Refresh::NowPlaying,
                Refresh::InitTimeSlider,
                Refresh::InitTimeLabels,
                Refresh::TimeSlider,
            ],
            ..FakePlayback::default()
        });

        let _ = poll_playback(&mut c);
        assert_eq!(c.play_pause_icon, Icon::Pause);
        assert_eq!(c.now_playing.title, "Track");
        assert_eq!(c.time_slider.max, 8.0);
        assert_eq!(c.time_slider.value, 1.0);
        assert_eq!(c.time_remaining, "0:02");
    }
}
