//! gui/update/transport.rs
//! Play/pause + seek slider.
//!
//! The slider works in quarter-seconds; the playback service seeks in whole
//! seconds. Dragging only previews; the release commits. A change that never
//! gets a release (arrow keys, ctrl+wheel) is committed by the next quiet tick.

use iced::Task;

use super::super::state::{Controller, Message};

pub(crate) fn play_pause(state: &mut Controller) -> Task<Message> {
    if state.player.is_playing() {
        state.player.pause();
    } else {
        state.player.play();
    }

    Task::none()
}

/// Slider dragged: move the thumb, nothing else.
pub(crate) fn time_slider_changed(state: &mut Controller, value: f32) -> Task<Message> {
    let slider = &mut state.time_slider;
    slider.value = value.clamp(slider.min, slider.max.max(slider.min));
    slider.changing = true;
    slider.moved = true;

    Task::none()
}

/// Slider released: snap to a whole quarter-second and seek.
///
/// Only the changing -> not changing edge commits; a stray release is ignored.
pub(crate) fn time_slider_released(state: &mut Controller) -> Task<Message> {
    if state.time_slider.changing {
        commit_seek(state);
    }

    Task::none()
}

/// Ends the pending change: snap, seek, hand the thumb back to playback.
pub(crate) fn commit_seek(state: &mut Controller) {
    let slider = &mut state.time_slider;
    slider.changing = false;
    slider.moved = false;

    let quarter_seconds = slider.value.round().max(0.0) as u32;
    slider.value = quarter_seconds as f32;

    tracing::debug!(quarter_seconds, seconds = quarter_seconds / 4, "seek commit");
    state.player.seek(quarter_seconds / 4);
}

#[cfg(test)]
mod tests {
    use super::super::fake::{Call, FakePlayback, controller};
    use super::super::refresh::update_time_slider;
    use super::*;

    fn with_range(max: f32) -> (Controller, super::super::fake::Calls) {
        let (mut c, calls) = controller(FakePlayback::default());
        c.time_slider.max = max;
        (c, calls)
    }

    #[test]
    fn play_pause_toggles_on_service_state() {
        let (mut c, calls) = controller(FakePlayback::default());
        let _ = play_pause(&mut c);
        let _ = play_pause(&mut c);
        let _ = play_pause(&mut c);
        assert_eq!(*calls.borrow(), vec![Call::Play, Call::Pause, Call::Play]);
    }

    #[test]
    fn drag_end_rounds_snaps_and_seeks_whole_seconds() {
        for (dragged, snapped, seconds) in [
            (0.0, 0.0, 0),
            (3.4, 3.0, 0),
            (3.6, 4.0, 1),
            (41.5, 42.0, 10),
            (499.7, 500.0, 125),
        ] {
            let (mut c, calls) = with_range(500.0);
            let _ = time_slider_changed(&mut c, dragged);
            let _ = time_slider_released(&mut c);

            assert_eq!(c.time_slider.value, snapped, "dragged to {dragged}");
            assert_eq!(c.time_slider.value.fract(), 0.0);
            assert!(!c.time_slider.changing);
            assert_eq!(*calls.borrow(), vec![Call::Seek(seconds)]);
        }
    }

    #[test]
    fn only_the_last_drag_position_commits() {
        let (mut c, calls) = with_range(500.0);
        for v in [10.2, 80.0, 120.9] {
            let _ = time_slider_changed(&mut c, v);
        }
        assert!(calls.borrow().is_empty());

        let _ = time_slider_released(&mut c);
        assert_eq!(*calls.borrow(), vec![Call::Seek(30)]);
    }

    #[test]
    fn release_without_drag_does_not_seek() {
        let (mut c, calls) = with_range(500.0);
        c.time_slider.value = 17.3;
        let _ = time_slider_released(&mut c);
        assert!(calls.borrow().is_empty());
        assert_eq!(c.time_slider.value, 17.3);
    }

    #[test]
    fn nudge_without_release_commits_on_the_next_quiet_tick() {
        let (mut c, calls) = with_range(500.0);
        c.time_slider.value = 40.0;

        // Arrow-key nudge: change, no release.
        let _ = time_slider_changed(&mut c, 41.0);

        update_time_slider(&mut c);
        assert_eq!(c.time_slider.value, 41.0);
        assert!(calls.borrow().is_empty());

        update_time_slider(&mut c);
        assert!(!c.time_slider.changing);
        assert_eq!(*calls.borrow(), vec![Call::Seek(10)]);

        update_time_slider(&mut c);
        update_time_slider(&mut c);
        assert_eq!(c.time_slider.value, 43.0);
    }

    #[test]
    fn release_after_a_tick_commit_does_not_seek_twice() {
        let (mut c, calls) = with_range(500.0);
        let _ = time_slider_changed(&mut c, 80.0);
        update_time_slider(&mut c);
        update_time_slider(&mut c);
        let _ = time_slider_released(&mut c);

        assert_eq!(*calls.borrow(), vec![Call::Seek(20)]);
    }

    #[test]
    fn drag_is_clamped_to_the_range() {
        let (mut c, calls) = with_range(8.0);
        let _ = time_slider_changed(&mut c, 99.0);
        let _ = time_slider_released(&mut c);
        assert_eq!(c.time_slider.value, 8.0);
        assert_eq!(*calls.borrow(), vec![Call::Seek(2)]);
    }
}
