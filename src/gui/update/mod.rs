//! gui/update/mod.rs
//! Update logic (router).
//! Mutates controller state in response to `Message` events.

use iced::Task;
use iced::time::Instant;

use super::state::{Controller, Message};

mod navigation;
mod refresh;
mod sidebar;
mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub(crate) fn update(state: &mut Controller, message: Message) -> Task<Message> {
    match message {
        Message::PollPlayback => refresh::poll_playback(state),
        Message::AnimationFrame(now) => sidebar::animation_frame(state, now),

        // Navigation
        Message::SelectView(i) => navigation::select_view(state, i),
        Message::SlideSidebar => sidebar::slide_sidebar(state, Instant::now()),

        // Transport
        Message::PlayPause => transport::play_pause(state),
        Message::TimeSliderChanged(v) => transport::time_slider_changed(state, v),
        Message::TimeSliderReleased => transport::time_slider_released(state),
    }
}
