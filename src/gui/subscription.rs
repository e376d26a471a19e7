//! gui/subscription.rs
//! - Poll playback refreshes on a fixed timer.
//! - Request redraw frames only while the sidebar is sliding.

use iced::{Subscription, time, window};

use super::state::{Controller, Message};

pub(crate) fn subscription(state: &Controller) -> Subscription<Message> {
    let poll = time::every(state.poll_interval()).map(|_| Message::PollPlayback);

    if state.sidebar.is_animating() {
        Subscription::batch([poll, window::frames().map(Message::AnimationFrame)])
    } else {
        poll
    }
}
