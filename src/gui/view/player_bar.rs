//! Bottom player bar.
//!
//! Renders the widget properties the controller keeps in sync; emits only
//! Messages (no rodio, no playback queries).

use iced::widget::{button, column, container, row, slider, text};
use iced::{Alignment, Length};

use super::super::state::{Controller, Message};
use super::constants::{COVER_THUMB, PLAY_ICON, TIME_LABEL_W};
use super::widgets::{cover_thumb, icon};

pub(crate) fn build_player_bar(state: &Controller) -> iced::widget::Container<'_, Message> {
    let play_btn = button(icon(&state.icons, state.play_pause_icon, PLAY_ICON))
        .on_press(Message::PlayPause)
        .style(button::text);

    // Now-playing button opens the Now Playing view.
    let now_playing_content = row![
        cover_thumb(state.now_playing.artwork.as_ref(), COVER_THUMB),
        column![
            text(&state.now_playing.title).size(15),
            text(&state.now_playing.artist).size(12),
        ]
        .spacing(4),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut now_playing_btn = button(now_playing_content)
        .style(button::text)
        .width(Length::Fixed(280.0));
    if let Some(i) = state.nav.iter().position(|item| item.id == "nowPlaying") {
        now_playing_btn = now_playing_btn.on_press(Message::SelectView(i));
    }

    // iced needs start < end; with no song loaded, freeze it at 0..=1.
    let ts = &state.time_slider;
    let (max, value) = if ts.max > ts.min {
        (ts.max, ts.value.clamp(ts.min, ts.max))
    } else {
        (ts.min + 1.0, ts.min)
    };
    let seek = slider(ts.min..=max, value, Message::TimeSliderChanged)
        .on_release(Message::TimeSliderReleased)
        .step(0.01_f32)
        .width(Length::Fill);

    let time_row = row![
        text(&state.time_passed)
            .size(12)
            .width(Length::Fixed(TIME_LABEL_W)),
        seek,
        text(&state.time_remaining)
            .size(12)
            .width(Length::Fixed(TIME_LABEL_W)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let bar = row![play_btn, now_playing_btn, time_row]
        .spacing(16)
        .align_y(Alignment::Center);

    container(bar).padding(12)
}
