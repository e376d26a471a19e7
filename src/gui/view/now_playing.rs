//! Now Playing view (big cover + details).

use iced::Alignment;
use iced::widget::{Column, column, text};

use super::super::state::{Controller, Message};
use super::constants::COVER_BIG;
use super::widgets::cover_thumb;

pub(crate) fn build_now_playing_center(state: &Controller) -> Column<'_, Message> {
    let np = &state.now_playing;

    column![
        text("Now Playing").size(18),
        cover_thumb(np.artwork.as_ref(), COVER_BIG),
        text(&np.title).size(22),
        text(&np.artist).size(16),
        text(format!("{} / {}", state.time_passed, state.time_remaining)).size(13),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
}
