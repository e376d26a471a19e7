//! Songs view (table of the play queue).

use iced::widget::{Column, column, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{Controller, Message};
use super::constants::{HEADER_TEXT, ROW_TEXT};

pub(crate) fn build_songs_center(state: &Controller) -> Column<'_, Message> {
    let queue = state.player.queue();
    let current = state.player.now_playing().map(|s| &s.path);

    let header = row![
        text("").size(HEADER_TEXT).width(Length::Fixed(24.0)),
        text("Title").size(HEADER_TEXT).width(Length::Fixed(260.0)),
        text("Artist").size(HEADER_TEXT).width(Length::Fixed(200.0)),
        text("Album").size(HEADER_TEXT).width(Length::Fixed(220.0)),
        text("Len").size(HEADER_TEXT).width(Length::Fixed(60.0)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut rows = column![header].spacing(4);

    if queue.is_empty() {
        rows = rows.push(
            text("No songs configured. Add paths to `songs` in config.toml.").size(ROW_TEXT),
        );
    }

    for song in queue {
        let marker = if current == Some(&song.path) { "▶" } else { "" };
        rows = rows.push(
            row![
                text(marker).size(ROW_TEXT).width(Length::Fixed(24.0)),
                text(&song.title).size(ROW_TEXT).width(Length::Fixed(260.0)),
                text(&song.artist).size(ROW_TEXT).width(Length::Fixed(200.0)),
                text(&song.album).size(ROW_TEXT).width(Length::Fixed(220.0)),
                text(song.length_as_text())
                    .size(ROW_TEXT)
                    .width(Length::Fixed(60.0)),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        );
    }

    column![
        text("Songs").size(18),
        scrollable(rows).height(Length::Fill),
    ]
    .spacing(12)
}
