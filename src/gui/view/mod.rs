//! GUI renderer (reads state, produces widgets; no mutation).

mod center;
mod constants;
mod library;
mod now_playing;
mod player_bar;
mod settings;
mod sidebar;
mod songs;
mod widgets;

use iced::Length;
use iced::widget::{Column, column, row};

use super::state::{Controller, Message};
use constants::PLAYER_BAR_H;

pub(crate) fn view(state: &Controller) -> Column<'_, Message> {
    let sidebar = sidebar::build_sidebar(state);
    let main = center::build_center_panel(state).width(Length::Fill);
    let player = player_bar::build_player_bar(state).height(Length::Fixed(PLAYER_BAR_H));

    let body = row![sidebar, main].spacing(12).height(Length::Fill);
    column![body, player].spacing(8)
}
