//! Center panel router.

use iced::widget::container;

use super::super::nav::CenterView;
use super::super::state::{Controller, Message};
use super::library::{build_albums_center, build_artists_center};
use super::now_playing::build_now_playing_center;
use super::settings::build_settings_center;
use super::songs::build_songs_center;

pub(crate) fn build_center_panel(state: &Controller) -> iced::widget::Container<'_, Message> {
    let inner: iced::Element<'_, Message> = match state.center {
        CenterView::Songs => build_songs_center(state).into(),
        CenterView::NowPlaying => build_now_playing_center(state).into(),
        CenterView::Artists => build_artists_center(state).into(),
        CenterView::Albums => build_albums_center(state).into(),
        CenterView::Settings => build_settings_center(state).into(),
    };

    container(inner).padding(12)
}
