//! Reusable small widgets/helpers used across view modules.

use iced::widget::{column, container, image, text};
use iced::{Alignment, Element, Length};

use super::super::icons::{Icon, IconSet};
use super::super::state::Message;

pub(crate) fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(size * 0.4), text("cover").size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fixed(size))
    .center_y(Length::Fixed(size))
}

/// If `handle` exists, show it; otherwise show the placeholder.
pub(crate) fn cover_thumb(
    handle: Option<&iced::widget::image::Handle>,
    size: f32,
) -> Element<'static, Message> {
    match handle {
        Some(h) => image(h.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => cover_placeholder(size).into(),
    }
}

/// Image icon when the icon set has one, text glyph otherwise.
pub(crate) fn icon(icons: &IconSet, which: Icon, size: f32) -> Element<'static, Message> {
    match icons.handle(which) {
        Some(h) => image(h.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => text(which.glyph()).size(size).into(),
    }
}
