//! Left sidebar: navigation items, bottom bar, slide toggle.
//!
//! The container is clipped to the animated width, so labels that have not
//! been hidden yet are cut off rather than wrapping.

use iced::widget::{Column, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::super::nav::{NavItem, NavKind};
use super::super::state::{Controller, Message};
use super::constants::{GLYPH_W, ICON, NAV_ROW_H, ROW_TEXT};
use super::widgets::icon;

pub(crate) fn build_sidebar(state: &Controller) -> iced::widget::Container<'_, Message> {
    let panel = &state.sidebar;
    let show_labels = panel.label_opacity > 0.0;

    let toggle = button(icon(&state.icons, panel.toggle_icon, ICON))
        .on_press(Message::SlideSidebar)
        .style(button::text);

    let mut items = Column::new().spacing(4);
    let mut bottom = Column::new().spacing(4);

    for (i, item) in state.nav.iter().enumerate() {
        let entry = nav_entry(item, i, show_labels);
        match item.kind {
            NavKind::SidebarItem => items = items.push(entry),
            NavKind::BottomBarItem => bottom = bottom.push(entry),
        }
    }

    let col = column![
        toggle,
        container(items).height(Length::Fill),
        bottom,
    ]
    .spacing(12);

    container(col)
        .padding(8)
        .width(Length::Fixed(panel.width))
        .height(Length::Fill)
        .clip(true)
}

fn nav_entry(item: &NavItem, index: usize, show_labels: bool) -> Element<'_, Message> {
    let glyph = text(item.glyph).size(ROW_TEXT).width(Length::Fixed(GLYPH_W));

    let content = if show_labels {
        row![glyph, text(item.label).size(ROW_TEXT)]
    } else {
        row![glyph]
    };
    let content = content.spacing(8).align_y(Alignment::Center);

    let style = if item.is_selected() {
        button::primary
    } else {
        button::text
    };

    button(content)
        .on_press(Message::SelectView(index))
        .style(style)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_ROW_H))
        .into()
}
