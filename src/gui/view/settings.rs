//! Settings view (read-only summary of the loaded config).

use iced::Length;
use iced::widget::{Column, column, row, text};

use super::super::state::{Controller, Message};
use super::constants::ROW_TEXT;
use crate::config::CONFIG_ENV;

pub(crate) fn build_settings_center(state: &Controller) -> Column<'_, Message> {
    let cfg = &state.config;

    let source = cfg
        .source
        .as_ref()
        .map_or_else(|| "(built-in defaults)".to_string(), |p| p.display().to_string());
    let icons = cfg
        .icons_dir
        .as_ref()
        .map_or_else(|| "(text glyphs)".to_string(), |p| p.display().to_string());

    let line = |label: &'static str, value: String| {
        row![
            text(label).size(ROW_TEXT).width(Length::Fixed(160.0)),
            text(value).size(ROW_TEXT),
        ]
        .spacing(8)
    };

    column![
        text("Settings").size(18),
        line("Config file", source),
        line("Icons", icons),
        line("Songs", cfg.songs.len().to_string()),
        line("Sidebar expanded", format!("{} px", cfg.sidebar.expanded_width)),
        line("Sidebar collapsed", format!("{} px", cfg.sidebar.collapsed_width)),
        line("Slide", format!("{} ms", cfg.sidebar.slide_ms)),
        line("Playback poll", format!("{} ms", cfg.playback.poll_ms)),
        text(format!("Set {CONFIG_ENV} to use another config file.")).size(12),
    ]
    .spacing(10)
}
