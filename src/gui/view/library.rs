//! Artists + Albums views: the queue grouped by one field.

use std::collections::BTreeMap;

use iced::Length;
use iced::widget::{Column, column, scrollable, text};

use super::super::state::{Controller, Message};
use super::constants::ROW_TEXT;
use crate::core::types::Song;

pub(crate) fn build_artists_center(state: &Controller) -> Column<'_, Message> {
    grouped("Artists", state.player.queue(), |s| s.artist.as_str())
}

pub(crate) fn build_albums_center(state: &Controller) -> Column<'_, Message> {
    grouped("Albums", state.player.queue(), |s| s.album.as_str())
}

fn grouped<'a>(
    title: &'a str,
    songs: &'a [Song],
    key: impl Fn(&'a Song) -> &'a str,
) -> Column<'a, Message> {
    let mut groups: BTreeMap<&str, Vec<&Song>> = BTreeMap::new();
    for song in songs {
        groups.entry(key(song)).or_default().push(song);
    }

    let mut list = column![].spacing(10);
    for (name, members) in groups {
        let mut block = column![text(name).size(16)].spacing(2);
        for song in members {
            let line = format!("   {}  ({})", song.title, song.length_as_text());
            block = block.push(text(line).size(ROW_TEXT));
        }
        list = list.push(block);
    }

    column![text(title).size(18), scrollable(list).height(Length::Fill)].spacing(12)
}
