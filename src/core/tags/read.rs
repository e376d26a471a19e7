//! core/tags/read.rs
//! Read ID3 tags + stream length from an audio file and turn them into a `Song`.
//!
//! - Missing or broken tags are not an error; the song falls back to the file stem.
//! - Only a file that cannot be opened fails.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use id3::frame::Content;
use id3::{Tag, TagLike};
use rodio::{Decoder, Source};

use super::art::art_from_tag;
use crate::core::error::SongError;
use crate::core::types::Song;

const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_ALBUM: &str = "Unknown Album";

pub fn read_song(path: &Path) -> Result<Song, SongError> {
    let file = File::open(path).map_err(|source| SongError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded_length = Decoder::new(BufReader::new(file))
        .ok()
        .and_then(|d| d.total_duration());

    let tag = Tag::read_from_path(path).ok();

    let title = tag
        .as_ref()
        .and_then(|t| t.title())
        .map(str::to_owned)
        .unwrap_or_else(|| filename_stem(path));

    let artist = tag
        .as_ref()
        .and_then(|t| t.artist())
        .map(str::to_owned)
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

    let album = tag
        .as_ref()
        .and_then(|t| t.album())
        .map(str::to_owned)
        .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());

    let artwork = tag.as_ref().and_then(art_from_tag);

    let length = decoded_length
        .or_else(|| tag.as_ref().and_then(tlen))
        .unwrap_or(Duration::ZERO);

    Ok(Song {
        path: path.to_path_buf(),
        title,
        artist,
        album,
        artwork,
        length,
    })
}

/// Load every path in order. Failures are logged and skipped.
pub fn read_songs(paths: &[PathBuf]) -> Vec<Song> {
    paths
        .iter()
        .filter_map(|p| match read_song(p) {
            Ok(song) => Some(song),
            Err(err) => {
                tracing::warn!(%err, "skipping song");
                None
            }
        })
        .collect()
}

/// TLEN holds the length in milliseconds as text.
fn tlen(tag: &Tag) -> Option<Duration> {
    let frame = tag.get("TLEN")?;
    match frame.content() {
        Content::Text(s) => s.trim().parse::<u64>().ok().map(Duration::from_millis),
        _ => None,
    }
}

fn filename_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown Title")
        .to_string()
}
