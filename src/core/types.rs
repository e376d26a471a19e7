//! Core data types shared between the playback service and the UI.
//!
//! These stay plain data: no GUI code, no audio code.

use std::path::PathBuf;
use std::time::Duration;

/// One playable audio file plus the metadata the player bar shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: String,

    /// Encoded image bytes (jpeg/png) of the first embedded picture.
    pub artwork: Option<Vec<u8>>,

    pub length: Duration,
}

impl Song {
    pub fn length_as_text(&self) -> String {
        fmt_duration(self.length)
    }
}

/// `m:ss`, whole seconds, truncated.
pub fn fmt_duration(d: Duration) -> String {
    let s = d.as_secs();
    let m = s / 60;
    let s = s % 60;
    format!("{m}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(fmt_duration(Duration::ZERO), "0:00");
        assert_eq!(fmt_duration(Duration::from_millis(9_999)), "0:09");
        assert_eq!(fmt_duration(Duration::from_secs(125)), "2:05");
        assert_eq!(fmt_duration(Duration::from_secs(3_600)), "60:00");
    }

    #[test]
    fn song_length_as_text() {
        let song = Song {
            path: PathBuf::from("a.mp3"),
            title: "A".into(),
            artist: "B".into(),
            album: "C".into(),
            artwork: None,
            length: Duration::from_secs(61),
        };
        assert_eq!(song.length_as_text(), "1:01");
    }
}
