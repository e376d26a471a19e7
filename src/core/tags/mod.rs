//! core/tags/mod.rs
//!
//! Build `Song`s from audio files on disk.
//! Public API:
//! - [`read_song`] reads title/artist/artwork/length for one file.
//! - [`read_songs`] does the same for a list, skipping files that fail.

mod art;
mod read;

pub use read::{read_song, read_songs};
