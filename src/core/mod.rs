//! core/mod.rs
//!
//! Everything below the GUI:
//! - `Song` data + formatting
//! - building songs from files (tags)
//! - the playback service the controller talks to
//!
//! No iced imports in here.

pub mod error;
pub mod playback;
pub mod tags;
pub mod types;
