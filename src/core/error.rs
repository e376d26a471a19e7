//! core/error.rs
//! Error enums for the non-GUI layer.

use std::path::PathBuf;

use thiserror::Error;

/// Resolving a center view by its navigation id failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewLoadError {
    #[error("no view registered for id `{0}`")]
    UnknownView(String),
}

/// Building a `Song` from a file on disk failed.
#[derive(Error, Debug)]
pub enum SongError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone)]
pub enum PlaybackError {
    #[error("audio output device error: {0}")]
    Device(String),

    #[error("failed to open file: {0}")]
    Open(String),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("seek failed: {0}")]
    Seek(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
