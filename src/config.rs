//! config.rs
//! User config file (`config.toml`).
//!
//! Location: `$ARIA_CONFIG`, else `<config dir>/aria/config.toml`.
//! A missing file means defaults. A broken file is logged, then defaults.
//!
//! ```toml
//! songs = ["/music/a.mp3", "/music/b.mp3"]
//! icons_dir = "/usr/share/aria/icons"
//!
//! [sidebar]
//! expanded_width = 250.0
//! collapsed_width = 50.0
//! slide_ms = 250
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::error::ConfigError;

pub(crate) const CONFIG_ENV: &str = "ARIA_CONFIG";
const APP_DIR: &str = "aria";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SidebarConfig {
    pub expanded_width: f32,
    pub collapsed_width: f32,
    pub slide_ms: u64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            expanded_width: 250.0,
            collapsed_width: 50.0,
            slide_ms: 250,
        }
    }
}

impl SidebarConfig {
    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.slide_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct PlaybackConfig {
    /// How often the GUI drains playback events.
    pub poll_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { poll_ms: 50 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub songs: Vec<PathBuf>,
    pub icons_dir: Option<PathBuf>,
    pub sidebar: SidebarConfig,
    pub playback: PlaybackConfig,

    /// Where this config came from (None = built-in defaults).
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

pub(crate) fn config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    dirs::config_dir().map(|d| d.join(APP_DIR).join(FILE_NAME))
}

/// Load from the default location, never failing.
pub(crate) fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("no config directory on this platform; using defaults");
        return Config::default();
    };

    match load_from(&path) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::error!(%err, "config ignored");
            Config::default()
        }
    }
}

pub(crate) fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut cfg: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    cfg.source = Some(path.to_path_buf());
    Ok(cfg.sanitized())
}

impl Config {
    /// Widths must satisfy `0 < collapsed < expanded`; anything else falls back.
    fn sanitized(mut self) -> Self {
        let s = &self.sidebar;
        if !(s.collapsed_width > 0.0 && s.collapsed_width < s.expanded_width) {
            tracing::warn!(
                collapsed = s.collapsed_width,
                expanded = s.expanded_width,
                "bad sidebar widths; using defaults"
            );
            let slide_ms = s.slide_ms;
            self.sidebar = SidebarConfig {
                slide_ms,
                ..SidebarConfig::default()
            };
        }
        if self.playback.poll_ms == 0 {
            self.playback.poll_ms = PlaybackConfig::default().poll_ms;
        }
        self
    }
}
