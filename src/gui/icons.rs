//! gui/icons.rs
//! Logical icon names -> image resources.
//!
//! Icons are PNGs named `<name>Icon.png` in the configured icon folder.
//! Any icon without a file renders as a text glyph instead.

use std::collections::HashMap;
use std::path::Path;

use iced::widget::image::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Icon {
    Play,
    Pause,
    LeftArrow,
    RightArrow,
}

impl Icon {
    pub const ALL: [Icon; 4] = [Icon::Play, Icon::Pause, Icon::LeftArrow, Icon::RightArrow];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Play => "play",
            Icon::Pause => "pause",
            Icon::LeftArrow => "leftArrow",
            Icon::RightArrow => "rightArrow",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}Icon.png", self.name())
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Play => "▶",
            Icon::Pause => "⏸",
            Icon::LeftArrow => "«",
            Icon::RightArrow => "»",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct IconSet {
    handles: HashMap<Icon, Handle>,
}

impl IconSet {
    pub fn load(dir: Option<&Path>) -> Self {
        let Some(dir) = dir else {
            return Self::default();
        };

        let mut handles = HashMap::new();
        for icon in Icon::ALL {
            let path = dir.join(icon.file_name());
            if path.is_file() {
                handles.insert(icon, Handle::from_path(path));
            } else {
                tracing::debug!(icon = icon.name(), path = %path.display(), "icon missing; using glyph");
            }
        }

        Self { handles }
    }

    pub fn handle(&self, icon: Icon) -> Option<&Handle> {
        self.handles.get(&icon)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn file_names_follow_logical_names() {
        assert_eq!(Icon::Pause.file_name(), "pauseIcon.png");
        assert_eq!(Icon::RightArrow.file_name(), "rightArrowIcon.png");
    }

    #[test]
    fn only_present_files_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("playIcon.png")).unwrap();

        let set = IconSet::load(Some(dir.path()));
        assert!(set.handle(Icon::Play).is_some());
        assert!(set.handle(Icon::Pause).is_none());
    }

    #[test]
    fn no_folder_means_glyphs_only() {
        let set = IconSet::load(None);
        assert!(Icon::ALL.iter().all(|&i| set.handle(i).is_none()));
    }
}
