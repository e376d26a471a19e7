//! gui/nav.rs
//! Navigation items and the views they open.
//!
//! Each item carries its role (`NavKind`) and state (`Selection`) as data;
//! the renderer derives styling from them, never the other way round.

use crate::core::error::ViewLoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavKind {
    /// Mutually exclusive: clicking one selects it.
    SidebarItem,
    /// Opens a view but never takes the selection.
    BottomBarItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    Unselected,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NavItem {
    /// View id handed to the `ViewLoader`.
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub kind: NavKind,
    pub selection: Selection,
}

impl NavItem {
    const fn new(id: &'static str, label: &'static str, glyph: &'static str, kind: NavKind) -> Self {
        Self {
            id,
            label,
            glyph,
            kind,
            selection: Selection::Unselected,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selection == Selection::Selected
    }
}

/// Sidebar contents, top to bottom. The first item starts selected.
pub(crate) fn default_items() -> Vec<NavItem> {
    let mut items = vec![
        NavItem::new("songs", "Songs", "♫", NavKind::SidebarItem),
        NavItem::new("nowPlaying", "Now Playing", "◉", NavKind::SidebarItem),
        NavItem::new("artists", "Artists", "☺", NavKind::SidebarItem),
        NavItem::new("albums", "Albums", "▣", NavKind::SidebarItem),
        NavItem::new("settings", "Settings", "⚙", NavKind::BottomBarItem),
    ];
    items[0].selection = Selection::Selected;
    items
}

/// What the center region is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CenterView {
    Songs,
    NowPlaying,
    Artists,
    Albums,
    Settings,
}

/// Resolves a navigation id to the view it opens.
pub(crate) trait ViewLoader {
    fn load(&self, id: &str) -> Result<CenterView, ViewLoadError>;
}

/// The views compiled into the app.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BuiltinViews;

impl ViewLoader for BuiltinViews {
    fn load(&self, id: &str) -> Result<CenterView, ViewLoadError> {
        match id {
            "songs" => Ok(CenterView::Songs),
            "nowPlaying" => Ok(CenterView::NowPlaying),
            "artists" => Ok(CenterView::Artists),
            "albums" => Ok(CenterView::Albums),
            "settings" => Ok(CenterView::Settings),
            other => Err(ViewLoadError::UnknownView(other.to_string())),
        }
    }
}
