//! gui/update/navigation.rs
//!
//! Sidebar selection + center view swaps.
//!
//! - Sidebar items are mutually exclusive: selecting one unselects the previous.
//! - Bottom-bar items open their view and leave the selection alone.
//! - A view that fails to load is logged; the center keeps what it had.

use iced::Task;

use super::super::nav::{NavKind, Selection};
use super::super::state::{Controller, Message};

pub(crate) fn select_view(state: &mut Controller, index: usize) -> Task<Message> {
    let Some(kind) = state.nav.get(index).map(|item| item.kind) else {
        tracing::warn!(index, "select_view: no such navigation item");
        return Task::none();
    };

    match kind {
        NavKind::SidebarItem => {
            if let Some(previous) = state.nav.iter_mut().find(|item| item.is_selected()) {
                previous.selection = Selection::Unselected;
            }
            state.nav[index].selection = Selection::Selected;
            load_view(state, index);
        }
        NavKind::BottomBarItem => load_view(state, index),
    }

    Task::none()
}

fn load_view(state: &mut Controller, index: usize) {
    let id = state.nav[index].id;

    match state.views.load(id) {
        Ok(view) => {
            tracing::debug!(id, ?view, "view loaded");
            state.center = view;
        }
        Err(err) => {
            tracing::error!(id, %err, "failed to load view; keeping the current one");
        }
    }
}
