//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - controller state ('Controller') + messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (playback polling, animation frames)
//! - navigation, icons, tweens

pub(crate) mod anim;
pub(crate) mod icons;
pub(crate) mod nav;
pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Controller;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
