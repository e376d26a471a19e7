//! View constants (layout/sizing).

pub(crate) const PLAYER_BAR_H: f32 = 84.0;

pub(crate) const ICON: f32 = 20.0;
pub(crate) const PLAY_ICON: f32 = 28.0;

pub(crate) const NAV_ROW_H: f32 = 36.0;
pub(crate) const GLYPH_W: f32 = 26.0;

pub(crate) const HEADER_TEXT: f32 = 14.0;
pub(crate) const ROW_TEXT: f32 = 14.0;

pub(crate) const COVER_THUMB: f32 = 56.0;
pub(crate) const COVER_BIG: f32 = 260.0;

pub(crate) const TIME_LABEL_W: f32 = 48.0;
