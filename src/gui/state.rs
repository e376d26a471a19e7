//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::time::Duration;

use iced::time::Instant;
use iced::widget::image::Handle;

use super::anim::{Tween, Widths, linear};
use super::icons::{Icon, IconSet};
use super::nav::{BuiltinViews, CenterView, NavItem, ViewLoader, default_items};
use crate::config::Config;
use crate::core::playback::Playback;

/// Collapsible side panel.
///
/// COLLAPSED / EXPANDED are `expanded` with both tweens idle;
/// COLLAPSING / EXPANDING are the matching tween running.
#[derive(Debug, Clone)]
pub(crate) struct SidebarPanel {
    pub expanded: bool,
    pub width: f32,
    pub widths: Widths,
    pub label_opacity: f32,
    pub toggle_icon: Icon,

    pub collapse: Tween,
    pub expand: Tween,
}

impl SidebarPanel {
    pub fn new(widths: Widths, slide: Duration) -> Self {
        Self {
            expanded: true,
            width: widths.expanded,
            widths,
            label_opacity: 1.0,
            toggle_icon: Icon::LeftArrow,
            collapse: Tween::new(slide, linear),
            expand: Tween::new(slide, linear),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.collapse.is_running() || self.expand.is_running()
    }
}

/// Seek slider model. Values are quarter-seconds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TimeSlider {
    pub min: f32,
    pub max: f32,
    pub value: f32,
    pub block_increment: f32,
    /// True while the user is dragging.
    pub changing: bool,
    /// A change arrived since the last playback tick. Keyboard and wheel
    /// nudges never send a release, so a tick with no fresh change commits.
    pub moved: bool,
}

impl Default for TimeSlider {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            value: 0.0,
            block_increment: 1.0,
            changing: false,
            moved: false,
        }
    }
}

impl TimeSlider {
    pub fn increment(&mut self) {
        self.value = (self.value + self.block_increment).min(self.max);
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NowPlayingButton {
    pub title: String,
    pub artist: String,
    pub artwork: Option<Handle>,
}

impl Default for NowPlayingButton {
    fn default() -> Self {
        Self {
            title: "Nothing playing".into(),
            artist: String::new(),
            artwork: None,
        }
    }
}

/// App state: the controller plus every widget property it projects into.
pub(crate) struct Controller {
    pub player: Box<dyn Playback>,
    pub views: Box<dyn ViewLoader>,
    pub icons: IconSet,
    pub config: Config,

    // Navigation
    pub nav: Vec<NavItem>,
    pub center: CenterView,
    pub sidebar: SidebarPanel,

    // Player bar
    pub play_pause_icon: Icon,
    pub now_playing: NowPlayingButton,
    pub time_slider: TimeSlider,
    pub time_passed: String,
    pub time_remaining: String,
}

impl Controller {
    pub fn new(config: Config, player: Box<dyn Playback>) -> Self {
        Self::with_views(config, player, Box::new(BuiltinViews))
    }

    pub fn with_views(config: Config, player: Box<dyn Playback>, views: Box<dyn ViewLoader>) -> Self {
        let widths = Widths {
            collapsed: config.sidebar.collapsed_width,
            expanded: config.sidebar.expanded_width,
        };
        let sidebar = SidebarPanel::new(widths, config.sidebar.slide_duration());
        let icons = IconSet::load(config.icons_dir.as_deref());

        Self {
            player,
            views,
            icons,
            config,

            nav: default_items(),
            center: CenterView::Songs,
            sidebar,

            play_pause_icon: Icon::Play,
            now_playing: NowPlayingButton::default(),
            time_slider: TimeSlider::default(),
            time_passed: "0:00".into(),
            time_remaining: "0:00".into(),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.config.playback.poll_ms)
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Periodic: drain refreshes pushed by the playback service.
    PollPlayback,
    /// A redraw frame while the sidebar is sliding.
    AnimationFrame(Instant),

    // Navigation
    SelectView(usize),
    SlideSidebar,

    // Transport
    PlayPause,
    /// Slider dragged (preview only).
    TimeSliderChanged(f32),
    /// Slider released (commit).
    TimeSliderReleased,
}
