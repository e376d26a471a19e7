//! gui/anim.rs
//! Timed tweens.
//!
//! A [`Tween`] only knows time: it maps "now" to an eased fraction in `0..=1`
//! and tells the caller when it is done. What the fraction means (a width, an
//! opacity) is up to the `on_frame` callback.

use std::time::Duration;

use iced::time::Instant;

pub(crate) type Easing = fn(f32) -> f32;

pub(crate) fn linear(t: f32) -> f32 {
    t
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Collapse,
    Expand,
}

/// The two fixed endpoints a panel slides between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Widths {
    pub collapsed: f32,
    pub expanded: f32,
}

/// Panel width after `frac` of a slide in `direction`.
pub(crate) fn width_at_fraction(widths: Widths, direction: Direction, frac: f32) -> f32 {
    let frac = frac.clamp(0.0, 1.0);
    let span = widths.expanded - widths.collapsed;
    match direction {
        Direction::Collapse => widths.collapsed + span * (1.0 - frac),
        Direction::Expand => widths.collapsed + span * frac,
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Tween {
    duration: Duration,
    easing: Easing,
    started_at: Option<Instant>,
}

impl Tween {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            started_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// No-op while running; a second start does not reset the clock.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Advance to `now`.
    ///
    /// `on_frame` gets the eased fraction. Once the duration has elapsed the
    /// last frame is exactly `easing(1.0)`, then `on_complete` runs once and
    /// the tween goes idle. An idle tween calls nothing.
    pub fn step(&mut self, now: Instant, on_frame: impl FnOnce(f32), on_complete: impl FnOnce()) {
        let Some(started_at) = self.started_at else {
            return;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let raw = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        on_frame((self.easing)(raw));

        if raw >= 1.0 {
            self.started_at = None;
            on_complete();
        }
    }
}
