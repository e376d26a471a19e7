//! gui/update/sidebar.rs
//! Sidebar collapse/expand.
//!
//! States: EXPANDED -> COLLAPSING -> COLLAPSED -> EXPANDING -> EXPANDED.
//! - Collapsing hides labels before the first frame.
//! - Expanding shows labels only once the width is back.
//! - While either tween runs, `slide_sidebar` does nothing.

use iced::Task;
use iced::time::Instant;

use super::super::anim::{Direction, width_at_fraction};
use super::super::icons::Icon;
use super::super::state::{Controller, Message, SidebarPanel};

pub(crate) fn slide_sidebar(state: &mut Controller, now: Instant) -> Task<Message> {
    let panel = &mut state.sidebar;

    if panel.is_animating() {
        tracing::trace!("sidebar already sliding; ignored");
        return Task::none();
    }

    if panel.expanded {
        panel.label_opacity = 0.0;
        panel.collapse.start(now);
    } else {
        panel.expand.start(now);
    }

    Task::none()
}

pub(crate) fn animation_frame(state: &mut Controller, now: Instant) -> Task<Message> {
    let SidebarPanel {
        expanded,
        width,
        widths,
        label_opacity,
        toggle_icon,
        collapse,
        expand,
    } = &mut state.sidebar;
    let widths = *widths;

    collapse.step(
        now,
        |frac| *width = width_at_fraction(widths, Direction::Collapse, frac),
        || flip_direction(expanded, toggle_icon),
    );

    expand.step(
        now,
        |frac| *width = width_at_fraction(widths, Direction::Expand, frac),
        || {
            *label_opacity = 1.0;
            flip_direction(expanded, toggle_icon);
        },
    );

    Task::none()
}

fn flip_direction(expanded: &mut bool, toggle_icon: &mut Icon) {
    *expanded = !*expanded;
    *toggle_icon = if *expanded {
        Icon::LeftArrow
    } else {
        Icon::RightArrow
    };
    tracing::debug!(expanded = *expanded, "sidebar slide finished");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::fake::{FakePlayback, controller};
    use super::*;

    const SLIDE: Duration = Duration::from_millis(250);

    fn after(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn collapse_then_expand_reach_the_constants() {
        let (mut c, _) = controller(FakePlayback::default());
        let t0 = Instant::now();

        let _ = slide_sidebar(&mut c, t0);
        assert!(c.sidebar.collapse.is_running());
        // Labels are hidden before the width moves.
        assert_eq!(c.sidebar.label_opacity, 0.0);
        assert_eq!(c.sidebar.width, 250.0);

        let _ = animation_frame(&mut c, t0 + SLIDE / 2);
        assert!((c.sidebar.width - 150.0).abs() < 0.01);
        assert!(c.sidebar.expanded);

        let _ = animation_frame(&mut c, t0 + SLIDE);
        assert_eq!(c.sidebar.width, 50.0);
        assert_eq!(c.sidebar.label_opacity, 0.0);
        assert!(!c.sidebar.expanded);
        assert_eq!(c.sidebar.toggle_icon, Icon::RightArrow);
        assert!(!c.sidebar.is_animating());

        let t1 = after(t0, 1_000);
        let _ = slide_sidebar(&mut c, t1);
        assert!(c.sidebar.expand.is_running());

        let _ = animation_frame(&mut c, after(t1, 125));
        // Still hidden mid-expand.
        assert_eq!(c.sidebar.label_opacity, 0.0);

        let _ = animation_frame(&mut c, after(t1, 400));
        assert_eq!(c.sidebar.width, 250.0);
        assert_eq!(c.sidebar.label_opacity, 1.0);
        assert!(c.sidebar.expanded);
        assert_eq!(c.sidebar.toggle_icon, Icon::LeftArrow);
    }

    #[test]
    fn slide_while_sliding_is_a_no_op() {
        let (mut c, _) = controller(FakePlayback::default());
        let t0 = Instant::now();

        let _ = slide_sidebar(&mut c, t0);
        let _ = animation_frame(&mut c, after(t0, 100));
        let _ = slide_sidebar(&mut c, after(t0, 120));

        assert!(c.sidebar.collapse.is_running());
        assert!(!c.sidebar.expand.is_running());

        let _ = animation_frame(&mut c, after(t0, 300));
        assert_eq!(c.sidebar.width, 50.0);
        assert!(!c.sidebar.expanded);
    }

    #[test]
    fn frames_without_a_slide_change_nothing() {
        let (mut c, _) = controller(FakePlayback::default());
        let _ = animation_frame(&mut c, Instant::now());
        assert_eq!(c.sidebar.width, 250.0);
        assert!(c.sidebar.expanded);
        assert_eq!(c.sidebar.label_opacity, 1.0);
    }
}
