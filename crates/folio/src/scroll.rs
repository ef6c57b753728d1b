//! Scroll control: instant jumps and eased animated scrolling.
//!
//! The controller owns the scroll offset and at most one in-flight
//! animation. Animations are advanced from the host's frame tick with an
//! explicit `now`, and every scroll request carries a fresh token; a tick
//! belonging to a superseded token is dropped, so two animations can never
//! drive the offset at once.

use web_time::{Duration, Instant};

/// Duration of an eased scroll.
pub const SCROLL_ANIMATION_DURATION: Duration = Duration::from_millis(400);

/// How a scroll request moves the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target. Used for re-anchoring after zoom and
    /// rotation changes, where an animation would fight the relayout.
    Auto,
    /// Ease toward the target over [`SCROLL_ANIMATION_DURATION`].
    #[default]
    Smooth,
}

/// Quintic ease-out: fast start, long settle.
pub fn ease_out_quint(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(5)
}

#[derive(Clone, Copy, Debug)]
struct Animation {
    token: u64,
    start_offset: f32,
    target_offset: f32,
    started_at: Instant,
    duration: Duration,
}

/// Owns the scroll offset and drives animated scrolls.
#[derive(Debug, Default)]
pub struct ScrollController {
    offset: f32,
    max_offset: f32,
    animation: Option<Animation>,
    latest_token: u64,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Updates the scrollable extent (content size minus viewport height).
    /// The current offset is re-clamped into the new range.
    pub fn set_max_offset(&mut self, max_offset: f32) {
        self.max_offset = max_offset.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Host-reported scroll (wheel, drag, scrollbar).
    ///
    /// Does not cancel an in-flight animation: the next tick keeps driving
    /// toward the animation target until it completes or is superseded.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset);
    }

    /// Jumps straight to `target`, superseding any in-flight animation.
    pub fn jump_to(&mut self, target: f32) {
        self.latest_token += 1;
        self.animation = None;
        self.offset = target.clamp(0.0, self.max_offset);
    }

    /// Starts a scroll toward `target`, superseding any in-flight
    /// animation. Out-of-range targets are clamped, not rejected.
    pub fn scroll_to(&mut self, target: f32, behavior: ScrollBehavior, now: Instant) {
        match behavior {
            ScrollBehavior::Auto => self.jump_to(target),
            ScrollBehavior::Smooth => {
                self.latest_token += 1;
                self.animation = Some(Animation {
                    token: self.latest_token,
                    start_offset: self.offset,
                    target_offset: target.clamp(0.0, self.max_offset),
                    started_at: now,
                    duration: SCROLL_ANIMATION_DURATION,
                });
            }
        }
    }

    /// Advances the active animation. Returns `true` while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        if animation.token != self.latest_token {
            // Superseded by a newer scroll request.
            self.animation = None;
            return false;
        }

        let elapsed = now.saturating_duration_since(animation.started_at);
        if elapsed >= animation.duration {
            self.offset = animation.target_offset.clamp(0.0, self.max_offset);
            self.animation = None;
            return false;
        }

        let progress = ease_out_quint(elapsed.as_secs_f32() / animation.duration.as_secs_f32());
        let interpolated = animation.start_offset
            + (animation.target_offset - animation.start_offset) * progress;
        self.offset = interpolated.clamp(0.0, self.max_offset);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(max_offset: f32) -> ScrollController {
        let mut controller = ScrollController::new();
        controller.set_max_offset(max_offset);
        controller
    }

    #[test]
    fn test_auto_jumps_immediately() {
        let mut scroll = controller(2000.0);
        scroll.scroll_to(1220.0, ScrollBehavior::Auto, Instant::now());
        assert_eq!(scroll.offset(), 1220.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_targets_are_clamped() {
        let mut scroll = controller(1000.0);
        scroll.scroll_to(5000.0, ScrollBehavior::Auto, Instant::now());
        assert_eq!(scroll.offset(), 1000.0);
        scroll.scroll_to(-50.0, ScrollBehavior::Auto, Instant::now());
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_smooth_scroll_progresses_and_snaps() {
        let mut scroll = controller(2000.0);
        let start = Instant::now();
        scroll.scroll_to(1000.0, ScrollBehavior::Smooth, start);
        assert_eq!(scroll.offset(), 0.0);

        assert!(scroll.tick(start + Duration::from_millis(100)));
        let mid = scroll.offset();
        assert!(mid > 0.0 && mid < 1000.0);

        assert!(scroll.tick(start + Duration::from_millis(200)));
        assert!(scroll.offset() > mid);

        assert!(!scroll.tick(start + Duration::from_millis(400)));
        assert_eq!(scroll.offset(), 1000.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_new_request_supersedes_running_animation() {
        let mut scroll = controller(3000.0);
        let start = Instant::now();
        scroll.scroll_to(2000.0, ScrollBehavior::Smooth, start);
        scroll.tick(start + Duration::from_millis(100));

        let rerouted_at = start + Duration::from_millis(150);
        scroll.scroll_to(500.0, ScrollBehavior::Smooth, rerouted_at);
        assert!(!scroll.tick(rerouted_at + Duration::from_millis(400)));
        assert_eq!(scroll.offset(), 500.0);
    }

    #[test]
    fn test_user_scroll_does_not_cancel_animation() {
        let mut scroll = controller(2000.0);
        let start = Instant::now();
        scroll.scroll_to(1000.0, ScrollBehavior::Smooth, start);
        scroll.set_offset(50.0);
        assert!(scroll.is_animating());
        assert!(!scroll.tick(start + Duration::from_millis(400)));
        assert_eq!(scroll.offset(), 1000.0);
    }

    #[test]
    fn test_shrinking_range_reclamps_offset() {
        let mut scroll = controller(2000.0);
        scroll.scroll_to(1800.0, ScrollBehavior::Auto, Instant::now());
        scroll.set_max_offset(900.0);
        assert_eq!(scroll.offset(), 900.0);
    }

    #[test]
    fn test_ease_out_quint_endpoints() {
        assert_eq!(ease_out_quint(0.0), 0.0);
        assert_eq!(ease_out_quint(1.0), 1.0);
        assert!(ease_out_quint(0.5) > 0.5);
    }
}
