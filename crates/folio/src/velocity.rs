//! Scroll velocity sampling.
//!
//! Samples the scroll offset at a fixed interval and normalizes the delta
//! by a reference page height, yielding "page heights per interval". Hosts
//! use [`VelocityTracker::is_scrolling_fast`] to skip rasterizing page
//! content mid-fling and draw empty shells of the right size instead.

use web_time::{Duration, Instant};

/// Interval between velocity samples.
pub const VELOCITY_SAMPLE_INTERVAL: Duration = Duration::from_millis(50);

/// Normalized speed above which content rendering is suppressed.
pub const FAST_SCROLL_THRESHOLD: f32 = 1.0;

/// Samples scroll offsets over time into a normalized velocity.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    interval: Duration,
    last_offset: f32,
    last_sampled_at: Option<Instant>,
    velocity: f32,
    normalized_velocity: f32,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::with_interval(VELOCITY_SAMPLE_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_offset: 0.0,
            last_sampled_at: None,
            velocity: 0.0,
            normalized_velocity: 0.0,
        }
    }

    /// Feeds the current scroll offset. Offsets arriving within the sample
    /// interval are ignored; `reference_size` (typically the first page's
    /// estimated height) normalizes the delta.
    pub fn sample(&mut self, offset: f32, reference_size: f32, now: Instant) {
        let Some(last_sampled_at) = self.last_sampled_at else {
            self.last_sampled_at = Some(now);
            self.last_offset = offset;
            return;
        };
        if now.saturating_duration_since(last_sampled_at) < self.interval {
            return;
        }

        self.velocity = offset - self.last_offset;
        self.normalized_velocity = if reference_size > 0.0 {
            self.velocity / reference_size
        } else {
            0.0
        };
        self.last_offset = offset;
        self.last_sampled_at = Some(now);
    }

    /// Offset delta over the last whole sample interval.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Velocity in page heights per sample interval.
    pub fn normalized_velocity(&self) -> f32 {
        self.normalized_velocity
    }

    /// Whether the viewport is moving too fast to bother rendering content.
    pub fn is_scrolling_fast(&self) -> bool {
        self.normalized_velocity.abs() > FAST_SCROLL_THRESHOLD
    }

    /// Drops all samples, e.g. when a new document is opened.
    pub fn reset(&mut self) {
        self.last_offset = 0.0;
        self.last_sampled_at = None;
        self.velocity = 0.0;
        self.normalized_velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_establishes_baseline() {
        let mut tracker = VelocityTracker::new();
        tracker.sample(500.0, 600.0, Instant::now());
        assert_eq!(tracker.velocity(), 0.0);
        assert!(!tracker.is_scrolling_fast());
    }

    #[test]
    fn test_sub_interval_samples_are_ignored() {
        let mut tracker = VelocityTracker::new();
        let start = Instant::now();
        tracker.sample(0.0, 600.0, start);
        tracker.sample(900.0, 600.0, start + Duration::from_millis(10));
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_velocity_is_normalized_by_reference_size() {
        let mut tracker = VelocityTracker::new();
        let start = Instant::now();
        tracker.sample(0.0, 600.0, start);
        tracker.sample(900.0, 600.0, start + Duration::from_millis(50));
        assert_eq!(tracker.velocity(), 900.0);
        assert_eq!(tracker.normalized_velocity(), 1.5);
        assert!(tracker.is_scrolling_fast());
    }

    #[test]
    fn test_slow_scroll_is_not_fast() {
        let mut tracker = VelocityTracker::new();
        let start = Instant::now();
        tracker.sample(0.0, 600.0, start);
        tracker.sample(300.0, 600.0, start + Duration::from_millis(60));
        assert_eq!(tracker.normalized_velocity(), 0.5);
        assert!(!tracker.is_scrolling_fast());
    }

    #[test]
    fn test_backward_scroll_counts_by_magnitude() {
        let mut tracker = VelocityTracker::new();
        let start = Instant::now();
        tracker.sample(2000.0, 600.0, start);
        tracker.sample(0.0, 600.0, start + Duration::from_millis(50));
        assert!(tracker.normalized_velocity() < 0.0);
        assert!(tracker.is_scrolling_fast());
    }

    #[test]
    fn test_reset_clears_samples() {
        let mut tracker = VelocityTracker::new();
        let start = Instant::now();
        tracker.sample(0.0, 600.0, start);
        tracker.sample(900.0, 600.0, start + Duration::from_millis(50));
        tracker.reset();
        assert_eq!(tracker.normalized_velocity(), 0.0);
        assert!(!tracker.is_scrolling_fast());
    }
}
