//! Current-page tracking from partial-visibility ratios.
//!
//! The host observes each materialized page against the scroll container
//! (at [`VISIBILITY_THRESHOLDS`] granularity) and reports intersection
//! ratios; pages that stop intersecting report [`UNKNOWN_VISIBILITY`]. The
//! current page is the one with the highest known ratio, ties going to the
//! lowest index.

/// Intersection thresholds hosts should sample at: every 10%.
pub const VISIBILITY_THRESHOLDS: [f32; 11] = [
    0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0,
];

/// Marker ratio for a page that is not intersecting the viewport (or has
/// never been observed).
pub const UNKNOWN_VISIBILITY: f32 = -1.0;

/// Tracks per-page visibility ratios and derives the current page.
#[derive(Clone, Debug, Default)]
pub struct VisibilityTracker {
    ratios: Vec<f32>,
    current_page: Option<usize>,
}

impl VisibilityTracker {
    pub fn new(page_count: usize) -> Self {
        Self {
            ratios: vec![UNKNOWN_VISIBILITY; page_count],
            current_page: None,
        }
    }

    /// Forgets everything. Must be called whenever the page count changes
    /// (a new document was opened).
    pub fn reset(&mut self, page_count: usize) {
        self.ratios.clear();
        self.ratios.resize(page_count, UNKNOWN_VISIBILITY);
        self.current_page = None;
    }

    /// Records an observation: `ratio` in `[0, 1]`, or
    /// [`UNKNOWN_VISIBILITY`] when the page stopped intersecting.
    ///
    /// Returns the new current page (1-indexed) when the observation
    /// changed it.
    pub fn record(&mut self, page_index: usize, ratio: f32) -> Option<usize> {
        let Some(slot) = self.ratios.get_mut(page_index) else {
            return None;
        };
        *slot = ratio;

        let recomputed = self.recompute();
        if recomputed != self.current_page {
            self.current_page = recomputed;
            return self.current_page;
        }
        None
    }

    /// Current page, 1-indexed. `None` until some page has a positive
    /// visibility.
    pub fn current_page(&self) -> Option<usize> {
        self.current_page
    }

    /// Last observed ratio for a page.
    pub fn ratio(&self, page_index: usize) -> f32 {
        self.ratios
            .get(page_index)
            .copied()
            .unwrap_or(UNKNOWN_VISIBILITY)
    }

    fn recompute(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &ratio) in self.ratios.iter().enumerate() {
            if ratio <= 0.0 {
                continue;
            }
            // Strict comparison keeps the first occurrence on ties.
            if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
                best = Some((index, ratio));
            }
        }
        best.map(|(index, _)| index + 1)
    }
}
