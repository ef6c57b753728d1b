//! Discrete zoom ladder and post-zoom offset renormalization.
//!
//! Zooming never scales freely: the scale walks a fixed ladder of factors,
//! one step per request, clamped at the ends. Separately, a "fit width"
//! default scale is derived from the first page's intrinsic width and the
//! container width. After any scale change the scroll offset must be
//! renormalized (see [`renormalize_offset`]) so the content under the
//! viewport top stays put.

/// The scale ladder, ascending, 50% to 400%.
pub const ZOOM_LEVELS: [f32; 13] = [
    0.5, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.5, 1.7, 2.0, 3.0, 4.0,
];

/// Horizontal space reserved (scrollbar, page shadow) when fitting a page
/// to the container width.
pub const RESERVE_WIDTH: f32 = 50.0;

/// Next ladder entry above `scale`. Stepping past the top is a no-op.
pub fn increase_zoom(scale: f32) -> f32 {
    match ZOOM_LEVELS.iter().position(|&level| level >= scale) {
        Some(index) => ZOOM_LEVELS[(index + 1).min(ZOOM_LEVELS.len() - 1)],
        // Already above the whole ladder.
        None => scale,
    }
}

/// Next ladder entry below `scale`. Stepping past the bottom is a no-op.
pub fn decrease_zoom(scale: f32) -> f32 {
    match ZOOM_LEVELS.iter().position(|&level| level >= scale) {
        Some(index) => ZOOM_LEVELS[index.saturating_sub(1)],
        // Above the ladder: step down into the top entry.
        None => ZOOM_LEVELS[ZOOM_LEVELS.len() - 1],
    }
}

/// Scale at which the first page fills the container width, minus
/// [`RESERVE_WIDTH`].
///
/// `page_width` is the page's intrinsic (scale 1) width under its default
/// rotation. A degenerate page width falls back to scale 1.
pub fn fit_width_scale(container_width: f32, page_width: f32) -> f32 {
    if page_width <= 0.0 {
        log::warn!("fit-width requested for degenerate page width {page_width}");
        return 1.0;
    }
    (container_width - RESERVE_WIDTH) / page_width
}

/// Recomputes a scroll offset across a scale change so the content point at
/// the viewport top stays under it.
///
/// Gaps between pages do not scale with the content, so the page-start gap
/// contribution (`item_index * gap`) is subtracted before applying the
/// scale ratio and re-added after. `item_index` is the page containing the
/// offset under the *old* geometry.
pub fn renormalize_offset(
    offset: f32,
    item_index: usize,
    gap: f32,
    old_scale: f32,
    new_scale: f32,
) -> f32 {
    if old_scale <= 0.0 {
        return offset;
    }
    let gap_contribution = item_index as f32 * gap;
    let gapless = (offset - gap_contribution).max(0.0);
    gapless * (new_scale / old_scale) + gap_contribution
}
