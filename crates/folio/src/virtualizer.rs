//! Virtual range calculation.
//!
//! Determines which pages are materialized for a given scroll position: a
//! prefix sum over estimated page heights (gap-inclusive), a binary search
//! for the first page still on screen, and a linear extension until the
//! viewport is covered, padded by `overscan` pages on each side.
//!
//! Everything here is pure: callers pass an `estimate_size` closure (see
//! [`SizeEstimator`](crate::estimator::SizeEstimator)) and identical inputs
//! produce identical output, so a render pass can recompute the range as
//! often as it likes.

use smallvec::SmallVec;

/// One materialized page slot.
///
/// `start` is the absolute offset of the page's top edge, gap-inclusive:
/// `start[i+1] = start[i] + size[i] + gap`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VirtualItem {
    pub index: usize,
    pub start: f32,
    pub size: f32,
}

impl VirtualItem {
    /// Bottom edge of the page content (gap not included).
    pub fn end(&self) -> f32 {
        self.start + self.size
    }
}

/// Result of one range computation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VirtualLayout {
    /// Materialized items, sorted by index, contiguous.
    pub items: SmallVec<[VirtualItem; 8]>,
    /// Full scrollable extent: all page sizes plus the gaps between them.
    pub total_size: f32,
}

/// Where a jump target lands relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Target's top edge aligns with the viewport top.
    #[default]
    Start,
    /// Target centered in the viewport.
    Center,
    /// Target's bottom edge aligns with the viewport bottom.
    End,
}

fn prefix_sums<F>(page_count: usize, estimate_size: &F, gap: f32) -> (Vec<f32>, Vec<f32>)
where
    F: Fn(usize) -> f32,
{
    let mut starts = Vec::with_capacity(page_count);
    let mut sizes = Vec::with_capacity(page_count);
    let mut acc = 0.0f32;
    for index in 0..page_count {
        starts.push(acc);
        let size = estimate_size(index).max(0.0);
        sizes.push(size);
        acc += size + gap;
    }
    (starts, sizes)
}

/// Computes the materialized window for a scroll position.
///
/// Items are index-sorted and contiguous; `total_size` is the sum of all
/// page sizes plus `(page_count - 1) * gap`. An empty document yields an
/// empty layout with `total_size` 0.
pub fn compute_range<F>(
    page_count: usize,
    estimate_size: F,
    scroll_offset: f32,
    viewport_height: f32,
    overscan: usize,
    gap: f32,
) -> VirtualLayout
where
    F: Fn(usize) -> f32,
{
    if page_count == 0 {
        return VirtualLayout::default();
    }

    let (starts, sizes) = prefix_sums(page_count, &estimate_size, gap);
    let total_size = starts[page_count - 1] + sizes[page_count - 1];

    if viewport_height <= 0.0 {
        return VirtualLayout {
            items: SmallVec::new(),
            total_size,
        };
    }

    let offset = scroll_offset.max(0.0);

    // First index whose content end is below the scroll offset. When the
    // offset falls inside a gap, this lands on the next page.
    let mut lo = 0usize;
    let mut hi = page_count;
    while lo < hi {
        let mid = (lo + hi) / 2;
        if starts[mid] + sizes[mid] <= offset {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let first = lo.min(page_count - 1);

    // Last index whose top edge is still above the viewport bottom.
    let bottom = offset + viewport_height;
    let last = starts
        .partition_point(|&start| start < bottom)
        .saturating_sub(1)
        .max(first);

    let first = first.saturating_sub(overscan);
    let last = (last + overscan).min(page_count - 1);

    let items = (first..=last)
        .map(|index| VirtualItem {
            index,
            start: starts[index],
            size: sizes[index],
        })
        .collect();

    VirtualLayout { items, total_size }
}

/// Full scrollable extent for a document: `Σ(size_i) + (n - 1) * gap`.
pub fn total_size<F>(page_count: usize, estimate_size: F, gap: f32) -> f32
where
    F: Fn(usize) -> f32,
{
    if page_count == 0 {
        return 0.0;
    }
    let mut acc = 0.0f32;
    for index in 0..page_count {
        acc += estimate_size(index).max(0.0) + gap;
    }
    acc - gap
}

/// Absolute (gap-inclusive) start offset of a page, unclamped.
pub fn start_offset<F>(page_count: usize, estimate_size: F, gap: f32, index: usize) -> f32
where
    F: Fn(usize) -> f32,
{
    if page_count == 0 {
        return 0.0;
    }
    let index = index.min(page_count - 1);
    let mut acc = 0.0f32;
    for i in 0..index {
        acc += estimate_size(i).max(0.0) + gap;
    }
    acc
}

/// Target scroll offset that brings a page into view under an alignment
/// policy, clamped to the scrollable range.
pub fn offset_for_index<F>(
    page_count: usize,
    estimate_size: F,
    gap: f32,
    viewport_height: f32,
    index: usize,
    align: Align,
) -> f32
where
    F: Fn(usize) -> f32,
{
    if page_count == 0 {
        return 0.0;
    }
    let index = index.min(page_count - 1);
    let start = start_offset(page_count, &estimate_size, gap, index);
    let size = estimate_size(index);
    let raw = match align {
        Align::Start => start,
        Align::Center => start - (viewport_height - size) / 2.0,
        Align::End => start + size - viewport_height,
    };
    let max = (total_size(page_count, &estimate_size, gap) - viewport_height).max(0.0);
    raw.clamp(0.0, max)
}

/// Index of the page whose gap-inclusive span contains an absolute offset.
///
/// Offsets before the first page resolve to 0, offsets past the end to the
/// last page.
pub fn index_at_offset<F>(page_count: usize, estimate_size: F, gap: f32, offset: f32) -> usize
where
    F: Fn(usize) -> f32,
{
    if page_count == 0 {
        return 0;
    }
    let mut acc = 0.0f32;
    for index in 0..page_count {
        let next = acc + estimate_size(index).max(0.0) + gap;
        if offset < next {
            return index;
        }
        acc = next;
    }
    page_count - 1
}
