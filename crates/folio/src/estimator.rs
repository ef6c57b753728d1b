//! Page size estimation.
//!
//! The virtual range calculation needs a height for every page, including
//! pages whose geometry has not been measured yet. [`SizeEstimator`] answers
//! with the measured height when a committed [`PageGeometry`] knows it, and
//! with [`DEFAULT_PAGE_HEIGHT`] otherwise.

use crate::geometry::PageGeometry;

/// Fallback height for a page whose geometry is not known yet.
pub const DEFAULT_PAGE_HEIGHT: f32 = 600.0;

/// Deterministic per-page height source for a single render pass.
///
/// Borrowing the geometry fixes the answer for the lifetime of the pass, so
/// repeated range computations over the same generation agree.
#[derive(Clone, Copy, Debug)]
pub struct SizeEstimator<'a> {
    geometry: Option<&'a PageGeometry>,
}

impl<'a> SizeEstimator<'a> {
    pub fn new(geometry: Option<&'a PageGeometry>) -> Self {
        Self { geometry }
    }

    /// Estimated render height of a page at the current scale/rotation.
    pub fn estimate(&self, index: usize) -> f32 {
        self.geometry
            .and_then(|geometry| geometry.viewport(index))
            .map(|viewport| viewport.height)
            .unwrap_or(DEFAULT_PAGE_HEIGHT)
    }
}
