//! Document reader: the owned viewer state and public navigation surface.
//!
//! [`Reader`] wires the components together: it owns the document handle,
//! the scale/rotation/current-page state, the committed geometry and its
//! generation counter, and the scroll, visibility, and velocity trackers.
//! Hosts feed it viewport dimensions, scroll events, intersection ratios,
//! and frame ticks; it answers with the materialized page window and the
//! per-page render parameters.
//!
//! All state lives here and is mutated only through these methods, so the
//! ordering of zoom/rotation re-anchoring against geometry commits is
//! deterministic.

use std::rc::Rc;

use web_time::Instant;

use crate::document::{DocumentError, DocumentSource, PageViewport, RenderedPage};
use crate::estimator::SizeEstimator;
use crate::geometry::{MeasureRequest, PageGeometry, Rotation};
use crate::highlight::{offset_for_highlight, HighlightArea};
use crate::rotation::RotationController;
use crate::scroll::{ScrollBehavior, ScrollController};
use crate::velocity::VelocityTracker;
use crate::virtualizer::{
    compute_range, index_at_offset, offset_for_index, start_offset, total_size, Align,
    VirtualLayout,
};
use crate::visibility::VisibilityTracker;
use crate::zoom;

/// Vertical space between consecutive page slots, in layout units.
pub const VIRTUAL_ITEM_GAP: f32 = 10.0;

/// Reader configuration.
#[derive(Clone, Copy, Debug)]
pub struct ReaderOptions {
    /// Starting scale. Defaults to the fit-width scale computed from the
    /// first page.
    pub initial_scale: Option<f32>,
    pub initial_rotation: Rotation,
    /// Pages materialized beyond the visible window, per side.
    pub overscan: usize,
    /// Gap between page slots.
    pub gap: f32,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            initial_scale: None,
            initial_rotation: Rotation::Deg0,
            overscan: 0,
            gap: VIRTUAL_ITEM_GAP,
        }
    }
}

/// Fired whenever the current page changes.
pub struct PageChangeEvent {
    /// 1-indexed.
    pub current_page: usize,
    pub doc: Rc<dyn DocumentSource>,
}

/// Parameters for rendering one page's content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPageProps {
    pub page_index: usize,
    pub scale: f32,
    /// Effective rotation in degrees: viewer rotation composed with the
    /// page's default rotation.
    pub rotate: i32,
    /// The page's own default-rotation component of `rotate`.
    pub rotation_adjustment: i32,
}

/// Substitutable page-content renderer.
///
/// The engine provides [`SourceRenderer`] as the default; hosts inject
/// their own implementation to draw pages differently.
pub trait RenderPage {
    fn render_page(&mut self, props: &RenderPageProps) -> Result<RenderedPage, DocumentError>;
}

/// Default [`RenderPage`]: delegates to the document source's rasterizer.
pub struct SourceRenderer {
    source: Rc<dyn DocumentSource>,
}

impl SourceRenderer {
    pub fn new(source: Rc<dyn DocumentSource>) -> Self {
        Self { source }
    }
}

impl RenderPage for SourceRenderer {
    fn render_page(&mut self, props: &RenderPageProps) -> Result<RenderedPage, DocumentError> {
        self.source
            .render_page(props.page_index, props.scale, props.rotate)
    }
}

/// How a jump positions and moves toward its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JumpOptions {
    pub align: Align,
    pub behavior: ScrollBehavior,
}

type PageChangeCallback = Box<dyn FnMut(&PageChangeEvent)>;
type LifecycleCallback = Box<dyn FnMut()>;

/// The viewer session: one open document, one scroll position.
#[derive(Default)]
pub struct Reader {
    options: ReaderOptions,
    source: Option<Rc<dyn DocumentSource>>,

    viewport_width: f32,
    viewport_height: f32,

    scale: Option<f32>,
    default_scale: Option<f32>,
    rotation: RotationController,

    geometry: Option<PageGeometry>,
    next_generation: u64,
    pending_measure: Option<MeasureRequest>,
    /// Renormalized offset to restore once post-zoom geometry lands.
    pending_rescale_offset: Option<f32>,

    scroll: ScrollController,
    visibility: VisibilityTracker,
    velocity: VelocityTracker,

    page_change_callback: Option<PageChangeCallback>,
    document_load_callback: Option<LifecycleCallback>,
    viewports_measured_callback: Option<LifecycleCallback>,
}

impl Reader {
    pub fn new(options: ReaderOptions) -> Self {
        Self {
            options,
            rotation: RotationController::new(options.initial_rotation),
            ..Self::default()
        }
    }

    // ---- lifecycle -------------------------------------------------------

    /// Registers the current-page-changed callback.
    pub fn on_page_change(&mut self, callback: impl FnMut(&PageChangeEvent) + 'static) {
        self.page_change_callback = Some(Box::new(callback));
    }

    /// Registers the callback fired once an opened document's structure is
    /// known.
    pub fn on_document_load(&mut self, callback: impl FnMut() + 'static) {
        self.document_load_callback = Some(Box::new(callback));
    }

    /// Registers the callback fired after each geometry generation commits.
    pub fn on_viewports_measured(&mut self, callback: impl FnMut() + 'static) {
        self.viewports_measured_callback = Some(Box::new(callback));
    }

    /// Sets the scroll container dimensions.
    pub fn set_viewport_dimensions(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.sync_scroll_bounds();
    }

    /// Opens a document, replacing any previous one.
    ///
    /// Computes the fit-width default scale from the first page, fires
    /// `on_document_load`, and requests the first geometry generation. On
    /// failure the reader is left with no document loaded.
    pub fn open_document(&mut self, source: Rc<dyn DocumentSource>) -> Result<(), DocumentError> {
        self.close_document();

        let page_count = source.page_count();
        log::debug!("opening document with {page_count} pages");
        if page_count == 0 {
            self.source = Some(source);
            self.emit_document_load();
            return Ok(());
        }

        let first = source.page_viewport(0, 1.0, source.default_rotation(0))?;
        let default_scale = zoom::fit_width_scale(self.viewport_width, first.width);
        self.default_scale = Some(default_scale);
        self.scale = Some(self.options.initial_scale.unwrap_or(default_scale));
        self.visibility.reset(page_count);
        self.source = Some(source);
        self.sync_scroll_bounds();
        self.emit_document_load();
        self.request_measure();
        Ok(())
    }

    /// Drops the open document and all derived state.
    pub fn close_document(&mut self) {
        self.source = None;
        self.geometry = None;
        self.pending_measure = None;
        self.pending_rescale_offset = None;
        self.scale = None;
        self.default_scale = None;
        self.rotation = RotationController::new(self.options.initial_rotation);
        self.visibility.reset(0);
        self.velocity.reset();
        self.scroll = ScrollController::new();
    }

    // ---- read-only state -------------------------------------------------

    pub fn page_count(&self) -> usize {
        self.source.as_ref().map_or(0, |source| source.page_count())
    }

    /// Current scale. `None` until a document's first page is known.
    pub fn scale(&self) -> Option<f32> {
        self.scale
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation.rotation()
    }

    /// Current page, 1-indexed. `None` until some page is positively
    /// visible.
    pub fn current_page(&self) -> Option<usize> {
        self.visibility.current_page()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Whether geometry for the current scale/rotation has been committed.
    pub fn viewports_ready(&self) -> bool {
        self.geometry.is_some() && self.pending_measure.is_none()
    }

    /// Materialized page window for the current scroll position.
    pub fn virtual_items(&self) -> VirtualLayout {
        compute_range(
            self.page_count(),
            |index| self.estimate_size(index),
            self.scroll.offset(),
            self.viewport_height,
            self.options.overscan,
            self.options.gap,
        )
    }

    /// Full scrollable extent.
    pub fn total_size(&self) -> f32 {
        total_size(
            self.page_count(),
            |index| self.estimate_size(index),
            self.options.gap,
        )
    }

    /// Estimated render height of a page (fallback before measurement).
    pub fn estimate_size(&self, index: usize) -> f32 {
        SizeEstimator::new(self.geometry.as_ref()).estimate(index)
    }

    // ---- geometry measurement --------------------------------------------

    /// The outstanding geometry request, if any.
    pub fn pending_measure(&self) -> Option<MeasureRequest> {
        self.pending_measure
    }

    /// Services the pending geometry request synchronously through the
    /// document source. Hosts that measure asynchronously call
    /// [`Reader::complete_measure`] themselves instead.
    ///
    /// A page whose viewport cannot be computed falls back to the default
    /// size estimate; it never fails the pass.
    pub fn measure_viewports(&mut self) {
        let Some(request) = self.pending_measure else {
            return;
        };
        let Some(source) = self.source.clone() else {
            return;
        };

        let page_count = source.page_count();
        let mut viewports = Vec::with_capacity(page_count);
        let mut default_rotations = Vec::with_capacity(page_count);
        for index in 0..page_count {
            let adjustment = source.default_rotation(index);
            default_rotations.push(adjustment);
            let rotation = request.rotation.compose_degrees(adjustment);
            match source.page_viewport(index, request.scale, rotation) {
                Ok(viewport) => viewports.push(Some(viewport)),
                Err(error) => {
                    log::warn!(
                        "page {index} viewport unavailable, falling back to estimate: {error}"
                    );
                    viewports.push(None);
                }
            }
        }
        self.complete_measure(request.generation, viewports, default_rotations);
    }

    /// Commits a measured geometry generation.
    ///
    /// Results for anything but the latest request are stale and are
    /// discarded: a newer scale/rotation change has superseded them. After
    /// the commit, exactly one deferred scroll fix-up is consumed: the
    /// rotation re-anchor if one is pending, else the post-zoom
    /// renormalized offset.
    pub fn complete_measure(
        &mut self,
        generation: u64,
        viewports: Vec<Option<PageViewport>>,
        default_rotations: Vec<i32>,
    ) {
        match self.pending_measure {
            Some(request) if request.generation == generation => {}
            _ => {
                log::debug!("discarding stale geometry generation {generation}");
                return;
            }
        }
        self.pending_measure = None;
        self.geometry = Some(PageGeometry::new(generation, viewports, default_rotations));
        log::debug!("geometry generation {generation} committed");
        self.sync_scroll_bounds();
        self.emit_viewports_measured();

        if let Some(anchor) = self.rotation.take_pending_anchor() {
            self.pending_rescale_offset = None;
            let target = self.offset_for_page(anchor, Align::Start);
            self.scroll.jump_to(target);
        } else if let Some(offset) = self.pending_rescale_offset.take() {
            self.scroll.jump_to(offset);
        }
    }

    // ---- navigation ------------------------------------------------------

    /// Eases the viewport to a page's start (0-indexed; out-of-range
    /// indices clamp to the last page).
    pub fn jump_to_page(&mut self, page_index: usize, now: Instant) {
        self.jump_to_page_with(page_index, JumpOptions::default(), now);
    }

    pub fn jump_to_page_with(&mut self, page_index: usize, options: JumpOptions, now: Instant) {
        let page_count = self.page_count();
        if page_count == 0 {
            return;
        }
        let target = offset_for_index(
            page_count,
            |index| self.estimate_size(index),
            self.options.gap,
            self.viewport_height,
            page_index,
            options.align,
        );
        log::debug!("jump to page {page_index} -> offset {target}");
        self.scroll.scroll_to(target, options.behavior, now);
    }

    /// Eases the viewport to an absolute offset. Negative offsets clamp
    /// to 0, offsets past the end to the maximum scroll position.
    pub fn jump_to_offset(&mut self, offset: f32, now: Instant) {
        self.jump_to_offset_with(offset, JumpOptions::default(), now);
    }

    pub fn jump_to_offset_with(&mut self, offset: f32, options: JumpOptions, now: Instant) {
        let target = self.aligned_offset(offset, options.align);
        self.scroll.scroll_to(target, options.behavior, now);
    }

    /// Scrolls so a highlighted region's leading edge sits at the viewport
    /// top. Instant by default: highlight jumps usually follow a search
    /// or link activation where an animation would disorient.
    pub fn jump_to_highlight_area(&mut self, area: &HighlightArea, now: Instant) {
        self.jump_to_highlight_area_with(
            area,
            JumpOptions {
                align: Align::Start,
                behavior: ScrollBehavior::Auto,
            },
            now,
        );
    }

    pub fn jump_to_highlight_area_with(
        &mut self,
        area: &HighlightArea,
        options: JumpOptions,
        now: Instant,
    ) {
        let page_count = self.page_count();
        if page_count == 0 {
            return;
        }
        let page_index = area.page_index.min(page_count - 1);
        let start = start_offset(
            page_count,
            |index| self.estimate_size(index),
            self.options.gap,
            page_index,
        );
        let item_height = self.estimate_size(page_index);
        let raw = offset_for_highlight(area, self.rotation.rotation(), item_height, start);
        let target = self.aligned_offset(raw, options.align);
        log::debug!(
            "jump to highlight on page {page_index} -> offset {target}"
        );
        self.scroll.scroll_to(target, options.behavior, now);
    }

    fn aligned_offset(&self, offset: f32, align: Align) -> f32 {
        match align {
            Align::Start => offset,
            Align::Center => offset - self.viewport_height / 2.0,
            Align::End => offset - self.viewport_height,
        }
    }

    // ---- zoom ------------------------------------------------------------

    /// One ladder step up. No-op before the first geometry or at the top.
    pub fn increase_zoom(&mut self) {
        let Some(scale) = self.scale else {
            return;
        };
        self.apply_scale(zoom::increase_zoom(scale));
    }

    /// One ladder step down. No-op before the first geometry or at the
    /// bottom.
    pub fn decrease_zoom(&mut self) {
        let Some(scale) = self.scale else {
            return;
        };
        self.apply_scale(zoom::decrease_zoom(scale));
    }

    /// Back to the fit-width default scale.
    pub fn zoom_fit_width(&mut self) {
        let Some(default_scale) = self.default_scale else {
            return;
        };
        self.apply_scale(default_scale);
    }

    fn apply_scale(&mut self, new_scale: f32) {
        if self.scale == Some(new_scale) {
            return;
        }
        // Capture the renormalized offset against the old geometry before
        // it is invalidated; it is applied once the new generation lands.
        if let (Some(old_scale), true) = (self.scale, self.geometry.is_some()) {
            let offset = self.scroll.offset();
            let index = index_at_offset(
                self.page_count(),
                |index| self.estimate_size(index),
                self.options.gap,
                offset,
            );
            self.pending_rescale_offset = Some(zoom::renormalize_offset(
                offset,
                index,
                self.options.gap,
                old_scale,
                new_scale,
            ));
        }
        log::debug!("scale {:?} -> {new_scale}", self.scale);
        self.scale = Some(new_scale);
        self.request_measure();
    }

    // ---- rotation --------------------------------------------------------

    /// Rotates 90° clockwise and re-anchors to the page that was current.
    /// No-op while no page is current.
    pub fn rotate_clockwise(&mut self) {
        let current_page = self.visibility.current_page();
        if self.rotation.rotate_clockwise(current_page) {
            self.after_rotation();
        }
    }

    /// Rotates 90° counter-clockwise; otherwise as
    /// [`Reader::rotate_clockwise`].
    pub fn rotate_counter_clockwise(&mut self) {
        let current_page = self.visibility.current_page();
        if self.rotation.rotate_counter_clockwise(current_page) {
            self.after_rotation();
        }
    }

    fn after_rotation(&mut self) {
        log::debug!("rotation -> {}°", self.rotation.rotation().degrees());
        // The rotation anchor supersedes any pending zoom fix-up.
        self.pending_rescale_offset = None;
        self.request_measure();
    }

    // ---- visibility ------------------------------------------------------

    /// Records a page's intersection ratio (`[0, 1]`, or
    /// [`crate::visibility::UNKNOWN_VISIBILITY`] when it stopped
    /// intersecting). Fires `on_page_change` when the current page moves.
    pub fn record_visibility(&mut self, page_index: usize, ratio: f32) {
        let Some(current_page) = self.visibility.record(page_index, ratio) else {
            return;
        };
        log::debug!("current page -> {current_page}");
        if let (Some(callback), Some(source)) =
            (self.page_change_callback.as_mut(), self.source.as_ref())
        {
            callback(&PageChangeEvent {
                current_page,
                doc: Rc::clone(source),
            });
        }
    }

    // ---- frame tick ------------------------------------------------------

    /// Reports a host-driven scroll (wheel, drag, scrollbar).
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll.set_offset(offset);
    }

    /// Advances the scroll animation and samples velocity. Call once per
    /// host frame; returns `true` while an animation is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let animating = self.scroll.tick(now);
        let reference = self.estimate_size(0);
        let offset = self.scroll.offset();
        self.velocity.sample(offset, reference, now);
        animating
    }

    pub fn normalized_velocity(&self) -> f32 {
        self.velocity.normalized_velocity()
    }

    /// Whether page content should be rasterized this frame. `false` while
    /// scrolling too fast; render empty shells of the right size instead.
    pub fn should_render_content(&self) -> bool {
        !self.velocity.is_scrolling_fast()
    }

    // ---- rendering -------------------------------------------------------

    /// Render parameters for a page, once the scale is known.
    pub fn render_props(&self, page_index: usize) -> Option<RenderPageProps> {
        let scale = self.scale?;
        let adjustment = self
            .geometry
            .as_ref()
            .map_or(0, |geometry| geometry.default_rotation(page_index));
        Some(RenderPageProps {
            page_index,
            scale,
            rotate: self.rotation.rotation().compose_degrees(adjustment),
            rotation_adjustment: adjustment,
        })
    }

    /// The default render capability, backed by the open document.
    pub fn default_renderer(&self) -> Option<SourceRenderer> {
        self.source.clone().map(SourceRenderer::new)
    }

    // ---- internals -------------------------------------------------------

    fn request_measure(&mut self) {
        let Some(scale) = self.scale else {
            return;
        };
        let generation = self.next_generation;
        self.next_generation += 1;
        self.pending_measure = Some(MeasureRequest {
            generation,
            scale,
            rotation: self.rotation.rotation(),
        });
        log::debug!(
            "geometry generation {generation} requested (scale {scale}, rotation {}°)",
            self.rotation.rotation().degrees()
        );
    }

    fn offset_for_page(&self, index: usize, align: Align) -> f32 {
        offset_for_index(
            self.page_count(),
            |page| self.estimate_size(page),
            self.options.gap,
            self.viewport_height,
            index,
            align,
        )
    }

    fn sync_scroll_bounds(&mut self) {
        let total = self.total_size();
        self.scroll
            .set_max_offset((total - self.viewport_height).max(0.0));
    }

    fn emit_document_load(&mut self) {
        if let Some(callback) = self.document_load_callback.as_mut() {
            callback();
        }
    }

    fn emit_viewports_measured(&mut self) {
        if let Some(callback) = self.viewports_measured_callback.as_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal in-module document: fixed-size pages, no rotation hints.
    struct StubDocument {
        pages: usize,
        width: f32,
        height: f32,
    }

    impl DocumentSource for StubDocument {
        fn page_count(&self) -> usize {
            self.pages
        }

        fn page_viewport(
            &self,
            _index: usize,
            scale: f32,
            rotation: i32,
        ) -> Result<PageViewport, DocumentError> {
            let (width, height) = if rotation % 180 == 0 {
                (self.width, self.height)
            } else {
                (self.height, self.width)
            };
            Ok(PageViewport::new(width * scale, height * scale))
        }

        fn render_page(
            &self,
            index: usize,
            scale: f32,
            rotation: i32,
        ) -> Result<RenderedPage, DocumentError> {
            Ok(RenderedPage {
                page_index: index,
                viewport: self.page_viewport(index, scale, rotation)?,
                data: None,
            })
        }
    }

    fn open_reader(pages: usize) -> Reader {
        let mut reader = Reader::new(ReaderOptions {
            initial_scale: Some(1.0),
            ..ReaderOptions::default()
        });
        reader.set_viewport_dimensions(800.0, 400.0);
        reader
            .open_document(Rc::new(StubDocument {
                pages,
                width: 500.0,
                height: 600.0,
            }))
            .unwrap();
        reader.measure_viewports();
        reader
    }

    #[test]
    fn test_jump_to_page_targets_prefix_sum_offset() {
        let mut reader = open_reader(3);
        reader.jump_to_page_with(
            2,
            JumpOptions {
                align: Align::Start,
                behavior: ScrollBehavior::Auto,
            },
            Instant::now(),
        );
        assert_eq!(reader.scroll_offset(), 1220.0);
    }

    #[test]
    fn test_out_of_range_jump_clamps() {
        let mut reader = open_reader(3);
        reader.jump_to_page_with(
            99,
            JumpOptions {
                align: Align::Start,
                behavior: ScrollBehavior::Auto,
            },
            Instant::now(),
        );
        assert_eq!(reader.scroll_offset(), 1220.0);

        reader.jump_to_offset_with(
            -500.0,
            JumpOptions {
                align: Align::Start,
                behavior: ScrollBehavior::Auto,
            },
            Instant::now(),
        );
        assert_eq!(reader.scroll_offset(), 0.0);
    }

    #[test]
    fn test_stale_measure_is_discarded() {
        let mut reader = open_reader(3);
        assert!(reader.viewports_ready());

        reader.increase_zoom();
        let stale_generation = reader.pending_measure().unwrap().generation;
        reader.increase_zoom();
        let fresh_generation = reader.pending_measure().unwrap().generation;
        assert!(fresh_generation > stale_generation);

        // A completion for the superseded request changes nothing.
        reader.complete_measure(stale_generation, vec![None; 3], vec![0; 3]);
        assert!(!reader.viewports_ready());

        reader.measure_viewports();
        assert!(reader.viewports_ready());
    }

    #[test]
    fn test_zoom_renormalizes_scroll_offset() {
        let mut reader = open_reader(3);
        // Land inside page 2: offset 1220 = 1200 content + 2 gaps.
        reader.jump_to_page_with(
            2,
            JumpOptions {
                align: Align::Start,
                behavior: ScrollBehavior::Auto,
            },
            Instant::now(),
        );

        // 1.0 steps to 1.1: gap-free 1200 scales, the 20 of gap does not.
        reader.increase_zoom();
        assert_eq!(reader.scroll_offset(), 1220.0);
        reader.measure_viewports();
        let expected = 1200.0 * 1.1 + 20.0;
        assert!((reader.scroll_offset() - expected).abs() < 0.5);
    }

    #[test]
    fn test_rotation_waits_for_geometry_then_reanchors() {
        let mut reader = open_reader(5);
        reader.record_visibility(3, 0.8);
        assert_eq!(reader.current_page(), Some(4));

        reader.rotate_clockwise();
        assert_eq!(reader.rotation(), Rotation::Deg90);
        // Deferred until the sideways geometry lands.
        assert_eq!(reader.scroll_offset(), 0.0);

        reader.measure_viewports();
        // Sideways pages are 500 tall: page 3 starts at 3 * 510.
        assert_eq!(reader.scroll_offset(), 1530.0);
    }

    #[test]
    fn test_rotation_without_current_page_is_a_no_op() {
        let mut reader = open_reader(3);
        reader.rotate_clockwise();
        assert_eq!(reader.rotation(), Rotation::Deg0);
        assert!(reader.viewports_ready());
    }

    #[test]
    fn test_page_change_event_fires_once_per_change() {
        use std::cell::RefCell;

        let changes: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let mut reader = open_reader(4);
        let sink = Rc::clone(&changes);
        reader.on_page_change(move |event| sink.borrow_mut().push(event.current_page));

        reader.record_visibility(0, 0.9);
        reader.record_visibility(0, 1.0);
        reader.record_visibility(1, 0.4);
        reader.record_visibility(0, 0.2);
        assert_eq!(*changes.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_empty_document_has_empty_range() {
        let mut reader = Reader::new(ReaderOptions::default());
        reader.set_viewport_dimensions(800.0, 400.0);
        reader
            .open_document(Rc::new(StubDocument {
                pages: 0,
                width: 500.0,
                height: 600.0,
            }))
            .unwrap();
        let layout = reader.virtual_items();
        assert!(layout.items.is_empty());
        assert_eq!(layout.total_size, 0.0);
        assert_eq!(reader.scale(), None);
    }

    #[test]
    fn test_render_props_compose_default_rotation() {
        struct Tilted;
        impl DocumentSource for Tilted {
            fn page_count(&self) -> usize {
                1
            }
            fn page_viewport(
                &self,
                _index: usize,
                scale: f32,
                _rotation: i32,
            ) -> Result<PageViewport, DocumentError> {
                Ok(PageViewport::new(500.0 * scale, 600.0 * scale))
            }
            fn default_rotation(&self, _index: usize) -> i32 {
                90
            }
            fn render_page(
                &self,
                index: usize,
                scale: f32,
                rotation: i32,
            ) -> Result<RenderedPage, DocumentError> {
                Ok(RenderedPage {
                    page_index: index,
                    viewport: self.page_viewport(index, scale, rotation)?,
                    data: None,
                })
            }
        }

        let mut reader = Reader::new(ReaderOptions {
            initial_scale: Some(2.0),
            ..ReaderOptions::default()
        });
        reader.set_viewport_dimensions(800.0, 400.0);
        reader.open_document(Rc::new(Tilted)).unwrap();
        reader.measure_viewports();

        let props = reader.render_props(0).unwrap();
        assert_eq!(props.scale, 2.0);
        assert_eq!(props.rotate, 90);
        assert_eq!(props.rotation_adjustment, 90);
    }
}
