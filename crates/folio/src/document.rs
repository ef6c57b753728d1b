//! Decoder-facing document abstractions.
//!
//! The engine never decodes documents itself. A host supplies a
//! [`DocumentSource`]: an opaque service that knows the page count, can
//! compute per-page dimensions for a scale/rotation pair, and can rasterize
//! page content. `folio-testing` ships a synthetic implementation for tests
//! and demos.

use thiserror::Error;

/// Errors surfaced by a [`DocumentSource`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document could not be opened or parsed.
    #[error("failed to load document: {reason}")]
    LoadFailed { reason: String },

    /// A single page's metadata or content could not be produced.
    #[error("page {index} unavailable: {reason}")]
    PageUnavailable { index: usize, reason: String },
}

/// Page dimensions at a concrete scale and rotation, decoder-computed.
///
/// Sideways rotations (90°/270°) swap the intrinsic width and height; the
/// decoder is responsible for reporting post-rotation dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageViewport {
    pub width: f32,
    pub height: f32,
}

impl PageViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Rasterized page content produced by a [`DocumentSource`].
///
/// The engine never inspects `data`; it is carried through to the host's
/// drawing layer in whatever format the decoder produces.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    pub page_index: usize,
    pub viewport: PageViewport,
    /// Raster bytes in the decoder's native format. `None` for placeholder
    /// shells (e.g. while scrolling too fast to rasterize).
    pub data: Option<Vec<u8>>,
}

/// Opaque document decoder service.
///
/// Implementations should be cheap to query repeatedly: `page_viewport` is
/// called once per page per measurement generation, and may be called again
/// whenever scale or rotation changes.
pub trait DocumentSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Dimensions of a page at the given scale and rotation (degrees).
    ///
    /// `rotation` is the effective rotation: the viewer-applied rotation
    /// already composed with the page's own default rotation.
    fn page_viewport(
        &self,
        index: usize,
        scale: f32,
        rotation: i32,
    ) -> Result<PageViewport, DocumentError>;

    /// Document-embedded rotation hint for a page, in degrees.
    ///
    /// Independent of any viewer-applied rotation. Defaults to 0 for
    /// sources without per-page rotation metadata.
    fn default_rotation(&self, index: usize) -> i32 {
        let _ = index;
        0
    }

    /// Rasterize a page's content at the given scale and rotation.
    fn render_page(
        &self,
        index: usize,
        scale: f32,
        rotation: i32,
    ) -> Result<RenderedPage, DocumentError>;
}
