//! Headless virtualized document-viewing engine.
//!
//! Only the pages near the visible viewport are materialized; scroll
//! position maps stably onto page indices across zoom and rotation
//! changes; navigation (jump to page/offset/highlight, zoom ladder, 90°
//! rotation steps) resolves to concrete scroll offsets.
//!
//! # Architecture
//!
//! - [`Reader`] - the owned viewer state and public API surface
//! - [`DocumentSource`] - decoder seam supplied by the host
//! - [`compute_range`] - virtualized window over estimated page sizes
//! - [`ScrollController`] - instant and eased scrolling with supersession
//! - [`VisibilityTracker`] / [`VelocityTracker`] - current page and
//!   fast-scroll detection from host-reported signals
//!
//! The engine is single-threaded and event-driven: hosts report viewport
//! dimensions, scroll offsets, and intersection ratios, and call
//! [`Reader::tick`] once per frame. Geometry measurement is the one
//! multi-turn operation; it is generation-tagged so superseded results are
//! discarded rather than cancelled.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut reader = Reader::new(ReaderOptions::default());
//! reader.set_viewport_dimensions(800.0, 1000.0);
//! reader.open_document(source)?;
//! reader.measure_viewports();
//!
//! reader.jump_to_page(12, Instant::now());
//! for item in reader.virtual_items().items {
//!     // draw page `item.index` at offset `item.start`
//! }
//! ```

mod document;
mod estimator;
mod geometry;
mod highlight;
mod reader;
mod rotation;
mod scroll;
mod velocity;
mod virtualizer;
mod visibility;
mod zoom;

pub use document::*;
pub use estimator::*;
pub use geometry::*;
pub use highlight::*;
pub use reader::*;
pub use rotation::*;
pub use scroll::*;
pub use velocity::*;
pub use virtualizer::*;
pub use visibility::*;
pub use zoom::*;
