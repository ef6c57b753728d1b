//! Highlight-area coordinate transforms.
//!
//! Highlight rectangles arrive in percentage units relative to the
//! unrotated page. Drawing them (and scrolling to them) under a rotated
//! viewer means remapping which edges the rectangle is anchored to, and
//! computing how far down the rotated page its leading edge sits.

use crate::geometry::Rotation;

/// A rectangle on a page, each field a percentage (0–100) of the unrotated
/// page's extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HighlightArea {
    pub top: f32,
    pub left: f32,
    pub height: f32,
    pub width: f32,
    pub page_index: usize,
}

/// CSS-style absolute positioning box, in percentage units.
///
/// Exactly two of the four edge anchors are set for any rotation; the rest
/// are `None` (unanchored).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HighlightBox {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub width: f32,
    pub height: f32,
}

/// Remaps a highlight rectangle's edges for a rotated page.
///
/// At 0° the box is anchored top/left unchanged; 90° anchors top/right with
/// width and height swapped; 180° anchors bottom/right; 270° anchors
/// bottom/left with width and height swapped.
pub fn transform_highlight_rect(area: &HighlightArea, rotation: Rotation) -> HighlightBox {
    match rotation {
        Rotation::Deg0 => HighlightBox {
            top: Some(area.top),
            left: Some(area.left),
            height: area.height,
            width: area.width,
            ..HighlightBox::default()
        },
        Rotation::Deg90 => HighlightBox {
            top: Some(area.left),
            right: Some(area.top),
            height: area.width,
            width: area.height,
            ..HighlightBox::default()
        },
        Rotation::Deg180 => HighlightBox {
            bottom: Some(area.top),
            right: Some(area.left),
            height: area.height,
            width: area.width,
            ..HighlightBox::default()
        },
        Rotation::Deg270 => HighlightBox {
            bottom: Some(area.left),
            left: Some(area.top),
            height: area.width,
            width: area.height,
            ..HighlightBox::default()
        },
    }
}

/// Absolute scroll offset of a highlight's leading edge.
///
/// `item_height` is the page slot height, `start_offset` the page's
/// absolute start. Both the vertical and horizontal percentages are
/// converted through `item_height`, so for non-square pages the sideways
/// rotations yield an approximate offset rather than a width-aware one.
pub fn offset_for_highlight(
    area: &HighlightArea,
    rotation: Rotation,
    item_height: f32,
    start_offset: f32,
) -> f32 {
    let top = area.top * item_height / 100.0;
    let left = area.left * item_height / 100.0;
    let height = area.height * item_height / 100.0;
    let width = area.width * item_height / 100.0;

    let within_page = match rotation {
        Rotation::Deg0 => top,
        Rotation::Deg90 => left,
        Rotation::Deg180 => item_height - top - height,
        Rotation::Deg270 => item_height - left - width,
    };

    start_offset + within_page
}
