//! Rotation state and deferred re-anchoring.
//!
//! Rotating swaps page width/height for sideways steps, which shifts every
//! downstream offset. Rather than scroll immediately into a layout that no
//! longer exists, the controller records the page that was current at the
//! moment of rotation; the request is consumed once, after the new
//! geometry generation lands.

use crate::geometry::Rotation;

/// Owns the viewer rotation and the pending re-anchor request.
#[derive(Clone, Debug, Default)]
pub struct RotationController {
    rotation: Rotation,
    pending_anchor: Option<usize>,
}

impl RotationController {
    pub fn new(initial: Rotation) -> Self {
        Self {
            rotation: initial,
            pending_anchor: None,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Rotates 90° clockwise. Returns `true` if the rotation changed.
    ///
    /// `current_page` is 1-indexed (as reported by the visibility tracker);
    /// without one there is nothing to re-anchor to, so the call no-ops.
    pub fn rotate_clockwise(&mut self, current_page: Option<usize>) -> bool {
        self.rotate_to(Rotation::clockwise, current_page)
    }

    /// Rotates 90° counter-clockwise. Returns `true` if the rotation changed.
    pub fn rotate_counter_clockwise(&mut self, current_page: Option<usize>) -> bool {
        self.rotate_to(Rotation::counter_clockwise, current_page)
    }

    fn rotate_to(&mut self, step: fn(Rotation) -> Rotation, current_page: Option<usize>) -> bool {
        let Some(current_page) = current_page else {
            return false;
        };
        self.rotation = step(self.rotation);
        self.pending_anchor = Some(current_page.saturating_sub(1));
        true
    }

    /// Takes the deferred re-anchor target (0-indexed page), clearing it.
    pub fn take_pending_anchor(&mut self) -> Option<usize> {
        self.pending_anchor.take()
    }
}
