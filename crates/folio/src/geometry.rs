//! Rotation and per-page geometry.
//!
//! Geometry computation is the one multi-turn operation in the engine: a
//! scale or rotation change produces a [`MeasureRequest`] carrying a fresh
//! generation number, the host resolves per-page viewports through its
//! decoder, and the result is committed as a [`PageGeometry`]. Completions
//! bearing a stale generation are discarded, which stands in for cancelling
//! in-flight work.

use crate::document::PageViewport;

/// Viewer-applied rotation, always a multiple of 90°.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Normalizes an angle in degrees to a rotation step.
    ///
    /// Angles that are not multiples of 90 are truncated to the step below.
    pub fn from_degrees(degrees: i32) -> Self {
        match (degrees.rem_euclid(360)) / 90 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// One 90° step clockwise.
    pub fn clockwise(self) -> Self {
        Self::from_degrees(self.degrees() + 90)
    }

    /// One 90° step counter-clockwise (a +270° step, mod 360).
    pub fn counter_clockwise(self) -> Self {
        Self::from_degrees(self.degrees() + 270)
    }

    /// Effective rotation in degrees once a page's default rotation hint is
    /// applied on top of the viewer rotation.
    pub fn compose_degrees(self, adjustment: i32) -> i32 {
        (self.degrees() + adjustment).rem_euclid(360)
    }
}

/// A committed measurement pass: every page's viewport at one
/// (scale, rotation) pair, tagged with the generation that produced it.
///
/// Pages whose viewport could not be computed hold `None` and fall back to
/// the default size estimate downstream.
#[derive(Clone, Debug, Default)]
pub struct PageGeometry {
    generation: u64,
    viewports: Vec<Option<PageViewport>>,
    default_rotations: Vec<i32>,
}

impl PageGeometry {
    pub fn new(
        generation: u64,
        viewports: Vec<Option<PageViewport>>,
        default_rotations: Vec<i32>,
    ) -> Self {
        Self {
            generation,
            viewports,
            default_rotations,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_count(&self) -> usize {
        self.viewports.len()
    }

    /// Measured viewport for a page, if the measurement succeeded.
    pub fn viewport(&self, index: usize) -> Option<PageViewport> {
        self.viewports.get(index).copied().flatten()
    }

    /// Document-embedded rotation hint for a page, 0 when unknown.
    pub fn default_rotation(&self, index: usize) -> i32 {
        self.default_rotations.get(index).copied().unwrap_or(0)
    }
}

/// An outstanding geometry request. The host services it (possibly over
/// several event-loop turns) and commits via `Reader::complete_measure`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureRequest {
    pub generation: u64,
    pub scale: f32,
    pub rotation: Rotation,
}
