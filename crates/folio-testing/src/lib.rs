//! Test support for the folio engine.
//!
//! [`FakeDocument`] stands in for a real decoder: scripted page sizes,
//! per-page default-rotation hints, and injectable per-page measurement
//! failures. [`TestClock`] produces the `Instant`s that drive animations
//! and velocity sampling deterministically.

use folio::{DocumentError, DocumentSource, PageViewport, RenderedPage};
use web_time::{Duration, Instant};

/// One scripted page: intrinsic (scale 1, unrotated) dimensions plus the
/// document-embedded rotation hint.
#[derive(Clone, Copy, Debug)]
pub struct FakePage {
    pub width: f32,
    pub height: f32,
    pub default_rotation: i32,
}

impl FakePage {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            default_rotation: 0,
        }
    }

    pub fn rotated(mut self, degrees: i32) -> Self {
        self.default_rotation = degrees;
        self
    }
}

/// A synthetic [`DocumentSource`] with fully scripted geometry.
#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
    pages: Vec<FakePage>,
    failing_pages: Vec<usize>,
}

impl FakeDocument {
    /// `count` identical pages of the given intrinsic size.
    pub fn with_page_count(count: usize, width: f32, height: f32) -> Self {
        Self {
            pages: vec![FakePage::new(width, height); count],
            failing_pages: Vec::new(),
        }
    }

    /// Explicitly scripted pages.
    pub fn from_pages(pages: Vec<FakePage>) -> Self {
        Self {
            pages,
            failing_pages: Vec::new(),
        }
    }

    /// Makes `page_viewport` fail for one page, exercising the per-page
    /// fallback path.
    pub fn fail_page(mut self, index: usize) -> Self {
        self.failing_pages.push(index);
        self
    }
}

impl DocumentSource for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_viewport(
        &self,
        index: usize,
        scale: f32,
        rotation: i32,
    ) -> Result<PageViewport, DocumentError> {
        if self.failing_pages.contains(&index) {
            return Err(DocumentError::PageUnavailable {
                index,
                reason: "scripted failure".into(),
            });
        }
        let page = self
            .pages
            .get(index)
            .ok_or_else(|| DocumentError::PageUnavailable {
                index,
                reason: "out of range".into(),
            })?;
        // Sideways rotations swap the intrinsic axes, like a real decoder.
        let (width, height) = if rotation.rem_euclid(180) == 0 {
            (page.width, page.height)
        } else {
            (page.height, page.width)
        };
        Ok(PageViewport::new(width * scale, height * scale))
    }

    fn default_rotation(&self, index: usize) -> i32 {
        self.pages
            .get(index)
            .map_or(0, |page| page.default_rotation)
    }

    fn render_page(
        &self,
        index: usize,
        scale: f32,
        rotation: i32,
    ) -> Result<RenderedPage, DocumentError> {
        log::trace!("fake render of page {index} at scale {scale}, rotation {rotation}°");
        Ok(RenderedPage {
            page_index: index,
            viewport: self.page_viewport(index, scale, rotation)?,
            data: None,
        })
    }
}

/// Deterministic time source for animation and velocity tests.
///
/// Starts at an arbitrary real instant and only moves when told to.
#[derive(Clone, Copy, Debug)]
pub struct TestClock {
    now: Instant,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Moves the clock forward and returns the new instant.
    pub fn advance(&mut self, duration: Duration) -> Instant {
        self.now += duration;
        self.now
    }

    /// Moves the clock forward by whole milliseconds.
    pub fn advance_millis(&mut self, millis: u64) -> Instant {
        self.advance(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_document_scales_and_rotates() {
        let doc = FakeDocument::with_page_count(3, 500.0, 600.0);
        let upright = doc.page_viewport(0, 2.0, 0).unwrap();
        assert_eq!(upright, PageViewport::new(1000.0, 1200.0));
        let sideways = doc.page_viewport(0, 1.0, 90).unwrap();
        assert_eq!(sideways, PageViewport::new(600.0, 500.0));
    }

    #[test]
    fn test_scripted_failure() {
        let doc = FakeDocument::with_page_count(2, 500.0, 600.0).fail_page(1);
        assert!(doc.page_viewport(0, 1.0, 0).is_ok());
        assert!(doc.page_viewport(1, 1.0, 0).is_err());
    }

    #[test]
    fn test_clock_advances() {
        let mut clock = TestClock::new();
        let start = clock.now();
        let later = clock.advance_millis(250);
        assert_eq!(later.duration_since(start), Duration::from_millis(250));
    }
}
