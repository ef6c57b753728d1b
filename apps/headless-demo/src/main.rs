//! Drives the whole reader surface against a synthetic document and logs
//! every state transition: open, measure, scroll, jump, zoom, rotate.
//!
//! Run with `RUST_LOG=debug cargo run -p headless-demo` to watch the
//! engine's own debug output interleaved with the script.

use std::rc::Rc;

use anyhow::Result;
use folio::{HighlightArea, Reader, ReaderOptions};
use folio_testing::{FakeDocument, FakePage, TestClock};

const VIEWPORT_WIDTH: f32 = 800.0;
const VIEWPORT_HEIGHT: f32 = 1000.0;
const FRAME_MILLIS: u64 = 16;

fn main() -> Result<()> {
    env_logger::init();

    let mut reader = Reader::new(ReaderOptions {
        overscan: 1,
        ..ReaderOptions::default()
    });
    reader.set_viewport_dimensions(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    reader.on_document_load(|| log::info!("document loaded"));
    reader.on_viewports_measured(|| log::info!("viewports measured"));
    reader.on_page_change(|event| log::info!("current page is now {}", event.current_page));

    // A 24-page document of US-letter pages, two of them landscape.
    let mut pages = vec![FakePage::new(612.0, 792.0); 24];
    pages[7] = FakePage::new(612.0, 792.0).rotated(90);
    pages[8] = FakePage::new(612.0, 792.0).rotated(90);
    reader.open_document(Rc::new(FakeDocument::from_pages(pages)))?;
    reader.measure_viewports();
    log::debug!(
        "a host observer would sample at thresholds {:?}",
        folio::VISIBILITY_THRESHOLDS
    );

    let mut clock = TestClock::new();
    log::info!(
        "opened: {} pages, scale {:?}, total extent {:.0}",
        reader.page_count(),
        reader.scale(),
        reader.total_size()
    );
    report_window(&reader);

    // Simulate the first page filling the viewport.
    let mut observed: Vec<usize> = Vec::new();
    settle_visibility(&mut reader, &mut observed);

    log::info!("--- smooth jump to page 12 ---");
    reader.jump_to_page(12, clock.now());
    let mut frames = 0;
    while reader.tick(clock.advance_millis(FRAME_MILLIS)) {
        frames += 1;
    }
    log::info!(
        "settled at offset {:.0} after {frames} frames (content rendering: {})",
        reader.scroll_offset(),
        reader.should_render_content()
    );
    settle_visibility(&mut reader, &mut observed);
    report_window(&reader);

    log::info!("--- two zoom steps in, anchored ---");
    reader.increase_zoom();
    reader.measure_viewports();
    reader.increase_zoom();
    reader.measure_viewports();
    log::info!(
        "scale {:?}, offset renormalized to {:.0}",
        reader.scale(),
        reader.scroll_offset()
    );

    log::info!("--- rotate clockwise, re-anchored to current page ---");
    reader.rotate_clockwise();
    reader.measure_viewports();
    log::info!(
        "rotation {}°, offset {:.0}",
        reader.rotation().degrees(),
        reader.scroll_offset()
    );
    report_window(&reader);

    log::info!("--- instant jump to a highlight on page 20 ---");
    let area = HighlightArea {
        top: 40.0,
        left: 10.0,
        height: 8.0,
        width: 35.0,
        page_index: 20,
    };
    reader.jump_to_highlight_area(&area, clock.now());
    settle_visibility(&mut reader, &mut observed);
    let drawn = folio::transform_highlight_rect(&area, reader.rotation());
    log::info!(
        "offset {:.0}, highlight box top {:?} left {:?} bottom {:?} right {:?}",
        reader.scroll_offset(),
        drawn.top,
        drawn.left,
        drawn.bottom,
        drawn.right
    );

    log::info!("--- fling fast enough to suppress content rendering ---");
    let fling_from = reader.scroll_offset();
    reader.set_scroll_offset(fling_from - 2500.0);
    reader.tick(clock.advance_millis(50));
    log::info!(
        "normalized velocity {:.2}, content rendering: {}",
        reader.normalized_velocity(),
        reader.should_render_content()
    );
    reader.tick(clock.advance_millis(50));
    log::info!("at rest, content rendering: {}", reader.should_render_content());

    if let Some(mut renderer) = reader.default_renderer() {
        use folio::RenderPage;
        let layout = reader.virtual_items();
        for item in &layout.items {
            if let Some(props) = reader.render_props(item.index) {
                let rendered = renderer.render_page(&props)?;
                log::debug!(
                    "rendered page {} ({}x{})",
                    rendered.page_index,
                    rendered.viewport.width,
                    rendered.viewport.height
                );
            }
        }
    }

    log::info!("done");
    Ok(())
}

/// Logs the materialized window.
fn report_window(reader: &Reader) {
    let layout = reader.virtual_items();
    let indices: Vec<usize> = layout.items.iter().map(|item| item.index).collect();
    log::info!(
        "materialized pages {:?} at offset {:.0}",
        indices,
        reader.scroll_offset()
    );
}

/// Feeds intersection ratios for the pages around the current offset, the
/// way a host's observer would after a scroll settles: leave events for
/// pages that left the window, then fresh ratios for the window.
fn settle_visibility(reader: &mut Reader, observed: &mut Vec<usize>) {
    let offset = reader.scroll_offset();
    let viewport_bottom = offset + VIEWPORT_HEIGHT;
    let layout = reader.virtual_items();

    for &index in observed.iter() {
        if !layout.items.iter().any(|item| item.index == index) {
            reader.record_visibility(index, folio::UNKNOWN_VISIBILITY);
        }
    }
    observed.clear();

    for item in &layout.items {
        let visible_top = item.start.max(offset);
        let visible_bottom = item.end().min(viewport_bottom);
        let ratio = if visible_bottom > visible_top && item.size > 0.0 {
            ((visible_bottom - visible_top) / item.size).clamp(0.0, 1.0)
        } else {
            folio::UNKNOWN_VISIBILITY
        };
        reader.record_visibility(item.index, ratio);
        observed.push(item.index);
    }
}
