// File: crates/frontier-core/tests/render_smoke.rs
// Purpose: Basic end-to-end render checks: PNG header, RGBA buffer shape,
// and background pixels.

use chrono::NaiveDate;

use frontier_core::{ChartAdapter, Dataset, RenderOptions};

fn adapter() -> ChartAdapter {
    ChartAdapter::with_today(
        Dataset::builtin(),
        NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date"),
    )
}

#[test]
fn render_rgba8_buffer_shape() {
    let mut adapter = adapter();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = adapter.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(px.len(), w as usize * h as usize * 4);
    assert_eq!(stride, w as usize * 4);

    // Top-left pixel is opaque background.
    assert_eq!(px[3], 255);
}

#[test]
fn render_smoke_png() {
    let mut adapter = adapter();
    let opts = RenderOptions::default();

    let bytes = adapter.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    adapter.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Decoded dimensions match the requested surface.
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!(img.width(), opts.width as u32);
    assert_eq!(img.height(), opts.height as u32);
}

#[test]
fn redundant_renders_are_stable() {
    let mut adapter = adapter();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (first, ..) = adapter.render_to_rgba8(&opts).expect("first render");
    let (second, ..) = adapter.render_to_rgba8(&opts).expect("second render");
    assert_eq!(first, second, "rendering is idempotent for identical state");
}
