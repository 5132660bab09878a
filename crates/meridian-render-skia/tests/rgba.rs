// File: crates/meridian-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use meridian_core::{Chart, ChartKind, Target};
use meridian_render_skia::SkiaRasterizer;
use serde_json::json;

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new(ChartKind::Scatter, json!({ "data": [{"x":0,"y":0},{"x":4,"y":4}] }));
    chart.render(Target::new("#rgba").attached(true).with_size(300.0, 200.0));

    let (px, w, h, stride) = SkiaRasterizer::without_text().render_to_rgba8(chart.surface().expect("surface")).expect("rgba render");
    assert_eq!((w, h), (300, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left sits in the margin: plain opaque white
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}
