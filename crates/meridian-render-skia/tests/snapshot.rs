// File: crates/meridian-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic grouped line chart without text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use meridian_core::{Chart, ChartKind, Target};
use meridian_render_skia::SkiaRasterizer;
use serde_json::json;

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new(
        ChartKind::Line,
        json!({
            "zoomable": true,
            "data": [
                {"x":0,"y":0,"group":"a"}, {"x":1,"y":1,"group":"a"}, {"x":2,"y":0,"group":"a"},
                {"x":0,"y":1.5,"group":"b"}, {"x":1,"y":0.5,"group":"b"}, {"x":2,"y":1,"group":"b"}
            ]
        }),
    );
    chart.render(Target::new("#golden").attached(true).with_size(400.0, 260.0));
    SkiaRasterizer::without_text().render_to_png_bytes(chart.surface().expect("surface")).expect("render")
}

#[test]
fn golden_grouped_line_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("grouped_line.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
