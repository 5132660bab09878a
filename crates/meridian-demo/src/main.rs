// File: crates/meridian-demo/src/main.rs
// Summary: Demo loads grouped records from CSV (or synthesizes them), replays a scripted
// interaction session on each chart kind and writes PNG and SVG exports.

use anyhow::{Context, Result};
use meridian_core::{logging, settings};
use meridian_core::{ChartEvent, ChartId, ChartKind, InputEvent, Modifier, Record, Registry, SvgExporter, Target};
use meridian_render_skia::export_to_image;
use serde_json::json;
use std::path::{Path, PathBuf};

const OUT_DIR: &str = "target/out";
const LEFT: f64 = 40.0;
const TOP: f64 = 20.0;

fn main() -> Result<()> {
    logging::init();
    settings::set_debug(std::env::var("MERIDIAN_DEBUG").is_ok_and(|v| v == "1"));
    settings::set_seed(7);

    let records = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            load_records_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => synth_records(120, 3),
    };
    if records.is_empty() {
        anyhow::bail!("no records loaded; check headers (x, y, group, label).");
    }
    tracing::info!(records = records.len(), "input ready");

    let out = PathBuf::from(OUT_DIR);
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;

    let mut registry = Registry::new();
    let mut ids: Vec<(ChartId, ChartKind)> = Vec::new();
    for kind in [ChartKind::Line, ChartKind::Scatter, ChartKind::Multiline, ChartKind::Histogram, ChartKind::Pie] {
        let id = registry.create(
            kind,
            json!({
                "plotname": format!("demo-{kind}"),
                "zoomable": true,
                "annotatable": true,
                "exportable": true
            }),
        );
        let Some(chart) = registry.get_mut(id) else { continue };
        chart.set_data(records.clone());
        chart.on(|e: &ChartEvent| tracing::info!(event = e.name(), "chart event"));
        chart.render(Target::new(format!("#demo-{kind}")).attached(true));
        ids.push((id, kind));
    }

    // Box zoom, then undo it with a double-click.
    for (id, _) in &ids {
        let Some(chart) = registry.get_mut(*id) else { continue };
        drag(chart, (120.0, 80.0), (480.0, 360.0));
        chart.handle(InputEvent::DoubleClick { x: LEFT + 10.0, y: TOP + 10.0 });
    }

    // Shift held: every chart pans together.
    registry.modifier_down(Modifier::Shift);
    for (_, chart) in registry.iter_mut() {
        drag(chart, (400.0, 300.0), (460.0, 300.0));
    }
    registry.modifier_up(Modifier::Shift);

    // Hide the first legend group and drop an annotation on every chart.
    registry.modifier_down(Modifier::ShiftA);
    for (_, chart) in registry.iter_mut() {
        let selector = chart.legend_layout().and_then(|l| l.entries.first()).map(|e| e.selector);
        if let Some(r) = selector {
            chart.handle(InputEvent::Click { x: (r.left + r.right) / 2.0, y: (r.top + r.bottom) / 2.0 });
        }
        chart.handle(InputEvent::Click { x: LEFT + 300.0, y: TOP + 200.0 });
    }
    registry.modifier_up(Modifier::ShiftA);

    for (id, kind) in &ids {
        let Some(chart) = registry.get_mut(*id) else { continue };
        let name = format!("chart_{kind}");
        let png = export_to_image(chart, &out, &name).with_context(|| format!("exporting {name} as png"))?;
        chart.set_exporter(SvgExporter::new(&out));
        let svg = chart.export(&name).with_context(|| format!("exporting {name} as svg"))?;
        println!("Wrote {} and {}", png.display(), svg.display());
    }
    Ok(())
}

fn drag(chart: &mut meridian_core::Chart, from: (f64, f64), to: (f64, f64)) {
    chart.handle(InputEvent::PointerDown { x: LEFT + from.0, y: TOP + from.1 });
    chart.handle(InputEvent::PointerMove { x: LEFT + to.0, y: TOP + to.1 });
    chart.handle(InputEvent::PointerUp { x: LEFT + to.0, y: TOP + to.1 });
}

/// Grouped waveforms with a little drift, one label per tenth point.
fn synth_records(n: usize, groups: usize) -> Vec<Record> {
    let mut out = Vec::with_capacity(n * groups);
    for g in 0..groups {
        for i in 0..n {
            let x = i as f64;
            let y = (x * 0.08 + g as f64).sin() * 10.0 + 12.0 + x * 0.05 * g as f64;
            let mut r = Record::new(x, y).with_group(format!("series {}", g + 1));
            if i % 10 == 0 {
                r = r.with_label(format!("p{i}"));
            }
            out.push(r);
        }
    }
    out
}

/// Load records from a CSV with `x` and `y` columns and optional `group` and `label`.
fn load_records_csv(path: &Path) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");
    let idx = |name: &str| headers.iter().position(|h| h == name);
    let (Some(ix), Some(iy)) = (idx("x"), idx("y")) else {
        anyhow::bail!("{} needs x and y columns", path.display());
    };
    let (ig, il) = (idx("group"), idx("label"));

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let (Some(xs), Some(ys)) = (rec.get(ix), rec.get(iy)) else { continue };
        let Ok(y) = ys.trim().parse::<f64>() else {
            tracing::warn!(row = ?rec.position().map(|p| p.line()), "skipping row with non-numeric y");
            continue;
        };
        let mut r = match xs.trim().parse::<f64>() {
            Ok(x) => Record::new(x, y),
            Err(_) => Record::new(xs.trim().to_string(), y),
        };
        if let Some(g) = ig.and_then(|i| rec.get(i)).filter(|s| !s.is_empty()) {
            r = r.with_group(g);
        }
        if let Some(l) = il.and_then(|i| rec.get(i)).filter(|s| !s.is_empty()) {
            r = r.with_label(l);
        }
        out.push(r);
    }
    Ok(out)
}
