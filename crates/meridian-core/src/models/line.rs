// File: crates/meridian-core/src/models/line.rs
// Summary: Line, area and stacked-area charts with optional vertex points.

use std::collections::HashMap;

use super::{dot, group_class, indices_of, ChartKind, ChartModel, DrawContext};
use crate::attributes::Layout;
use crate::scale::Scale;
use crate::scene::{Element, Shape};
use crate::types::Datum;

pub struct LineChart;

impl ChartModel for LineChart {
    fn kind(&self) -> ChartKind { ChartKind::Line }

    fn draw(&self, ctx: &DrawContext<'_>, out: &mut Vec<Element>) {
        let attrs = ctx.attrs;
        let xs = &ctx.axes.x_scale;
        let ys = &ctx.axes.y_scale;
        let base = baseline(ys);
        let mut stack: HashMap<String, f64> = HashMap::new();

        for group in ctx.palette.domain() {
            let mut verts: Vec<(f64, f64, f64, usize)> = Vec::new();
            for i in indices_of(ctx, group) {
                let r = &ctx.data[i];
                let x = ctx.accessors.x(r, i);
                let y = ctx.accessors.y(r, i);
                let Some(px) = xs.map(&x) else { continue };
                let (py, pb) = match (attrs.layout, y.as_f64()) {
                    (Layout::Stacked, Some(v)) => {
                        let under = stack.get(&x.key()).copied().unwrap_or(0.0);
                        stack.insert(x.key(), under + v);
                        (ys.map(&Datum::Number(under + v)), ys.map(&Datum::Number(under)))
                    }
                    _ => (ys.map(&y), Some(base)),
                };
                let (Some(py), Some(pb)) = (py, pb) else { continue };
                verts.push((px, py, pb, i));
            }
            verts.sort_by(|a, b| a.0.total_cmp(&b.0));
            if verts.is_empty() { continue; }

            let color = ctx.palette.color(group);
            let hidden = ctx.toggles.contains(group);
            let top: Vec<(f64, f64)> = verts.iter().map(|v| (v.0, v.1)).collect();
            let path = match attrs.layout {
                Layout::Line => Element::new(Shape::Path { points: top, closed: false })
                    .stroke(color, attrs.size)
                    .opacity(attrs.opacity),
                Layout::Area | Layout::Stacked => {
                    let mut ring = top;
                    ring.extend(verts.iter().rev().map(|v| (v.0, v.2)));
                    Element::new(Shape::Path { points: ring, closed: true })
                        .fill(color)
                        .fill_opacity(attrs.opacity)
                        .stroke(color, 1.0)
                }
            };
            out.push(path.class(&format!("line {}", group_class(group))).group(group).visible(!hidden).clipped());

            if attrs.points > 0.0 {
                for v in &verts {
                    out.push(dot(ctx, group, v.3, v.0, v.1, attrs.points, "dot"));
                }
            }
        }
    }
}

/// Pixel row areas fill down to: zero when in view, else the bottom of the domain.
fn baseline(ys: &Scale) -> f64 {
    match ys {
        Scale::Linear(s) => {
            let (lo, hi) = s.extent();
            s.map(if lo <= 0.0 && hi >= 0.0 { 0.0 } else { lo })
        }
        Scale::Point(s) => s.range.0,
    }
}
