// File: crates/meridian-core/src/models/scatter.rs
// Summary: Scatter plot with seeded jitter and optional marginal density ticks.

use super::{dot, group_class, ChartKind, ChartModel, DrawContext};
use crate::scene::{Element, Shape};
use crate::settings;

/// Length of the marginal density ticks.
const DENSITY_TICK: f64 = 10.0;

pub struct ScatterChart;

impl ScatterChart {
    /// Jitter offsets for record `i`; stable for a given seed.
    pub fn jitter(seed: u64, i: usize, x_amount: f64, y_amount: f64) -> (f64, f64) {
        let k = seed.wrapping_add(2 * i as u64);
        let jx = if x_amount == 0.0 { 0.0 } else { (settings::pseudorandom(k) - 0.5) * x_amount };
        let jy = if y_amount == 0.0 { 0.0 } else { (settings::pseudorandom(k + 1) - 0.5) * y_amount };
        (jx, jy)
    }
}

impl ChartModel for ScatterChart {
    fn kind(&self) -> ChartKind { ChartKind::Scatter }

    fn draw(&self, ctx: &DrawContext<'_>, out: &mut Vec<Element>) {
        let attrs = ctx.attrs;
        let mut ticks = Vec::new();
        for (i, r) in ctx.data.iter().enumerate() {
            let group = ctx.accessors.group(r, i);
            let (Some(px), Some(py)) = (ctx.axes.x_scale.map(&ctx.accessors.x(r, i)), ctx.axes.y_scale.map(&ctx.accessors.y(r, i))) else {
                continue;
            };
            let (jx, jy) = Self::jitter(ctx.jitter_seed, i, attrs.x_jitter, attrs.y_jitter);
            let (px, py) = (px + jx, py + jy);
            out.push(dot(ctx, &group, i, px, py, attrs.size, "dot"));

            let color = ctx.palette.color(&group);
            let visible = !ctx.toggles.contains(&group);
            if attrs.x_density {
                let h = ctx.inner_height;
                ticks.push(
                    Element::new(Shape::Line { x1: px, y1: h, x2: px, y2: h - DENSITY_TICK })
                        .class(&format!("xtick {}", group_class(&group)))
                        .group(&group)
                        .stroke(color, 1.0)
                        .opacity(attrs.opacity)
                        .visible(visible),
                );
            }
            if attrs.y_density {
                ticks.push(
                    Element::new(Shape::Line { x1: 0.0, y1: py, x2: DENSITY_TICK, y2: py })
                        .class(&format!("ytick {}", group_class(&group)))
                        .group(&group)
                        .stroke(color, 1.0)
                        .opacity(attrs.opacity)
                        .visible(visible),
                );
            }
        }
        out.extend(ticks);
    }
}
