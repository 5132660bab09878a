// File: crates/meridian-core/src/models/multiline.rs
// Summary: Parallel-coordinates chart: one vertical axis per x category, one polyline per group.

use super::{dot, group_class, indices_of, AxesInput, ChartKind, ChartModel, DrawContext};
use crate::attributes::Orient;
use crate::axis::{unique_sorted, Axis, AxisSet, Section, TICK_SIZE};
use crate::scale::{Domain, LinearScale, Scale};
use crate::scene::{Element, Shape};
use crate::types::Datum;

/// Padding between the top axis line and its category labels.
const CATEGORY_PADDING: f64 = 15.0;

pub struct MultilineChart;

impl ChartModel for MultilineChart {
    fn kind(&self) -> ChartKind { ChartKind::Multiline }

    fn axes(&self, input: &AxesInput<'_>) -> AxisSet {
        let (w, h) = (input.inner_width, input.inner_height);
        let attrs = input.attrs;
        let categories = match input.x {
            Domain::Categorical(c) => c.clone(),
            Domain::Continuous(..) => unique_sorted(
                input.data.iter().enumerate().map(|(i, r)| input.accessors.x(r, i).key()),
            ),
        };
        let n = categories.len() as f64;
        let x_domain = input.x.bounds().unwrap_or((-0.5, n - 0.5));
        let xs = LinearScale::new(x_domain, (0.0, w));
        let ys = LinearScale::new(input.y.bounds().filter(|_| attrs.y_range.explicit().is_some()).unwrap_or((0.0, 1.0)), (h, 0.0));

        let mut x_axis = Axis::for_scale(&Scale::Linear(xs), Orient::Top, None, None, 0.0);
        x_axis.ticks = categories
            .iter()
            .enumerate()
            .filter(|(i, _)| {
                let p = xs.map(*i as f64);
                (0.0..=w).contains(&p)
            })
            .map(|(i, c)| crate::axis::Tick { value: Datum::Category(c.clone()), position: xs.map(i as f64), label: c.clone() })
            .collect();
        x_axis.tick_padding = CATEGORY_PADDING;
        x_axis.show_domain = false;
        x_axis.placement = attrs.x_axis;

        let mut y_axis = Axis::for_scale(&Scale::Linear(ys), attrs.y_orient, Some(0), None, 0.0);
        y_axis.ticks.clear();
        y_axis.show_domain = false;

        let sections = categories
            .iter()
            .enumerate()
            .filter_map(|(i, c)| {
                let position = xs.map(i as f64);
                if !(0.0..=w).contains(&position) { return None; }
                let domain = attrs.yranges.get(c).copied().unwrap_or_else(|| {
                    let values = input.data.iter().enumerate().filter_map(|(j, r)| {
                        (input.accessors.x(r, j).key() == *c).then(|| input.accessors.y(r, j).as_f64()).flatten()
                    });
                    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
                    if lo.is_finite() { (lo, hi) } else { (0.0, 0.0) }
                });
                let mut axis = Axis::for_scale(
                    &Scale::Linear(LinearScale::new(domain, (h, 0.0))),
                    Orient::Left,
                    attrs.y_ticks.explicit().copied(),
                    attrs.y_format_spec(),
                    TICK_SIZE,
                );
                axis.placement = attrs.y_axis;
                Some(Section { category: c.clone(), position, scale: LinearScale::new(domain, (0.0, 1.0)), axis })
            })
            .collect();

        AxisSet {
            x_scale: Scale::Linear(xs),
            y_scale: Scale::Linear(ys),
            x_axis,
            y_axis,
            x_groups: Some(categories),
            y_groups: None,
            sections,
        }
    }

    fn draw(&self, ctx: &DrawContext<'_>, out: &mut Vec<Element>) {
        let Some(categories) = ctx.axes.x_groups.as_ref() else { return };
        let (Some(xs), Some(ys)) = (ctx.axes.x_scale.as_linear(), ctx.axes.y_scale.as_linear()) else { return };
        let attrs = ctx.attrs;

        for group in ctx.palette.domain() {
            let mut verts: Vec<(usize, f64, f64, usize)> = Vec::new();
            for i in indices_of(ctx, group) {
                let r = &ctx.data[i];
                let key = ctx.accessors.x(r, i).key();
                let Some(k) = categories.iter().position(|c| *c == key) else { continue };
                let Some(section) = ctx.axes.sections.iter().find(|s| s.category == key) else { continue };
                let Some(v) = ctx.accessors.y(r, i).as_f64() else { continue };
                verts.push((k, xs.map(k as f64), ys.map(section.scale.map(v)), i));
            }
            verts.sort_by_key(|v| v.0);
            if verts.is_empty() { continue; }

            let color = ctx.palette.color(group);
            let points: Vec<(f64, f64)> = verts.iter().map(|v| (v.1, v.2)).collect();
            out.push(
                Element::new(Shape::Path { points, closed: false })
                    .class(&format!("line {}", group_class(group)))
                    .group(group)
                    .stroke(color, attrs.size)
                    .opacity(attrs.opacity)
                    .visible(!ctx.toggles.contains(group))
                    .clipped(),
            );
            if attrs.points > 0.0 {
                for v in &verts {
                    out.push(dot(ctx, group, v.3, v.1, v.2, attrs.points, "dot"));
                }
            }
        }
    }
}
