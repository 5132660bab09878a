// File: crates/meridian-core/src/models/pie.rs
// Summary: Pie/donut chart: aggregates each group to one slice and labels slices at centroids.

use indexmap::IndexMap;
use std::f64::consts::TAU;

use super::{group_class, ChartKind, ChartModel, DrawContext};
use crate::accessor::Accessors;
use crate::attributes::Attributes;
use crate::scene::{Anchor, Element, Shape};
use crate::theme::Color;
use crate::types::Record;

pub struct PieChart;

/// One slice per group (sorted by key); the slice value is the group's aggregated x values.
pub fn aggregate(data: &[Record], acc: &Accessors) -> Vec<Record> {
    let mut per_group: IndexMap<String, Vec<f64>> = IndexMap::new();
    for (i, r) in data.iter().enumerate() {
        if let Some(v) = acc.x(r, i).as_f64() {
            per_group.entry(acc.group(r, i)).or_default().push(v);
        }
    }
    per_group.sort_keys();
    per_group
        .into_iter()
        .map(|(g, values)| {
            let v = (acc.aggregate)(&values);
            Record::new(v, v).with_group(g.clone()).with_label(g)
        })
        .collect()
}

/// Start/end angles (radians, clockwise from 12 o'clock) for each value; non-positive values get empty slices.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut at = 0.0;
    values
        .iter()
        .map(|v| {
            let span = if total > 0.0 && *v > 0.0 { v / total * TAU } else { 0.0 };
            let s = (at, at + span);
            at += span;
            s
        })
        .collect()
}

impl ChartModel for PieChart {
    fn kind(&self) -> ChartKind { ChartKind::Pie }

    fn prepare(&self, data: Vec<Record>, _attrs: &Attributes, acc: &Accessors) -> Vec<Record> {
        aggregate(&data, acc)
    }

    fn reshapes(&self) -> bool { true }

    fn uses_axes(&self) -> bool { false }

    fn draw(&self, ctx: &DrawContext<'_>, out: &mut Vec<Element>) {
        let (w, h) = (ctx.inner_width, ctx.inner_height);
        let (cx, cy) = (w / 2.0, h / 2.0);
        let outer = ctx.attrs.radius.resolve(|| w.min(h) / 2.0);
        let inner = ctx.attrs.inner.resolve(|| 0.0).clamp(0.0, outer);
        let values: Vec<f64> = ctx.data.iter().map(|r| r.x.as_f64().unwrap_or(0.0)).collect();
        let mut labels = Vec::new();

        for (i, (r, (start, end))) in ctx.data.iter().zip(slice_angles(&values)).enumerate() {
            let group = ctx.accessors.group(r, i);
            let visible = !ctx.toggles.contains(&group);
            out.push(
                Element::new(Shape::Arc { cx, cy, inner, outer, start, end })
                    .class(&format!("arc {}", group_class(&group)))
                    .group(&group)
                    .datum(i)
                    .fill(ctx.palette.color(&group))
                    .stroke(Color::WHITE, 1.0)
                    .opacity(ctx.attrs.opacity)
                    .visible(visible),
            );
            if !ctx.attrs.legend {
                continue;
            }
            let mid = (start + end) / 2.0;
            let rr = (inner + outer) / 2.0;
            labels.push(
                Element::new(Shape::Text {
                    x: cx + rr * mid.sin(),
                    y: cy - rr * mid.cos(),
                    text: ctx.accessors.label(r, i),
                    anchor: Anchor::Middle,
                    rotate: 0.0,
                })
                .class(&format!("arc-label {}", group_class(&group)))
                .group(&group)
                .datum(i)
                .fill(Color::WHITE)
                .visible(visible),
            );
        }
        out.extend(labels);
    }
}
