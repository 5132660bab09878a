// File: crates/meridian-core/src/models/histogram.rs
// Summary: Histogram: bins x values per group and draws counts as bars.

use indexmap::IndexMap;

use super::{group_class, AxesInput, ChartKind, ChartModel, DrawContext};
use crate::accessor::Accessors;
use crate::attributes::Attributes;
use crate::axis::{self, Axis, AxisSet, DataDomains};
use crate::grid;
use crate::scale::Domain;
use crate::scene::{Element, Shape};
use crate::types::{Datum, Record};

pub struct HistogramChart;

/// Bin `data` per group into `bins` equal-width bins over the global x extent. Each output
/// record is one bin: x = bin start, y = count. Every group gets every bin.
pub fn bin(data: &[Record], acc: &Accessors, bins: usize) -> Vec<Record> {
    let bins = bins.max(1);
    let mut per_group: IndexMap<String, Vec<f64>> = IndexMap::new();
    for (i, r) in data.iter().enumerate() {
        let Some(v) = acc.x(r, i).as_f64().filter(|v| v.is_finite()) else { continue };
        per_group.entry(acc.group(r, i)).or_default().push(v);
    }
    let all = per_group.values().flatten().copied();
    let (lo, hi) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() { return Vec::new(); }
    let width = if hi > lo { (hi - lo) / bins as f64 } else { 1.0 };
    let starts = grid::linspace(lo, lo + width * (bins as f64 - 1.0), bins);
    per_group.sort_keys();

    let mut out = Vec::with_capacity(per_group.len() * bins);
    for (group, values) in &per_group {
        let mut counts = vec![0usize; bins];
        for v in values {
            let k = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[k] += 1;
        }
        for (start, count) in starts.iter().zip(counts) {
            out.push(Record::new(*start, count as f64).with_group(group.clone()).with_label(count.to_string()));
        }
    }
    out
}

/// Bin width recovered from binned records (bin starts are evenly spaced).
fn bin_width(data: &[Record], bins: usize) -> f64 {
    let (lo, hi) = data
        .iter()
        .filter_map(|r| r.x.as_f64())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if bins > 1 && hi > lo { (hi - lo) / (bins as f64 - 1.0) } else { 1.0 }
}

impl ChartModel for HistogramChart {
    fn kind(&self) -> ChartKind { ChartKind::Histogram }

    fn prepare(&self, data: Vec<Record>, attrs: &Attributes, acc: &Accessors) -> Vec<Record> {
        bin(&data, acc, attrs.bins)
    }

    fn reshapes(&self) -> bool { true }

    /// Extend the x domain by one bin so the last bar fits.
    fn adjust_domains(&self, domains: &mut DataDomains, attrs: &Attributes) {
        if let Domain::Continuous(d0, d1) = domains.x {
            if attrs.bins > 1 {
                domains.x = Domain::Continuous(d0, d1 + (d1 - d0) / (attrs.bins as f64 - 1.0));
            }
        }
    }

    fn axes(&self, input: &AxesInput<'_>) -> AxisSet {
        let mut set = axis::build_axes(input.x, input.y, input.attrs, input.inner_width, input.inner_height);
        if input.attrs.x_ticks.is_auto() {
            let mut x_axis = Axis::for_scale(&set.x_scale, input.attrs.x_orient, Some(input.attrs.bins), input.attrs.x_format_spec(), set.x_axis.tick_size);
            x_axis.placement = set.x_axis.placement;
            set.x_axis = x_axis;
        }
        set
    }

    fn draw(&self, ctx: &DrawContext<'_>, out: &mut Vec<Element>) {
        let width = bin_width(ctx.data, ctx.attrs.bins);
        let bottom = ctx.inner_height;
        for (i, r) in ctx.data.iter().enumerate() {
            let group = ctx.accessors.group(r, i);
            let Some(start) = r.x.as_f64() else { continue };
            let (Some(x0), Some(x1), Some(y)) = (
                ctx.axes.x_scale.map(&Datum::Number(start)),
                ctx.axes.x_scale.map(&Datum::Number(start + width)),
                ctx.axes.y_scale.map(&r.y),
            ) else {
                continue;
            };
            let left = x0.min(x1);
            let w = ((x1 - x0).abs() - 1.0).max(0.0);
            out.push(
                Element::new(Shape::Rect { x: left, y: y.min(bottom), width: w, height: (bottom - y).max(0.0), rx: 0.0 })
                    .class(&format!("bar {}", group_class(&group)))
                    .group(&group)
                    .datum(i)
                    .fill(ctx.palette.color(&group))
                    .opacity(ctx.attrs.opacity)
                    .visible(!ctx.toggles.contains(&group))
                    .clipped(),
            );
        }
    }
}
