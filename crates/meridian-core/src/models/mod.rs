// File: crates/meridian-core/src/models/mod.rs
// Summary: Chart kinds and the model trait each kind implements (data prep, axes, drawing).

pub mod histogram;
pub mod line;
pub mod multiline;
pub mod pie;
pub mod scatter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::accessor::Accessors;
use crate::attributes::{self, Attributes};
use crate::axis::{self, AxisSet, DataDomains};
use crate::error::ChartError;
use crate::legend::ToggleSet;
use crate::palette::Palette;
use crate::scale::Domain;
use crate::scene::{Element, Shape};
use crate::types::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Scatter,
    Histogram,
    Pie,
    Multiline,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] =
        [ChartKind::Line, ChartKind::Scatter, ChartKind::Histogram, ChartKind::Pie, ChartKind::Multiline];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Pie => "pie",
            ChartKind::Multiline => "multiline",
        }
    }

    /// Kind-specific defaults merged over the base defaults.
    pub fn overlay(&self) -> Value {
        match self {
            ChartKind::Line => attributes::line_overlay(),
            ChartKind::Scatter => attributes::scatter_overlay(),
            ChartKind::Histogram => attributes::histogram_overlay(),
            ChartKind::Pie => attributes::pie_overlay(),
            ChartKind::Multiline => attributes::multiline_overlay(),
        }
    }

    pub fn model(&self) -> Box<dyn ChartModel> {
        match self {
            ChartKind::Line => Box::new(line::LineChart),
            ChartKind::Scatter => Box::new(scatter::ScatterChart),
            ChartKind::Histogram => Box::new(histogram::HistogramChart),
            ChartKind::Pie => Box::new(pie::PieChart),
            ChartKind::Multiline => Box::new(multiline::MultilineChart),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownKind(s.to_string()))
    }
}

/// Inputs for building a draw's scales and axes.
pub struct AxesInput<'a> {
    pub data: &'a [Record],
    pub attrs: &'a Attributes,
    pub accessors: &'a Accessors,
    pub x: &'a Domain,
    pub y: &'a Domain,
    pub inner_width: f64,
    pub inner_height: f64,
}

/// Everything a model needs to emit its marks for one draw.
pub struct DrawContext<'a> {
    pub data: &'a [Record],
    pub attrs: &'a Attributes,
    pub accessors: &'a Accessors,
    pub axes: &'a AxisSet,
    pub palette: &'a Palette,
    pub toggles: &'a ToggleSet,
    pub inner_width: f64,
    pub inner_height: f64,
    /// Seed jitter draws are derived from; fixed per render so redraws do not move points.
    pub jitter_seed: u64,
}

pub trait ChartModel {
    fn kind(&self) -> ChartKind;

    /// Reshape accessor-transformed data before domains are derived.
    fn prepare(&self, data: Vec<Record>, _attrs: &Attributes, _acc: &Accessors) -> Vec<Record> { data }

    /// True when `prepare` emits records in the canonical x/y/group fields, so the
    /// caller's x/y/group accessors no longer apply to them.
    fn reshapes(&self) -> bool { false }

    fn adjust_domains(&self, _domains: &mut DataDomains, _attrs: &Attributes) {}

    fn uses_axes(&self) -> bool { true }

    fn axes(&self, input: &AxesInput<'_>) -> AxisSet {
        axis::build_axes(input.x, input.y, input.attrs, input.inner_width, input.inner_height)
    }

    fn draw(&self, ctx: &DrawContext<'_>, out: &mut Vec<Element>);
}

// ---- helpers shared by models ----

/// Class tagging every mark of a group, used for toggling.
pub(crate) fn group_class(group: &str) -> String { format!("g_{group}") }

/// Point marker for line vertices and scatter dots.
pub(crate) fn dot(ctx: &DrawContext<'_>, group: &str, index: usize, x: f64, y: f64, r: f64, class: &str) -> Element {
    Element::new(Shape::Circle { cx: x, cy: y, r })
        .class(&format!("{class} {}", group_class(group)))
        .group(group)
        .datum(index)
        .fill(ctx.palette.color(group))
        .opacity(ctx.attrs.opacity)
        .visible(!ctx.toggles.contains(group))
        .clipped()
}

/// Record indices of `group`, in data order.
pub(crate) fn indices_of(ctx: &DrawContext<'_>, group: &str) -> Vec<usize> {
    ctx.data
        .iter()
        .enumerate()
        .filter(|(i, r)| ctx.accessors.group(r, *i) == group)
        .map(|(i, _)| i)
        .collect()
}
