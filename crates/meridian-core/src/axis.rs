// File: crates/meridian-core/src/axis.rs
// Summary: Domain derivation, axis descriptors (ticks, labels) and axis drawing.

use crate::accessor::Accessors;
use crate::attributes::{Attributes, AxisPlacement, LabelPosition, Layout, Orient};
use crate::format;
use crate::grid::DEFAULT_TICKS;
use crate::scale::{Domain, LinearScale, Scale};
use crate::scene::{Anchor, Element, Shape};
use crate::theme::Color;
use crate::types::{Datum, Offset, Record};

pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;

/// Data-derived extents of both axes, before any configured range applies.
#[derive(Clone, Debug, PartialEq)]
pub struct DataDomains {
    pub x: Domain,
    pub y: Domain,
}

/// Sorted, de-duplicated string keys.
pub fn unique_sorted(keys: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut v: Vec<String> = keys.into_iter().collect();
    v.sort();
    v.dedup();
    v
}

/// Extent of a column: categorical when the first value is, `[min, max]` otherwise,
/// `[0, 0]` when empty.
pub fn domain_of(values: &[Datum]) -> Domain {
    match values.first() {
        None => Domain::Continuous(0.0, 0.0),
        Some(Datum::Category(_)) => Domain::Categorical(unique_sorted(values.iter().map(Datum::key))),
        Some(Datum::Number(_)) => {
            let nums = values.iter().filter_map(|d| match d {
                Datum::Number(v) if v.is_finite() => Some(*v),
                Datum::Category(s) => s.parse::<f64>().ok(),
                _ => None,
            });
            let (lo, hi) = nums.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
            if lo.is_finite() { Domain::Continuous(lo, hi) } else { Domain::Continuous(0.0, 0.0) }
        }
    }
}

/// X and y extents of `data` through the accessors. With a stacked layout the y maximum is
/// the largest per-x sum of y values and the minimum stays the smallest single y.
pub fn derive_domains(data: &[Record], acc: &Accessors, layout: Layout) -> DataDomains {
    let xs: Vec<Datum> = data.iter().enumerate().map(|(i, r)| acc.x(r, i)).collect();
    let ys: Vec<Datum> = data.iter().enumerate().map(|(i, r)| acc.y(r, i)).collect();
    let x = domain_of(&xs);
    let mut y = domain_of(&ys);
    if layout == Layout::Stacked {
        if let Domain::Continuous(lo, _) = y {
            let mut sums: indexmap::IndexMap<String, f64> = indexmap::IndexMap::new();
            for (xv, yv) in xs.iter().zip(&ys) {
                *sums.entry(xv.key()).or_insert(0.0) += yv.as_f64().unwrap_or(0.0);
            }
            let hi = sums.values().copied().fold(f64::NEG_INFINITY, f64::max);
            if hi.is_finite() { y = Domain::Continuous(lo, hi); }
        }
    }
    DataDomains { x, y }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: Datum,
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub placement: AxisPlacement,
    pub ticks: Vec<Tick>,
    /// Positive ticks point away from the plot; negative sizes span it (grid lines).
    pub tick_size: f64,
    pub tick_padding: f64,
    pub range: (f64, f64),
    pub show_domain: bool,
}

impl Axis {
    pub fn for_scale(scale: &Scale, orient: Orient, count: Option<usize>, spec: Option<&str>, tick_size: f64) -> Self {
        let ticks = match scale {
            Scale::Linear(s) => {
                let n = count.unwrap_or(DEFAULT_TICKS);
                let step = s.tick_step(n);
                s.ticks(n)
                    .into_iter()
                    .map(|v| Tick { value: Datum::Number(v), position: s.map(v), label: format::format_value(spec, v, step) })
                    .collect()
            }
            Scale::Point(s) => s
                .domain
                .iter()
                .zip(s.positions())
                .map(|(c, p)| Tick { value: Datum::Category(c.clone()), position: p, label: c.clone() })
                .collect(),
        };
        Self {
            orient,
            placement: AxisPlacement::Outside,
            ticks,
            tick_size,
            tick_padding: TICK_PADDING,
            range: scale.range(),
            show_domain: true,
        }
    }

    pub fn is_horizontal(&self) -> bool { matches!(self.orient, Orient::Top | Orient::Bottom) }
}

/// One per-category vertical axis of a multiline chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub category: String,
    /// Pixel x of the section's axis.
    pub position: f64,
    /// Section values -> normalized [0, 1].
    pub scale: LinearScale,
    pub axis: Axis,
}

/// Scales and axis descriptors for one draw.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSet {
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_groups: Option<Vec<String>>,
    pub y_groups: Option<Vec<String>>,
    pub sections: Vec<Section>,
}

/// Scales and axes for `data` under `attrs`, honouring configured x/y ranges.
pub fn derive_axes(data: &[Record], attrs: &Attributes, acc: &Accessors, inner_width: f64, inner_height: f64) -> AxisSet {
    let d = derive_domains(data, acc, attrs.layout);
    let x = attrs.x_range.resolve(|| d.x.clone());
    let y = attrs.y_range.resolve(|| d.y.clone());
    build_axes(&x, &y, attrs, inner_width, inner_height)
}

/// Scales and axes for already-resolved domains. X spans [0, width]; y spans [height, 0].
pub fn build_axes(x: &Domain, y: &Domain, attrs: &Attributes, inner_width: f64, inner_height: f64) -> AxisSet {
    let x_scale = Scale::for_domain(x, (0.0, inner_width));
    let y_scale = Scale::for_domain(y, (inner_height, 0.0));
    let x_size = if attrs.grid { -inner_height } else { TICK_SIZE };
    let y_size = if attrs.grid { -inner_width } else { TICK_SIZE };
    let mut x_axis = Axis::for_scale(&x_scale, attrs.x_orient, attrs.x_ticks.explicit().copied(), attrs.x_format_spec(), x_size);
    let mut y_axis = Axis::for_scale(&y_scale, attrs.y_orient, attrs.y_ticks.explicit().copied(), attrs.y_format_spec(), y_size);
    x_axis.placement = attrs.x_axis;
    y_axis.placement = attrs.y_axis;
    AxisSet {
        x_scale,
        y_scale,
        x_axis,
        y_axis,
        x_groups: x.categories().map(<[String]>::to_vec),
        y_groups: y.categories().map(<[String]>::to_vec),
        sections: Vec::new(),
    }
}

/// Axis title placement and text.
#[derive(Clone, Debug)]
pub struct AxisTitle<'a> {
    pub text: &'a str,
    pub position: LabelPosition,
    pub padding: Offset,
}

/// Emit the primitives for one axis. `origin` is the axis line's position in plot coordinates;
/// `extent` is the plot's (width, height), used for title placement.
pub fn draw_axis(axis: &Axis, class: &str, origin: (f64, f64), extent: (f64, f64), title: Option<AxisTitle<'_>>, out: &mut Vec<Element>) {
    if axis.placement == AxisPlacement::Hidden { return; }
    let (ox, oy) = origin;
    let stroke = Color::BLACK;
    let text = Color::from_rgb(0x33, 0x33, 0x33);
    let reach = axis.tick_size.max(0.0) + axis.tick_padding;
    let cls = format!("{class} axis");

    if axis.show_domain {
        let (r0, r1) = axis.range;
        let shape = if axis.is_horizontal() {
            Shape::Line { x1: ox + r0, y1: oy, x2: ox + r1, y2: oy }
        } else {
            Shape::Line { x1: ox, y1: oy + r0, x2: ox, y2: oy + r1 }
        };
        out.push(Element::new(shape).class(&format!("{cls} domain")).stroke(stroke, 1.0));
    }

    for t in &axis.ticks {
        let p = t.position;
        let (line, label) = match axis.orient {
            Orient::Bottom => (
                Shape::Line { x1: ox + p, y1: oy, x2: ox + p, y2: oy + axis.tick_size },
                Shape::Text { x: ox + p, y: oy + reach + 9.0, text: t.label.clone(), anchor: Anchor::Middle, rotate: 0.0 },
            ),
            Orient::Top => (
                Shape::Line { x1: ox + p, y1: oy, x2: ox + p, y2: oy - axis.tick_size },
                Shape::Text { x: ox + p, y: oy - reach, text: t.label.clone(), anchor: Anchor::Middle, rotate: 0.0 },
            ),
            Orient::Left => (
                Shape::Line { x1: ox, y1: oy + p, x2: ox - axis.tick_size, y2: oy + p },
                Shape::Text { x: ox - reach, y: oy + p + 3.0, text: t.label.clone(), anchor: Anchor::End, rotate: 0.0 },
            ),
            Orient::Right => (
                Shape::Line { x1: ox, y1: oy + p, x2: ox + axis.tick_size, y2: oy + p },
                Shape::Text { x: ox + reach, y: oy + p + 3.0, text: t.label.clone(), anchor: Anchor::Start, rotate: 0.0 },
            ),
        };
        if axis.tick_size != 0.0 {
            out.push(Element::new(line).class(&format!("{cls} tick")).stroke(stroke, 1.0));
        }
        out.push(Element::new(label).class(&format!("{cls} tick")).fill(text));
    }

    let Some(title) = title else { return };
    if title.text.is_empty() { return; }
    let (w, h) = extent;
    let anchor = match title.position {
        LabelPosition::Beginning => Anchor::Start,
        LabelPosition::Middle => Anchor::Middle,
        LabelPosition::End => Anchor::End,
    };
    let inside = axis.placement == AxisPlacement::Inside;
    let shape = if axis.is_horizontal() {
        let x = match title.position {
            LabelPosition::End => w,
            LabelPosition::Middle => w / 2.0,
            LabelPosition::Beginning => 0.0,
        };
        let y = if inside { -6.0 } else { 35.0 } + title.padding.x;
        Shape::Text { x: ox + x, y: oy + y, text: title.text.to_string(), anchor, rotate: 0.0 }
    } else {
        // rotated -90 degrees: frame (rx, ry) lands at (ry, -rx)
        let rx = match title.position {
            LabelPosition::End => 0.0,
            LabelPosition::Middle => -h / 2.0,
            LabelPosition::Beginning => -h,
        };
        let ry = if inside { 6.0 } else { -40.0 } + title.padding.y;
        Shape::Text { x: ox + ry, y: oy - rx, text: title.text.to_string(), anchor, rotate: -90.0 }
    };
    out.push(Element::new(shape).class(&format!("{cls} label")).fill(text));
}
