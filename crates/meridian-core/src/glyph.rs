// File: crates/meridian-core/src/glyph.rs
// Summary: Control glyph column (annotate, pan, refresh, export) beside the plot.

use crate::attributes::{Attributes, MarkerShape};
use crate::geometry::Rect;
use crate::scene::{Anchor, Element, Shape};
use crate::theme::Color;
use crate::view::Modes;

pub const GLYPH_PITCH: f64 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Annotate,
    Pan,
    Refresh,
    Export,
}

impl Control {
    pub fn name(&self) -> &'static str {
        match self {
            Control::Annotate => "annotate",
            Control::Pan => "pan",
            Control::Refresh => "refresh",
            Control::Export => "export",
        }
    }

    /// Hover text.
    pub fn help(&self) -> &'static str {
        match self {
            Control::Annotate => "Add annotations",
            Control::Pan => "Pan (hold shift)",
            Control::Refresh => "Reset view",
            Control::Export => "Export image",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Control::Annotate => "A",
            Control::Pan => "P",
            Control::Refresh => "R",
            Control::Export => "E",
        }
    }

    pub fn is_active(&self, modes: &Modes) -> bool {
        match self {
            Control::Annotate => modes.annotate,
            Control::Pan => modes.pan,
            Control::Refresh | Control::Export => false,
        }
    }
}

/// Controls enabled by the configuration, in column order.
pub fn controls(attrs: &Attributes) -> Vec<Control> {
    let mut v = Vec::new();
    if attrs.annotatable { v.push(Control::Annotate); }
    if attrs.zoomable {
        v.push(Control::Pan);
        v.push(Control::Refresh);
    }
    if attrs.exportable { v.push(Control::Export); }
    v
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphBox {
    pub control: Control,
    /// Bounds in surface coordinates.
    pub rect: Rect,
}

pub fn layout(controls: &[Control], attrs: &Attributes, inner_width: f64, inner_height: f64) -> Vec<GlyphBox> {
    let n = controls.len() as f64;
    let ox = inner_width + attrs.margin.left + 7.0;
    let oy = inner_height - attrs.margin.bottom - n * 22.0 + 52.0;
    controls
        .iter()
        .enumerate()
        .map(|(i, c)| GlyphBox { control: *c, rect: Rect::from_ltwh(ox, oy + i as f64 * GLYPH_PITCH - 4.0, 22.0, 22.0) })
        .collect()
}

pub fn draw(boxes: &[GlyphBox], shape: MarkerShape, modes: &Modes, out: &mut Vec<Element>) {
    let stroke = Color::from_rgb(0x55, 0x55, 0x55);
    for b in boxes {
        let r = &b.rect;
        let frame = match shape {
            MarkerShape::Circle => Shape::Circle { cx: r.left + 11.0, cy: r.top + 11.0, r: 11.0 },
            MarkerShape::Square => Shape::Rect { x: r.left, y: r.top, width: 22.0, height: 22.0, rx: 5.0 },
        };
        let width = if b.control.is_active(modes) { 3.0 } else { 1.0 };
        let cls = format!("glyphbox glyph {}", b.control.name());
        out.push(Element::new(frame).class(&cls).id(format!("glyph-{}", b.control.name())).fill(Color::WHITE).stroke(stroke, width));
        out.push(
            Element::new(Shape::Text { x: r.left + 11.0, y: r.top + 15.0, text: b.control.icon().into(), anchor: Anchor::Middle, rotate: 0.0 })
                .class(&cls)
                .fill(stroke),
        );
    }
}

pub fn hit(boxes: &[GlyphBox], x: f64, y: f64) -> Option<Control> {
    boxes.iter().find(|b| b.rect.contains(x, y)).map(|b| b.control)
}
