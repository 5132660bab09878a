// File: crates/meridian-core/src/annotation.rs
// Summary: Annotation records, their per-field default generators, hit rules, and drawing.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::NumberFormat;
use crate::legend::ToggleSet;
use crate::scene::{Anchor, Element, Shape};
use crate::settings;
use crate::theme::Color;
use crate::types::{Datum, Offset};
use crate::view::ScalePair;

/// A click closer than this (on both axes, in pixels) to an existing annotation is rejected.
pub const HIT_RADIUS_PX: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Text,
}

/// A user-placed marker in data coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Annotation {
    pub id: String,
    /// Id of the chart the annotation was placed on.
    pub parent: Option<String>,
    #[serde(rename = "type")]
    pub shape: AnnotationShape,
    pub text: String,
    pub size: f64,
    pub group: Option<String>,
    pub rotate: f64,
    pub text_size: f64,
    pub text_position: Offset,
    pub text_rotation: f64,
    pub x: f64,
    pub y: f64,
    pub style: Map<String, Value>,
    pub meta: Map<String, Value>,
    pub draggable: bool,
}

impl Default for Annotation {
    fn default() -> Self {
        Self {
            id: String::new(),
            parent: None,
            shape: AnnotationShape::Circle,
            text: String::new(),
            size: 15.0,
            group: None,
            rotate: 0.0,
            text_size: 13.0,
            text_position: Offset::new(0.0, 20.0),
            text_rotation: 0.0,
            x: 0.0,
            y: 0.0,
            style: Map::new(),
            meta: Map::new(),
            draggable: false,
        }
    }
}

/// Data-space location of a click that is about to become an annotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationPoint {
    pub x: f64,
    pub y: f64,
}

pub type Generator<T> = Rc<dyn Fn(&AnnotationPoint) -> T>;

/// Per-field generators that fill a new annotation from its click location.
#[derive(Clone)]
pub struct AnnotationDefaults {
    pub id: Generator<String>,
    pub shape: Generator<AnnotationShape>,
    pub text: Generator<String>,
    pub size: Generator<f64>,
    pub group: Generator<Option<String>>,
    pub rotate: Generator<f64>,
    pub text_size: Generator<f64>,
    pub text_position: Generator<Offset>,
    pub text_rotation: Generator<f64>,
    pub style: Generator<Map<String, Value>>,
    pub meta: Generator<Map<String, Value>>,
    pub draggable: Generator<bool>,
}

impl AnnotationDefaults {
    /// Stock generators; the text shows the x value through `x_format` (two decimals otherwise).
    pub fn standard(x_format: Option<&str>) -> Self {
        let fmt = x_format.and_then(|s| s.parse::<NumberFormat>().ok()).unwrap_or(NumberFormat::fixed(2));
        Self {
            id: Rc::new(|_| settings::uuid()),
            shape: Rc::new(|_| AnnotationShape::Circle),
            text: Rc::new(move |p| fmt.format(p.x)),
            size: Rc::new(|_| 15.0),
            group: Rc::new(|_| None),
            rotate: Rc::new(|_| 0.0),
            text_size: Rc::new(|_| 13.0),
            text_position: Rc::new(|_| Offset::new(0.0, 20.0)),
            text_rotation: Rc::new(|_| 0.0),
            style: Rc::new(|_| Map::new()),
            meta: Rc::new(|_| Map::new()),
            draggable: Rc::new(|_| false),
        }
    }

    pub fn build(&self, p: AnnotationPoint, parent: &str) -> Annotation {
        Annotation {
            id: (self.id)(&p),
            parent: Some(parent.to_string()),
            shape: (self.shape)(&p),
            text: (self.text)(&p),
            size: (self.size)(&p),
            group: (self.group)(&p),
            rotate: (self.rotate)(&p),
            text_size: (self.text_size)(&p),
            text_position: (self.text_position)(&p),
            text_rotation: (self.text_rotation)(&p),
            x: p.x,
            y: p.y,
            style: (self.style)(&p),
            meta: (self.meta)(&p),
            draggable: (self.draggable)(&p),
        }
    }
}

impl fmt::Debug for AnnotationDefaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("AnnotationDefaults { .. }") }
}

/// Pixel position of an annotation under the given scales.
pub fn position(a: &Annotation, scales: &ScalePair) -> Option<(f64, f64)> {
    Some((scales.x.map(&Datum::Number(a.x))?, scales.y.map(&Datum::Number(a.y))?))
}

/// Whether a click at plot pixel (px, py) lands within the hit radius of an existing annotation.
pub fn collides(existing: &[Annotation], px: f64, py: f64, scales: &ScalePair) -> bool {
    existing.iter().filter_map(|a| position(a, scales)).any(|(ax, ay)| {
        (ax - px).abs() < HIT_RADIUS_PX && (ay - py).abs() < HIT_RADIUS_PX
    })
}

pub fn draw(annotations: &[Annotation], scales: &ScalePair, toggles: &ToggleSet, out: &mut Vec<Element>) {
    for a in annotations {
        let Some((x, y)) = position(a, scales) else { continue };
        let visible = a.group.as_deref().is_none_or(|g| !toggles.contains(g));
        let fill = a.style.get("fill").and_then(Value::as_str).and_then(Color::parse).unwrap_or(Color::from_rgb(0x55, 0x55, 0x55));
        let opacity = a.style.get("opacity").and_then(Value::as_f64).unwrap_or(1.0);
        let half = a.size / 2.0;
        let marker = match a.shape {
            AnnotationShape::Circle => Some(Shape::Circle { cx: x, cy: y, r: half }),
            AnnotationShape::Square => Some(Shape::Rect { x: x - half, y: y - half, width: a.size, height: a.size, rx: 0.0 }),
            AnnotationShape::Triangle => Some(Shape::Path {
                points: vec![(x, y - half), (x + half, y + half), (x - half, y + half)],
                closed: true,
            }),
            AnnotationShape::Text => None,
        };
        let tag = |e: Element| {
            let e = e.class("annotation").id(a.id.clone()).visible(visible);
            match &a.group {
                Some(g) => e.group(g),
                None => e,
            }
        };
        if let Some(shape) = marker {
            out.push(tag(Element::new(shape).fill(fill).opacity(opacity)));
        }
        if !a.text.is_empty() {
            let text = Shape::Text {
                x: x + a.text_position.x,
                y: y + a.text_position.y,
                text: a.text.clone(),
                anchor: Anchor::Middle,
                rotate: a.text_rotation,
            };
            out.push(tag(Element::new(text).class("annotation-text").fill(fill).font(a.text_size, 400)));
        }
    }
}
