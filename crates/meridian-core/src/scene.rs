// File: crates/meridian-core/src/scene.rs
// Summary: Retained drawing surface (layers of tagged primitives) that charts draw into.

use indexmap::IndexMap;

use crate::geometry::Rect;
use crate::theme::Color;
use crate::types::Margin;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Polyline through `points`; closed paths are filled.
    Path { points: Vec<(f64, f64)>, closed: bool },
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64, rx: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// `rotate` in degrees around (x, y).
    Text { x: f64, y: f64, text: String, anchor: Anchor, rotate: f64 },
    /// Annular sector; angles in radians, clockwise from 12 o'clock.
    Arc { cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub font_size: f64,
    pub font_weight: u16,
    pub font_family: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            opacity: 1.0,
            fill_opacity: 1.0,
            font_size: 10.0,
            font_weight: 400,
            font_family: None,
        }
    }
}

/// One drawn primitive with the tags interaction and styling look it up by.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub classes: Vec<String>,
    /// Group key for legend toggling.
    pub group: Option<String>,
    /// Index into the chart's prepared data.
    pub datum: Option<usize>,
    pub id: Option<String>,
    pub style: Style,
    pub visible: bool,
    /// Subject to the owning layer's clip rectangle.
    pub clip: bool,
}

impl Element {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            classes: Vec::new(),
            group: None,
            datum: None,
            id: None,
            style: Style::default(),
            visible: true,
            clip: false,
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.extend(class.split_whitespace().map(str::to_string));
        self
    }

    pub fn group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn datum(mut self, index: usize) -> Self {
        self.datum = Some(index);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn fill(mut self, c: Color) -> Self {
        self.style.fill = Some(c);
        self
    }

    pub fn stroke(mut self, c: Color, width: f64) -> Self {
        self.style.stroke = Some(c);
        self.style.stroke_width = width;
        self
    }

    pub fn opacity(mut self, o: f64) -> Self {
        self.style.opacity = o;
        self
    }

    pub fn fill_opacity(mut self, o: f64) -> Self {
        self.style.fill_opacity = o;
        self
    }

    pub fn font(mut self, size: f64, weight: u16) -> Self {
        self.style.font_size = size;
        self.style.font_weight = weight;
        self
    }

    pub fn visible(mut self, v: bool) -> Self {
        self.visible = v;
        self
    }

    pub fn clipped(mut self) -> Self {
        self.clip = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool { self.classes.iter().any(|c| c == class) }

    pub fn is_text(&self) -> bool { matches!(self.shape, Shape::Text { .. }) }
}

/// Polygon approximating an annular sector (pie slice); angles clockwise from 12 o'clock.
pub fn arc_polygon(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    let span = end - start;
    let steps = ((span.abs() / (std::f64::consts::PI / 90.0)).ceil() as usize).max(1);
    let at = |r: f64, a: f64| (cx + r * a.sin(), cy - r * a.cos());
    let mut pts: Vec<(f64, f64)> = (0..=steps).map(|i| at(outer, start + span * i as f64 / steps as f64)).collect();
    if inner > 0.0 {
        pts.extend((0..=steps).rev().map(|i| at(inner, start + span * i as f64 / steps as f64)));
    } else {
        pts.push((cx, cy));
    }
    pts
}

/// Draw order, bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Plot,
    Annotations,
    Overlay,
    Legend,
    Glyphs,
}

impl LayerKind {
    pub const ALL: [LayerKind; 5] =
        [LayerKind::Plot, LayerKind::Annotations, LayerKind::Overlay, LayerKind::Legend, LayerKind::Glyphs];

    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Plot => "plotarea",
            LayerKind::Annotations => "annotations",
            LayerKind::Overlay => "overlay",
            LayerKind::Legend => "legend",
            LayerKind::Glyphs => "glyphbox",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    /// Translation applied to every element, in surface pixels.
    pub offset: (f64, f64),
    /// Clip rectangle in layer coordinates, honoured by elements with `clip` set.
    pub clip: Option<Rect>,
    pub elements: Vec<Element>,
}

impl Layer {
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }
}

/// Where a chart is mounted. `size` carries the host's measured size, if known.
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub selector: String,
    pub size: Option<(f64, f64)>,
    attached: bool,
}

impl Target {
    /// A detached target; the host reports attachment later.
    pub fn new(selector: impl Into<String>) -> Self {
        Self { selector: selector.into(), size: None, attached: false }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn attached(mut self, attached: bool) -> Self {
        self.attached = attached;
        self
    }

    pub fn is_attached(&self) -> bool { self.attached }

    pub fn set_attached(&mut self, attached: bool) { self.attached = attached; }
}

/// Owned drawing surface of one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub id: String,
    pub class: String,
    pub width: f64,
    pub height: f64,
    pub background: Option<Color>,
    layers: IndexMap<LayerKind, Layer>,
}

impl Surface {
    /// Plot-area layers are translated by the margin and clipped to the inner size.
    pub fn new(id: &str, class: &str, width: f64, height: f64, margin: &Margin) -> Self {
        let inner = Rect::from_ltwh(0.0, 0.0, (width - margin.hsum()).max(0.0), (height - margin.vsum()).max(0.0));
        let mut layers = IndexMap::new();
        for kind in LayerKind::ALL {
            let layer = match kind {
                LayerKind::Plot | LayerKind::Annotations | LayerKind::Overlay => Layer {
                    offset: (margin.left, margin.top),
                    clip: Some(inner),
                    elements: Vec::new(),
                },
                LayerKind::Legend | LayerKind::Glyphs => Layer::default(),
            };
            layers.insert(kind, layer);
        }
        Self { id: id.to_string(), class: class.to_string(), width, height, background: None, layers }
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> { self.layers.get(&kind) }

    pub fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut Layer> { self.layers.get_mut(&kind) }

    pub fn layers(&self) -> impl Iterator<Item = (LayerKind, &Layer)> { self.layers.iter().map(|(k, l)| (*k, l)) }

    pub fn clear(&mut self, kind: LayerKind) {
        if let Some(l) = self.layers.get_mut(&kind) { l.elements.clear(); }
    }

    pub fn clear_all(&mut self) {
        for l in self.layers.values_mut() { l.elements.clear(); }
    }

    pub fn remove_layer(&mut self, kind: LayerKind) -> Option<Layer> { self.layers.shift_remove(&kind) }

    pub fn push(&mut self, kind: LayerKind, element: Element) {
        if let Some(l) = self.layers.get_mut(&kind) { l.elements.push(element); }
    }

    pub fn extend(&mut self, kind: LayerKind, elements: impl IntoIterator<Item = Element>) {
        if let Some(l) = self.layers.get_mut(&kind) { l.elements.extend(elements); }
    }

    pub fn elements(&self) -> impl Iterator<Item = (LayerKind, &Element)> {
        self.layers.iter().flat_map(|(k, l)| l.elements.iter().map(move |e| (*k, e)))
    }

    pub fn elements_in(&self, kind: LayerKind) -> &[Element] {
        self.layers.get(&kind).map(|l| l.elements.as_slice()).unwrap_or(&[])
    }

    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().map(|(_, e)| e).filter(move |e| e.has_class(class))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements().map(|(_, e)| e).find(|e| e.id.as_deref() == Some(id))
    }

    /// Show or hide every element tagged with `group`; returns how many changed.
    pub fn set_group_visibility(&mut self, group: &str, visible: bool) -> usize {
        let mut changed = 0;
        for l in self.layers.values_mut() {
            for e in l.elements.iter_mut().filter(|e| e.group.as_deref() == Some(group)) {
                if e.visible != visible {
                    e.visible = visible;
                    changed += 1;
                }
            }
        }
        changed
    }
}
