// File: crates/meridian-core/src/view.rs
// Summary: View state: the zoom history stack, interaction modes, and drag math for zoom/pan.

use crate::geometry::{clamp, Rect};
use crate::scale::{Domain, Scale};

/// Minimum drag distance, in pixels, before a box selection zooms an axis.
pub const MIN_DRAG_PX: f64 = 10.0;

/// The x/y scales of one view.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalePair {
    pub x: Scale,
    pub y: Scale,
}

impl ScalePair {
    pub fn domains(&self) -> (Domain, Domain) { (self.x.domain(), self.y.domain()) }
}

/// Zoom history. Entry 0 is the home view; the stack never shrinks below it once pushed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewStack {
    entries: Vec<ScalePair>,
}

impl ViewStack {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, view: ScalePair) { self.entries.push(view); }

    /// Drop the newest view unless only home remains. Returns whether anything was removed.
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Truncate to the home view.
    pub fn reset(&mut self) { self.entries.truncate(1); }

    pub fn clear(&mut self) { self.entries.clear(); }

    pub fn home(&self) -> Option<&ScalePair> { self.entries.first() }

    pub fn top(&self) -> Option<&ScalePair> { self.entries.last() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn entries(&self) -> &[ScalePair] { &self.entries }
}

/// Interaction modes. Zoom and pan are mutually exclusive while zooming is enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modes {
    pub zoom: bool,
    pub pan: bool,
    pub annotate: bool,
}

impl Modes {
    pub fn set_pan(&mut self, on: bool) {
        self.pan = on;
        self.zoom = !on;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Box selection in plot coordinates.
    ZoomBox { origin: (f64, f64), current: (f64, f64) },
    Pan { origin: (f64, f64), last: (f64, f64) },
}

/// Visible selection rectangle for a zoom drag. Drags starting below the plot span its full
/// height; drags starting left of it span its full width.
pub fn selection_rect(origin: (f64, f64), current: (f64, f64), inner_width: f64, inner_height: f64) -> Rect {
    let (mut sx, mut sy) = origin;
    let (mut cx, mut cy) = (clamp(current.0, 0.0, inner_width), clamp(current.1, 0.0, inner_height));
    if origin.1 > inner_height {
        sy = inner_height;
        cy = 0.0;
    }
    if origin.0 < 0.0 {
        sx = 0.0;
        cx = inner_width;
    }
    Rect::from_corners((sx, sy), (cx, cy))
}

/// Domains selected by a zoom drag from `start` to `end` (plot coordinates) against `top`.
/// An axis zooms only for linear scales, when the drag along it exceeds `MIN_DRAG_PX` and
/// starts inside the plot on that axis; results are clamped to the current domain.
/// `None` when neither axis changes.
pub fn zoom_selection(top: &ScalePair, start: (f64, f64), end: (f64, f64), inner_width: f64, inner_height: f64) -> Option<(Domain, Domain)> {
    let (x0, y0) = start;
    let (x1, y1) = end;
    let mut changed = false;

    let mut x = top.x.domain();
    if let Some(s) = top.x.as_linear() {
        if (x0 - x1).abs() > MIN_DRAG_PX && x0 > 0.0 {
            let (lo, hi) = s.extent();
            let mut v = [s.invert(x0), s.invert(clamp(x1, 0.0, inner_width))];
            v.sort_by(f64::total_cmp);
            x = Domain::Continuous(clamp(v[0], lo, hi), clamp(v[1], lo, hi));
            changed = true;
        }
    }

    let mut y = top.y.domain();
    if let Some(s) = top.y.as_linear() {
        if (y0 - y1).abs() > MIN_DRAG_PX && y0 < inner_height {
            let (lo, hi) = s.extent();
            let mut v = [s.invert(y0), s.invert(clamp(y1, 0.0, inner_height))];
            v.sort_by(f64::total_cmp);
            y = Domain::Continuous(clamp(v[0], lo, hi), clamp(v[1], lo, hi));
            changed = true;
        }
    }

    changed.then_some((x, y))
}

/// Domains after dragging the view by (dx, dy) pixels. Categorical axes stay put.
pub fn pan_domains(current: &ScalePair, dx: f64, dy: f64) -> (Domain, Domain) {
    let shift = |scale: &Scale, d: f64| match scale.as_linear() {
        Some(s) => {
            let (r0, r1) = s.range;
            Domain::Continuous(s.invert(r0 - d), s.invert(r1 - d))
        }
        None => scale.domain(),
    };
    (shift(&current.x, dx), shift(&current.y, dy))
}
