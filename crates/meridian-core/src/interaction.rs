// File: crates/meridian-core/src/interaction.rs
// Summary: Pointer input routing: box zoom, pan, undo/reset, legend toggles, annotation clicks, hover.

use crate::annotation::{self, Annotation, AnnotationDefaults, AnnotationPoint};
use crate::chart::Chart;
use crate::debug_log;
use crate::event::{ChartEvent, InputEvent};
use crate::glyph::{self, Control};
use crate::scene::{Element, LayerKind, Shape};
use crate::theme::Theme;
use crate::view::{self, DragState};

impl Chart {
    /// Route one host input event (surface pixel coordinates).
    pub fn handle(&mut self, event: InputEvent) {
        if !self.is_rendered() {
            return;
        }
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
            InputEvent::Click { x, y } => self.click(x, y),
            InputEvent::DoubleClick { .. } => {
                if self.state.as_ref().is_some_and(|s| s.zoom_enabled) {
                    self.undo_zoom();
                }
            }
            InputEvent::Hover { x, y } => self.hover(x, y),
            InputEvent::Leave => {
                if let Some(t) = self.tooltip.as_mut() {
                    t.hide();
                }
            }
        }
    }

    /// Surface -> plot-area coordinates.
    fn to_plot(&self, x: f64, y: f64) -> (f64, f64) { (x - self.attrs.margin.left, y - self.attrs.margin.top) }

    fn in_plot(&self, p: (f64, f64)) -> bool {
        self.inner_size().is_some_and(|(w, h)| p.0 >= 0.0 && p.0 <= w && p.1 >= 0.0 && p.1 <= h)
    }

    fn pointer_down(&mut self, x: f64, y: f64) {
        let p = self.to_plot(x, y);
        let inside = self.in_plot(p);
        let Some(st) = self.state.as_mut() else { return };
        if !st.zoom_enabled || st.modes.annotate {
            return;
        }
        if st.modes.pan {
            if inside {
                st.drag = DragState::Pan { origin: p, last: p };
                self.emit(ChartEvent::PanStart);
            }
        } else if st.modes.zoom {
            st.drag = DragState::ZoomBox { origin: p, current: p };
        }
    }

    fn pointer_move(&mut self, x: f64, y: f64) {
        let p = self.to_plot(x, y);
        let inside = self.in_plot(p);
        let Some(st) = self.state.as_mut() else { return };
        match st.drag {
            DragState::Idle => {}
            DragState::ZoomBox { origin, .. } => {
                st.drag = DragState::ZoomBox { origin, current: p };
                let rect = view::selection_rect(origin, p, st.inner_width, st.inner_height);
                let shade = Theme::screen().viewbox_fill;
                st.surface.clear(LayerKind::Overlay);
                st.surface.push(
                    LayerKind::Overlay,
                    Element::new(Shape::Rect { x: rect.left, y: rect.top, width: rect.width(), height: rect.height(), rx: 0.0 })
                        .class("viewbox")
                        .fill(shade),
                );
            }
            DragState::Pan { origin, last } => {
                if !inside {
                    return;
                }
                let Some(current) = st.current.as_ref() else { return };
                let (xd, yd) = view::pan_domains(current, p.0 - last.0, p.1 - last.1);
                st.drag = DragState::Pan { origin, last: p };
                self.redraw(Some(xd.clone()), Some(yd.clone()), false);
                self.emit(ChartEvent::Pan { x: xd, y: yd });
            }
        }
    }

    fn pointer_up(&mut self, x: f64, y: f64) {
        let p = self.to_plot(x, y);
        let Some(st) = self.state.as_mut() else { return };
        match std::mem::take(&mut st.drag) {
            DragState::Idle => {}
            DragState::ZoomBox { origin, .. } => {
                st.surface.clear(LayerKind::Overlay);
                let Some(top) = st.views.top() else { return };
                match view::zoom_selection(top, origin, p, st.inner_width, st.inner_height) {
                    Some((xd, yd)) => {
                        self.redraw(Some(xd.clone()), Some(yd.clone()), true);
                        self.emit(ChartEvent::Zoom { x: xd, y: yd });
                    }
                    None => debug_log!(id = %self.attrs.id, "selection below zoom threshold"),
                }
            }
            DragState::Pan { .. } => {
                if let Some(current) = st.current.clone() {
                    st.views.push(current);
                }
                self.emit(ChartEvent::PanEnd);
            }
        }
    }

    fn click(&mut self, x: f64, y: f64) {
        let Some(st) = self.state.as_ref() else { return };
        if let Some(control) = glyph::hit(&st.glyphs, x, y) {
            self.activate(control);
            return;
        }
        let legend_hit = st.legend.as_ref().and_then(|l| l.hit(x, y)).map(str::to_string);
        if let Some(group) = legend_hit {
            if self.attrs.toggle {
                self.toggle_group(&group);
            }
            return;
        }
        let p = self.to_plot(x, y);
        if st.modes.annotate {
            self.annotate_at(p.0, p.1);
            return;
        }
        if let Some((group, datum)) = self.hit_mark(p) {
            self.emit(ChartEvent::ElementClicked { group, datum });
        }
    }

    /// Act on a glyph control as if it were clicked.
    pub fn activate(&mut self, control: Control) {
        debug_log!(id = %self.attrs.id, control = control.name(), "glyph activated");
        match control {
            Control::Annotate => {
                let on = !self.modes().annotate;
                self.set_annotate_mode(on);
            }
            Control::Pan => {
                let on = !self.modes().pan;
                self.set_pan_mode(on);
            }
            Control::Refresh => {
                self.reset_view();
            }
            Control::Export => {
                let name = self.attrs.plotname.clone();
                if let Err(e) = self.export(&name) {
                    tracing::warn!(id = %self.attrs.id, error = %e, "export failed");
                }
            }
        }
    }

    /// Place an annotation at plot pixel (px, py). Rejected outside the plot, on categorical
    /// axes, and within the hit radius of an existing annotation.
    pub fn annotate_at(&mut self, px: f64, py: f64) -> Option<&Annotation> {
        if !self.attrs.annotatable || !self.in_plot((px, py)) {
            return None;
        }
        let current = self.state.as_ref()?.current.as_ref()?;
        let (Some(xs), Some(ys)) = (current.x.as_linear(), current.y.as_linear()) else {
            debug_log!(id = %self.attrs.id, "annotations need continuous axes");
            return None;
        };
        if annotation::collides(&self.annotations, px, py, current) {
            debug_log!(id = %self.attrs.id, px, py, "annotation too close to an existing one");
            return None;
        }
        let point = AnnotationPoint { x: xs.invert(px), y: ys.invert(py) };
        let defaults = self
            .annotation_defaults
            .clone()
            .unwrap_or_else(|| AnnotationDefaults::standard(self.attrs.x_format_spec()));
        let created = defaults.build(point, &self.attrs.id);
        self.annotations.push(created.clone());
        self.draw_annotations();
        self.emit(ChartEvent::AnnotationAdded(created));
        self.annotations.last()
    }

    fn hover(&mut self, x: f64, y: f64) {
        if !self.tooltip.as_ref().is_some_and(|t| t.is_attached()) {
            return;
        }
        let text = match self.state.as_ref().and_then(|st| glyph::hit(&st.glyphs, x, y)) {
            Some(control) => Some((control.help().to_string(), (x + 10.0, y - 10.0))),
            None => self.hit_mark(self.to_plot(x, y)).and_then(|(_, datum)| {
                let st = self.state.as_ref()?;
                let i = datum?;
                let r = st.data.get(i)?;
                Some((st.draw_accessors.label(r, i), (x + 5.0, y - 20.0)))
            }),
        };
        if let Some(t) = self.tooltip.as_mut() {
            match text {
                Some((text, at)) => t.show(text, at),
                None => t.hide(),
            }
        }
    }

    /// Topmost visible data mark under plot point `p`.
    fn hit_mark(&self, p: (f64, f64)) -> Option<(Option<String>, Option<usize>)> {
        let surface = self.surface()?;
        surface
            .elements_in(LayerKind::Plot)
            .iter()
            .rev()
            .filter(|e| e.visible && e.datum.is_some())
            .find(|e| match &e.shape {
                Shape::Circle { cx, cy, r } => (p.0 - cx).hypot(p.1 - cy) <= r.max(3.0),
                Shape::Rect { x, y, width, height, .. } => {
                    p.0 >= *x && p.0 <= x + width && p.1 >= *y && p.1 <= y + height
                }
                _ => false,
            })
            .map(|e| (e.group.clone(), e.datum))
    }
}
