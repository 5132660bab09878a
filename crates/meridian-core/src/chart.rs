// File: crates/meridian-core/src/chart.rs
// Summary: Chart orchestrator: configuration access, render/redraw pipeline, legend, glyphs, export.

use std::path::PathBuf;
use std::time::Instant;

use serde_json::Value;

use crate::accessor::Accessors;
use crate::annotation::{self, Annotation, AnnotationDefaults};
use crate::attributes::{Attributes, Layout, Orient};
use crate::axis::{self, AxisSet, AxisTitle, DataDomains};
use crate::config::{self, AttributeTable, Auto, SlotKind};
use crate::debug_log;
use crate::error::{ChartError, ChartResult};
use crate::event::ChartEvent;
use crate::export::{self, ImageExporter};
use crate::glyph::{self, GlyphBox};
use crate::legend::{Legend, LegendWait, Readiness, ToggleSet};
use crate::models::{AxesInput, ChartKind, ChartModel, DrawContext};
use crate::palette::Palette;
use crate::scale::Domain;
use crate::scene::{Element, LayerKind, Surface, Target};
use crate::settings;
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::types::{Datum, Margin, Record, HEIGHT, WIDTH};
use crate::view::{DragState, Modes, ScalePair, ViewStack};

/// Attribute keys backed by attached resources rather than plain values.
const RESOURCE_KEYS: &[&str] = &["tooltip"];

/// List attributes whose default is `"auto"`; single values still wrap into a list.
const SEQUENCE_KEYS: &[&str] = &["color"];

/// Per-render state; exists once a chart has been rendered into a target.
pub(crate) struct RenderState {
    pub target: Target,
    pub surface: Surface,
    pub width: f64,
    pub height: f64,
    pub inner_width: f64,
    pub inner_height: f64,
    pub data: Vec<Record>,
    pub draw_accessors: Accessors,
    pub domains: DataDomains,
    pub palette: Palette,
    pub toggles: ToggleSet,
    pub modes: Modes,
    pub zoom_enabled: bool,
    pub views: ViewStack,
    pub current: Option<ScalePair>,
    pub axes: Option<AxisSet>,
    pub drag: DragState,
    pub legend: Option<Legend>,
    pub legend_wait: Option<LegendWait>,
    pub glyphs: Vec<GlyphBox>,
    pub jitter_seed: u64,
}

type Listener = Box<dyn FnMut(&ChartEvent)>;

pub struct Chart {
    kind: ChartKind,
    model: Box<dyn ChartModel>,
    pub(crate) attrs: Attributes,
    table: AttributeTable,
    pub(crate) accessors: Accessors,
    pub(crate) annotation_defaults: Option<AnnotationDefaults>,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) tooltip: Option<Tooltip>,
    exporter: Option<Box<dyn ImageExporter>>,
    listeners: Vec<Listener>,
    pub(crate) state: Option<RenderState>,
}

impl Chart {
    /// New chart of `kind`: kind defaults merged with `overrides` (a JSON object).
    /// Override values that do not fit their attribute are logged and skipped.
    pub fn new(kind: ChartKind, overrides: Value) -> Self {
        let defaults = Attributes::defaults_tree(&kind.overlay());
        let mut table = AttributeTable::from_defaults(&defaults, RESOURCE_KEYS);
        table.register("annotation", SlotKind::Sequence);
        for key in SEQUENCE_KEYS {
            table.set_kind(key, SlotKind::Sequence);
        }
        let attrs = Attributes::from_tree(defaults).unwrap_or_default();
        let mut chart = Self {
            kind,
            model: kind.model(),
            attrs,
            table,
            accessors: Accessors::default(),
            annotation_defaults: None,
            annotations: Vec::new(),
            tooltip: None,
            exporter: None,
            listeners: Vec::new(),
            state: None,
        };
        chart.configure(overrides);
        if chart.attrs.id.is_empty() {
            chart.attrs.id = settings::uuid();
        }
        debug_log!(id = %chart.attrs.id, kind = %kind, "chart created");
        chart
    }

    fn configure(&mut self, overrides: Value) {
        let Value::Object(map) = overrides else {
            if !overrides.is_null() {
                tracing::warn!("chart overrides must be an object; using defaults");
            }
            return;
        };
        let (special, plain): (Vec<_>, Vec<_>) =
            map.into_iter().partition(|(k, _)| k == "annotation" || self.table.kind(k) == Some(SlotKind::Resource));
        let plain: serde_json::Map<String, Value> =
            plain.into_iter().map(|(k, v)| { let v = self.coerce(&k, v); (k, v) }).collect();
        let merged = config::merge(&self.attrs.to_tree(), &Value::Object(plain.clone()));
        match Attributes::from_tree(merged) {
            Ok(attrs) => {
                for (k, v) in &plain {
                    self.table.register(k, SlotKind::of(v));
                }
                self.attrs = attrs;
            }
            Err(_) => {
                for (k, v) in plain {
                    self.set_attr(&k, v);
                }
            }
        }
        for (k, v) in special {
            self.set_attr(&k, v);
        }
    }

    pub fn kind(&self) -> ChartKind { self.kind }

    pub fn id(&self) -> &str { &self.attrs.id }

    pub fn attributes(&self) -> &Attributes { &self.attrs }

    pub fn attribute_table(&self) -> &AttributeTable { &self.table }

    /// Current value of a named attribute, as JSON.
    pub fn attr(&self, key: &str) -> Option<Value> {
        match key {
            "tooltip" => Some(Value::Bool(self.tooltip.as_ref().is_some_and(Tooltip::is_attached))),
            "annotation" => serde_json::to_value(&self.annotations).ok(),
            _ => match self.attrs.to_tree() {
                Value::Object(mut m) => m.remove(key),
                _ => None,
            },
        }
    }

    /// Assign a named attribute; objects merge into structured attributes and single values
    /// are wrapped for array attributes. Rejected values are logged and leave the chart unchanged.
    pub fn set_attr(&mut self, key: &str, value: Value) -> &mut Self {
        if let Err(e) = self.try_set_attr(key, value) {
            tracing::warn!(key, error = %e, "attribute value rejected; keeping previous value");
        }
        self
    }

    pub fn try_set_attr(&mut self, key: &str, value: Value) -> ChartResult<&mut Self> {
        if self.table.kind(key) == Some(SlotKind::Resource) {
            let enabled = !matches!(value, Value::Bool(false) | Value::Null);
            self.replace_tooltip(enabled.then(Tooltip::new));
            return Ok(self);
        }
        if key == "annotation" {
            let list = config::merge_value(&Value::Array(Vec::new()), &value);
            self.annotations = serde_json::from_value(list)
                .map_err(|source| ChartError::Attribute { key: key.to_string(), source })?;
            self.draw_annotations();
            return Ok(self);
        }
        let value = self.coerce(key, value);
        let mut tree = self.attrs.to_tree();
        let next = match tree.get(key) {
            Some(current) if value.as_str() != Some("auto") => config::merge_value(current, &value),
            _ => value,
        };
        let kind = SlotKind::of(&next);
        if let Value::Object(m) = &mut tree {
            m.insert(key.to_string(), next);
        }
        self.attrs = Attributes::from_tree(tree).map_err(|source| ChartError::Attribute { key: key.to_string(), source })?;
        self.table.register(key, kind);
        debug_log!(id = %self.attrs.id, key, "attribute set");
        Ok(self)
    }

    /// Wrap a single value for a list attribute, even while its current value is `"auto"`.
    fn coerce(&self, key: &str, value: Value) -> Value {
        let keyword = value.as_str() == Some("auto");
        match value {
            Value::Array(_) | Value::Null => value,
            other if self.table.kind(key) == Some(SlotKind::Sequence) && !keyword => Value::Array(vec![other]),
            other => other,
        }
    }

    /// Swap the tooltip, releasing the previous one first; returns the released tooltip.
    pub fn replace_tooltip(&mut self, next: Option<Tooltip>) -> Option<Tooltip> {
        let previous = self.tooltip.take().map(|mut t| {
            t.detach();
            t
        });
        self.tooltip = next;
        previous
    }

    pub fn set_tooltip(&mut self, enabled: bool) -> &mut Self {
        self.replace_tooltip(enabled.then(Tooltip::new));
        self
    }

    pub fn tooltip(&self) -> Option<&Tooltip> { self.tooltip.as_ref() }

    // ---- accessors ----

    pub fn accessors(&self) -> &Accessors { &self.accessors }

    pub fn set_x(&mut self, f: impl Fn(&Record, usize) -> Datum + 'static) -> &mut Self {
        self.accessors.x = std::rc::Rc::new(f);
        self
    }

    pub fn set_y(&mut self, f: impl Fn(&Record, usize) -> Datum + 'static) -> &mut Self {
        self.accessors.y = std::rc::Rc::new(f);
        self
    }

    pub fn set_group(&mut self, f: impl Fn(&Record, usize) -> String + 'static) -> &mut Self {
        self.accessors.group = std::rc::Rc::new(f);
        self
    }

    pub fn set_label(&mut self, f: impl Fn(&Record, usize) -> String + 'static) -> &mut Self {
        self.accessors.label = std::rc::Rc::new(f);
        self
    }

    pub fn set_transform(&mut self, f: impl Fn(Vec<Record>) -> Vec<Record> + 'static) -> &mut Self {
        self.accessors.transform = std::rc::Rc::new(f);
        self
    }

    pub fn set_aggregate(&mut self, f: impl Fn(&[f64]) -> f64 + 'static) -> &mut Self {
        self.accessors.aggregate = std::rc::Rc::new(f);
        self
    }

    pub fn set_annotation_defaults(&mut self, defaults: AnnotationDefaults) -> &mut Self {
        self.annotation_defaults = Some(defaults);
        self
    }

    pub fn annotations(&self) -> &[Annotation] { &self.annotations }

    pub fn set_annotations(&mut self, annotations: Vec<Annotation>) -> &mut Self {
        self.annotations = annotations;
        self.draw_annotations();
        self
    }

    pub fn add_annotation(&mut self, annotation: Annotation) -> &mut Self {
        self.annotations.push(annotation);
        self.draw_annotations();
        self
    }

    pub fn set_exporter(&mut self, exporter: impl ImageExporter + 'static) -> &mut Self {
        self.exporter = Some(Box::new(exporter));
        self
    }

    /// Register an event listener.
    pub fn on(&mut self, listener: impl FnMut(&ChartEvent) + 'static) -> &mut Self {
        self.listeners.push(Box::new(listener));
        self
    }

    pub(crate) fn emit(&mut self, event: ChartEvent) {
        debug_log!(id = %self.attrs.id, event = event.name(), "event");
        for l in &mut self.listeners {
            l(&event);
        }
    }

    // ---- render state queries ----

    pub fn is_rendered(&self) -> bool { self.state.is_some() }

    pub fn surface(&self) -> Option<&Surface> { self.state.as_ref().map(|s| &s.surface) }

    pub fn target(&self) -> Option<&Target> { self.state.as_ref().map(|s| &s.target) }

    pub fn surface_size(&self) -> Option<(f64, f64)> { self.state.as_ref().map(|s| (s.width, s.height)) }

    pub fn inner_size(&self) -> Option<(f64, f64)> { self.state.as_ref().map(|s| (s.inner_width, s.inner_height)) }

    pub fn prepared_data(&self) -> &[Record] { self.state.as_ref().map(|s| s.data.as_slice()).unwrap_or(&[]) }

    pub fn domains(&self) -> Option<&DataDomains> { self.state.as_ref().map(|s| &s.domains) }

    pub fn axes(&self) -> Option<&AxisSet> { self.state.as_ref().and_then(|s| s.axes.as_ref()) }

    pub fn scales(&self) -> Option<&ScalePair> { self.state.as_ref().and_then(|s| s.current.as_ref()) }

    pub fn view_stack(&self) -> Option<&ViewStack> { self.state.as_ref().map(|s| &s.views) }

    pub fn modes(&self) -> Modes { self.state.as_ref().map(|s| s.modes).unwrap_or_default() }

    pub fn drag_state(&self) -> DragState { self.state.as_ref().map(|s| s.drag).unwrap_or_default() }

    pub fn toggles(&self) -> Option<&ToggleSet> { self.state.as_ref().map(|s| &s.toggles) }

    pub fn palette(&self) -> Option<&Palette> { self.state.as_ref().map(|s| &s.palette) }

    pub fn legend_layout(&self) -> Option<&Legend> { self.state.as_ref().and_then(|s| s.legend.as_ref()) }

    pub fn glyph_boxes(&self) -> &[GlyphBox] { self.state.as_ref().map(|s| s.glyphs.as_slice()).unwrap_or(&[]) }

    // ---- pipeline ----

    /// Bind the chart to `target` and draw it. Re-rendering discards the previous drawing,
    /// view history and interaction state.
    pub fn render(&mut self, target: Target) -> &mut Self {
        let now = Instant::now();
        debug_log!(id = %self.attrs.id, kind = %self.kind, target = %target.selector, "render");
        let (width, height) = self.resolve_size(&target);
        let m: Margin = self.attrs.margin;
        let inner_width = (width - m.hsum()).max(0.0);
        let inner_height = (height - m.vsum()).max(0.0);
        let mut surface = Surface::new(&self.attrs.id, &self.attrs.class, width, height, &m);
        surface.background = Theme::screen().background;

        let data = self.model.prepare((self.accessors.transform)(self.attrs.data.clone()), &self.attrs, &self.accessors);
        let draw_accessors = if self.model.reshapes() {
            Accessors {
                transform: self.accessors.transform.clone(),
                aggregate: self.accessors.aggregate.clone(),
                ..Accessors::default()
            }
        } else {
            self.accessors.clone()
        };
        let mut domains = axis::derive_domains(&data, &draw_accessors, self.attrs.layout);
        self.model.adjust_domains(&mut domains, &self.attrs);
        let palette = Palette::new(&self.attrs.color, draw_accessors.groups(&data));
        let glyphs = if self.attrs.glyphs {
            glyph::layout(&glyph::controls(&self.attrs), &self.attrs, inner_width, inner_height)
        } else {
            Vec::new()
        };
        let attached = target.is_attached();
        self.state = Some(RenderState {
            target,
            surface,
            width,
            height,
            inner_width,
            inner_height,
            data,
            draw_accessors,
            domains,
            palette,
            toggles: self.attrs.toggled.iter().cloned().collect(),
            modes: Modes { zoom: self.attrs.zoomable, pan: false, annotate: false },
            zoom_enabled: self.attrs.zoomable,
            views: ViewStack::new(),
            current: None,
            axes: None,
            drag: DragState::Idle,
            legend: None,
            legend_wait: None,
            glyphs,
            jitter_seed: (settings::random() * 1e9) as u64,
        });

        if self.attrs.legend {
            if attached {
                self.draw_legend();
            } else if let Some(st) = self.state.as_mut() {
                st.legend_wait = Some(LegendWait::new(now));
            }
        }
        self.draw_glyphs();
        self.redraw(None, None, true);
        self.emit(ChartEvent::Rendered);
        self
    }

    fn resolve_size(&self, target: &Target) -> (f64, f64) {
        let measured = target.size;
        let w = self.attrs.width.resolve(|| measured.map(|s| s.0).unwrap_or(WIDTH));
        let h = self.attrs.height.resolve(|| measured.map(|s| s.1).unwrap_or(HEIGHT));
        if measured.is_none() && (self.attrs.width.is_auto() || self.attrs.height.is_auto()) {
            debug_log!(target = %target.selector, "target not measured; using default size");
        }
        (w, h)
    }

    /// Redraw the plot. Given domains become the configured x/y ranges; with `cache`
    /// the resulting scales are pushed onto the view stack.
    pub fn redraw(&mut self, x: Option<Domain>, y: Option<Domain>, cache: bool) -> &mut Self {
        if let Some(d) = x {
            self.attrs.x_range = Auto::Explicit(d);
        }
        if let Some(d) = y {
            self.attrs.y_range = Auto::Explicit(d);
        }
        let Some(st) = self.state.as_mut() else {
            tracing::warn!(id = %self.attrs.id, "redraw before render; ignoring");
            return self;
        };
        let xd = self.attrs.x_range.resolve(|| st.domains.x.clone());
        let yd = self.attrs.y_range.resolve(|| st.domains.y.clone());
        let axes = self.model.axes(&AxesInput {
            data: &st.data,
            attrs: &self.attrs,
            accessors: &st.draw_accessors,
            x: &xd,
            y: &yd,
            inner_width: st.inner_width,
            inner_height: st.inner_height,
        });

        let mut plot = Vec::new();
        if self.model.uses_axes() {
            draw_axes(&axes, &self.attrs, st.inner_width, st.inner_height, &mut plot);
        }
        self.model.draw(
            &DrawContext {
                data: &st.data,
                attrs: &self.attrs,
                accessors: &st.draw_accessors,
                axes: &axes,
                palette: &st.palette,
                toggles: &st.toggles,
                inner_width: st.inner_width,
                inner_height: st.inner_height,
                jitter_seed: st.jitter_seed,
            },
            &mut plot,
        );
        st.surface.clear(LayerKind::Plot);
        st.surface.extend(LayerKind::Plot, plot);

        let pair = ScalePair { x: axes.x_scale.clone(), y: axes.y_scale.clone() };
        if cache {
            st.views.push(pair.clone());
        }
        debug_log!(id = %self.attrs.id, cache, depth = st.views.len(), "redraw");
        st.current = Some(pair);
        st.axes = Some(axes);
        self.draw_annotations();
        self
    }

    /// Report that the target is now attached, drawing a pending legend if still in time.
    pub fn notify_attached(&mut self, now: Instant) -> &mut Self {
        if let Some(st) = self.state.as_mut() {
            st.target.set_attached(true);
        }
        self.poll_legend(now)
    }

    /// Advance a pending legend: draw it once the target is attached, or give up after the timeout.
    pub fn poll_legend(&mut self, now: Instant) -> &mut Self {
        let readiness = match self.state.as_ref() {
            Some(st) => st.legend_wait.map(|w| w.poll(st.target.is_attached(), now)),
            None => None,
        };
        match readiness {
            Some(Readiness::Ready) => self.draw_legend(),
            Some(Readiness::Expired) => {
                tracing::warn!(id = %self.attrs.id, "target was never attached; legend skipped");
                if let Some(st) = self.state.as_mut() {
                    st.legend_wait = None;
                }
            }
            Some(Readiness::Pending) | None => {}
        }
        self
    }

    pub fn legend_pending(&self) -> bool { self.state.as_ref().is_some_and(|s| s.legend_wait.is_some()) }

    fn draw_legend(&mut self) {
        let Some(st) = self.state.as_mut() else { return };
        let legend = Legend::layout(&st.palette, &self.attrs, st.width);
        let mut out = Vec::new();
        legend.draw(&self.attrs, &st.toggles, &mut out);
        st.surface.clear(LayerKind::Legend);
        st.surface.extend(LayerKind::Legend, out);
        st.legend = Some(legend);
        st.legend_wait = None;
    }

    pub(crate) fn draw_glyphs(&mut self) {
        let Some(st) = self.state.as_mut() else { return };
        let mut out = Vec::new();
        glyph::draw(&st.glyphs, self.attrs.glyph_shape, &st.modes, &mut out);
        st.surface.clear(LayerKind::Glyphs);
        st.surface.extend(LayerKind::Glyphs, out);
    }

    pub(crate) fn draw_annotations(&mut self) {
        let Some(st) = self.state.as_mut() else { return };
        let mut out = Vec::new();
        if let Some(current) = &st.current {
            annotation::draw(&self.annotations, current, &st.toggles, &mut out);
        }
        st.surface.clear(LayerKind::Annotations);
        st.surface.extend(LayerKind::Annotations, out);
    }

    /// Hide or show every mark of `group`; returns true when the group is now hidden.
    pub fn toggle_group(&mut self, group: &str) -> bool {
        let Some(st) = self.state.as_mut() else { return false };
        let hidden = st.toggles.toggle(group);
        st.surface.set_group_visibility(group, !hidden);
        self.attrs.toggled = st.toggles.to_vec();
        if st.legend.is_some() {
            self.draw_legend();
        }
        self.emit(ChartEvent::GroupToggled { group: group.to_string(), hidden });
        hidden
    }

    // ---- view controller ----

    pub fn set_pan_mode(&mut self, on: bool) -> &mut Self {
        if let Some(st) = self.state.as_mut() {
            if st.zoom_enabled {
                st.modes.set_pan(on);
            }
        }
        self.draw_glyphs();
        self
    }

    pub fn set_annotate_mode(&mut self, on: bool) -> &mut Self {
        let allowed = self.attrs.annotatable;
        if let Some(st) = self.state.as_mut() {
            st.modes.annotate = on && allowed;
        }
        self.draw_glyphs();
        self
    }

    /// Step back one zoom level; at the home view this does nothing.
    pub fn undo_zoom(&mut self) -> &mut Self {
        let Some(st) = self.state.as_mut() else { return self };
        if !st.views.pop() {
            return self;
        }
        let Some((x, y)) = st.views.top().map(ScalePair::domains) else { return self };
        self.redraw(Some(x), Some(y), false)
    }

    /// Return to the home view, dropping all zoom history.
    pub fn reset_view(&mut self) -> &mut Self {
        let Some(st) = self.state.as_mut() else { return self };
        st.views.reset();
        let Some((x, y)) = st.views.home().map(ScalePair::domains) else { return self };
        self.redraw(Some(x), Some(y), false);
        self.emit(ChartEvent::ViewReset);
        self
    }

    // ---- export ----

    /// Style a copy of the surface for export and hand it to the installed exporter.
    pub fn export(&mut self, filename: &str) -> ChartResult<PathBuf> {
        let st = self.state.as_ref().ok_or_else(|| ChartError::NotRendered(self.attrs.id.clone()))?;
        let exporter = self.exporter.as_ref().ok_or_else(|| ChartError::NoExporter(self.attrs.id.clone()))?;
        let prepared = export::prepare(&st.surface, &Theme::export());
        let path = exporter.export(&prepared, filename)?;
        tracing::info!(id = %self.attrs.id, path = %path.display(), "chart exported");
        self.emit(ChartEvent::Exported(path.clone()));
        Ok(path)
    }
}

// ---- typed attribute access ----

// Typed setters replace the whole value. Partial objects and single values for list
// attributes go through `set_attr`, which applies the merge and wrap rules.
macro_rules! attribute_accessors {
    ($($field:ident, $setter:ident: $ty:ty;)*) => {
        impl Chart {
            $(
                pub fn $field(&self) -> &$ty { &self.attrs.$field }

                pub fn $setter(&mut self, value: $ty) -> &mut Self {
                    self.attrs.$field = value;
                    self
                }
            )*
        }
    };
}

// Same, for `auto`-able attributes: accepts a bare value or `Auto`.
macro_rules! auto_attribute_accessors {
    ($($field:ident, $setter:ident: $ty:ty;)*) => {
        impl Chart {
            $(
                pub fn $field(&self) -> &Auto<$ty> { &self.attrs.$field }

                pub fn $setter(&mut self, value: impl Into<Auto<$ty>>) -> &mut Self {
                    self.attrs.$field = value.into();
                    self
                }
            )*
        }
    };
}

attribute_accessors! {
    plotname, set_plotname: String;
    margin, set_margin: Margin;
    data, set_data: Vec<Record>;
    layout, set_layout: Layout;
    zoomable, set_zoomable: bool;
    annotatable, set_annotatable: bool;
    exportable, set_exportable: bool;
    grid, set_grid: bool;
    legend, set_legend: bool;
    toggle, set_toggle: bool;
    glyphs, set_glyphs: bool;
    x_label, set_x_label: String;
    y_label, set_y_label: String;
    opacity, set_opacity: f64;
    size, set_size: f64;
    points, set_points: f64;
    bins, set_bins: usize;
    x_jitter, set_x_jitter: f64;
    y_jitter, set_y_jitter: f64;
    legend_order, set_legend_order: Vec<String>;
    toggled, set_toggled: Vec<String>;
}

auto_attribute_accessors! {
    width, set_width: f64;
    height, set_height: f64;
    color, set_color: Vec<String>;
    x_range, set_x_range: Domain;
    y_range, set_y_range: Domain;
    x_format, set_x_format: String;
    y_format, set_y_format: String;
    x_ticks, set_x_ticks: usize;
    y_ticks, set_y_ticks: usize;
}

// ---- helpers ----

fn draw_axes(axes: &AxisSet, attrs: &Attributes, w: f64, h: f64, out: &mut Vec<Element>) {
    let x_origin = if axes.x_axis.orient == Orient::Top { (0.0, 0.0) } else { (0.0, h) };
    let y_origin = if axes.y_axis.orient == Orient::Right { (w, 0.0) } else { (0.0, 0.0) };
    let x_title = AxisTitle { text: &attrs.x_label, position: attrs.label_position, padding: attrs.label_padding };
    let y_title = AxisTitle { text: &attrs.y_label, position: attrs.label_position, padding: attrs.label_padding };
    axis::draw_axis(&axes.x_axis, "x", x_origin, (w, h), Some(x_title), out);
    axis::draw_axis(&axes.y_axis, "y", y_origin, (w, h), Some(y_title), out);
    for s in &axes.sections {
        axis::draw_axis(&s.axis, "y section", (s.position, 0.0), (w, h), None, out);
    }
}
