// File: crates/meridian-core/src/attributes.rs
// Summary: Typed chart configuration, its enums, and per-kind default overlays.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::{self, Auto};
use crate::scale::Domain;
use crate::types::{Margin, Offset, Record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Line,
    Area,
    Stacked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    Top,
    Bottom,
    Left,
    Right,
}

/// Where tick labels and the axis label sit relative to the plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPlacement {
    Inside,
    #[default]
    Outside,
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Beginning,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Inside,
    #[default]
    Outside,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    #[default]
    Square,
    Circle,
}

/// Full configuration of one chart. Unknown keys are kept in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    /// Empty until a chart assigns one; deserializing never draws from the global seed.
    pub id: String,
    pub plotname: String,
    pub class: String,
    pub width: Auto<f64>,
    pub height: Auto<f64>,
    pub margin: Margin,
    pub bind: String,
    pub data: Vec<Record>,
    pub color: Auto<Vec<String>>,
    #[serde(rename = "xrange")]
    pub x_range: Auto<Domain>,
    #[serde(rename = "yrange")]
    pub y_range: Auto<Domain>,
    pub layout: Layout,
    pub zoomable: bool,
    pub annotatable: bool,
    pub exportable: bool,
    pub grid: bool,
    #[serde(rename = "xticks")]
    pub x_ticks: Auto<usize>,
    #[serde(rename = "yticks")]
    pub y_ticks: Auto<usize>,
    #[serde(rename = "xaxis")]
    pub x_axis: AxisPlacement,
    #[serde(rename = "yaxis")]
    pub y_axis: AxisPlacement,
    #[serde(rename = "xformat")]
    pub x_format: Auto<String>,
    #[serde(rename = "yformat")]
    pub y_format: Auto<String>,
    #[serde(rename = "xorient")]
    pub x_orient: Orient,
    #[serde(rename = "yorient")]
    pub y_orient: Orient,
    #[serde(rename = "xlabel")]
    pub x_label: String,
    #[serde(rename = "ylabel")]
    pub y_label: String,
    #[serde(rename = "labelposition")]
    pub label_position: LabelPosition,
    #[serde(rename = "labelpadding")]
    pub label_padding: Offset,
    pub opacity: f64,
    pub legend: bool,
    #[serde(rename = "lmargin")]
    pub legend_margin: Margin,
    #[serde(rename = "lposition")]
    pub legend_position: LegendPosition,
    #[serde(rename = "lshape")]
    pub legend_shape: MarkerShape,
    #[serde(rename = "lorder")]
    pub legend_order: Vec<String>,
    pub toggle: bool,
    pub toggled: Vec<String>,
    pub glyphs: bool,
    #[serde(rename = "gshape")]
    pub glyph_shape: MarkerShape,
    /// Marker radius (scatter), stroke width (line, multiline).
    pub size: f64,
    /// Point radius drawn on line vertices; 0 disables points.
    pub points: f64,
    pub bins: usize,
    #[serde(rename = "xjitter")]
    pub x_jitter: f64,
    #[serde(rename = "yjitter")]
    pub y_jitter: f64,
    #[serde(rename = "xdensity")]
    pub x_density: bool,
    #[serde(rename = "ydensity")]
    pub y_density: bool,
    pub radius: Auto<f64>,
    pub inner: Auto<f64>,
    /// Per-section y bounds for multiline charts.
    pub yranges: IndexMap<String, (f64, f64)>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            id: String::new(),
            plotname: "meridian-plot".into(),
            class: "meridian-root".into(),
            width: Auto::Auto,
            height: Auto::Auto,
            margin: Margin::default(),
            bind: "body".into(),
            data: Vec::new(),
            color: Auto::Auto,
            x_range: Auto::Auto,
            y_range: Auto::Auto,
            layout: Layout::Line,
            zoomable: false,
            annotatable: false,
            exportable: false,
            grid: false,
            x_ticks: Auto::Auto,
            y_ticks: Auto::Auto,
            x_axis: AxisPlacement::Outside,
            y_axis: AxisPlacement::Outside,
            x_format: Auto::Auto,
            y_format: Auto::Auto,
            x_orient: Orient::Bottom,
            y_orient: Orient::Left,
            x_label: String::new(),
            y_label: String::new(),
            label_position: LabelPosition::Middle,
            label_padding: Offset::default(),
            opacity: 1.0,
            legend: true,
            legend_margin: Margin::zero(),
            legend_position: LegendPosition::Outside,
            legend_shape: MarkerShape::Square,
            legend_order: Vec::new(),
            toggle: true,
            toggled: Vec::new(),
            glyphs: true,
            glyph_shape: MarkerShape::Circle,
            size: 2.0,
            points: 0.0,
            bins: 10,
            x_jitter: 0.0,
            y_jitter: 0.0,
            x_density: false,
            y_density: false,
            radius: Auto::Auto,
            inner: Auto::Auto,
            yranges: IndexMap::new(),
            extra: Map::new(),
        }
    }
}

impl Attributes {
    /// Full default tree for a chart kind: base defaults with the kind's overlay merged in.
    pub fn defaults_tree(overlay: &Value) -> Value {
        config::merge(&config::to_tree(&Attributes::default()), overlay)
    }

    pub fn to_tree(&self) -> Value { config::to_tree(self) }

    pub fn from_tree(tree: Value) -> Result<Self, serde_json::Error> { config::from_tree(tree) }

    pub fn x_format_spec(&self) -> Option<&str> { self.x_format.explicit().map(String::as_str) }

    pub fn y_format_spec(&self) -> Option<&str> { self.y_format.explicit().map(String::as_str) }
}

// ---- per-kind overlays ----

pub fn line_overlay() -> Value {
    json!({ "class": "meridian-line", "size": 1.5, "points": 0, "layout": "line" })
}

pub fn scatter_overlay() -> Value {
    json!({
        "class": "meridian-scatter",
        "size": 5,
        "xjitter": 0,
        "yjitter": 0,
        "xdensity": false,
        "ydensity": false
    })
}

pub fn histogram_overlay() -> Value {
    json!({ "class": "meridian-histogram", "bins": 10, "opacity": 0.75 })
}

pub fn pie_overlay() -> Value {
    json!({ "class": "meridian-pie", "radius": "auto", "inner": "auto", "opacity": 0.75 })
}

pub fn multiline_overlay() -> Value {
    json!({
        "class": "meridian-multiline",
        "margin": { "top": 30, "bottom": 20, "left": 0, "right": 70 },
        "points": 0,
        "size": 3,
        "layout": "line",
        "yranges": {}
    })
}
