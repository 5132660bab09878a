// File: crates/meridian-core/src/lib.rs
// Summary: Core library entry point; exports the chart engine API (configuration, rendering, interaction).

pub mod logging;
pub mod settings;
pub mod error;
pub mod types;
pub mod geometry;
pub mod config;
pub mod attributes;
pub mod accessor;
pub mod format;
pub mod grid;
pub mod scale;
pub mod axis;
pub mod palette;
pub mod theme;
pub mod scene;
pub mod svg;
pub mod view;
pub mod legend;
pub mod annotation;
pub mod glyph;
pub mod tooltip;
pub mod event;
pub mod models;
pub mod chart;
pub mod interaction;
pub mod export;
pub mod registry;

pub use accessor::Accessors;
pub use annotation::{Annotation, AnnotationDefaults, AnnotationPoint, AnnotationShape};
pub use attributes::{Attributes, Layout};
pub use axis::{derive_axes, AxisSet};
pub use chart::Chart;
pub use config::{merge, Auto};
pub use error::{ChartError, ChartResult};
pub use event::{ChartEvent, InputEvent, Modifier};
pub use export::{ImageExporter, SvgExporter};
pub use models::ChartKind;
pub use registry::{ChartId, Registry};
pub use scale::{Domain, Scale};
pub use scene::{LayerKind, Surface, Target};
pub use theme::Theme;
pub use types::{Datum, Margin, Record};
pub use view::{ScalePair, ViewStack};

/// Create a chart by kind name ("line", "scatter", "histogram", "pie", "multiline").
pub fn create_chart(kind: &str, overrides: serde_json::Value) -> ChartResult<Chart> {
    Ok(Chart::new(kind.parse()?, overrides))
}
