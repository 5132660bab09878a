// File: crates/meridian-core/src/event.rs
// Summary: Host input events, keyboard modifiers, and events charts emit to listeners.

use std::path::PathBuf;

use crate::annotation::Annotation;
use crate::scale::Domain;

/// Pointer input in surface pixel coordinates, as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    DoubleClick { x: f64, y: f64 },
    Hover { x: f64, y: f64 },
    Leave,
}

/// Global key chords broadcast to every registered chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    /// Shift: pan instead of zoom while held.
    Shift,
    /// Shift+A: annotate while held.
    ShiftA,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    Rendered,
    Zoom { x: Domain, y: Domain },
    PanStart,
    Pan { x: Domain, y: Domain },
    PanEnd,
    ViewReset,
    GroupToggled { group: String, hidden: bool },
    AnnotationAdded(Annotation),
    Exported(PathBuf),
    ElementClicked { group: Option<String>, datum: Option<usize> },
}

impl ChartEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ChartEvent::Rendered => "rendered",
            ChartEvent::Zoom { .. } => "zoom",
            ChartEvent::PanStart => "panstart",
            ChartEvent::Pan { .. } => "pan",
            ChartEvent::PanEnd => "panend",
            ChartEvent::ViewReset => "reset",
            ChartEvent::GroupToggled { .. } => "toggle",
            ChartEvent::AnnotationAdded(_) => "add",
            ChartEvent::Exported(_) => "export",
            ChartEvent::ElementClicked { .. } => "click",
        }
    }
}
