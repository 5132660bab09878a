// File: crates/meridian-core/tests/registry.rs
// Purpose: Registry lifecycle and modifier broadcast across independent charts.

use meridian_core::glyph::Control;
use meridian_core::{ChartKind, Modifier, Registry, Target};
use serde_json::json;

fn registry_with_two() -> Registry {
    let mut registry = Registry::new();
    for kind in [ChartKind::Line, ChartKind::Scatter] {
        let id = registry.create(kind, json!({ "zoomable": true, "annotatable": true, "data": [{"x":0,"y":0},{"x":1,"y":1}] }));
        if let Some(chart) = registry.get_mut(id) {
            chart.render(Target::new(format!("#chart-{}", id.get())).attached(true));
        }
    }
    registry
}

#[test]
fn shift_switches_every_chart_to_pan() {
    let mut registry = registry_with_two();
    registry.modifier_down(Modifier::Shift);
    assert!(registry.iter().all(|(_, c)| c.modes().pan && !c.modes().zoom));
    registry.modifier_up(Modifier::Shift);
    assert!(registry.iter().all(|(_, c)| !c.modes().pan && c.modes().zoom));
}

#[test]
fn shift_a_switches_every_chart_to_annotate() {
    let mut registry = registry_with_two();
    registry.modifier_down(Modifier::ShiftA);
    assert!(registry.iter().all(|(_, c)| c.modes().annotate));
    // the annotate glyph shows as active
    for (_, chart) in registry.iter() {
        let glyph = chart.surface().and_then(|s| s.find_by_id("glyph-annotate")).expect("annotate glyph");
        assert_eq!(glyph.style.stroke_width, 3.0);
    }
    registry.modifier_up(Modifier::ShiftA);
    assert!(registry.iter().all(|(_, c)| !c.modes().annotate));
}

#[test]
fn registries_are_isolated() {
    let mut a = registry_with_two();
    let b = registry_with_two();
    a.modifier_down(Modifier::Shift);
    assert!(b.iter().all(|(_, c)| !c.modes().pan));

    let first = a.ids().next().expect("id");
    let removed = a.remove(first).expect("removed");
    assert_eq!(removed.kind(), ChartKind::Line);
    assert_eq!(a.len(), 1);
    assert!(a.get(first).is_none());
    // ids are never reused
    let again = a.create(ChartKind::Pie, json!({}));
    assert_ne!(again, first);
}

#[test]
fn pan_glyph_click_toggles_mode() {
    let mut registry = registry_with_two();
    let id = registry.ids().next().expect("id");
    let chart = registry.get_mut(id).expect("chart");
    let pan = chart.glyph_boxes().iter().find(|g| g.control == Control::Pan).map(|g| g.rect).expect("pan glyph");
    chart.handle(meridian_core::InputEvent::Click { x: pan.left + 11.0, y: pan.top + 11.0 });
    assert!(chart.modes().pan);
    chart.handle(meridian_core::InputEvent::Click { x: pan.left + 11.0, y: pan.top + 11.0 });
    assert!(!chart.modes().pan);
}
