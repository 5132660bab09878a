// File: crates/meridian-core/tests/annotations.rs
// Purpose: Annotation placement: hit-radius rejection, default generators, click routing.

use std::cell::RefCell;
use std::rc::Rc;

use meridian_core::annotation::{self, HIT_RADIUS_PX};
use meridian_core::{Annotation, AnnotationDefaults, AnnotationShape, Chart, ChartKind, InputEvent, LayerKind, Target};
use serde_json::json;

fn annotatable(overrides: serde_json::Value) -> Chart {
    let mut base = json!({ "annotatable": true, "data": [{"x":0,"y":0},{"x":10,"y":10}] });
    if let (Some(b), Some(o)) = (base.as_object_mut(), overrides.as_object()) {
        b.extend(o.clone());
    }
    let mut chart = Chart::new(ChartKind::Line, base);
    chart.render(Target::new("#notes").attached(true));
    chart
}

#[test]
fn clicks_near_an_existing_annotation_are_rejected() {
    let mut chart = annotatable(json!({}));
    assert!(chart.annotate_at(100.0, 100.0).is_some());
    assert!(chart.annotate_at(110.0, 110.0).is_none());
    assert!(chart.annotate_at(100.0 + HIT_RADIUS_PX - 1.0, 100.0).is_none());
    assert_eq!(chart.annotations().len(), 1);

    // far enough on one axis is enough
    assert!(chart.annotate_at(130.0, 100.0).is_some());
    assert_eq!(chart.annotations().len(), 2);
}

#[test]
fn new_annotation_takes_default_fields() {
    let mut chart = annotatable(json!({}));
    let id = chart.id().to_string();
    let a = chart.annotate_at(300.0, 200.0).cloned().expect("placed");
    assert_eq!(a.parent.as_deref(), Some(id.as_str()));
    assert_eq!(a.shape, AnnotationShape::Circle);
    assert_eq!(a.text, format!("{:.2}", a.x));
    assert_eq!(a.size, 15.0);
    assert_eq!(a.text_size, 13.0);
    assert_eq!((a.text_position.x, a.text_position.y), (0.0, 20.0));
    assert!(a.id.starts_with('u'));
    assert!(!a.draggable);

    let scales = chart.scales().expect("scales");
    let (px, py) = annotation::position(&a, scales).expect("mapped");
    assert!((px - 300.0).abs() < 1e-6 && (py - 200.0).abs() < 1e-6);

    let drawn = chart.surface().expect("surface").elements_in(LayerKind::Annotations);
    assert!(drawn.iter().any(|e| e.id.as_deref() == Some(a.id.as_str()) && e.has_class("annotation")));
}

#[test]
fn x_format_drives_default_text() {
    let mut chart = annotatable(json!({ "xformat": ".1f" }));
    let a = chart.annotate_at(300.0, 200.0).cloned().expect("placed");
    assert_eq!(a.text, format!("{:.1}", a.x));
}

#[test]
fn generators_can_be_replaced() {
    let mut chart = annotatable(json!({}));
    let mut defaults = AnnotationDefaults::standard(None);
    defaults.text = Rc::new(|p| format!("x={:.0}", p.x));
    defaults.shape = Rc::new(|_| AnnotationShape::Square);
    defaults.group = Rc::new(|_| Some("notes".to_string()));
    chart.set_annotation_defaults(defaults);
    let a = chart.annotate_at(459.5, 290.0).cloned().expect("placed");
    assert_eq!(a.text, "x=5");
    assert_eq!(a.shape, AnnotationShape::Square);
    assert_eq!(a.group.as_deref(), Some("notes"));
}

#[test]
fn clicks_annotate_only_in_annotate_mode() {
    let mut chart = annotatable(json!({}));
    let added = Rc::new(RefCell::new(0));
    let sink = added.clone();
    chart.on(move |e| {
        if e.name() == "add" {
            *sink.borrow_mut() += 1;
        }
    });

    chart.handle(InputEvent::Click { x: 440.0, y: 320.0 });
    assert!(chart.annotations().is_empty());

    chart.set_annotate_mode(true);
    chart.handle(InputEvent::Click { x: 440.0, y: 320.0 });
    chart.handle(InputEvent::Click { x: 445.0, y: 322.0 });
    assert_eq!(chart.annotations().len(), 1);
    assert_eq!(*added.borrow(), 1);
}

#[test]
fn annotation_mode_needs_annotatable() {
    let mut chart = Chart::new(ChartKind::Line, json!({ "data": [{"x":0,"y":0},{"x":1,"y":1}] }));
    chart.render(Target::new("#plain").attached(true));
    chart.set_annotate_mode(true);
    assert!(!chart.modes().annotate);
    assert!(chart.annotate_at(100.0, 100.0).is_none());
}

#[test]
fn programmatic_annotations_round_trip_as_records() {
    let mut chart = annotatable(json!({}));
    chart.add_annotation(Annotation { id: "a1".into(), x: 2.0, y: 3.0, text: "spike".into(), ..Annotation::default() });
    let value = chart.attr("annotation").expect("value");
    assert_eq!(value[0]["id"], json!("a1"));
    assert_eq!(value[0]["type"], json!("circle"));
    let back: Vec<Annotation> = serde_json::from_value(value).expect("records");
    assert_eq!(back, chart.annotations());
    assert!(chart.surface().expect("surface").find_by_id("a1").is_some());
}
