// File: crates/meridian-core/tests/attributes.rs
// Purpose: Chart attribute access: construction overrides, chained setters, wrapping, resources.

use meridian_core::config::SlotKind;
use meridian_core::tooltip::Tooltip;
use meridian_core::{create_chart, Auto, Chart, ChartError, ChartKind, Margin};
use serde_json::json;

#[test]
fn construction_overrides_merge_into_defaults() {
    let chart = Chart::new(ChartKind::Line, json!({ "width": 600, "margin": { "top": 5 } }));
    assert_eq!(chart.width(), &Auto::Explicit(600.0));
    assert_eq!(chart.margin().top, 5.0);
    assert_eq!(chart.margin().left, 40.0);
    assert!(chart.height().is_auto());
    assert_eq!(chart.attributes().class, "meridian-line");
}

#[test]
fn setters_chain_and_read_back() {
    let mut chart = Chart::new(ChartKind::Scatter, json!({}));
    chart
        .set_attr("xlabel", json!("time"))
        .set_attr("ylabel", json!("value"))
        .set_bins(20usize)
        .set_zoomable(true);
    assert_eq!(chart.attr("xlabel"), Some(json!("time")));
    assert_eq!(chart.attr("ylabel"), Some(json!("value")));
    assert_eq!(chart.bins(), &20);
    assert!(*chart.zoomable());
}

#[test]
fn single_value_for_array_attribute_is_wrapped() {
    let mut chart = Chart::new(ChartKind::Line, json!({}));
    chart.set_attr("color", json!("#ff0000"));
    assert_eq!(chart.attr("color"), Some(json!(["#ff0000"])));
    assert_eq!(chart.color(), &Auto::Explicit(vec!["#ff0000".to_string()]));
}

#[test]
fn single_color_override_is_wrapped_at_construction() {
    let chart = Chart::new(ChartKind::Line, json!({ "color": "red" }));
    assert_eq!(chart.attr("color"), Some(json!(["red"])));
    assert_eq!(chart.color(), &Auto::Explicit(vec!["red".to_string()]));
    assert_eq!(chart.attribute_table().kind("color"), Some(SlotKind::Sequence));

    let mut chart = Chart::new(ChartKind::Histogram, json!({ "color": ["red", "blue"] }));
    assert_eq!(chart.attr("color"), Some(json!(["red", "blue"])));
    chart.set_attr("color", json!("auto"));
    assert!(chart.color().is_auto());
}

#[test]
fn object_value_merges_into_structured_attribute() {
    let mut chart = Chart::new(ChartKind::Line, json!({}));
    chart.set_attr("margin", json!({ "right": 100 }));
    assert_eq!(chart.margin().right, 100.0);
    assert_eq!(chart.margin().top, 20.0);
}

#[test]
fn typed_setter_replaces_while_set_attr_merges() {
    let mut chart = Chart::new(ChartKind::Line, json!({}));
    chart.set_margin(Margin::new(5.0, 6.0, 7.0, 8.0));
    assert_eq!(chart.margin(), &Margin::new(5.0, 6.0, 7.0, 8.0));

    chart.set_attr("margin", json!({ "top": 50 }));
    assert_eq!(chart.margin(), &Margin::new(50.0, 6.0, 7.0, 8.0));

    chart.set_color(vec!["teal".to_string()]);
    assert_eq!(chart.attr("color"), Some(json!(["teal"])));
    chart.set_width(640.0).set_height(Auto::<f64>::Auto);
    assert_eq!(chart.width(), &Auto::Explicit(640.0));
    assert!(chart.height().is_auto());
}

#[test]
fn rejected_value_keeps_previous() {
    let mut chart = Chart::new(ChartKind::Line, json!({ "zoomable": true }));
    chart.set_attr("zoomable", json!("sometimes"));
    assert!(*chart.zoomable());
    let err = chart.try_set_attr("zoomable", json!("sometimes")).err().expect("should fail");
    assert!(matches!(err, ChartError::Attribute { ref key, .. } if key == "zoomable"));
}

#[test]
fn unknown_keys_are_kept_and_registered() {
    let mut chart = Chart::new(ChartKind::Line, json!({ "owner": "ops" }));
    assert_eq!(chart.attr("owner"), Some(json!("ops")));
    chart.set_attr("extras", json!({ "a": 1 }));
    chart.set_attr("extras", json!({ "b": 2 }));
    assert_eq!(chart.attr("extras"), Some(json!({ "a": 1, "b": 2 })));
    assert_eq!(chart.attribute_table().kind("extras"), Some(SlotKind::Structured));
}

#[test]
fn replacing_tooltip_releases_previous() {
    let mut chart = Chart::new(ChartKind::Line, json!({}));
    assert_eq!(chart.attr("tooltip"), Some(json!(false)));
    chart.set_tooltip(true);
    let first = chart.tooltip().expect("tooltip").id.clone();

    let released = chart.replace_tooltip(Some(Tooltip::new())).expect("previous tooltip");
    assert_eq!(released.id, first);
    assert!(!released.is_attached());
    assert!(chart.tooltip().is_some_and(|t| t.is_attached() && t.id != first));

    chart.set_attr("tooltip", json!(false));
    assert!(chart.tooltip().is_none());
    assert_eq!(chart.attr("tooltip"), Some(json!(false)));
}

#[test]
fn annotation_attribute_accepts_single_record() {
    let mut chart = Chart::new(ChartKind::Line, json!({}));
    chart.set_attr("annotation", json!({ "x": 1, "y": 2, "text": "peak" }));
    let a = &chart.annotations()[0];
    assert_eq!(chart.annotations().len(), 1);
    assert_eq!(a.text, "peak");
    assert_eq!(a.size, 15.0);
    assert_eq!((a.x, a.y), (1.0, 2.0));
    let out = chart.attr("annotation").expect("annotation value");
    assert_eq!(out[0]["text"], json!("peak"));
    assert_eq!(out[0]["text-size"], json!(13.0));
}

#[test]
fn unknown_kind_is_an_error() {
    assert!(matches!(create_chart("radar", json!({})), Err(ChartError::UnknownKind(k)) if k == "radar"));
    let chart = create_chart("Histogram", json!({})).expect("kind names are case-insensitive");
    assert_eq!(chart.kind(), ChartKind::Histogram);
}
