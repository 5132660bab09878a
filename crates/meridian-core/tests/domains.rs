// File: crates/meridian-core/tests/domains.rs
// Purpose: Domain derivation end to end, stacked sums, and the reshaping chart kinds.

use meridian_core::axis::derive_domains;
use meridian_core::models::histogram;
use meridian_core::models::pie;
use meridian_core::models::scatter::ScatterChart;
use meridian_core::scene::Shape;
use meridian_core::{Accessors, Chart, ChartKind, Domain, LayerKind, Layout, Record, Target};
use serde_json::json;

fn rendered(kind: ChartKind, overrides: serde_json::Value) -> Chart {
    let mut chart = Chart::new(kind, overrides);
    chart.render(Target::new("#chart").attached(true));
    chart
}

#[test]
fn numeric_records_derive_min_max_domains() {
    let chart = rendered(ChartKind::Line, json!({ "data": [{"x":1,"y":1},{"x":2,"y":4},{"x":3,"y":9}] }));
    let d = chart.domains().expect("rendered");
    assert_eq!(d.x, Domain::Continuous(1.0, 3.0));
    assert_eq!(d.y, Domain::Continuous(1.0, 9.0));
    let scales = chart.scales().expect("scales");
    assert_eq!(scales.domains(), (Domain::Continuous(1.0, 3.0), Domain::Continuous(1.0, 9.0)));
    assert_eq!(chart.view_stack().map(|v| v.len()), Some(1));
}

#[test]
fn stacked_layout_uses_largest_per_x_sum() {
    let data = vec![
        Record::new("a", 2).with_group("g1"),
        Record::new("a", 3).with_group("g2"),
        Record::new("b", 1).with_group("g1"),
    ];
    let stacked = derive_domains(&data, &Accessors::default(), Layout::Stacked);
    assert_eq!(stacked.y, Domain::Continuous(1.0, 5.0));
    assert_eq!(stacked.x, Domain::Categorical(vec!["a".into(), "b".into()]));
    let plain = derive_domains(&data, &Accessors::default(), Layout::Line);
    assert_eq!(plain.y, Domain::Continuous(1.0, 3.0));

    let mut chart = Chart::new(ChartKind::Line, json!({ "layout": "stacked" }));
    chart.set_data(data);
    chart.render(Target::new("#stack").attached(true));
    assert_eq!(chart.domains().map(|d| d.y.clone()), Some(Domain::Continuous(1.0, 5.0)));
}

#[test]
fn configured_ranges_override_data() {
    let chart = rendered(
        ChartKind::Line,
        json!({ "data": [{"x":1,"y":1},{"x":3,"y":9}], "xrange": [0, 10], "yrange": "auto" }),
    );
    let (x, y) = chart.scales().expect("scales").domains();
    assert_eq!(x, Domain::Continuous(0.0, 10.0));
    assert_eq!(y, Domain::Continuous(1.0, 9.0));
}

#[test]
fn custom_accessors_drive_domains() {
    let mut chart = Chart::new(ChartKind::Line, json!({ "data": [{"x":1,"y":1},{"x":2,"y":4}] }));
    chart.set_y(|r, _| meridian_core::Datum::Number(r.y.as_f64().unwrap_or(0.0) * 10.0));
    chart.render(Target::new("#acc").attached(true));
    assert_eq!(chart.domains().map(|d| d.y.clone()), Some(Domain::Continuous(10.0, 40.0)));
}

#[test]
fn histogram_bins_counts_and_extends_domain() {
    let data: Vec<Record> = [1.0, 2.0, 3.0, 4.0].into_iter().map(|v| Record::new(v, 0.0)).collect();
    let bins = histogram::bin(&data, &Accessors::default(), 2);
    let counts: Vec<f64> = bins.iter().filter_map(|r| r.y.as_f64()).collect();
    let starts: Vec<f64> = bins.iter().filter_map(|r| r.x.as_f64()).collect();
    assert_eq!(counts, vec![2.0, 2.0]);
    assert_eq!(starts, vec![1.0, 2.5]);

    let mut chart = Chart::new(ChartKind::Histogram, json!({ "bins": 2 }));
    chart.set_data(data);
    chart.render(Target::new("#hist").attached(true));
    assert_eq!(chart.domains().map(|d| d.x.clone()), Some(Domain::Continuous(1.0, 4.0)));
    assert_eq!(chart.prepared_data().len(), 2);
}

#[test]
fn pie_aggregates_groups_into_slices() {
    let data = vec![
        Record::new(1, 0).with_group("a"),
        Record::new(2, 0).with_group("a"),
        Record::new(3, 0).with_group("b"),
    ];
    let slices = pie::aggregate(&data, &Accessors::default());
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].group.as_deref(), Some("a"));
    assert_eq!(slices[0].x.as_f64(), Some(3.0));

    let angles = pie::slice_angles(&[1.0, 3.0, 0.0]);
    let tau = std::f64::consts::TAU;
    assert!((angles[0].1 - tau / 4.0).abs() < 1e-12);
    assert!((angles[1].1 - tau).abs() < 1e-12);
    assert_eq!(angles[2].0, angles[2].1);

    let mut chart = Chart::new(ChartKind::Pie, json!({}));
    chart.set_data(data);
    chart.render(Target::new("#pie").attached(true));
    let surface = chart.surface().expect("surface");
    let arcs = surface.elements_in(LayerKind::Plot).iter().filter(|e| matches!(e.shape, Shape::Arc { .. })).count();
    assert_eq!(arcs, 2);
    assert_eq!(surface.with_class("arc-label").count(), 2);
    assert!(surface.with_class("axis").next().is_none());
}

#[test]
fn multiline_builds_one_section_per_category() {
    let chart = rendered(
        ChartKind::Multiline,
        json!({
            "data": [
                {"x":"cpu","y":10,"group":"h1"}, {"x":"mem","y":200,"group":"h1"},
                {"x":"cpu","y":30,"group":"h2"}, {"x":"mem","y":100,"group":"h2"}
            ],
            "yranges": { "mem": [0, 400] }
        }),
    );
    let axes = chart.axes().expect("axes");
    assert_eq!(axes.x_groups.as_deref(), Some(&["cpu".to_string(), "mem".to_string()][..]));
    assert_eq!(axes.sections.len(), 2);
    assert_eq!(axes.sections[0].scale.domain, (10.0, 30.0));
    assert_eq!(axes.sections[1].scale.domain, (0.0, 400.0));
    assert_eq!(axes.x_axis.tick_size, 0.0);
    assert_eq!(axes.x_axis.tick_padding, 15.0);
}

#[test]
fn scatter_jitter_is_stable_across_redraws() {
    assert_eq!(ScatterChart::jitter(7, 3, 10.0, 10.0), ScatterChart::jitter(7, 3, 10.0, 10.0));
    assert_eq!(ScatterChart::jitter(7, 3, 0.0, 0.0), (0.0, 0.0));

    let mut chart = rendered(
        ChartKind::Scatter,
        json!({ "data": [{"x":1,"y":1},{"x":2,"y":4},{"x":3,"y":9}], "xjitter": 12, "yjitter": 12 }),
    );
    let dots = |c: &Chart| -> Vec<Shape> {
        c.surface().expect("surface").with_class("dot").map(|e| e.shape.clone()).collect()
    };
    let before = dots(&chart);
    assert_eq!(before.len(), 3);
    chart.redraw(None, None, false);
    assert_eq!(dots(&chart), before);
}

#[test]
fn empty_data_gives_degenerate_domains_for_every_kind() {
    for kind in ChartKind::ALL {
        let mut chart = rendered(kind, json!({ "zoomable": true, "data": [] }));
        let d = chart.domains().expect("rendered");
        assert_eq!(d.x, Domain::Continuous(0.0, 0.0), "{kind} x");
        assert_eq!(d.y, Domain::Continuous(0.0, 0.0), "{kind} y");
        assert_eq!(chart.view_stack().map(|v| v.len()), Some(1), "{kind}");

        chart.redraw(None, None, false).undo_zoom().reset_view();
        assert!(chart.surface().is_some(), "{kind}");
        assert_eq!(chart.view_stack().map(|v| v.len()), Some(1), "{kind}");
    }
}
