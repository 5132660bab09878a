// File: crates/meridian-core/tests/legend.rs
// Purpose: Legend layout, group toggling isolation, and the bounded wait for target attachment.

use std::time::{Duration, Instant};

use meridian_core::legend::{LegendWait, Readiness, ToggleSet};
use meridian_core::{Chart, ChartKind, InputEvent, LayerKind, Target};
use serde_json::json;

fn grouped(overrides: serde_json::Value) -> Chart {
    let mut base = json!({
        "data": [
            {"x":1,"y":1,"group":"g1"}, {"x":2,"y":2,"group":"g1"},
            {"x":1,"y":3,"group":"g2"}, {"x":2,"y":1,"group":"g2"},
            {"x":1,"y":2,"group":"g3"}, {"x":2,"y":5,"group":"g3"}
        ],
        "points": 3
    });
    if let (Some(b), Some(o)) = (base.as_object_mut(), overrides.as_object()) {
        b.extend(o.clone());
    }
    Chart::new(ChartKind::Line, base)
}

fn visible_groups(chart: &Chart, group: &str) -> (usize, usize) {
    let marks: Vec<_> = chart
        .surface()
        .expect("surface")
        .elements_in(LayerKind::Plot)
        .iter()
        .filter(|e| e.group.as_deref() == Some(group))
        .collect();
    (marks.iter().filter(|e| e.visible).count(), marks.len())
}

#[test]
fn toggling_hides_only_that_group() {
    let mut chart = grouped(json!({}));
    chart.render(Target::new("#legend").attached(true));
    let (v, total) = visible_groups(&chart, "g1");
    assert_eq!(v, total);
    assert!(total > 0);

    assert!(chart.toggle_group("g1"));
    assert_eq!(visible_groups(&chart, "g1").0, 0);
    for other in ["g2", "g3"] {
        let (v, total) = visible_groups(&chart, other);
        assert_eq!(v, total, "{other} should stay visible");
    }
    let toggles = chart.toggles().expect("toggles");
    assert!(toggles.contains("g1"));
    assert_eq!(toggles.len(), 1);
    assert_eq!(chart.toggled(), &vec!["g1".to_string()]);

    // the legend selector goes hollow, the others stay filled
    let surface = chart.surface().expect("surface");
    assert_eq!(surface.find_by_id("legend-g1").map(|e| e.style.fill_opacity), Some(0.0));
    assert_eq!(surface.find_by_id("legend-g2").map(|e| e.style.fill_opacity), Some(1.0));

    assert!(!chart.toggle_group("g1"));
    let (v, total) = visible_groups(&chart, "g1");
    assert_eq!(v, total);
}

#[test]
fn clicking_a_legend_selector_toggles_its_group() {
    let mut chart = grouped(json!({}));
    chart.render(Target::new("#legend").attached(true));
    let entry = chart.legend_layout().expect("legend drawn").entries[1].clone();
    assert_eq!(entry.group, "g2");

    let (cx, cy) = ((entry.selector.left + entry.selector.right) / 2.0, (entry.selector.top + entry.selector.bottom) / 2.0);
    chart.handle(InputEvent::Click { x: cx, y: cy });
    assert!(chart.toggles().is_some_and(|t| t.contains("g2") && !t.contains("g1")));
}

#[test]
fn redraw_keeps_hidden_groups_hidden() {
    let mut chart = grouped(json!({ "toggled": ["g3"] }));
    chart.render(Target::new("#legend").attached(true));
    assert_eq!(visible_groups(&chart, "g3").0, 0);
    chart.redraw(None, None, false);
    assert_eq!(visible_groups(&chart, "g3").0, 0);
    assert!(visible_groups(&chart, "g1").0 > 0);
}

#[test]
fn legend_order_applies_only_when_it_names_every_group() {
    let mut ordered = grouped(json!({ "lorder": ["g3", "g1", "g2"] }));
    ordered.render(Target::new("#a").attached(true));
    let groups: Vec<String> = ordered.legend_layout().expect("legend").entries.iter().map(|e| e.group.clone()).collect();
    assert_eq!(groups, vec!["g3", "g1", "g2"]);

    let mut partial = grouped(json!({ "lorder": ["g3"] }));
    partial.render(Target::new("#b").attached(true));
    let groups: Vec<String> = partial.legend_layout().expect("legend").entries.iter().map(|e| e.group.clone()).collect();
    assert_eq!(groups, vec!["g1", "g2", "g3"]);
}

#[test]
fn legend_waits_for_attachment() {
    let mut chart = grouped(json!({}));
    chart.render(Target::new("#late"));
    assert!(chart.legend_pending());
    assert!(chart.legend_layout().is_none());

    chart.notify_attached(Instant::now());
    assert!(!chart.legend_pending());
    assert_eq!(chart.legend_layout().map(|l| l.entries.len()), Some(3));
    assert!(!chart.surface().expect("surface").elements_in(LayerKind::Legend).is_empty());
}

#[test]
fn legend_is_skipped_after_timeout() {
    let mut chart = grouped(json!({}));
    chart.render(Target::new("#never"));
    chart.poll_legend(Instant::now() + Duration::from_secs(5));
    assert!(!chart.legend_pending());
    assert!(chart.legend_layout().is_none());
    assert!(chart.surface().expect("surface").elements_in(LayerKind::Legend).is_empty());
}

#[test]
fn wait_and_toggle_primitives() {
    let start = Instant::now();
    let wait = LegendWait::with_timeout(start, Duration::from_millis(100));
    assert_eq!(wait.poll(false, start), Readiness::Pending);
    assert_eq!(wait.poll(true, start + Duration::from_millis(50)), Readiness::Ready);
    assert_eq!(wait.poll(true, start + Duration::from_millis(150)), Readiness::Expired);

    let mut set: ToggleSet = ["a", "b"].into_iter().map(String::from).collect();
    assert!(!set.toggle("a"));
    assert!(set.toggle("c"));
    assert_eq!(set.to_vec(), vec!["b".to_string(), "c".to_string()]);
}
