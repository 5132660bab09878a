// File: crates/meridian-core/tests/view_stack.rs
// Purpose: Zoom history invariants under box zoom, pan, double-click undo and reset.

use std::cell::RefCell;
use std::rc::Rc;

use meridian_core::view::{self, DragState};
use meridian_core::{Chart, ChartKind, Domain, InputEvent, ScalePair, Target};
use serde_json::json;

// Default margins put the plot origin at surface (40, 20); inner size is 919 x 580.
const LEFT: f64 = 40.0;
const TOP: f64 = 20.0;

fn zoomable_chart() -> Chart {
    let mut chart = Chart::new(
        ChartKind::Line,
        json!({ "zoomable": true, "data": [{"x":0,"y":0},{"x":5,"y":3},{"x":10,"y":10}] }),
    );
    chart.render(Target::new("#zoom").attached(true));
    chart
}

fn drag(chart: &mut Chart, from: (f64, f64), to: (f64, f64)) {
    chart.handle(InputEvent::PointerDown { x: from.0 + LEFT, y: from.1 + TOP });
    chart.handle(InputEvent::PointerMove { x: to.0 + LEFT, y: to.1 + TOP });
    chart.handle(InputEvent::PointerUp { x: to.0 + LEFT, y: to.1 + TOP });
}

fn home(chart: &Chart) -> ScalePair { chart.view_stack().and_then(|v| v.home()).cloned().expect("home view") }

fn current(chart: &Chart) -> (Domain, Domain) { chart.scales().expect("scales").domains() }

#[test]
fn box_zoom_pushes_a_narrower_view() {
    let mut chart = zoomable_chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    chart.on(move |e| sink.borrow_mut().push(e.name()));
    let initial = home(&chart);

    drag(&mut chart, (100.0, 100.0), (300.0, 300.0));

    assert_eq!(chart.view_stack().map(|v| v.len()), Some(2));
    assert_eq!(home(&chart), initial);
    let (x, y) = current(&chart);
    let (x0, x1) = x.bounds().expect("continuous x");
    let (y0, y1) = y.bounds().expect("continuous y");
    assert!(x0 > 1.0 && x1 < 3.3, "x zoomed to {x0}..{x1}");
    assert!(y0 > 4.8 && y1 < 8.3, "y zoomed to {y0}..{y1}");
    assert_eq!(chart.drag_state(), DragState::Idle);
    assert_eq!(events.borrow().as_slice(), &["zoom"]);
}

#[test]
fn small_drag_leaves_view_alone() {
    let mut chart = zoomable_chart();
    let before = current(&chart);
    drag(&mut chart, (100.0, 100.0), (105.0, 108.0));
    assert_eq!(chart.view_stack().map(|v| v.len()), Some(1));
    assert_eq!(current(&chart), before);
}

#[test]
fn double_click_at_home_is_a_no_op() {
    let mut chart = zoomable_chart();
    let before = current(&chart);
    chart.handle(InputEvent::DoubleClick { x: 200.0, y: 200.0 });
    assert_eq!(chart.view_stack().map(|v| v.len()), Some(1));
    assert_eq!(current(&chart), before);
}

#[test]
fn double_click_undoes_one_zoom() {
    let mut chart = zoomable_chart();
    let before = current(&chart);
    drag(&mut chart, (100.0, 100.0), (400.0, 400.0));
    let first = current(&chart);
    drag(&mut chart, (100.0, 100.0), (300.0, 300.0));
    assert_eq!(chart.view_stack().map(|v| v.len()), Some(3));

    chart.handle(InputEvent::DoubleClick { x: 0.0, y: 0.0 });
    assert_eq!(chart.view_stack().map(|v| v.len()), Some(2));
    assert_eq!(current(&chart), first);
    chart.handle(InputEvent::DoubleClick { x: 0.0, y: 0.0 });
    assert_eq!(current(&chart), before);
}

#[test]
fn pan_then_reset_returns_home() {
    let mut chart = zoomable_chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    chart.on(move |e| sink.borrow_mut().push(e.name()));
    let initial = home(&chart);

    chart.set_pan_mode(true);
    assert!(chart.modes().pan && !chart.modes().zoom);
    drag(&mut chart, (460.0, 280.0), (510.0, 280.0));

    let (x, _) = current(&chart);
    let (x0, _) = x.bounds().expect("continuous");
    assert!(x0 < 0.0, "dragging right reveals lower x values, got {x0}");
    assert_eq!(chart.view_stack().map(|v| v.len()), Some(2));
    assert_eq!(events.borrow().as_slice(), &["panstart", "pan", "panend"]);

    chart.reset_view();
    assert_eq!(chart.view_stack().map(|v| v.len()), Some(1));
    assert_eq!(home(&chart), initial);
    assert_eq!(chart.scales(), Some(&initial));
}

#[test]
fn any_sequence_keeps_home_in_place() {
    let mut chart = zoomable_chart();
    let initial = home(&chart);
    let steps: Vec<Box<dyn Fn(&mut Chart)>> = vec![
        Box::new(|c: &mut Chart| drag(c, (50.0, 50.0), (500.0, 400.0))),
        Box::new(|c: &mut Chart| c.handle(InputEvent::DoubleClick { x: 1.0, y: 1.0 })),
        Box::new(|c: &mut Chart| c.handle(InputEvent::DoubleClick { x: 1.0, y: 1.0 })),
        Box::new(|c: &mut Chart| drag(c, (10.0, 10.0), (12.0, 12.0))),
        Box::new(|c: &mut Chart| {
            c.set_pan_mode(true);
            drag(c, (300.0, 300.0), (250.0, 320.0));
            c.set_pan_mode(false);
        }),
        Box::new(|c: &mut Chart| drag(c, (200.0, 100.0), (600.0, 500.0))),
        Box::new(|c: &mut Chart| {
            c.reset_view();
        }),
        Box::new(|c: &mut Chart| c.handle(InputEvent::DoubleClick { x: 1.0, y: 1.0 })),
    ];
    for step in steps {
        step(&mut chart);
        let stack = chart.view_stack().expect("stack");
        assert!(!stack.is_empty());
        assert_eq!(stack.home(), Some(&initial));
    }
}

#[test]
fn categorical_axes_do_not_zoom() {
    let mut chart = Chart::new(
        ChartKind::Line,
        json!({ "zoomable": true, "data": [{"x":"a","y":1},{"x":"b","y":5},{"x":"c","y":9}] }),
    );
    chart.render(Target::new("#cat").attached(true));
    drag(&mut chart, (100.0, 100.0), (400.0, 400.0));
    let (x, y) = current(&chart);
    assert!(x.is_categorical());
    assert!(!y.is_categorical());
    assert_eq!(chart.view_stack().map(|v| v.len()), Some(2));
}

#[test]
fn selection_helpers() {
    let top = ScalePair {
        x: meridian_core::Scale::for_domain(&Domain::Continuous(0.0, 100.0), (0.0, 100.0)),
        y: meridian_core::Scale::for_domain(&Domain::Continuous(0.0, 100.0), (100.0, 0.0)),
    };
    // horizontal-only drag zooms x only
    let (x, y) = view::zoom_selection(&top, (10.0, 50.0), (60.0, 52.0), 100.0, 100.0).expect("x zoom");
    assert_eq!(x, Domain::Continuous(10.0, 60.0));
    assert_eq!(y, Domain::Continuous(0.0, 100.0));
    // selections are clamped to the current domain
    let (x, _) = view::zoom_selection(&top, (50.0, 50.0), (250.0, 50.0), 100.0, 100.0).expect("clamped");
    assert_eq!(x, Domain::Continuous(50.0, 100.0));
    assert!(view::zoom_selection(&top, (10.0, 10.0), (15.0, 15.0), 100.0, 100.0).is_none());

    // a drag starting under the plot spans its full height
    let r = view::selection_rect((20.0, 150.0), (40.0, 30.0), 100.0, 100.0);
    assert_eq!((r.top, r.bottom), (0.0, 100.0));
    assert_eq!((r.left, r.right), (20.0, 40.0));

    let (px, py) = view::pan_domains(&top, 10.0, 0.0);
    assert_eq!(px, Domain::Continuous(-10.0, 90.0));
    assert_eq!(py, Domain::Continuous(0.0, 100.0));
}

#[test]
fn uncached_redraw_with_same_ranges_is_idempotent() {
    let mut chart = zoomable_chart();
    let (x, y) = (Domain::Continuous(1.0, 4.0), Domain::Continuous(0.0, 5.0));

    chart.redraw(Some(x.clone()), Some(y.clone()), false);
    let first = chart.surface().cloned().expect("surface");
    let depth = chart.view_stack().map(|v| v.len());
    assert_eq!(current(&chart), (x.clone(), y.clone()));

    chart.redraw(Some(x), Some(y), false);
    assert_eq!(chart.surface(), Some(&first));
    assert_eq!(chart.view_stack().map(|v| v.len()), depth);
    assert_eq!(depth, Some(1));
}
