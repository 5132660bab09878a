// File: crates/meridian-core/tests/format.rs
// Purpose: Tick label formatting from format specs and from tick steps.

use meridian_core::format::{format_value, FormatKind, NumberFormat};

fn fmt(spec: &str, v: f64) -> String {
    spec.parse::<NumberFormat>().expect("valid spec").format(v)
}

#[test]
fn explicit_specs() {
    assert_eq!(fmt(".2f", 3.14159), "3.14");
    assert_eq!(fmt(",.2f", 1234567.891), "1,234,567.89");
    assert_eq!(fmt(",d", -1234567.0), "-1,234,567");
    assert_eq!(fmt(".0%", 0.256), "26%");
    assert_eq!(fmt("d", 2.6), "3");
    assert_eq!(fmt(".1e", 1500.0), "1.5e+3");
    assert_eq!(fmt(".1e", 0.015), "1.5e-2");
    assert_eq!(fmt(".3g", 1.5), "1.5");
}

#[test]
fn parse_shapes() {
    let f: NumberFormat = ",.3f".parse().expect("spec");
    assert!(f.grouping);
    assert_eq!(f.precision, Some(3));
    assert_eq!(f.kind, FormatKind::Fixed);
    assert!("q".parse::<NumberFormat>().is_err());
    assert!(".f".parse::<NumberFormat>().is_err());
}

#[test]
fn step_derived_precision() {
    assert_eq!(NumberFormat::for_step(0.2).format(0.30000000000000004), "0.3");
    assert_eq!(NumberFormat::for_step(5.0).format(15.0), "15");
    assert_eq!(NumberFormat::for_step(0.25).format(0.7), "0.7");
    assert_eq!(format_value(None, 2.5, 0.5), "2.5");
    // invalid specs fall back to the step-derived format
    assert_eq!(format_value(Some("bogus"), 2.5, 0.5), "2.5");
    assert_eq!(format_value(Some(".3f"), 2.5, 0.5), "2.500");
}
