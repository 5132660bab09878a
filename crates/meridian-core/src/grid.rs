// File: crates/meridian-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub const DEFAULT_TICKS: usize = 10;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round tick step (1, 2 or 5 times a power of ten) giving roughly `count` ticks over [a, b].
pub fn tick_step(a: f64, b: f64, count: usize) -> f64 {
    let span = (b - a).abs();
    if span <= 0.0 || !span.is_finite() { return 0.0; }
    let m = count.max(1) as f64;
    let mut step = 10f64.powf((span / m).log10().floor());
    let err = m / span * step;
    if err <= 0.15 { step *= 10.0; }
    else if err <= 0.35 { step *= 5.0; }
    else if err <= 0.75 { step *= 2.0; }
    step
}

/// Tick values inside [a, b] (either orientation), ascending.
pub fn ticks(a: f64, b: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if !lo.is_finite() || !hi.is_finite() { return Vec::new(); }
    let step = tick_step(lo, hi, count);
    if step == 0.0 { return vec![lo]; }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
