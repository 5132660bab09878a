use meridian_core::attributes::{Attributes, Layout};
use meridian_core::axis::{derive_axes, derive_domains};
use meridian_core::{Accessors, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_records(n: usize, groups: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            // simple waveform with drift, spread over a few groups
            let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
            Record::new((i / groups) as f64, y).with_group(format!("g{}", i % groups))
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let acc = Accessors::default();
    let mut group = c.benchmark_group("derive");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_records(n, 4);
        for layout in [Layout::Line, Layout::Stacked] {
            group.bench_with_input(BenchmarkId::new(format!("domains_{layout:?}"), n), &data, |b, d| {
                b.iter(|| black_box(derive_domains(d, &acc, layout)));
            });
        }
        let attrs = Attributes::default();
        group.bench_with_input(BenchmarkId::new("axes", n), &data, |b, d| {
            b.iter(|| black_box(derive_axes(d, &attrs, &acc, 919.0, 580.0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
