//! Benchmarks for unit resolution and breakpoint matching.
//!
//! Units are resolved on every render, so they are measured against both the
//! frozen and the signal-backed metrics source.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use vunit::kurbo::Size;
use vunit::{Breakpoints, ClampedLength, FixedMetrics, Length, WindowMetrics, rem, vmin, vw};

fn bench_units(c: &mut Criterion) {
    let fixed = FixedMetrics::new(390.0, 844.0, 1.0);
    let live = WindowMetrics::new(Size::new(390.0, 844.0), 1.0);

    let mut group = c.benchmark_group("units");
    group.bench_function("vw_fixed", |b| b.iter(|| vw(&fixed, black_box(10.0))));
    group.bench_function("vw_live", |b| b.iter(|| vw(&live, black_box(10.0))));
    group.bench_function("vmin_live", |b| b.iter(|| vmin(&live, black_box(10.0))));
    group.bench_function("rem_live", |b| b.iter(|| rem(&live, black_box(1.5))));

    let gutter = ClampedLength::new(16, Length::Vw(5.0), 48);
    group.bench_function("clamped_length_live", |b| b.iter(|| black_box(gutter).resolve(&live)));
    group.finish();
}

fn bench_breakpoints(c: &mut Criterion) {
    let mut group = c.benchmark_group("breakpoints");
    for count in [1usize, 4, 16] {
        let thresholds: Vec<f64> = (0..count).map(|i| 1600.0 - i as f64 * 80.0).collect();
        let Ok(breakpoints) = Breakpoints::new(thresholds) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("match_index", count), &breakpoints, |b, bp| {
            b.iter(|| bp.match_index(black_box(500.0)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_units, bench_breakpoints);
criterion_main!(benches);
