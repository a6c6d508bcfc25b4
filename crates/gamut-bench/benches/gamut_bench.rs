//! Benchmarks for gamut mapping.
//!
//! Run with: `cargo bench -p gamut-bench`

use std::hint::black_box;
use std::sync::atomic::AtomicBool;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gamut_color::{Color, Gamut, Space};
use gamut_compare::{run_sweep, Grid, SweepConfig};
use gamut_map::edge_table::{EdgeTable, Lch};
use gamut_map::Registry;

/// Out-of-Rec.2020 colors from a coarse XYZ grid.
fn wide_colors() -> Vec<Color> {
    Grid::new(0.1)
        .iter()
        .map(|c| c.color())
        .filter(|c| !c.in_gamut(Gamut::Rec2020, 0.0))
        .collect()
}

/// Benchmark every registered method on the same inputs.
fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("methods");
    let registry = Registry::new(Gamut::DisplayP3);
    let colors = wide_colors();
    registry.prepare(registry.keys()).ok();

    group.throughput(Throughput::Elements(colors.len() as u64));
    for entry in registry.entries() {
        group.bench_with_input(BenchmarkId::from_parameter(entry.key), &colors, |b, colors| {
            b.iter(|| {
                colors
                    .iter()
                    .map(|c| registry.compute(entry, black_box(c)))
                    .collect::<Vec<_>>()
            })
        });
    }
    group.finish();
}

/// Benchmark conversions the methods lean on.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let colors = wide_colors();
    group.throughput(Throughput::Elements(colors.len() as u64));

    for space in [Space::Oklch, Space::Lab, Space::DisplayP3] {
        group.bench_with_input(BenchmarkId::from_parameter(space), &colors, |b, colors| {
            b.iter(|| colors.iter().map(|c| c.to(black_box(space))).collect::<Vec<_>>())
        });
    }

    group.bench_function("delta_e_2000", |b| {
        let clipped: Vec<_> = colors.iter().map(|c| c.clip(Gamut::Srgb)).collect();
        b.iter(|| {
            colors
                .iter()
                .zip(&clipped)
                .map(|(a, b)| a.delta_e_2000(black_box(b)))
                .sum::<f64>()
        })
    });
    group.finish();
}

/// Benchmark edge-seeker table construction.
fn bench_edge_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_table");
    group.sample_size(10);

    for gamut in [Gamut::Srgb, Gamut::Rec2020] {
        group.bench_with_input(BenchmarkId::from_parameter(gamut.key_suffix()), &gamut, |b, &gamut| {
            b.iter(|| {
                EdgeTable::build(|r, g, bl| {
                    let [l, c, h] = Color::rgb(gamut, [r, g, bl]).to(Space::Oklch).coords();
                    Lch { l, c, h }
                })
            })
        });
    }
    group.finish();
}

/// Benchmark a full sweep at a coarse step.
fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(10);
    let registry = Registry::new(Gamut::DisplayP3);
    let cancel = AtomicBool::new(false);

    for delta in [0.25, 0.1] {
        group.bench_with_input(BenchmarkId::from_parameter(delta), &delta, |b, &delta| {
            b.iter(|| run_sweep(&registry, SweepConfig::with_delta(delta), &cancel, |_| {}))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods, bench_convert, bench_edge_table, bench_sweep);
criterion_main!(benches);
