//! Indicator and formatter benchmarks.
//!
//! Run with: `cargo bench --package retrace-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use retrace_bench::{event_at, synthetic_bars};
use retrace_lib::{OutputFormat, ResolvedWindow, enrich, rsi, write_series_as};
use std::hint::black_box;
use std::io::sink;

/// Window sizes: one default window, a year, a decade.
const SIZES: [usize; 3] = [151, 365, 3650];

fn enrich_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrich");

    for size in SIZES {
        let bars = synthetic_bars(size);
        let event = event_at(30, 30);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("enrich", size), &bars, |b, bars| {
            b.iter(|| enrich(black_box(bars), event.top(), event.bottom()));
        });

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        group.bench_with_input(BenchmarkId::new("rsi", size), &closes, |b, closes| {
            b.iter(|| rsi(black_box(closes)));
        });
    }

    group.finish();
}

fn window_benchmark(c: &mut Criterion) {
    let event = event_at(30, 30);
    c.bench_function("resolve_window", |b| {
        b.iter(|| ResolvedWindow::resolve(black_box(&event)));
    });
}

fn format_benchmark(c: &mut Criterion) {
    let bars = synthetic_bars(3650);
    let event = event_at(30, 30);
    let series = enrich(&bars, event.top(), event.bottom()).expect("anchor on a synthetic bar");

    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(series.len() as u64));

    for format in OutputFormat::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format),
            format,
            |b, format| {
                b.iter(|| write_series_as(*format, black_box(&series), sink()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, enrich_benchmark, window_benchmark, format_benchmark);
criterion_main!(benches);
