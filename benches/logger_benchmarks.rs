//! Criterion benchmarks for rust_term_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_term_logger::backends::{AnsiTerminal, ColumnSource, NonInteractive};
use rust_term_logger::prelude::*;
use rust_term_logger::trim_source_path;
use std::time::Duration;

fn sample_entry(message: &str) -> Entry {
    Entry::new(
        LogClass::ServiceFs,
        Level::Info,
        "service/fs/archive.rs:service::fs::archive:212",
        message,
    )
    .with_timestamp(Duration::from_micros(12_345_678))
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let formatter = PlainFormatter::new();
    let entry = sample_entry("Opened archive 0x00000003 for reading");
    let repeated = entry.clone().with_repeat_count(42);
    let mut line = String::with_capacity(256);

    group.bench_function("format_into", |b| {
        b.iter(|| formatter.format_into(black_box(&entry), &mut line));
    });

    group.bench_function("format_into_repeat", |b| {
        b.iter(|| formatter.format_into(black_box(&repeated), &mut line));
    });

    group.bench_function("trim_source_path", |b| {
        b.iter(|| {
            trim_source_path(
                black_box("/home/build/project/src/core/hle/service/fs/archive.rs"),
                black_box("src"),
            )
        });
    });

    group.finish();
}

// ============================================================================
// Emit Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let plain = LoggingContext::builder()
        .writer(std::io::sink())
        .terminal(NonInteractive)
        .build()
        .unwrap();

    group.bench_function("append_distinct", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            plain.emit(sample_entry(if i % 2 == 0 { "even" } else { "odd" }));
        });
    });

    let ansi = LoggingContext::builder()
        .writer(std::io::sink())
        .terminal(AnsiTerminal::with_columns(ColumnSource::Fixed(120)))
        .build()
        .unwrap();

    group.bench_function("rewrite_repeat", |b| {
        b.iter(|| ansi.emit(sample_entry(black_box("Buffer underrun"))));
    });

    let filtered = LoggingContext::builder()
        .writer(std::io::sink())
        .filter(LevelFilter::new(Level::Error))
        .build()
        .unwrap();

    group.bench_function("rejected_by_filter", |b| {
        b.iter(|| filtered.emit(sample_entry(black_box("dropped"))));
    });

    group.finish();
}

// ============================================================================
// Filter Benchmarks
// ============================================================================

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    group.bench_function("parse_filter_string", |b| {
        b.iter(|| {
            black_box("*:Info Service.FS:Trace Render:Critical Audio:Debug")
                .parse::<LevelFilter>()
                .unwrap()
        });
    });

    let filter: LevelFilter = "*:Warning Kernel:Trace".parse().unwrap();
    let entry = sample_entry("check");
    group.bench_function("accept", |b| {
        b.iter(|| filter.accept(black_box(&entry)));
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_emit, bench_filter);
criterion_main!(benches);
