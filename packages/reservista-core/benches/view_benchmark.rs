//! View computation benchmarks.
//!
//! Measures filter + sort + slice over collections of increasing size,
//! with and without an active search term.

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use reservista_core::view::compute_view;
use reservista_core::{Record, SearchTerm};
use serde_json::{json, Map, Value};
use std::hint::black_box;

/// Builds `count` records with a title, a price and a tag list.
fn build_records(count: usize) -> Vec<Record<Map<String, Value>>> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let mut fields = Map::new();
            fields.insert("title".to_string(), json!(format!("Dish {}", i)));
            fields.insert("price".to_string(), json!(i as f64 * 0.25));
            fields.insert("tags".to_string(), json!(["pasta", "special"]));
            Record::new(i.to_string(), base + Duration::minutes(i as i64), fields)
        })
        .collect()
}

/// Benchmark: first page without search
fn benchmark_unfiltered_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfiltered_view");
    for size in [100usize, 1_000, 10_000] {
        let records = build_records(size);
        let search = SearchTerm::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(compute_view(records, &search, 1, 10, false)))
        });
    }
    group.finish();
}

/// Benchmark: first page with a search term hitting ~10% of records
fn benchmark_filtered_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_view");
    for size in [100usize, 1_000, 10_000] {
        let records = build_records(size);
        let search = SearchTerm::new("dish 9");
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(compute_view(records, &search, 1, 10, false)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_unfiltered_view, benchmark_filtered_view);
criterion_main!(benches);
