// File: crates/frontier-core/benches/series_bench.rs
// Summary: Criterion benchmark for the pure series builder.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use frontier_core::{build_series, Dataset, ViewState};

fn bench_build_series(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    let today = chrono::NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let state = ViewState::new(today);

    c.bench_function("build_series_builtin", |b| {
        b.iter(|| build_series(black_box(&dataset), black_box(&state)))
    });
}

criterion_group!(benches, bench_build_series);
criterion_main!(benches);
