//! Criterion benchmarks for embmath
//!
//! Measures the per-call cost of each primitive, since renderers call them per pixel.
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, Criterion};
use embmath::{atan2, bezier3, cos, polar, sin, sqrt};
use std::hint::black_box;

fn bench_trigo(c: &mut Criterion) {
    let mut group = c.benchmark_group("trigo");

    group.bench_function("sin_sweep", |bencher| {
        bencher.iter(|| (-360..360).map(|a| i32::from(sin(black_box(a)))).sum::<i32>())
    });

    group.bench_function("cos", |bencher| {
        bencher.iter(|| black_box(cos(black_box(1234))))
    });

    group.bench_function("polar", |bencher| {
        bencher.iter(|| black_box(polar(black_box(135), black_box(240))))
    });

    group.finish();
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");

    group.bench_function("table", |bencher| {
        bencher.iter(|| black_box(sqrt(black_box(37))))
    });

    group.bench_function("digit_extraction", |bencher| {
        bencher.iter(|| black_box(sqrt(black_box(123_456_789))))
    });

    group.finish();
}

fn bench_bezier3(c: &mut Criterion) {
    c.bench_function("bezier3", |bencher| {
        bencher.iter(|| black_box(bezier3(black_box(700), 0, 100, 900, 1024)))
    });
}

fn bench_atan2(c: &mut Criterion) {
    let mut group = c.benchmark_group("atan2");

    group.bench_function("single", |bencher| {
        bencher.iter(|| black_box(atan2(black_box(-703), black_box(720))))
    });

    group.bench_function("circle", |bencher| {
        bencher.iter(|| {
            (0..360)
                .map(|a| u32::from(atan2(i32::from(cos(a)) >> 5, i32::from(sin(a)) >> 5)))
                .sum::<u32>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_trigo, bench_sqrt, bench_bezier3, bench_atan2);
criterion_main!(benches);
