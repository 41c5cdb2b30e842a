#![allow(clippy::unwrap_used)]
//! Checked versus fast-path traversal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rampart_foundation::prelude::*;

const LEN: usize = 4096;

fn sample() -> FixedArray<u32, LEN> {
    FixedArray::from_fn(|i| (i as u32).wrapping_mul(2_654_435_761) % 1000)
}

fn benchmark_find(c: &mut Criterion) {
    let data = sample();
    let mut group = c.benchmark_group("find_absent");

    group.bench_function(BenchmarkId::new("checked", LEN), |b| {
        let (first, last) = (data.begin(), data.end());
        b.iter(|| fast_path::find(&first, &last, black_box(&1001)).unwrap().position());
    });

    group.bench_function(BenchmarkId::new("strong", LEN), |b| {
        let (first, last) = (data.strong_begin(), data.strong_end());
        b.iter(|| fast_path::find(&first, &last, black_box(&1001)).unwrap().position());
    });

    group.bench_function(BenchmarkId::new("slice", LEN), |b| {
        b.iter(|| data.as_slice().iter().position(|x| *x == black_box(1001)));
    });

    group.finish();
}

fn benchmark_count(c: &mut Criterion) {
    let data = sample();
    let mut group = c.benchmark_group("count_if");

    group.bench_function(BenchmarkId::new("checked", LEN), |b| {
        let (first, last) = (data.begin(), data.end());
        b.iter(|| fast_path::count_if(&first, &last, |x| *x < black_box(500)).unwrap());
    });

    group.bench_function(BenchmarkId::new("strong", LEN), |b| {
        let (first, last) = (data.strong_begin(), data.strong_end());
        b.iter(|| fast_path::count_if(&first, &last, |x| *x < black_box(500)).unwrap());
    });

    group.finish();
}

fn benchmark_section_equal(c: &mut Criterion) {
    let left = sample();
    let right = left.clone();
    let mut group = c.benchmark_group("section_equal");

    group.bench_function(BenchmarkId::new("checked", LEN), |b| {
        let (l, r) = (left.checked_section(), right.checked_section());
        b.iter(|| black_box(&l).equal(black_box(&r)).unwrap());
    });

    group.bench_function(BenchmarkId::new("strong", LEN), |b| {
        let (l, r) = (left.section(), right.section());
        b.iter(|| black_box(&l).equal(black_box(&r)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_find, benchmark_count, benchmark_section_equal);
criterion_main!(benches);
