//! Benchmark for lenses over nested `Value` trees.
//!
//! Compares a single multi-key path lens against the equivalent chain of
//! composed single-key lenses.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use functools::optics::{Lens, compose, over, path, prop, set, view};
use functools::value::{Path, Value};
use std::hint::black_box;

fn nested(depth: usize) -> Value {
    (0..depth).fold(Value::from("leaf"), |inner, level| {
        Value::object([
            (format!("level{level}"), inner),
            ("sibling".to_string(), Value::array((0..16).map(|n: i32| Value::from(n)))),
        ])
    })
}

fn keys(depth: usize) -> Vec<String> {
    (0..depth).rev().map(|level| format!("level{level}")).collect()
}

// =============================================================================
// Path Lens Benchmarks
// =============================================================================

fn benchmark_path_lens(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("path_lens");

    for depth in [1, 4, 16] {
        let target = nested(depth);
        let lens = path(keys(depth).into_iter().collect::<Path>());

        group.bench_with_input(BenchmarkId::new("view", depth), &target, |bencher, target| {
            bencher.iter(|| black_box(view(&lens, target.clone())));
        });

        group.bench_with_input(BenchmarkId::new("over", depth), &target, |bencher, target| {
            bencher.iter(|| {
                black_box(over(
                    &lens,
                    |leaf: Value| Value::from(leaf.as_str().unwrap_or_default().len() as f64),
                    target.clone(),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("set", depth), &target, |bencher, target| {
            bencher.iter(|| black_box(set(&lens, Value::Null, target.clone())));
        });
    }

    group.finish();
}

// =============================================================================
// Composed Lens Benchmarks
// =============================================================================

fn benchmark_composed_props(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composed_props");
    let target = nested(4);
    let [first, second, third, fourth]: [String; 4] =
        keys(4).try_into().unwrap_or_else(|_| unreachable!());

    let composed = compose(
        compose(prop(first.as_str()), prop(second.as_str())),
        compose(prop(third.as_str()), prop(fourth.as_str())),
    );
    let direct = path([first, second, third, fourth]);

    group.bench_function("composed_view", |bencher| {
        bencher.iter(|| black_box(composed.view(target.clone())));
    });
    group.bench_function("direct_view", |bencher| {
        bencher.iter(|| black_box(direct.view(target.clone())));
    });
    group.bench_function("composed_set", |bencher| {
        bencher.iter(|| black_box(composed.set(Value::Null, target.clone())));
    });
    group.bench_function("direct_set", |bencher| {
        bencher.iter(|| black_box(direct.set(Value::Null, target.clone())));
    });

    group.finish();
}

criterion_group!(benches, benchmark_path_lens, benchmark_composed_props);
criterion_main!(benches);
