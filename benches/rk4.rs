use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use rungekutta::ode::{rk4_step, solve};

fn x2_plus_y(x: f64, y: f64) -> f64 {
    x * x + y
}

// ---------------------------------------------------------------------------
// Single step
// ---------------------------------------------------------------------------

fn single_step(c: &mut Criterion) {
    let mut g = c.benchmark_group("rk4_step");

    g.bench_function("f64", |b| {
        b.iter(|| rk4_step(black_box(0.0_f64), black_box(1.0), black_box(0.1), x2_plus_y))
    });

    g.bench_function("f32", |b| {
        b.iter(|| {
            rk4_step(black_box(0.0_f32), black_box(1.0), black_box(0.1), |x, y| x * x + y)
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Full trajectory
// ---------------------------------------------------------------------------

fn trajectory(c: &mut Criterion) {
    let mut g = c.benchmark_group("solve");

    for n in [100_usize, 1_000, 10_000] {
        g.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let h = 10.0 / n as f64;
            b.iter(|| solve(x2_plus_y, black_box(0.0), black_box(1.0), h, n))
        });
    }

    g.finish();
}

criterion_group!(benches, single_step, trajectory);
criterion_main!(benches);
