//! Criterion benchmarks for the hull/triangle kernel.
//! Focus sizes: n in {10, 20, 50}. The triangle search is cubic in hull
//! size, so anything much larger is out of scope anyway.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hulltri::geom::rand::{draw_points_uniform, ReplayToken, ScatterCfg};
use hulltri::geom::{build_hull, max_inscribed_triangle, sort_points, Point};

fn sorted_scatter(n: usize, seed: u64) -> Vec<Point> {
    let cfg = ScatterCfg {
        count: n,
        ..Default::default()
    };
    let mut pts = draw_points_uniform(cfg, ReplayToken { seed, index: 0 }).expect("scatter");
    sort_points(&mut pts);
    pts
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("hulltri");
    for &n in &[10usize, 20, 50] {
        group.bench_with_input(BenchmarkId::new("build_hull", n), &n, |b, &n| {
            b.iter_batched(
                || sorted_scatter(n, 43),
                |pts| {
                    let _hull = build_hull(&pts).expect("hull closes");
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("max_inscribed_triangle", n),
            &n,
            |b, &n| {
                b.iter_batched(
                    || build_hull(&sorted_scatter(n, 44)).expect("hull closes"),
                    |hull| {
                        let _best = max_inscribed_triangle(&hull);
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_kernel);
criterion_main!(benches);
