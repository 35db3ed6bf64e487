//! Criterion benchmarks: divide and conquer vs brute force.
//! Sizes: n in {16, 128, 1024, 8192}; brute force stops at 1024.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use closest_pair::api::{
    closest_pair_distance, closest_pair_distance_brute, draw_point_cloud, CloudCfg, CloudReplay,
    PointCount, Pt2,
};

fn cloud(n: usize, seed: u64) -> Vec<Pt2> {
    let cfg = CloudCfg {
        count: PointCount::Fixed(n),
        half_width: 1000.0,
        ..CloudCfg::default()
    };
    draw_point_cloud(cfg, CloudReplay { seed, index: n as u64 })
}

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    for &n in &[16usize, 128, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("divide_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _d = closest_pair_distance(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        if n <= 1024 {
            group.bench_with_input(BenchmarkId::new("brute", n), &n, |b, &n| {
                b.iter_batched(
                    || cloud(n, 44),
                    |pts| {
                        let _d = closest_pair_distance_brute(&pts).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
