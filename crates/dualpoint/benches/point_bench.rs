//! Criterion benchmarks for lazy view synchronization.
//! Focus sizes: batch of n in {16, 256, 4096} sampled points.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p dualpoint

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dualpoint::prelude::*;

fn batch(n: usize) -> SampleCfg {
    SampleCfg {
        region: Region::Disk { radius: 1.0 },
        count: n,
        point_cfg: PointCfg::default(),
    }
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("sync_from_rectangular", n), &n, |b, &n| {
            b.iter_batched(
                || draw_points(batch(n), ReplayToken::new(43, 0)),
                |mut pts| {
                    for p in &mut pts {
                        p.sync();
                    }
                    pts
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("rotate_offset_render", n), &n, |b, &n| {
            b.iter_batched(
                || draw_polar_points(batch(n), ReplayToken::new(44, 0)),
                |mut pts| {
                    let mut len = 0usize;
                    for p in &mut pts {
                        p.rotate(0.1);
                        p.offset(0.5, -0.5);
                        len += p.render().len();
                    }
                    len
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
