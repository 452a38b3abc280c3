//! Benchmarks for cuboid orientation fitting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cuboid_fit_d3::{regularised, Cuboid, CuboidPacker};

fn packer_benchmark(c: &mut Criterion) {
    let containers: Vec<Cuboid> = (0..20)
        .map(|i| {
            let edge = 40.0 + i as f64 * 4.0;
            Cuboid::new(edge, edge + 7.0, edge + 13.0).unwrap()
        })
        .collect();
    let boxes: Vec<Cuboid> = (1..=30)
        .map(|i| regularised(i as f64, (i % 7 + 1) as f64, (i % 5 + 2) as f64).unwrap())
        .collect();

    let packer = CuboidPacker::default_config();

    c.bench_function("best_600_pairs", |b| {
        b.iter(|| {
            for item in &boxes {
                for container in &containers {
                    black_box(packer.best(black_box(item), black_box(container)));
                }
            }
        })
    });

    c.bench_function("fresh_cuboid_rotations", |b| {
        b.iter(|| {
            let item = Cuboid::new(black_box(7.0), 5.0, 3.0).unwrap();
            black_box(item.rotations().len())
        })
    });
}

criterion_group!(benches, packer_benchmark);
criterion_main!(benches);
