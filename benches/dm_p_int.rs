use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use solarwind::constants::SOLAR_WIND_OUTER_DISTANCE;
use solarwind::hypergeometric::dm_p_int;
use solarwind::models::power_law::power_law_geometry;

/// Near-Sun regime: |z/b| ≤ √3, Pfaff series only
fn bench_inner(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("dm_p_int/inner_u<=sqrt3", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let b = rng.random_range(0.05..1.0);
                        let u = rng.random_range(-1.7..1.7);
                        let p = rng.random_range(1.5..4.0);
                        (b, u * b, p)
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (b, z, p) in cases {
                    black_box(dm_p_int(black_box(b), black_box(z), p).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Outer bound at 10¹⁴ cm: tail series
fn bench_outer(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("dm_p_int/outer_bound", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rng.random_range(0.01..1.0), rng.random_range(1.5..4.0)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (b, p) in cases {
                    black_box(dm_p_int(black_box(b), SOLAR_WIND_OUTER_DISTANCE, p).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full geometry factor over a year of elongations
fn bench_geometry(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;

    c.bench_function("power_law_geometry/p=2.4", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rng.random_range(0.05..3.0), rng.random_range(0.983..1.017)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (theta, r) in cases {
                    black_box(power_law_geometry(black_box(theta), black_box(r), 2.4).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_inner, bench_outer, bench_geometry
);
criterion_main!(benches);
