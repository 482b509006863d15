//! Criterion benchmarks for geometry classification.

use criterion::{criterion_group, criterion_main, Criterion};
use squid_bench::{reference_profile, stress_profile};
use squid_geometry::{Direction, ExteriorRule, Geometry};
use squid_test_utils::fixtures::scattered;
use std::hint::black_box;

/// Benchmark: full reclassification of the 10K-cell reference profile.
fn bench_set_geometry_reference(c: &mut Criterion) {
    let mask = reference_profile().unwrap();
    let mut geometry = Geometry::new(mask.width(), mask.height()).unwrap();

    c.bench_function("set_geometry_reference_10k", |b| {
        b.iter(|| {
            geometry.set_geometry(black_box(&mask)).unwrap();
        });
    });
}

/// Benchmark: ray sweep vs flood fill on the ~100K-cell stress profile.
fn bench_exterior_rules_stress(c: &mut Criterion) {
    let mask = stress_profile().unwrap();

    for (name, rule) in [
        ("classify_ray_sweep_100k", ExteriorRule::RaySweep),
        ("classify_flood_fill_100k", ExteriorRule::FloodFill),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let g = Geometry::from_occupancy(mask.clone(), rule).unwrap();
                black_box(g.hole_count());
            });
        });
    }
}

/// Benchmark: a solver-style sweep of every per-cell query.
fn bench_queries_reference(c: &mut Criterion) {
    let mask = scattered(100, 100, 42, 70);
    let geometry = Geometry::from_occupancy(mask, ExteriorRule::RaySweep).unwrap();

    c.bench_function("per_cell_queries_10k", |b| {
        b.iter(|| {
            let mut flagged = 0usize;
            for y in 0..100 {
                for x in 0..100 {
                    for d in Direction::ALL {
                        flagged += geometry.on_boundary(d, x, y).unwrap() as usize;
                    }
                    flagged += geometry.in_hole(x, y).unwrap().is_some() as usize;
                }
            }
            black_box(flagged);
        });
    });
}

criterion_group!(
    benches,
    bench_set_geometry_reference,
    bench_exterior_rules_stress,
    bench_queries_reference
);
criterion_main!(benches);
