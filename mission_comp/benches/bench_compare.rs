//! # Pairwise Comparison Benchmark

use criterion::{criterion_group, criterion_main, Criterion};

use mission_comp::comp::PathComparator;
use telem_if::{Trajectory, TrajectoryPoint};

/// Build a wiggly east-going survey line of the given number of points,
/// roughly 1 m apart, offset north by `lat_offset_deg`.
fn survey_line(num_points: usize, lat_offset_deg: f64) -> Trajectory {
    let points = (0..num_points)
        .map(|i| {
            let along = i as f64;
            let mut point = TrajectoryPoint::new(
                along,
                lat_offset_deg + 2e-6 * (along * 0.05).sin(),
                along * 9e-6,
            );
            point.depth_m = Some(5.0 + (along * 0.01).sin());
            point.head_deg = Some(90.0 + 5.0 * (along * 0.05).cos());
            point
        })
        .collect();
    Trajectory::from_points(points)
}

fn compare_pair_benchmark(c: &mut Criterion) {
    let traj_a = survey_line(2000, 0.0);
    let traj_b = survey_line(2000, 2e-5);

    let comparator = PathComparator::default();

    c.bench_function("compare_pair 2k points", |b| {
        b.iter(|| comparator.compare_pair(&traj_a, &traj_b))
    });
}

criterion_group!(benches, compare_pair_benchmark);
criterion_main!(benches);
