//! Transit animation benchmarks.
//!
//! Each driving-loop cycle performs one frame capture and one scene
//! build within the 100 ms tick interval; these benchmarks confirm both
//! stay far below that interval and catch regressions.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use venus_transit::controller::AnimationController;
use venus_transit::frame::FrameSnapshot;
use venus_transit::orbit::{orbital_position, OrbitalBody};
use venus_transit::render::{render_frame, SceneOptions};

fn bench_orbital_position(c: &mut Criterion) {
    c.bench_function("orbital_position", |b| {
        b.iter(|| orbital_position(black_box(1234.5), black_box(1.0), black_box(365.25)));
    });
}

fn bench_frame_capture(c: &mut Criterion) {
    let earth = OrbitalBody::earth();
    let venus = OrbitalBody::venus();
    let mut controller = AnimationController::new();
    controller.play();
    for _ in 0..500 {
        controller.tick();
    }

    c.bench_function("frame_capture", |b| {
        b.iter(|| FrameSnapshot::capture(&earth, &venus, &controller, black_box(1.5)));
    });
}

fn bench_scene_build(c: &mut Criterion) {
    let earth = OrbitalBody::earth();
    let venus = OrbitalBody::venus();
    let controller = AnimationController::new();
    let frame = FrameSnapshot::capture(&earth, &venus, &controller, 1.0);

    let mut group = c.benchmark_group("scene_build");
    group.sample_size(100);
    for samples in [50usize, 200, 1000] {
        let options = SceneOptions {
            show_orbits: true,
            orbit_samples: samples,
        };
        group.bench_with_input(
            BenchmarkId::new("orbit_samples", samples),
            &options,
            |b, options| {
                b.iter(|| render_frame(black_box(&frame), &earth, &venus, options));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_orbital_position,
    bench_frame_capture,
    bench_scene_build
);
criterion_main!(benches);
