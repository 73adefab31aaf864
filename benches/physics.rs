//! Benchmarks for the wobble spring toy.

use criterion::{criterion_group, criterion_main, Criterion};
use wobble::*;

fn bench_linear_update(c: &mut Criterion) {
    c.bench_function("linear_spring_1000_steps", |b| {
        b.iter(|| {
            let mut spring: LinearSpringDamper<f32> =
                LinearSpringDamper::new(Vec2::new(0.0, 0.0), 25.0, 25.0, 5.0);
            spring.set_anchor_point(Vec2::new(10.0, -5.0));
            for _ in 0..1000 {
                spring.update(1.0 / 60.0);
            }
            spring.end_point()
        });
    });
}

fn bench_angular_update(c: &mut Criterion) {
    c.bench_function("angular_spring_1000_steps", |b| {
        b.iter(|| {
            let mut spring: AngularSpringDamper<f32> = AngularSpringDamper::new(10.0, 10.0);
            spring.rotate(1.0);
            for _ in 0..1000 {
                spring.update(1.0 / 60.0);
            }
            spring.angle()
        });
    });
}

fn bench_toy_frames(c: &mut Criterion) {
    c.bench_function("toy_600_frames_circling_pointer", |b| {
        b.iter(|| {
            let mut toy: SpringToy<f32> = SpringToy::with_defaults(Vec2::new(400.0, 300.0));
            let mut pose = toy.step(Vec2::new(400.0, 300.0), 1.0 / 60.0);
            for i in 0..600 {
                let t = i as f32 / 60.0;
                let pointer = Vec2::new(400.0 + 80.0 * t.cos(), 300.0 + 80.0 * t.sin());
                pose = toy.step(pointer, 1.0 / 60.0);
            }
            pose
        });
    });
}

criterion_group!(benches, bench_linear_update, bench_angular_update, bench_toy_frames);
criterion_main!(benches);
