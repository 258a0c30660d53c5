// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the animation hot path: the per-frame work of easing the
//! global progress through every stagger window.

use criterion::{criterion_group, criterion_main, Criterion};
use fluid_nav::animation::stagger::{self, SATELLITES};
use fluid_nav::animation::{Easing, StaggerWindow, Tween};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_easing_transform(c: &mut Criterion) {
    c.bench_function("fast_out_slow_in_transform", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..=100 {
                acc += Easing::FastOutSlowIn.transform(black_box(i as f32 / 100.0));
            }
            acc
        })
    });
}

fn bench_windowed_transform(c: &mut Criterion) {
    let window = StaggerWindow::new(0.35, 0.65);
    c.bench_function("windowed_transform", |b| {
        b.iter(|| Easing::FastOutSlowIn.between(black_box(window), black_box(0.5)))
    });
}

fn bench_frame_resolution(c: &mut Criterion) {
    // Everything the view derives from one progress sample: three satellite
    // poses, the filler scale, and the toggle rotation.
    c.bench_function("resolve_fab_frame", |b| {
        b.iter(|| {
            let progress = black_box(0.42_f32);
            let mut acc = 0.0_f32;
            for motion in &SATELLITES {
                let pose = motion.pose(progress);
                acc += pose.offset.x + pose.offset.y + pose.icon_opacity;
            }
            acc + stagger::filler_scale(progress) + stagger::toggle_rotation(progress)
        })
    });
}

fn bench_tween_sampling(c: &mut Criterion) {
    let mut tween = Tween::settled(0.0, Duration::from_millis(1000), Easing::Linear);
    let t0 = Instant::now();
    tween.retarget(1.0, t0);
    let probe = t0 + Duration::from_millis(500);

    c.bench_function("tween_value_at", |b| {
        b.iter(|| tween.value_at(black_box(probe)))
    });
}

criterion_group!(
    benches,
    bench_easing_transform,
    bench_windowed_transform,
    bench_frame_resolution,
    bench_tween_sampling
);
criterion_main!(benches);
