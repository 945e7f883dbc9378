//! Benchmarks for the per-frame hot path.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use atmos::prelude::*;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for theme in [Theme::Mystery, Theme::Thriller, Theme::Emotion] {
        let mut field = Atmosphere::builder()
            .with_seed(1)
            .with_theme(theme)
            .build();
        let frame = FrameInput {
            elapsed: 0.0,
            delta: 1.0 / 60.0,
            pointer: Vec2::new(0.2, -0.1),
            viewport: Vec2::new(40.0, 24.0),
        };

        group.bench_with_input(
            BenchmarkId::new("active", theme.params().active_count),
            &frame,
            |b, frame| b.iter(|| field.step(black_box(frame))),
        );
    }

    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let field = Atmosphere::builder()
        .with_seed(2)
        .with_theme(Theme::Emotion)
        .build();

    c.bench_function("project_4000", |b| {
        b.iter(|| {
            for instance in field.instances() {
                black_box(instance);
            }
        })
    });
}

fn bench_theme_switch(c: &mut Criterion) {
    let mut field = Atmosphere::builder()
        .with_seed(3)
        .with_theme(Theme::Mystery)
        .build();

    c.bench_function("theme_switch", |b| {
        b.iter(|| {
            field.set_theme(black_box(Theme::Horror));
            field.set_theme(black_box(Theme::Mystery));
        })
    });
}

criterion_group!(benches, bench_step, bench_project, bench_theme_switch);
criterion_main!(benches);
