// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glide_checkbox::{CheckboxAnimationCoordinator, CheckboxGeometry};
use glide_color::{ColorMode, interpolate};
use glide_progress::{CubicBezier, Easing};
use glide_stroke::{KurboMeasure, PathMeasure, PathTracer};
use glide_task::{TaskItem, TaskTheme, default_palette, task_channel};

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");
    let samples: Vec<f64> = (0..=1_000).map(|i| f64::from(i) / 1_000.0).collect();
    group.throughput(Throughput::Elements(samples.len() as u64));

    for (name, easing) in [
        ("linear", Easing::Linear),
        ("in_out_quad", Easing::InOutQuad),
        ("expo_out", Easing::CubicBezier(CubicBezier::EXPO_OUT)),
        ("sine_in_out", Easing::CubicBezier(CubicBezier::SINE_IN_OUT)),
    ] {
        group.bench_with_input(BenchmarkId::new("ease", name), &samples, |b, samples| {
            b.iter(|| {
                for &p in samples {
                    black_box(easing.ease(black_box(p)));
                }
            });
        });
    }
    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let palette = default_palette();
    let appearance = TaskTheme::default()
        .appearance(ColorMode::Light, &palette)
        .expect("default theme resolves");
    let colors = appearance.checkbox;

    c.bench_function("color/interpolate", |b| {
        b.iter(|| interpolate(black_box(colors.outline), black_box(colors.highlight), black_box(0.37)));
    });

    let geometry = CheckboxGeometry::new().expect("built-in paths are valid");
    c.bench_function("stroke/measure_checkmark", |b| {
        let measure = KurboMeasure::default();
        b.iter(|| measure.measure_total_length(black_box(&geometry.checkmark)));
    });

    let tracer = PathTracer::default();
    c.bench_function("stroke/reveal", |b| {
        b.iter(|| tracer.reveal(black_box(72.5), black_box(0.61)));
    });
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let palette = default_palette();
    let appearance = TaskTheme::default()
        .appearance(ColorMode::Light, &palette)
        .expect("default theme resolves");

    let geometry = CheckboxGeometry::new().expect("built-in paths are valid");
    let mut checkbox = CheckboxAnimationCoordinator::new(geometry, appearance.checkbox, false);
    checkbox.on_layout(&KurboMeasure::default());
    checkbox.set_checked(0, true);
    let source = checkbox.frame_source();

    group.bench_function("checkbox", |b| {
        let mut now = 0_u64;
        b.iter(|| {
            now = (now + 16) % 300;
            black_box(checkbox.frame(now))
        });
    });
    group.bench_function("checkbox_source", |b| {
        let mut now = 0_u64;
        b.iter(|| {
            now = (now + 16) % 300;
            black_box(source.frame(now))
        });
    });

    // A screen's worth of rows, half of them mid-animation.
    for rows in [16_usize, 64] {
        let (events, _rx) = task_channel();
        let items: Vec<TaskItem<usize>> = (0..rows)
            .map(|key| {
                let mut item = TaskItem::new(key, false, appearance, 400.0, events.clone())
                    .expect("row setup");
                item.on_layout(&KurboMeasure::default());
                if key % 2 == 0 {
                    item.set_done(0, true);
                }
                item
            })
            .collect();
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("task_rows", rows), &items, |b, items| {
            b.iter(|| {
                for item in items {
                    black_box(item.frame(black_box(150)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_easing, bench_primitives, bench_frames);
criterion_main!(benches);
