// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the transform engine and gallery navigation.
//!
//! Measures the performance of:
//! - Gallery navigation (next/previous with wrap-around)
//! - Transform operations (zoom, rotate, fit-to-viewport)
//! - A full interactive pan gesture

use criterion::{criterion_group, criterion_main, Criterion};
use iced_core::{Point, Size};
use preview_kit::config::Config;
use preview_kit::engine::Surface;
use preview_kit::input::Command;
use preview_kit::session::PreviewSession;
use std::hint::black_box;

fn sample_items(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("image-{i}.png")).collect()
}

fn sample_session() -> PreviewSession {
    let items = sample_items(1000);
    let mut session =
        PreviewSession::open(items, "image-0.png", &Config::default()).expect("open session");
    session.mount(Surface::new(Size::new(3840, 2160), Size::new(1280.0, 720.0)));
    session
}

/// Benchmark gallery navigation with the navigation→reset binding applied.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let session = sample_session();

    group.bench_function("next", |b| {
        b.iter(|| {
            let mut session = session.clone();
            black_box(session.handle(Command::Next));
        });
    });

    group.bench_function("previous", |b| {
        b.iter(|| {
            let mut session = session.clone();
            black_box(session.handle(Command::Previous));
        });
    });

    group.finish();
}

/// Benchmark the individual transform operations.
fn bench_transform_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_ops");
    let session = sample_session();

    for (name, command) in [
        ("zoom_in", Command::ZoomIn),
        ("rotate", Command::Rotate),
        ("zoom_best", Command::ZoomBest),
        ("zoom_original", Command::ZoomOriginal),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut session = session.clone();
                black_box(session.handle(command));
            });
        });
    }

    group.finish();
}

/// Benchmark a complete pan gesture with clamping active.
fn bench_pan_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_ops");

    group.bench_function("pan_gesture_32_updates", |b| {
        b.iter(|| {
            let mut session = sample_session();
            session.handle(Command::ZoomIn);
            session.handle(Command::BeginPan(Point::new(0.0, 0.0)));
            for i in 0..32 {
                session.handle(Command::UpdatePan(Point::new(i as f32 * 4.0, i as f32)));
            }
            session.handle(Command::EndPan);
            black_box(session.transform());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_transform_ops, bench_pan_gesture);
criterion_main!(benches);
