//! Benchmarks for the per-frame step and pointer spawning.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparkfield::prelude::*;

fn field_with(config: FieldConfig) -> ParticleField<RecordingSurface, SeededRandom> {
    let mut field = ParticleField::new(config, SeededRandom::from_seed(1));
    field.attach(|| Ok(RecordingSurface::new(1920, 1080)));
    field
}

/// Run one frame and drop the recorded calls so the log stays small.
fn frame(field: &mut ParticleField<RecordingSurface, SeededRandom>) -> FrameRequest {
    let request = field.frame();
    if let Some(surface) = field.surface_mut() {
        surface.take_calls();
    }
    request
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for sparks in [100u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(sparks), &sparks, |b, &sparks| {
            // Sparks never expire, so every iteration steps the same swarm
            let mut field = field_with(
                FieldConfig::default()
                    .with_burst_count(sparks)
                    .with_lifetime(u32::MAX),
            );
            field.clicked(960.0, 540.0);
            b.iter(|| black_box(frame(&mut field)))
        });
    }

    group.finish();
}

fn bench_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer");

    group.bench_function("move_then_frame", |b| {
        let mut field = field_with(FieldConfig::default());
        let mut x = 0.0f32;
        b.iter(|| {
            x = (x + 1.0) % 1920.0;
            field.pointer_moved(black_box(x), 540.0);
            frame(&mut field)
        })
    });

    group.bench_function("click_then_frame", |b| {
        let mut field = field_with(FieldConfig::default());
        b.iter(|| {
            field.clicked(black_box(100.0), 100.0);
            frame(&mut field)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_frame, bench_pointer);
criterion_main!(benches);
