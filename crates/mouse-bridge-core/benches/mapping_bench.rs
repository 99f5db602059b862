//! Criterion benchmarks for the coordinate mapper and input state.
//!
//! The hook variant maps and sends on every pointer event, so these sit on
//! the per-event hot path.
//!
//! Run with:
//! ```bash
//! cargo bench --package mouse-bridge-core --bench mapping_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mouse_bridge_core::{
    map_axis, CoordinateMapper, InputState, LogicalGrid, MouseButton, PointerEvent, Resolution,
};

fn bench_map_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_axis");

    for native in [1u32, 1080, 1920, 7680] {
        group.bench_with_input(BenchmarkId::from_parameter(native), &native, |b, &native| {
            b.iter(|| map_axis(black_box(native as i32 / 2), black_box(native), black_box(320)))
        });
    }

    group.finish();
}

fn bench_mapper_map(c: &mut Criterion) {
    let mapper = CoordinateMapper::new(Resolution::new(2560, 1440), LogicalGrid::PEER);

    c.bench_function("mapper_map_center", |b| {
        b.iter(|| mapper.map(black_box(1280), black_box(720)))
    });
}

fn bench_apply_and_take_frame(c: &mut Criterion) {
    let mapper = CoordinateMapper::new(Resolution::new(1920, 1080), LogicalGrid::PEER);
    let events = [
        PointerEvent::Move { x: 400, y: 300 },
        PointerEvent::Button {
            button: MouseButton::Left,
            pressed: true,
        },
        PointerEvent::Wheel { delta: -1 },
        PointerEvent::Button {
            button: MouseButton::Left,
            pressed: false,
        },
    ];

    c.bench_function("state_apply_and_take_frame", |b| {
        let mut state = InputState::new();
        b.iter(|| {
            for event in events {
                state.apply(black_box(event));
            }
            black_box(state.take_frame(&mapper))
        })
    });
}

criterion_group!(
    benches,
    bench_map_axis,
    bench_mapper_map,
    bench_apply_and_take_frame
);
criterion_main!(benches);
