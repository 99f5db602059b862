//! Criterion benchmarks for the datagram text codec.
//!
//! Run with:
//! ```bash
//! cargo bench --package mouse-bridge-core --bench packet_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mouse_bridge_core::{decode_packet, encode_frame, LogicalFrame, PacketFormat};

fn make_frame() -> LogicalFrame {
    LogicalFrame {
        x: 160,
        y: 120,
        pressed: true,
        wheel_delta: -3,
    }
}

fn bench_encode(c: &mut Criterion) {
    let frame = make_frame();
    let mut group = c.benchmark_group("encode_frame");

    group.bench_function("basic", |b| {
        b.iter(|| encode_frame(black_box(&frame), PacketFormat::Basic))
    });
    group.bench_function("with_wheel", |b| {
        b.iter(|| encode_frame(black_box(&frame), PacketFormat::WithWheel))
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let payload = encode_frame(&make_frame(), PacketFormat::WithWheel);

    c.bench_function("decode_packet_with_wheel", |b| {
        b.iter(|| decode_packet(black_box(payload.as_bytes())))
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
