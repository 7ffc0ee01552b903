//! Input decoder benchmark: Measure byte-stream decode throughput.
//!
//! Target: < 50µs for a 4KiB mixed event stream

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tiller::Decoder;

/// Build a stream of plain printable text.
fn plain_text(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 26 + 97) as u8).collect()
}

/// Build a stream of arrow keys and function keys.
fn named_sequences(count: usize) -> Vec<u8> {
    let cycle: [&[u8]; 6] = [
        b"\x1b[A",
        b"\x1b[B",
        b"\x1bOP",
        b"\x1b[1;5C",
        b"\x1b[H",
        b"\x1b[Z",
    ];
    let mut out = Vec::with_capacity(count * 4);
    for i in 0..count {
        out.extend_from_slice(cycle[i % cycle.len()]);
    }
    out
}

/// Build a stream of SGR mouse reports, the hot path during drag/scroll.
fn sgr_mouse(count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(count * 12);
    for i in 0..count {
        let x = i % 200 + 1;
        let y = i % 50 + 1;
        out.extend_from_slice(format!("\x1b[<32;{x};{y}M").as_bytes());
    }
    out
}

/// Interleave text, sequences, mouse, and a paste burst.
fn mixed_stream() -> Vec<u8> {
    let mut out = Vec::with_capacity(4096);
    out.extend_from_slice(&plain_text(1024));
    out.extend_from_slice(&named_sequences(128));
    out.extend_from_slice(&sgr_mouse(128));
    out.extend_from_slice(b"\x1b[200~");
    out.extend_from_slice(&plain_text(512));
    out.extend_from_slice(b"\x1b[201~");
    out
}

fn decode_plain_text(c: &mut Criterion) {
    let stream = plain_text(4096);

    c.bench_function("decode_4k_plain_text", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new();
            let events = decoder.feed(black_box(&stream));
            black_box(events)
        })
    });
}

fn decode_named_sequences(c: &mut Criterion) {
    let stream = named_sequences(1024);

    c.bench_function("decode_1k_named_sequences", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new();
            let events = decoder.feed(black_box(&stream));
            black_box(events)
        })
    });
}

fn decode_sgr_mouse(c: &mut Criterion) {
    let stream = sgr_mouse(1024);

    c.bench_function("decode_1k_sgr_mouse", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new();
            let events = decoder.feed(black_box(&stream));
            black_box(events)
        })
    });
}

fn decode_mixed(c: &mut Criterion) {
    let stream = mixed_stream();

    c.bench_function("decode_mixed_stream", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new();
            let events = decoder.feed(black_box(&stream));
            black_box(events)
        })
    });
}

fn decode_by_chunk_size(c: &mut Criterion) {
    let stream = mixed_stream();
    let mut group = c.benchmark_group("decode_by_chunk");

    for chunk in [1usize, 16, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("mixed", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut decoder = Decoder::new();
                let mut total = 0;
                for piece in stream.chunks(chunk) {
                    total += decoder.feed(black_box(piece)).len();
                }
                total += decoder.flush().len();
                black_box(total)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    decode_plain_text,
    decode_named_sequences,
    decode_sgr_mouse,
    decode_mixed,
    decode_by_chunk_size,
);
criterion_main!(benches);
