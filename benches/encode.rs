//! Benchmarks for lzbits encoding performance.
//!
//! The greedy match search rescans the window on every extension, so
//! throughput depends heavily on window size and how repetitive the data is.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzbits::{EncodeConfig, Encoder, Lz77Encoder};

/// Generate random (incompressible) data
fn generate_random_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() & 0xFF) as u8);
    }
    data
}

/// Generate repetitive (highly compressible) data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    b"ABCDABCDABCDABCD".iter().cycle().take(size).copied().collect()
}

/// Generate English-like text from a small word list
fn generate_text_data(size: usize) -> Vec<u8> {
    const WORDS: [&str; 8] = ["who", "chatters", "to", "you", "will", "chatter", "about", "we"];
    let mut data = Vec::with_capacity(size + 16);
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    while data.len() < size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        data.extend_from_slice(WORDS[(state % WORDS.len() as u64) as usize].as_bytes());
        data.push(b'_');
    }
    data.truncate(size);
    data
}

fn bench_window_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_sizes");
    let size = 16 * 1024;
    let data = generate_text_data(size);

    group.throughput(Throughput::Bytes(size as u64));

    for window in [16usize, 64, 256, 1024].iter() {
        group.bench_with_input(BenchmarkId::new("text", window), &data, |b, data| {
            let config = EncodeConfig::with_window_size(*window);
            b.iter(|| {
                let mut encoder = Lz77Encoder::new(config.clone());
                encoder.encode(data).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_data_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_patterns");
    let size = 16 * 1024;
    let config = EncodeConfig::with_window_size(256);

    let random_data = generate_random_data(size);
    let repetitive_data = generate_repetitive_data(size);
    let text_data = generate_text_data(size);

    group.throughput(Throughput::Bytes(size as u64));

    for (name, data) in
        [("random", &random_data), ("repetitive", &repetitive_data), ("text", &text_data)]
    {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut encoder = Lz77Encoder::new(config.clone());
                encoder.encode(data).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_packing(c: &mut Criterion) {
    let data = generate_text_data(64 * 1024);
    let stream = Lz77Encoder::new(EncodeConfig::with_window_size(128)).encode(&data).unwrap();

    c.bench_function("pack_stream", |b| b.iter(|| stream.to_bytes()));
}

criterion_group!(benches, bench_window_sizes, bench_data_patterns, bench_packing);
criterion_main!(benches);
