//! Criterion benchmarks
//! LZW compress/decompress over repetitive and non-repetitive text

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_compress(c: &mut Criterion) {
    let repetitive = "the the the and the and the and the cat sat on the mat".repeat(100);
    let random_ish: String = (0u32..5000)
        .map(|i| char::from_u32(0x20 + (i * 7919) % 0x5f).unwrap_or(' '))
        .collect();
    let wide = "日本語のテキスト、繰り返し。".repeat(200);

    c.bench_function("lzw_compress_repetitive", |b| {
        b.iter(|| lzwtext::compress(&repetitive))
    });

    c.bench_function("lzw_compress_random", |b| {
        b.iter(|| lzwtext::compress(&random_ish))
    });

    c.bench_function("lzw_compress_wide", |b| {
        b.iter(|| lzwtext::compress(&wide))
    });
}

fn bench_decompress(c: &mut Criterion) {
    let encoded = lzwtext::compress(&"the the the and the and the and the cat sat on the mat".repeat(100));

    c.bench_function("lzw_decompress_repetitive", |b| {
        b.iter(|| lzwtext::decompress(&encoded).unwrap())
    });
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
