use criterion::{criterion_group, criterion_main, Criterion};
use secded::ecc::hamming::{decode, encode, flip_bit, MESSAGE_BITS};
use std::hint::black_box;

const MESSAGE_COUNT: u16 = 1 << MESSAGE_BITS;

fn bench_encode(c: &mut Criterion) {
    c.bench_function("hamming encode all messages", |b| {
        b.iter(|| {
            let mut acc = 0u16;
            for message in 0..MESSAGE_COUNT {
                acc ^= encode(black_box(message));
            }
            acc
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let clean: Vec<u16> = (0..MESSAGE_COUNT).map(encode).collect();
    let noisy: Vec<u16> = clean
        .iter()
        .enumerate()
        .map(|(i, &codeword)| flip_bit(codeword, (i % 16) as u8 + 1).unwrap())
        .collect();

    let mut group = c.benchmark_group("hamming decode");

    group.bench_function("clean", |b| {
        b.iter(|| {
            clean
                .iter()
                .map(|&codeword| decode(black_box(codeword)).0)
                .fold(0u16, |acc, message| acc ^ message)
        })
    });

    group.bench_function("single error", |b| {
        b.iter(|| {
            noisy
                .iter()
                .map(|&codeword| decode(black_box(codeword)).0)
                .fold(0u16, |acc, message| acc ^ message)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
