//! Scoring and extraction benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use niuniu_rs::{DiceExtractor, DiceSequence, DiceValue, Message, NiuNiuEngine, ParallelExtractor};
use std::hint::black_box;

fn gen_dice_samples(n: usize) -> Vec<[u8; 5]> {
    // Deterministic xorshift64.
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut d = [0u8; 5];
        for face in &mut d {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *face = (x % 6) as u8 + 1;
        }
        out.push(d);
    }
    out
}

fn glyph_messages(samples: &[[u8; 5]]) -> Vec<Message> {
    samples
        .iter()
        .map(|dice| {
            let glyphs: String = dice
                .iter()
                .filter_map(|&f| DiceValue::new(f).map(DiceValue::glyph))
                .collect();
            Message::text(format!("来玩牛牛 {glyphs} 哈哈"))
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let engine = NiuNiuEngine::new();
    let mut g = c.benchmark_group("niuniu_scoring");
    for &n in &[256usize, 4096usize] {
        let samples: Vec<DiceSequence> = gen_dice_samples(n)
            .into_iter()
            .filter_map(|d| DiceSequence::from_faces(d).ok())
            .collect();
        g.bench_with_input(BenchmarkId::new("evaluate_batch", n), &samples, |b, s| {
            b.iter(|| {
                for dice in s {
                    black_box(engine.evaluate(black_box(dice)));
                }
            });
        });
    }
    g.finish();
}

fn bench_extract(c: &mut Criterion) {
    let extractor = DiceExtractor::new();
    let mut g = c.benchmark_group("niuniu_extraction");
    for &n in &[256usize, 4096usize] {
        let messages = glyph_messages(&gen_dice_samples(n));
        g.bench_with_input(BenchmarkId::new("sequential", n), &messages, |b, m| {
            b.iter(|| {
                for message in m {
                    black_box(extractor.extract(black_box(message)));
                }
            });
        });

        let parallel = ParallelExtractor::new(DiceExtractor::new()).min_parallel_len(0);
        g.bench_with_input(BenchmarkId::new("parallel", n), &messages, |b, m| {
            b.iter(|| black_box(parallel.extract_all(black_box(m))));
        });
    }
    g.finish();
}

criterion_group!(benches, bench_evaluate, bench_extract);
criterion_main!(benches);
