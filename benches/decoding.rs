//! Benchmarks for output decoding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ocr_rs::decode::{collapse_repeats, decode_greedy, normalize_whitespace};
use ocr_rs::{DecoderConfig, Tensor, TextDecoder, Vocabulary};

/// Pseudo-random logits with a deterministic winner per timestep
fn generate_scores(sequence: usize, classes: usize) -> Vec<Vec<f32>> {
    (0..sequence)
        .map(|t| {
            let winner = (t * 7 + 3) % classes;
            (0..classes)
                .map(|c| {
                    if c == winner {
                        4.0
                    } else {
                        ((t * 31 + c * 17) % 100) as f32 / 100.0
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    let vocabulary = Vocabulary::default();

    for sequence in [32, 128, 512] {
        let scores = generate_scores(sequence, vocabulary.len());

        group.bench_with_input(
            BenchmarkId::new("argmax", sequence),
            &scores,
            |b, scores| b.iter(|| black_box(decode_greedy(scores, &vocabulary).unwrap())),
        );
    }

    group.finish();
}

fn bench_postprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("postprocess");

    let raw = "hheelllo   wwoorrlldd  ".repeat(64);

    group.bench_function("collapse_repeats", |b| {
        b.iter(|| black_box(collapse_repeats(&raw)))
    });

    group.bench_function("normalize_whitespace", |b| {
        b.iter(|| black_box(normalize_whitespace(&raw)))
    });

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    let vocabulary = Vocabulary::default();
    let tensor = Tensor::from_sequence(&generate_scores(128, vocabulary.len()));

    let greedy = TextDecoder::new(vocabulary.clone(), DecoderConfig::default()).unwrap();
    let ctc = TextDecoder::new(
        vocabulary,
        DecoderConfig {
            blank_index: Some(0),
            ..Default::default()
        },
    )
    .unwrap();

    group.bench_function("flat_tensor_greedy_128", |b| {
        b.iter(|| black_box(greedy.decode_tensor(&tensor).unwrap()))
    });

    group.bench_function("flat_tensor_ctc_128", |b| {
        b.iter(|| black_box(ctc.decode_tensor(&tensor).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_greedy, bench_postprocess, bench_full_pipeline);
criterion_main!(benches);
