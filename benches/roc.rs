use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roceval::{roc_auc, roc_curve};

fn random_f64(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

fn random_labels(n: usize, seed: u64) -> Vec<bool> {
    random_f64(n, seed).iter().map(|&v| v > 0.5).collect()
}

fn bench_roc_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("roc_curve");

    let scores_10k = random_f64(10_000, 42);
    let labels_10k = random_labels(10_000, 43);
    group.bench_function("10k_observations", |b| {
        b.iter(|| roc_curve(black_box(&scores_10k), black_box(&labels_10k)))
    });

    let scores_100k = random_f64(100_000, 42);
    let labels_100k = random_labels(100_000, 43);
    group.bench_function("100k_observations", |b| {
        b.iter(|| roc_curve(black_box(&scores_100k), black_box(&labels_100k)))
    });

    group.finish();
}

fn bench_roc_auc(c: &mut Criterion) {
    let mut group = c.benchmark_group("roc_auc");

    // Heavy ties: scores quantized to 100 distinct values.
    let scores: Vec<f64> = random_f64(100_000, 7)
        .iter()
        .map(|&v| (v * 100.0).floor() / 100.0)
        .collect();
    let labels = random_labels(100_000, 8);
    group.bench_function("100k_quantized_scores", |b| {
        b.iter(|| roc_auc(black_box(&scores), black_box(&labels)))
    });

    group.finish();
}

criterion_group!(benches, bench_roc_curve, bench_roc_auc);
criterion_main!(benches);
