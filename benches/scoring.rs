use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tenpin::{is_input_valid, ScoringEngine};

const PERFECT: [&str; 12] = ["X"; 12];
const ALL_SPARES: [&str; 10] = ["5/", "5/", "5/", "5/", "5/", "5/", "5/", "5/", "5/", "5/5"];
const MALFORMED: [&str; 12] = ["X", "7/", "9-", "X", "-8", "8/", "-6", "X", "X", "X", "8", "1"];
const MIXED_VALID: [&str; 11] = ["X", "7/", "9-", "X", "-8", "8/", "-6", "X", "X", "X", "81"];

fn bench_scoring(c: &mut Criterion) {
    let engine = ScoringEngine::standard();

    c.bench_function("score_perfect_game", |b| {
        b.iter(|| engine.total(black_box(&PERFECT)))
    });
    c.bench_function("score_all_spares", |b| {
        b.iter(|| engine.total(black_box(&ALL_SPARES)))
    });
    c.bench_function("score_mixed_game", |b| {
        b.iter(|| engine.total(black_box(&MIXED_VALID)))
    });
}

fn bench_validation(c: &mut Criterion) {
    c.bench_function("validate_mixed_game", |b| {
        b.iter(|| is_input_valid(black_box(&MIXED_VALID)))
    });
    c.bench_function("reject_malformed_game", |b| {
        b.iter(|| is_input_valid(black_box(&MALFORMED)))
    });
}

criterion_group!(benches, bench_scoring, bench_validation);
criterion_main!(benches);
