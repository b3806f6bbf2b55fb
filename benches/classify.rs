//! Benchmarks for claimguard
//!
//! Run with: cargo bench

use claimguard::{Agency, ComplianceEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark compiling the rule tables into an engine
fn bench_engine_creation(c: &mut Criterion) {
    c.bench_function("engine_creation", |b| {
        b.iter(|| black_box(ComplianceEngine::new()))
    });
}

/// Benchmark a clean statement
fn bench_clean_statement(c: &mut Criterion) {
    let engine = ComplianceEngine::new();
    let text = "A gentle daily moisturizer for sensitive skin.";

    c.bench_function("classify_clean", |b| {
        b.iter(|| black_box(engine.classify(black_box(text), Agency::Fda)))
    });
}

/// Benchmark a statement with multiple violations
fn bench_violating_statement(c: &mut Criterion) {
    let engine = ComplianceEngine::new();
    let text = "This drug guarantees 100% effectiveness and is better than all others.";

    c.bench_function("classify_violations", |b| {
        b.iter(|| black_box(engine.classify(black_box(text), Agency::Fda)))
    });
}

/// Benchmark the evidence-downgrade path
fn bench_evidence_statement(c: &mut Criterion) {
    let engine = ComplianceEngine::new();
    let text = "According to a 2022 study in The Lancet, this drug guarantees 100% effectiveness.";

    c.bench_function("classify_evidence", |b| {
        b.iter(|| black_box(engine.classify(black_box(text), Agency::Fda)))
    });
}

/// Benchmark full pipeline (classify + JSON rendering)
fn bench_full_pipeline(c: &mut Criterion) {
    let engine = ComplianceEngine::new();
    let text = "Our formula cures all types of headaches instantly.";

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let result = engine.classify(black_box(text), Agency::Fda);
            black_box(result.to_json())
        })
    });
}

criterion_group!(
    benches,
    bench_engine_creation,
    bench_clean_statement,
    bench_violating_statement,
    bench_evidence_statement,
    bench_full_pipeline,
);

criterion_main!(benches);
