//! Criterion benchmarks for the Textio engine.
//!
//! Covers the three hot paths:
//! - Corpus indexing
//! - Coverage planning (exact and transformation passes)
//! - Full chunked runs

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use textio::Textio;
use textio::analysis::terms;
use textio::catalog::TransformationCatalog;
use textio::corpus::{Corpus, CorpusIndex};
use textio::coverage::CoveragePlanner;

const MESSAGE: &str = "Man, I am not sure if this a cool idea or not";

/// Benchmark analysis and index construction.
fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");
    let corpus = Corpus::builtin();

    group.bench_function("analyze_sentence", |b| {
        b.iter(|| black_box(terms(black_box("That's really cool stuff, isn't it?"))))
    });

    group.throughput(Throughput::Elements(corpus.sentence_count() as u64));
    group.bench_function("build_builtin_index", |b| {
        b.iter(|| black_box(CorpusIndex::build(black_box(&corpus))))
    });

    group.finish();
}

/// Benchmark the planner on its own.
fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");
    let planner = CoveragePlanner::new(
        Arc::new(CorpusIndex::build(&Corpus::builtin())),
        Arc::new(TransformationCatalog::builtin()),
    );

    let exact: Vec<String> = ["Man", "I", "am", "not", "sure", "if"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    group.bench_function("exact_pass", |b| {
        b.iter(|| black_box(planner.plan(black_box(&exact))))
    });

    // no exact matches, forces the transformation pass and the fallback
    let rewritten: Vec<String> = ["nice", "Paris", "definitely", "xylophone"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    group.bench_function("transformation_pass", |b| {
        b.iter(|| black_box(planner.plan(black_box(&rewritten))))
    });

    group.finish();
}

/// Benchmark complete runs.
fn bench_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("runs");
    let engine = Textio::builtin();

    group.bench_function("run_reference_message", |b| {
        b.iter(|| black_box(engine.run(black_box(MESSAGE), 6, &[])))
    });

    let messages = vec![MESSAGE; 64];
    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("run_many_parallel", |b| {
        b.iter(|| black_box(engine.run_many(black_box(&messages), 6, &[])))
    });

    group.finish();
}

criterion_group!(benches, bench_indexing, bench_planning, bench_runs);
criterion_main!(benches);
