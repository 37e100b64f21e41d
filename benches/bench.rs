//! Criterion benchmarks for Lexfix.
//!
//! Covers the distance metrics, index construction, candidate lookup (cold
//! and cached), reranking and concurrent lookups against a shared index.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lexfix::spelling::{
    CandidateGenerator, CandidateSource, DictionaryEntry, GeneratorConfig, RerankMode,
    RerankOptions, SuggestOptions, bounded_levenshtein, damerau_levenshtein,
    levenshtein_distance, rerank_candidates_by_damerau, suggest_with_optional_rerank,
};
use rayon::prelude::*;
use std::hint::black_box;

const BASE_WORDS: &[&str] = &[
    "search",
    "engine",
    "document",
    "query",
    "algorithm",
    "dictionary",
    "suggestion",
    "spelling",
    "correction",
    "distance",
    "candidate",
    "normalization",
    "identifier",
    "performance",
    "structure",
    "résumé",
    "café",
    "naïve",
];

const MISSPELLINGS: &[&str] = &[
    "searc",
    "engin",
    "documnet",
    "qurey",
    "algortihm",
    "dictonary",
    "sugestion",
    "cafe",
    "resume",
    "getSearchEngin",
];

/// Generate a word list with `count` entries derived from the base words.
fn generate_word_list(count: usize) -> Vec<DictionaryEntry> {
    (0..count)
        .map(|i| {
            let base = BASE_WORDS[i % BASE_WORDS.len()];
            let word = if i < BASE_WORDS.len() {
                base.to_string()
            } else {
                format!("{base}{}", i / BASE_WORDS.len())
            };
            DictionaryEntry::counted(word, (i % 50) as u64 + 1)
        })
        .collect()
}

/// Benchmark the distance metrics.
fn bench_distance_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_metrics");

    let pairs = [
        ("kitten", "sitting"),
        ("algorithm", "algortihm"),
        ("internationalization", "internationalisation"),
        ("résumé", "resume"),
    ];

    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("levenshtein_full", |b| {
        b.iter(|| {
            for (a, s) in &pairs {
                black_box(levenshtein_distance(black_box(a), black_box(s)));
            }
        })
    });

    group.bench_function("levenshtein_bounded_2", |b| {
        b.iter(|| {
            for (a, s) in &pairs {
                black_box(bounded_levenshtein(black_box(a), black_box(s), 2));
            }
        })
    });

    group.bench_function("damerau_bounded_2", |b| {
        b.iter(|| {
            for (a, s) in &pairs {
                black_box(damerau_levenshtein(black_box(a), black_box(s), 2));
            }
        })
    });

    group.finish();
}

/// Benchmark index construction for growing dictionaries.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(10);

    for size in [100, 1000].iter() {
        let entries = generate_word_list(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| {
                let generator =
                    CandidateGenerator::from_entries(GeneratorConfig::default(), entries);
                black_box(generator)
            })
        });
    }

    group.finish();
}

/// Benchmark lookups with and without the result cache.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let entries = generate_word_list(2000);
    let cached = CandidateGenerator::from_entries(GeneratorConfig::default(), &entries);
    let uncached = CandidateGenerator::from_entries(
        GeneratorConfig {
            cache_capacity: 0,
            ..Default::default()
        },
        &entries,
    );

    group.throughput(Throughput::Elements(MISSPELLINGS.len() as u64));
    group.bench_function("lookup_cold", |b| {
        b.iter(|| {
            for word in MISSPELLINGS {
                black_box(uncached.lookup(black_box(word), None));
            }
        })
    });

    group.bench_function("lookup_cached", |b| {
        b.iter(|| {
            for word in MISSPELLINGS {
                black_box(cached.lookup(black_box(word), None));
            }
        })
    });

    group.bench_function("lookup_parallel", |b| {
        b.iter(|| {
            let results: Vec<usize> = MISSPELLINGS
                .par_iter()
                .map(|word| uncached.lookup(word, None).len())
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark reranking and the full suggestion pipeline.
fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    let entries = generate_word_list(500);
    let candidates: Vec<String> = entries.iter().take(100).map(|e| e.word().to_string()).collect();

    group.bench_function("rerank_100_candidates", |b| {
        b.iter(|| {
            black_box(rerank_candidates_by_damerau(
                black_box("algortihm"),
                &candidates,
                &RerankOptions {
                    max_distance: Some(3),
                    top_k: Some(10),
                },
            ))
        })
    });

    let small: Vec<DictionaryEntry> = entries.iter().take(50).cloned().collect();
    let options = SuggestOptions {
        rerank: Some(RerankMode::Damerau),
        ..Default::default()
    };
    group.bench_function("word_list_with_rerank", |b| {
        b.iter(|| {
            black_box(suggest_with_optional_rerank(
                black_box("sugestion"),
                CandidateSource::WordList(&small),
                &options,
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_distance_metrics,
    bench_index_build,
    bench_lookup,
    bench_suggest
);
criterion_main!(benches);
