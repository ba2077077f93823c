//! Huli Benchmarks
//!
//! This module contains benchmarks for the ternary search tree and the
//! line index built on top of it. The benchmarks are implemented using the
//! Criterion framework, which provides statistical analysis and performance
//! regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode,
};
use std::time::Duration;

/// Generates `count` distinct lowercase keys of roughly `length` characters.
fn make_keys(count: usize, length: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut key = format!("{i:0width$}", width = length);
            // Map digits onto letters so keys look like words
            key = key
                .chars()
                .map(|c| ((c as u8 - b'0') + b'a') as char)
                .collect();
            key
        })
        .collect()
}

/// Benchmark the ternary search tree core operations
fn bench_lehua_tst(c: &mut Criterion) {
    use huli_lib::data_structures::lehua_tst::LehuaTst;

    let mut group = c.benchmark_group("lehua_tst");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Insert benchmark with different key lengths
    for key_length in [8, 16, 32].iter() {
        group.bench_with_input(
            BenchmarkId::new("insert", key_length),
            key_length,
            |b, &length| {
                let keys = make_keys(1000, length);
                b.iter(|| {
                    let mut tree = LehuaTst::new();
                    for (i, key) in keys.iter().enumerate() {
                        tree.insert(key, black_box(i)).unwrap();
                    }
                    tree
                });
            },
        );
    }

    // Lookup benchmark
    group.bench_function("get", |b| {
        let keys = make_keys(1000, 16);
        let mut tree = LehuaTst::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(key, i).unwrap();
        }

        let mut index = 0;
        b.iter(|| {
            // Cycle through keys for lookups
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(tree.get(key));
        });
    });

    // Prefix enumeration benchmark
    group.bench_function("prefix_match", |b| {
        let keys = make_keys(1000, 16);
        let mut tree = LehuaTst::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(key, i).unwrap();
        }

        let mut index = 0;
        b.iter(|| {
            let prefix = &keys[index % keys.len()][..4];
            index += 1;
            black_box(tree.prefix_match(prefix));
        });
    });

    // Near search benchmark with different distance budgets
    for distance in [1usize, 2, 3].iter() {
        group.bench_with_input(
            BenchmarkId::new("near_search", distance),
            distance,
            |b, &distance| {
                let keys = make_keys(1000, 16);
                let mut tree = LehuaTst::new();
                for (i, key) in keys.iter().enumerate() {
                    tree.insert(key, i).unwrap();
                }

                let mut index = 0;
                b.iter(|| {
                    let key = &keys[index % keys.len()];
                    index += 1;
                    black_box(tree.near_search(key, distance));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark line index construction and querying
fn bench_line_index(c: &mut Criterion) {
    use huli_lib::config::index::IndexConfig;
    use huli_lib::index::{Corpus, LineIndex};

    let mut group = c.benchmark_group("line_index");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    // Synthesize a corpus of repeated word patterns
    let words = make_keys(200, 8);
    let text: Vec<String> = (0..1000)
        .map(|i| {
            let a = &words[i % words.len()];
            let b = &words[(i * 7 + 3) % words.len()];
            let c = &words[(i * 13 + 5) % words.len()];
            format!("{a} {b} {c}")
        })
        .collect();
    let text = text.join("\n");

    group.bench_function("build", |b| {
        b.iter(|| {
            let corpus = Corpus::from_text(black_box(&text));
            LineIndex::build(corpus, &IndexConfig::default()).unwrap()
        });
    });

    group.bench_function("search", |b| {
        let corpus = Corpus::from_text(&text);
        let index = LineIndex::build(corpus, &IndexConfig::default()).unwrap();

        let mut i = 0;
        b.iter(|| {
            let query = format!("{} {}", words[i % words.len()], words[(i + 1) % words.len()]);
            i += 1;
            black_box(index.search(&query));
        });
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_lehua_tst, bench_line_index
}

criterion_main!(benches);
