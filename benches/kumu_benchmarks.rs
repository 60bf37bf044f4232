//! Kumu Trie Benchmarks
//!
//! Benchmarks for the trie operations, implemented with the Criterion
//! framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use kumu_trie::{KumuTrie, SharedKumuTrie};

/// Path-like keys with deep shared prefixes.
fn route_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("/api/v{}/tenant{}/resource{}", i % 3, i % 50, i))
        .collect()
}

fn bench_kumu_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("kumu_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Bulk insert with different key counts
    for size in [100, 1_000, 10_000].iter() {
        let keys = route_keys(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), size, |b, _| {
            b.iter(|| {
                let mut trie = KumuTrie::new();
                for (i, key) in keys.iter().enumerate() {
                    trie.insert(key, i);
                }
                black_box(trie)
            });
        });
    }

    let keys = route_keys(10_000);
    let trie: KumuTrie<usize> = keys.iter().enumerate().map(|(i, k)| (k, i)).collect();

    group.bench_function("find", |b| {
        let mut index = 0;
        b.iter(|| {
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(trie.find(key));
        });
    });

    group.bench_function("find_series", |b| {
        let mut index = 0;
        b.iter(|| {
            let key = format!("{}/child", keys[index % keys.len()]);
            index += 1;
            black_box(trie.find_series(&key));
        });
    });

    group.bench_function("shared_find", |b| {
        let shared = SharedKumuTrie::from_trie(trie.clone());
        let mut index = 0;
        b.iter(|| {
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(shared.find(key));
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
    targets = bench_kumu_trie
}

criterion_main!(benches);
