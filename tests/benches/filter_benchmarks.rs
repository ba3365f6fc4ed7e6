//! # Adaptive Bloom Benchmarks
//!
//! | Operation | Expectation |
//! |-----------|-------------|
//! | `murmur3_32` | O(len) per key |
//! | `FixedBloomFilter::add` / `contains` | O(k) |
//! | `AdaptiveBloomFilter::contains` | O(k · filters) worst case |
//! | `MembershipService::check` (miss) | no directory round-trip |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::sync::Arc;

use adaptive_bloom::{
    murmur3_32, AdaptiveBloomConfig, AdaptiveBloomFilter, FixedBloomFilter,
    InMemoryUserDirectory, MembershipApi, MembershipService,
};

fn random_identifiers(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| format!("user_{}", rng.gen::<u64>()))
        .collect()
}

// ============================================================================
// Hashing
// ============================================================================

fn bench_murmur3(c: &mut Criterion) {
    let mut group = c.benchmark_group("murmur3");

    for len in [4usize, 16, 64, 256] {
        let key = "k".repeat(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("murmur3_32", len), &key, |b, key| {
            b.iter(|| black_box(murmur3_32(black_box(key), 0)))
        });
    }

    group.finish();
}

// ============================================================================
// Fixed filter
// ============================================================================

fn bench_fixed_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed-filter");
    let items = random_identifiers(1_000);

    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("add_1000", |b| {
        b.iter(|| {
            let mut filter = FixedBloomFilter::new(95_851, 7).unwrap();
            for item in &items {
                filter.add(item);
            }
            black_box(filter.count())
        })
    });

    let mut filter = FixedBloomFilter::new(95_851, 7).unwrap();
    for item in &items {
        filter.add(item);
    }
    let probes = random_identifiers(1_000);
    group.bench_function("contains_1000_absent", |b| {
        b.iter(|| black_box(probes.iter().filter(|p| filter.contains(p)).count()))
    });

    group.finish();
}

// ============================================================================
// Adaptive filter
// ============================================================================

fn bench_adaptive_lookup_by_epoch(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive-filter");
    let probes = random_identifiers(1_000);

    for items in [5_000usize, 15_000, 40_000] {
        let mut filter = AdaptiveBloomFilter::new(AdaptiveBloomConfig::default()).unwrap();
        for i in 0..items {
            filter.add(&format!("user_{}", i));
        }

        group.bench_with_input(
            BenchmarkId::new("contains_absent", filter.filter_count()),
            &filter,
            |b, filter| b.iter(|| black_box(probes.iter().filter(|p| filter.contains(p)).count())),
        );
    }

    group.bench_function("add_through_growth_15000", |b| {
        b.iter(|| {
            let mut filter = AdaptiveBloomFilter::new(AdaptiveBloomConfig::default()).unwrap();
            for i in 0..15_000 {
                filter.add(&format!("user_{}", i));
            }
            black_box(filter.filter_count())
        })
    });

    group.finish();
}

// ============================================================================
// Service
// ============================================================================

fn bench_service_check(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let service = MembershipService::new(
        AdaptiveBloomConfig::default(),
        Arc::new(InMemoryUserDirectory::new()),
    )
    .unwrap();
    runtime.block_on(async {
        for i in 0..10_000 {
            service.register(&format!("user_{}", i)).await.unwrap();
        }
    });

    let mut group = c.benchmark_group("membership-service");
    group.bench_function("check_available", |b| {
        b.iter(|| runtime.block_on(async { black_box(service.check("newcomer").await.unwrap()) }))
    });
    group.bench_function("check_taken", |b| {
        b.iter(|| runtime.block_on(async { black_box(service.check("user_42").await.unwrap()) }))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_murmur3,
    bench_fixed_filter,
    bench_adaptive_lookup_by_epoch,
    bench_service_check
);
criterion_main!(benches);
