//! Criterion benchmarks for the grouped store
//!
//! Covers the hot paths: lock-free reads and listings, mutation-lock
//! throughput, and composite-id encode/decode.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use groupstore::GroupedStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn populated_store(groups: usize, per_group: usize) -> GroupedStore<u64> {
    let store = GroupedStore::new("bench.Item");
    for g in 0..groups {
        for i in 0..per_group {
            store.create(&format!("group-{g}"), &format!("id-{i}"), (g * i) as u64);
        }
    }
    store
}

fn bench_reads(c: &mut Criterion) {
    let store = populated_store(16, 1000);
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("read_hot_path", |b| {
        b.iter(|| {
            let g = rng.gen_range(0..16);
            let i = rng.gen_range(0..1000);
            black_box(store.read(&format!("group-{g}"), &format!("id-{i}")))
        })
    });
}

fn bench_mutations(c: &mut Criterion) {
    let store = populated_store(16, 1000);

    c.bench_function("create_existing_group", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            store.create("group-0", &format!("id-{}", i % 1000), black_box(i));
        })
    });

    c.bench_function("update_under_mutation_lock", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            store
                .update("group-0", &format!("id-{}", i % 1000), black_box(i))
                .unwrap();
        })
    });
}

fn bench_listings(c: &mut Criterion) {
    let store = populated_store(16, 1000);

    c.bench_function("list_group_1k", |b| {
        b.iter(|| black_box(store.list("group-3").len()))
    });

    c.bench_function("list_capped_10_of_1k", |b| {
        b.iter(|| black_box(store.list_capped("group-3", 10).len()))
    });
}

fn bench_composite_ids(c: &mut Criterion) {
    let store: GroupedStore<u64> = GroupedStore::new("bench.Item");
    let composite = store.composite_id("group-3", "id-42").unwrap();

    c.bench_function("composite_id_encode", |b| {
        b.iter(|| black_box(store.composite_id("group-3", "id-42").unwrap()))
    });

    c.bench_function("composite_id_decode", |b| {
        b.iter(|| black_box(store.group_from_composite(&composite).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_reads,
    bench_mutations,
    bench_listings,
    bench_composite_ids
);
criterion_main!(benches);
