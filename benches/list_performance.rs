//! Performance benchmarks for the object list container.
//!
//! This module benchmarks:
//! - Appending and keyed access
//! - Front operations that renumber keys (shift/unshift)
//! - Slice and splice
//! - Serialization round trips
//!
//! Run with: cargo bench

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use object_list::ObjectList;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn build(size: usize) -> ObjectList<u64> {
    (0..size as u64).collect()
}

/// Benchmark sequential appends
fn bench_appends(c: &mut Criterion) {
    let mut group = c.benchmark_group("appends");

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("append", size), size, |b, &size| {
            b.iter(|| {
                let mut list = ObjectList::with_capacity(size);
                for i in 0..size {
                    list.append(black_box(i));
                }
                black_box(list.count())
            });
        });
    }
    group.finish();
}

/// Benchmark keyed lookups against a populated list
fn bench_keyed_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_access");
    let list = build(10_000);

    group.bench_function("get_hit", |b| {
        b.iter(|| black_box(list.get(black_box(5_000u64))));
    });

    group.bench_function("get_miss", |b| {
        b.iter(|| black_box(list.get(black_box("missing"))));
    });

    group.bench_function("exists", |b| {
        b.iter(|| black_box(list.exists(black_box(9_999u64))));
    });

    group.finish();
}

/// Benchmark front operations, which renumber every integer key
fn bench_front_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_operations");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("shift", size), size, |b, &size| {
            b.iter_batched(
                || build(size),
                |mut list| black_box(list.shift()),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("unshift", size), size, |b, &size| {
            b.iter_batched(
                || build(size),
                |mut list| {
                    list.unshift(0);
                    black_box(list.count())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark slice and splice
fn bench_slice_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_splice");
    let list = build(10_000);

    group.bench_function("slice_middle", |b| {
        b.iter(|| black_box(list.slice(black_box(2_500), Some(5_000), false)));
    });

    group.bench_function("slice_tail_preserve_keys", |b| {
        b.iter(|| black_box(list.slice(black_box(-1_000), None, true)));
    });

    group.bench_function("splice_middle", |b| {
        b.iter_batched(
            || list.duplicate(),
            |mut list| black_box(list.splice(5_000, 100, [1, 2, 3])),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark shuffle with a seeded generator
fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for size in [100, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("shuffle_with", size), size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter_batched(
                || build(size),
                |mut list| {
                    list.shuffle_with(&mut rng);
                    black_box(list.first().copied())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark serialization round trips
fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    let list = build(10_000);
    let blob = list.serialize().unwrap();

    group.throughput(Throughput::Bytes(blob.len() as u64));
    group.bench_function("serialize", |b| {
        b.iter(|| black_box(list.serialize().unwrap()));
    });

    group.bench_function("deserialize", |b| {
        b.iter(|| black_box(ObjectList::<u64>::from_serialized(&blob).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_appends,
    bench_keyed_access,
    bench_front_operations,
    bench_slice_splice,
    bench_shuffle,
    bench_serialization
);

criterion_main!(benches);
