use chunk_cache::{CacheConfig, Chunk, ChunkCache};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CHUNK_SIZE: usize = 128;

fn range_for(n: u64) -> (u64, u64) {
    let start = n * CHUNK_SIZE as u64;
    (start, start + CHUNK_SIZE as u64 - 1)
}

fn filled_cache(capacity: usize) -> ChunkCache {
    let config = CacheConfig::default().with_capacity(capacity);
    let mut cache = ChunkCache::new(config);
    for n in 0..capacity as u64 {
        let (start, end) = range_for(n);
        let chunk = Chunk::from_bytes(CHUNK_SIZE, &[n as u8; CHUNK_SIZE]).unwrap();
        cache.put(start, end, chunk).unwrap();
    }
    cache
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for capacity in [100usize, 10_000, 100_000].iter() {
        let mut cache = filled_cache(*capacity);
        let (hit_start, hit_end) = range_for(*capacity as u64 / 2);
        let (miss_start, miss_end) = range_for(*capacity as u64 + 1);

        group.bench_with_input(BenchmarkId::new("hit", capacity), capacity, |b, _| {
            b.iter(|| cache.get(black_box(hit_start), black_box(hit_end)))
        });

        group.bench_with_input(BenchmarkId::new("miss", capacity), capacity, |b, _| {
            b.iter(|| cache.get(black_box(miss_start), black_box(miss_end)))
        });
    }

    group.finish();
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");

    for capacity in [100usize, 10_000, 100_000].iter() {
        // Full cache: every distinct put pays for one eviction
        let mut cache = filled_cache(*capacity);
        let payload = [7u8; CHUNK_SIZE];
        let mut next = *capacity as u64;

        group.bench_with_input(
            BenchmarkId::new("insert_evict", capacity),
            capacity,
            |b, _| {
                b.iter(|| {
                    let (start, end) = range_for(next);
                    next += 1;
                    let chunk = Chunk::from_bytes(CHUNK_SIZE, &payload).unwrap();
                    cache.put(black_box(start), black_box(end), chunk).unwrap()
                })
            },
        );

        // Overwrite: same range every iteration, no eviction
        let mut cache = filled_cache(*capacity);
        let (ow_start, ow_end) = range_for(*capacity as u64 / 2);

        group.bench_with_input(
            BenchmarkId::new("overwrite", capacity),
            capacity,
            |b, _| {
                b.iter(|| {
                    let chunk = Chunk::from_bytes(CHUNK_SIZE, &payload).unwrap();
                    cache.put(black_box(ow_start), black_box(ow_end), chunk).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);

    let capacity = 10_000usize;
    let mut cache = filled_cache(capacity);
    let payload = [3u8; CHUNK_SIZE];
    let mut n = 0u64;

    // Nine hits for every insert-plus-eviction
    group.bench_function(BenchmarkId::new("read_heavy", capacity), |b| {
        b.iter(|| {
            n += 1;
            if n % 10 == 0 {
                let (start, end) = range_for(capacity as u64 + n);
                let chunk = Chunk::from_bytes(CHUNK_SIZE, &payload).unwrap();
                cache.put(start, end, chunk).unwrap();
            } else {
                let (start, end) = range_for(n % capacity as u64);
                black_box(cache.get(start, end));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_get, bench_put, bench_mixed_workload);
criterion_main!(benches);
