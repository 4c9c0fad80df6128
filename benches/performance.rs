use blockvec::BlockVec;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const BLOCK_SIZES: [usize; 4] = [4, 8, 16, 32];

/// NUL-delimited sample of `count` strings of varying length, shaped like
/// the output of a sample generator
fn sample(count: usize) -> Vec<u8> {
    let mut blob = Vec::new();
    for i in 0..count {
        let len = 3 + (i * 7) % 13;
        blob.extend((0..len).map(|j| b'a' + ((i + j) % 26) as u8));
        blob.push(0);
    }
    blob
}

fn loaded<'a>(buffer: &'a mut [u8], block_size: usize, blob: &[u8]) -> BlockVec<'a> {
    let mut strings = BlockVec::new(buffer, block_size).unwrap();
    strings.split(blob, 0);
    strings
}

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    let blob = sample(1000);

    for block_size in BLOCK_SIZES.iter() {
        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(
            BenchmarkId::new("split_nul", block_size),
            block_size,
            |b, &block_size| {
                let mut buffer = vec![0u8; 1000 * 32];
                b.iter(|| {
                    let strings = loaded(&mut buffer, block_size, &blob);
                    black_box(strings.len())
                });
            },
        );
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");
    let blob = sample(500);

    for block_size in BLOCK_SIZES.iter() {
        group.throughput(Throughput::Elements(500));
        group.bench_with_input(
            BenchmarkId::new("get", block_size),
            block_size,
            |b, &block_size| {
                let mut buffer = vec![0u8; 500 * 32];
                let strings = loaded(&mut buffer, block_size, &blob);

                b.iter(|| {
                    for i in (0..strings.len()).rev() {
                        black_box(strings.get(i));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");
    let blob = sample(1000);

    for block_size in BLOCK_SIZES.iter() {
        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(
            BenchmarkId::new("full_iteration", block_size),
            block_size,
            |b, &block_size| {
                let mut buffer = vec![0u8; 1000 * 32];
                let strings = loaded(&mut buffer, block_size, &blob);

                b.iter(|| {
                    for s in black_box(&strings) {
                        black_box(s);
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("cursor", block_size),
            block_size,
            |b, &block_size| {
                let mut buffer = vec![0u8; 1000 * 32];
                let strings = loaded(&mut buffer, block_size, &blob);

                b.iter(|| {
                    let mut pos = strings.begin();
                    while pos != strings.end() {
                        black_box(strings.string_at(pos));
                        pos = strings.next_position(pos);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_front_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("front");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("push_front_remove_front", size),
            size,
            |b, &size| {
                let mut buffer = vec![0u8; size * 16];
                b.iter(|| {
                    let mut strings = BlockVec::new(&mut buffer, 16).unwrap();

                    for i in 0..size {
                        let data = format!("element_{}", i);
                        black_box(strings.push_front(data.as_bytes()).unwrap());
                    }
                    for _ in 0..size {
                        black_box(strings.remove(0).unwrap());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");
    let blob = sample(1000);

    // (source block size, destination block size): bijective, injective, stringwise
    for (from, to) in [(16usize, 16usize), (16, 32), (8, 16)].iter() {
        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(
            BenchmarkId::new("copy_from", format!("{}->{}", from, to)),
            &(*from, *to),
            |b, &(from, to)| {
                let mut source_buffer = vec![0u8; 1000 * 32];
                let source = loaded(&mut source_buffer, from, &blob);
                let mut dest_buffer = vec![0u8; 1000 * 64];
                let mut dest = BlockVec::new(&mut dest_buffer, to).unwrap();

                b.iter(|| black_box(dest.copy_from(&source)));
            },
        );
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let blob = sample(200);

    for block_size in [8, 16].iter() {
        group.bench_with_input(
            BenchmarkId::new("selection", block_size),
            block_size,
            |b, &block_size| {
                let mut buffer = vec![0u8; 200 * 32];
                b.iter(|| {
                    let mut strings = loaded(&mut buffer, block_size, &blob);
                    strings.sort();
                    black_box(strings.len())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_random_access,
    bench_iterator_performance,
    bench_front_operations,
    bench_copy,
    bench_sort
);
criterion_main!(benches);
