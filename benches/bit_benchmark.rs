use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::*;
use ubits::{BitStringCodec, Bytewise, PopCount};

macro_rules! pop_count_bench {
    ($group:ident, $word:ty) => {
        $group.bench_function(BenchmarkId::from_parameter(stringify!($word)), |bencher| {
            bencher.iter_batched(
                || thread_rng().r#gen::<$word>(),
                |value| value.pop_count(),
                BatchSize::SmallInput,
            )
        });
    };
}

pub fn pop_count_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("PopCount::pop_count");
    pop_count_bench!(group, u8);
    pop_count_bench!(group, u16);
    pop_count_bench!(group, u32);
    pop_count_bench!(group, u64);
    group.bench_function(BenchmarkId::from_parameter("u64 count_ones"), |bencher| {
        bencher.iter_batched(
            || thread_rng().r#gen::<u64>(),
            |value| value.count_ones() as usize,
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bit_string_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("BitStringCodec");
    group.bench_function("bit_string/u64", |bencher| {
        bencher.iter_batched(
            || thread_rng().r#gen::<u64>(),
            |value| value.bit_string(),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("from_bit_string/u64", |bencher| {
        bencher.iter_batched(
            || thread_rng().r#gen::<u64>().bit_string(),
            |rendered| u64::from_bit_string(&rendered),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bytewise_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("Bytewise");
    group.bench_function("combine_bytes/u64", |bencher| {
        bencher.iter_batched(
            || thread_rng().r#gen::<[u8; 8]>(),
            u64::combine_bytes,
            BatchSize::SmallInput,
        )
    });
    group.bench_function("split_bytes/u64", |bencher| {
        bencher.iter_batched(
            || thread_rng().r#gen::<u64>(),
            |value| value.split_bytes(),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    pop_count_benchmark,
    bit_string_benchmark,
    bytewise_benchmark
);
criterion_main!(benches);
