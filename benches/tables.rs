use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashlab::{
    ChainTable, DoubleHashTable, Experiment, ExperimentConfig, KeySource, ProbeTable, RandomKeys,
    KNUTH,
};

const KEYS: usize = 1000;
const RANGE: u32 = 1000;
const SIZE: usize = 1550;

fn fill(c: &mut Criterion) {
    let keys = RandomKeys::seeded(42).keys(KEYS, RANGE);
    let mut group = c.benchmark_group("fill");

    group.bench_function("chaining", |b| {
        b.iter(|| black_box(ChainTable::from_keys(SIZE, &keys, KNUTH).unwrap()))
    });

    group.bench_function("linear", |b| {
        b.iter(|| black_box(ProbeTable::from_keys(SIZE, &keys, KNUTH).unwrap()))
    });

    group.bench_function("double", |b| {
        b.iter(|| black_box(DoubleHashTable::from_keys(SIZE, &keys, KNUTH).unwrap()))
    });

    group.finish();
}

fn compare(c: &mut Criterion) {
    let experiment = Experiment::new(ExperimentConfig::default()).unwrap();
    let mut group = c.benchmark_group("compare");

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(experiment.run(&mut RandomKeys::seeded(7)).unwrap()))
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(experiment.run_parallel(7).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, fill, compare);
criterion_main!(benches);
