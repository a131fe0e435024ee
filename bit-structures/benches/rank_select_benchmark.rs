use bit_structures::{BitVec, PrefixSum, RankSelectDict};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::distributions::Uniform;
use rand::prelude::Distribution;
use rand::Rng;

// Unary-code `n` random values in 0..max into a dictionary, as a length index does.
fn build_unary(n: usize, max: usize) -> RankSelectDict {
    let mut rng = rand::thread_rng();
    let unif = Uniform::new(0, max);
    let mut bv = RankSelectDict::new();
    bv.push(true);
    for _ in 0..n {
        bv.push_run(false, unif.sample(&mut rng));
        bv.push(true);
    }
    bv
}

fn bench_rank_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_select_dict");
    for n in [10_000, 1_000_000] {
        let bv = build_unary(n, 10);
        let mut rng = rand::thread_rng();

        group.bench_function(BenchmarkId::new("rank1", n), |b| {
            b.iter(|| bv.rank1(rng.gen_range(0..bv.len())))
        });
        group.bench_function(BenchmarkId::new("select1", n), |b| {
            b.iter(|| bv.select1(rng.gen_range(0..bv.num_ones())))
        });
        group.bench_function(BenchmarkId::new("select0", n), |b| {
            b.iter(|| bv.select0(rng.gen_range(0..bv.num_zeros())))
        });
    }
    group.finish();
}

fn bench_prefix_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_sum");
    for n in [10_000, 1_000_000] {
        let mut rng = rand::thread_rng();
        let mut ps = PrefixSum::new();
        for _ in 0..n {
            ps.push(rng.gen_range(0..10));
        }

        group.bench_function(BenchmarkId::new("value_and_prefix_sum", n), |b| {
            b.iter(|| ps.value_and_prefix_sum(rng.gen_range(0..ps.num())))
        });
        group.bench_function(BenchmarkId::new("find_by_sum", n), |b| {
            b.iter(|| ps.find_by_sum(rng.gen_range(0..ps.total_sum())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank_select, bench_prefix_sum);
criterion_main!(benches);
