use apsp::blocked::floyd_blocked::floyd_blocked;
use apsp::matrix::generate::random_dense;
use apsp::threaded::engine::floyd_blocked_mt;
use apsp::floyd_sequential;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_apsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("apsp");
    group.sample_size(10);

    for &n in &[128usize, 256, 512] {
        let base = random_dense(n, 1234);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter_batched_ref(
                || base.as_slice().to_vec(),
                |d| floyd_sequential(d, n),
                criterion::BatchSize::LargeInput,
            )
        });

        for &block in &[32usize, 64] {
            group.bench_with_input(
                BenchmarkId::new(format!("blocked_b{}", block), n),
                &n,
                |b, &n| {
                    b.iter_batched_ref(
                        || base.as_slice().to_vec(),
                        |d| floyd_blocked(d, n, block),
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("blocked_mt4_b{}", block), n),
                &n,
                |b, &n| {
                    b.iter_batched_ref(
                        || base.as_slice().to_vec(),
                        |d| floyd_blocked_mt(d, n, block, 4),
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_apsp);
criterion_main!(benches);
