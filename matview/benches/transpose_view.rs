//! Traversal cost of a transposed view against the wrapped matrix.
//!
//! Reading a matrix column by column through `a.cols()` and reading the
//! rows of `a.transpose()` must cost the same; so must random entry reads.
//!
//! Run with: cargo bench --bench transpose_view

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matview::{
    ColIterable, CooMatrix, DenseMatrix, Matrix, RowIterable, SparseRowMatrix, Transpose,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIZES: [usize; 3] = [64, 256, 1024];

fn random_dense(n: usize, seed: u64) -> DenseMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    DenseMatrix::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0))
}

fn random_triplets(n: usize, seed: u64) -> Vec<(usize, usize, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    // roughly 1% fill
    (0..n * n / 100)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn bench_dense_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense/lines");

    for n in SIZES {
        let a = random_dense(n, 42);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_with_input(BenchmarkId::new("cols", n), &a, |b, a| {
            b.iter(|| {
                let sum: f64 = a.cols().flatten().sum();
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("transpose_rows", n), &a, |b, a| {
            b.iter(|| {
                let sum: f64 = a.transpose().rows().flatten().sum();
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn bench_entry_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry/reads");
    let n = 256;
    let mut rng = StdRng::seed_from_u64(7);
    let probes: Vec<(usize, usize)> = (0..4096)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();
    group.throughput(Throughput::Elements(probes.len() as u64));

    let dense = random_dense(n, 1);
    let sparse = SparseRowMatrix::from_triplets(n, n, random_triplets(n, 2)).unwrap();
    let coo = CooMatrix::from_triplets(n, n, random_triplets(n, 3)).unwrap();

    fn direct<M: Matrix>(m: &M, probes: &[(usize, usize)]) -> usize {
        probes
            .iter()
            .filter(|&&(i, j)| m.entry(i, j).is_some())
            .count()
    }

    fn through_view<M: Matrix>(m: &M, probes: &[(usize, usize)]) -> usize {
        let view = m.transpose();
        probes
            .iter()
            .filter(|&&(i, j)| view.entry(j, i).is_some())
            .count()
    }

    group.bench_function("dense/direct", |b| {
        b.iter(|| direct(black_box(&dense), &probes))
    });
    group.bench_function("dense/transpose", |b| {
        b.iter(|| through_view(black_box(&dense), &probes))
    });
    group.bench_function("sparse_row/direct", |b| {
        b.iter(|| direct(black_box(&sparse), &probes))
    });
    group.bench_function("sparse_row/transpose", |b| {
        b.iter(|| through_view(black_box(&sparse), &probes))
    });
    group.bench_function("coo/direct", |b| {
        b.iter(|| direct(black_box(&coo), &probes))
    });
    group.bench_function("coo/transpose", |b| {
        b.iter(|| through_view(black_box(&coo), &probes))
    });

    group.finish();
}

fn bench_sparse_cols_of_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_row/view_cols");

    for n in SIZES {
        let a = SparseRowMatrix::from_triplets(n, n, random_triplets(n, 9)).unwrap();
        group.throughput(Throughput::Elements(a.nnz() as u64));

        group.bench_with_input(BenchmarkId::new("rows", n), &a, |b, a| {
            b.iter(|| {
                let sum: f64 = a.rows().flat_map(|row| row.values()).sum();
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("transpose_cols", n), &a, |b, a| {
            b.iter(|| {
                let sum: f64 = a.transpose().cols().flat_map(|col| col.values()).sum();
                black_box(sum)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dense_lines,
    bench_entry_reads,
    bench_sparse_cols_of_view
);
criterion_main!(benches);
