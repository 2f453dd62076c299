//! Criterion benchmarks for the transposition routines.

use criterion::{Criterion, criterion_group, criterion_main};
use mattrans::{row_views, row_views_mut, transpose_contiguous, transpose_jagged};
use std::hint::black_box;

fn bench_transpose(c: &mut Criterion) {
    for &size in &[256usize, 1024] {
        let flat: Vec<i32> = (0..size * size).map(|i| (i % 100) as i32).collect();
        let mut flat_dst = vec![0; size * size];

        c.bench_function(&format!("contiguous_{size}x{size}"), |b| {
            b.iter(|| {
                transpose_contiguous(black_box(&flat), &mut flat_dst, size, size);
            })
        });

        let jagged: Vec<Vec<i32>> = flat.chunks(size).map(|r| r.to_vec()).collect();
        let mut jagged_dst = vec![vec![0; size]; size];

        c.bench_function(&format!("jagged_{size}x{size}"), |b| {
            let src_rows = row_views(&jagged);
            let mut dst_rows = row_views_mut(&mut jagged_dst);
            b.iter(|| {
                transpose_jagged(black_box(Some(&src_rows)), Some(&mut dst_rows), size, size)
                    .expect("all rows present");
            })
        });
    }
}

criterion_group!(benches, bench_transpose);
criterion_main!(benches);
