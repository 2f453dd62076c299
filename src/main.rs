//! Benchmark runner for the transposition routines.

use mattrans::{row_views, row_views_mut, transpose_contiguous, transpose_jagged};
use std::time::Instant;

fn main() {
    println!("=== Matrix Transposition Benchmark ===\n");

    let sizes = [512, 1024, 2048];
    let iterations = 5;

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let (rows, cols) = (size, size);
        let flat: Vec<i32> = (0..rows * cols).map(|i| (i % 100) as i32).collect();
        let jagged: Vec<Vec<i32>> = flat.chunks(cols).map(|r| r.to_vec()).collect();

        let results = [
            ("Contiguous", bench_contiguous(&flat, rows, cols, iterations)),
            ("Jagged", bench_jagged(&jagged, rows, cols, iterations)),
        ];

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, melems))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:12} {:8.2} ms  {:8.1} Melem/s  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                melems,
                speedup
            );
        }
        println!();
    }

    println!("Melem/s = million elements moved per second.");
    println!("Speedup relative to Contiguous. Higher is better.");
}

/// Benchmark the flat-buffer transpose.
fn bench_contiguous(src: &[i32], rows: usize, cols: usize, iterations: usize) -> (f64, f64) {
    // Warmup
    let mut dst = vec![0; rows * cols];
    transpose_contiguous(src, &mut dst, rows, cols);

    let mut total = 0.0;
    for _ in 0..iterations {
        let mut dst = vec![0; rows * cols];
        let start = Instant::now();
        transpose_contiguous(src, &mut dst, rows, cols);
        total += start.elapsed().as_secs_f64();
    }

    summarize(total, iterations, rows * cols)
}

/// Benchmark the row-pointer transpose. View building stays outside the
/// timed region; only the validated copy is measured.
fn bench_jagged(src: &[Vec<i32>], rows: usize, cols: usize, iterations: usize) -> (f64, f64) {
    let src_rows = row_views(src);

    // Warmup
    let mut dst = vec![vec![0; rows]; cols];
    let mut dst_rows = row_views_mut(&mut dst);
    transpose_jagged(Some(&src_rows), Some(&mut dst_rows), rows, cols)
        .expect("all rows present");

    let mut total = 0.0;
    for _ in 0..iterations {
        let mut dst = vec![vec![0; rows]; cols];
        let mut dst_rows = row_views_mut(&mut dst);
        let start = Instant::now();
        transpose_jagged(Some(&src_rows), Some(&mut dst_rows), rows, cols)
            .expect("all rows present");
        total += start.elapsed().as_secs_f64();
    }

    summarize(total, iterations, rows * cols)
}

fn summarize(total: f64, iterations: usize, elems: usize) -> (f64, f64) {
    let avg = total / iterations as f64;
    let melems = elems as f64 / avg / 1e6;
    (avg * 1000.0, melems)
}
