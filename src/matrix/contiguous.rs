/// Transpose a flat matrix: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows).
/// After transpose, what was column j of src becomes row j of dst.
/// A contiguous buffer has no per-row references that could be absent,
/// so unlike [`transpose_jagged`](crate::transpose_jagged) this variant
/// cannot fail; shape mismatches are caller bugs and panic.
///
/// # Arguments
///
/// * `src` - Source matrix (rows × cols), row-major
/// * `dst` - Destination matrix (cols × rows), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Panics
///
/// Panics if the slice sizes don't match rows × cols.
///
/// # Example
///
/// ```
/// use mattrans::transpose_contiguous;
///
/// let src = vec![1, 2, 3,   // 2×3 matrix
///                4, 5, 6];
/// let mut dst = vec![0; 6];  // will be 3×2
///
/// transpose_contiguous(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1, 4,   // 3×2 matrix
///                      2, 5,
///                      3, 6]);
/// ```
pub fn transpose_contiguous(src: &[i32], dst: &mut [i32], rows: usize, cols: usize) {
    assert_eq!(
        src.len(),
        rows * cols,
        "src: expected {}x{}={} elements",
        rows,
        cols,
        rows * cols
    );
    assert_eq!(
        dst.len(),
        rows * cols,
        "dst: expected {}x{}={} elements",
        cols,
        rows,
        rows * cols
    );

    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}
