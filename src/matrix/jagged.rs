//! Transposition over row-pointer (jagged) matrices.
//!
//! A jagged matrix is a sequence of row references, each row independently
//! allocated. Rows can be absent, so every reference is checked before the
//! copy pass runs. The caller owns all storage; nothing here allocates.

use thiserror::Error;

/// Why a transposition call was rejected.
///
/// The C surface ([`crate::ffi::transpose`]) collapses every variant to the
/// same `-1` status; the variants exist so Rust callers can see which
/// reference was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransposeError {
    #[error("input matrix reference is absent for a non-empty shape")]
    NullMatrix,
    #[error("output matrix reference is absent for a non-empty shape")]
    NullTransposed,
    #[error("input row {0} is absent")]
    NullInputRow(usize),
    #[error("output row {0} is absent")]
    NullOutputRow(usize),
}

/// Transpose a jagged matrix: dst = src^T
///
/// `src` is `rows` row references of `cols` elements each; `dst` is `cols`
/// pre-allocated row references of `rows` slots each. Both are borrowed views
/// (build them with [`row_views`] / [`row_views_mut`] when the rows live in
/// `Vec`s). Checks run in a fixed order before anything is written:
///
/// 1. `rows == 0 || cols == 0` succeeds immediately; an empty matrix is
///    valid even when `src` or `dst` is `None`.
/// 2. A `None` top-level view fails.
/// 3. Input rows are scanned in order `0..rows`; the first absent row fails.
/// 4. Output rows are scanned in order `0..cols`; the first absent row fails.
///
/// Only after all four pass does the copy run, so a rejected call leaves the
/// output exactly as the caller provided it.
///
/// # Arguments
///
/// * `src` - Source view: `rows` row references, each `cols` long
/// * `dst` - Destination view: `cols` row references, each `rows` long
/// * `rows` - Number of rows in `src`
/// * `cols` - Number of columns in `src`
///
/// # Panics
///
/// Panics if a non-empty shape names more rows than a present top-level view
/// holds, or (via slice indexing) if a present row is shorter than the
/// declared extent. Row lengths are a caller obligation; the declared shape
/// is trusted, never truncated.
///
/// # Example
///
/// ```
/// use mattrans::{row_views, row_views_mut, transpose_jagged};
///
/// let src = vec![vec![1, 2, 3], vec![4, 5, 6]]; // 2×3
/// let mut dst = vec![vec![0; 2]; 3]; // 3×2, caller-allocated
///
/// let src_rows = row_views(&src);
/// let mut dst_rows = row_views_mut(&mut dst);
/// transpose_jagged(Some(&src_rows), Some(&mut dst_rows), 2, 3).unwrap();
///
/// assert_eq!(dst, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn transpose_jagged(
    src: Option<&[Option<&[i32]>]>,
    dst: Option<&mut [Option<&mut [i32]>]>,
    rows: usize,
    cols: usize,
) -> Result<(), TransposeError> {
    // Empty shape wins over every other check.
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let src = src.ok_or(TransposeError::NullMatrix)?;
    let dst = dst.ok_or(TransposeError::NullTransposed)?;

    assert!(
        src.len() >= rows,
        "src: expected at least {} rows, got {}",
        rows,
        src.len()
    );
    assert!(
        dst.len() >= cols,
        "dst: expected at least {} rows, got {}",
        cols,
        dst.len()
    );

    // Both row scans complete before the first write.
    for i in 0..rows {
        if src[i].is_none() {
            return Err(TransposeError::NullInputRow(i));
        }
    }
    for j in 0..cols {
        if dst[j].is_none() {
            return Err(TransposeError::NullOutputRow(j));
        }
    }

    for i in 0..rows {
        // The scans above already rejected absent rows.
        let Some(src_row) = src[i] else {
            return Err(TransposeError::NullInputRow(i));
        };
        for j in 0..cols {
            let Some(dst_row) = dst[j].as_deref_mut() else {
                return Err(TransposeError::NullOutputRow(j));
            };
            dst_row[i] = src_row[j];
        }
    }

    Ok(())
}

/// Borrow a block of owned rows as a source view for [`transpose_jagged`].
pub fn row_views(rows: &[Vec<i32>]) -> Vec<Option<&[i32]>> {
    rows.iter().map(|r| Some(r.as_slice())).collect()
}

/// Borrow a block of owned rows as a destination view for [`transpose_jagged`].
pub fn row_views_mut(rows: &mut [Vec<i32>]) -> Vec<Option<&mut [i32]>> {
    rows.iter_mut().map(|r| Some(r.as_mut_slice())).collect()
}
