//! Out-of-place transposition for row-pointer integer matrices.
//!
//! The double loop is the easy part. The point of this crate is the
//! contract around it: a matrix arrives as an array of row references that
//! the caller owns and that may individually be absent, so every reference
//! is validated in a fixed order before a single element moves. The routine
//! is exposed both as a safe Rust API and as a raw C ABI symbol, and the
//! crate builds as a shared library a JVM can load, with a small JNI entry
//! point demonstrating the calling convention.
//!
//! ## Usage
//!
//! ```
//! use mattrans::{row_views, row_views_mut, transpose_jagged};
//!
//! let src = vec![vec![1, 2, 3], vec![4, 5, 6]]; // 2×3
//! let mut dst = vec![vec![0; 2]; 3]; // 3×2, caller-allocated
//!
//! let src_rows = row_views(&src);
//! let mut dst_rows = row_views_mut(&mut dst);
//! transpose_jagged(Some(&src_rows), Some(&mut dst_rows), 2, 3).unwrap();
//!
//! assert_eq!(dst, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
//! ```
//!
//! When the matrix lives in one contiguous buffer, use the flat variant:
//!
//! ```
//! use mattrans::transpose_contiguous;
//!
//! let src = vec![1, 2, 3, 4, 5, 6]; // 2×3, row-major
//! let mut dst = vec![0; 6];
//!
//! transpose_contiguous(&src, &mut dst, 2, 3);
//!
//! assert_eq!(dst, vec![1, 4, 2, 5, 3, 6]);
//! ```
//!
//! ## What's inside
//!
//! - `matrix::jagged`: the validated row-pointer transpose (empty shape →
//!   top-level presence → input rows → output rows → copy)
//! - `matrix::contiguous`: buffer-plus-stride variant of the same routine
//! - `ffi`: the unmangled `transpose` C symbol with `0`/`-1` status returns,
//!   and the `Java_com_example_JniExample_calculateSum` JNI export

pub mod ffi;
pub mod matrix;

pub use matrix::contiguous::transpose_contiguous;
pub use matrix::jagged::{TransposeError, row_views, row_views_mut, transpose_jagged};
