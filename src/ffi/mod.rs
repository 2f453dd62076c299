//! Native call surfaces.
//!
//! [`transpose`] is the unmangled C ABI entry over raw row-pointer arrays;
//! the `jni` submodule holds the JVM-callable entry point. Both take and
//! return plain data so the numeric core stays host-runtime-free.

pub mod jni;

use libc::{c_int, size_t};

/// Status returned on success.
pub const STATUS_OK: c_int = 0;
/// Status returned for any rejected call. The cause is not discriminated.
pub const STATUS_NULL: c_int = -1;

/// Transpose a row-pointer matrix through the C ABI.
///
/// `matrix` is an array of `rows` pointers, each to a row of `cols` ints;
/// `transposed_matrix` is an array of `cols` pointers to pre-allocated rows
/// of `rows` ints. Returns [`STATUS_OK`] on success and [`STATUS_NULL`] if
/// any required pointer is null. Checks mirror the safe core
/// ([`crate::transpose_jagged`]) exactly, in the same order: empty shape
/// succeeds before any pointer is inspected, then the two top-level
/// pointers, then every input row pointer in index order, then every output
/// row pointer. Nothing is written until all checks pass.
///
/// # Safety
///
/// For a non-empty shape with non-null top-level pointers, the caller must
/// ensure:
/// - `matrix` points to at least `rows` readable row pointers, and each
///   non-null row to at least `cols` readable `c_int`s
/// - `transposed_matrix` points to at least `cols` readable row pointers,
///   and each non-null row to at least `rows` writable `c_int`s
/// - input and output storage do not alias
/// - all referenced storage outlives the call
///
/// The declared extents are trusted; row lengths cannot be introspected
/// from a raw pointer, and a shorter actual allocation is undefined
/// behavior, not a reported error.
#[unsafe(no_mangle)]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe extern "C" fn transpose(
    matrix: *const *const c_int,
    rows: size_t,
    cols: size_t,
    transposed_matrix: *mut *mut c_int,
) -> c_int {
    // Empty shape is valid even with null top-level pointers.
    if rows == 0 || cols == 0 {
        return STATUS_OK;
    }

    if matrix.is_null() || transposed_matrix.is_null() {
        return STATUS_NULL;
    }

    // Both pointer scans complete before the first write.
    for i in 0..rows {
        if (*matrix.add(i)).is_null() {
            return STATUS_NULL;
        }
    }
    for j in 0..cols {
        if (*transposed_matrix.add(j)).is_null() {
            return STATUS_NULL;
        }
    }

    for i in 0..rows {
        let src_row = *matrix.add(i);
        for j in 0..cols {
            *(*transposed_matrix.add(j)).add(i) = *src_row.add(j);
        }
    }

    STATUS_OK
}
