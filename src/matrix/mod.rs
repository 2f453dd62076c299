//! Matrix representations and the transposition routines over them.
//!
//! Two modelings of the same operation:
//!
//! - `jagged`: a sequence of row references, rows independently allocated
//!   and possibly absent. This is the validated, fallible core.
//! - `contiguous`: a single row-major buffer plus the shape as stride.
//!   Infallible; used as the comparison baseline.

pub mod contiguous;
pub mod jagged;
