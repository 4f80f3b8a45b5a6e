//! # Linear algebra primitives
//!
//! A dense vector with an index offset, and an upper triangular matrix built from those vectors.

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of elements a `BoundedVector` may hold (inclusive).
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest order a `TriangularMatrix` may have (inclusive).
pub const MAX_MATRIX_SIZE: usize = 10_000;
