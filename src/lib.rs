//! # Bounded vectors and triangular matrices
//!
//! A vector type with a logical start index and a hard capacity, and a square matrix that only
//! stores its upper triangle as rows of such vectors. All element access is bounds checked, all
//! failures are reported through [`LinearAlgebraError`].
#![warn(missing_docs)]

pub mod data;

pub use data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use data::linear_algebra::error::LinearAlgebraError;
pub use data::linear_algebra::matrix::{TriangularMatrix, TriangularRow};
pub use data::linear_algebra::vector::BoundedVector;

#[cfg(test)]
mod tests;
