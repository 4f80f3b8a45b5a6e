//! # Matrix implementations
//!
//! Square matrices of which only the upper triangle is stored.
pub use row::TriangularRow;
pub use triangular::TriangularMatrix;

mod row;
mod triangular;
