//! # Vector types
//!
//! A single dense representation, with an offset for the indices. These are the rows of the
//! triangular matrices.
pub use bounded::BoundedVector;

mod bounded;
