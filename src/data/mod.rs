//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures; there are no algorithms beyond the element-wise
//! arithmetic defined on them.

pub mod linear_algebra;
