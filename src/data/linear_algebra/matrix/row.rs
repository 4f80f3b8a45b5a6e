//! # Rows of a triangular matrix
//!
//! A row is a `BoundedVector` of which the values can change, but the size and start index can't.
use std::ops::{Deref, Index, IndexMut};
use std::slice::IterMut;

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::vector::BoundedVector;

/// Row `i` of a `TriangularMatrix`: a vector with start index `i`, reaching up to the last column.
///
/// Only the matrix creates rows. Reading goes through the `BoundedVector` this dereferences to;
/// writing is limited to the values, so a row can't be resized or replaced by another vector.
///
/// ```compile_fail
/// use bounded_triangular::{BoundedVector, TriangularMatrix};
///
/// let mut matrix = TriangularMatrix::<i32>::new(3).unwrap();
/// matrix[0] = BoundedVector::new(1).unwrap();
/// ```
///
/// ```compile_fail
/// use bounded_triangular::{BoundedVector, TriangularMatrix};
///
/// let mut matrix = TriangularMatrix::<i32>::new(3).unwrap();
/// matrix[0].assign(&BoundedVector::new(1).unwrap());
/// ```
#[derive(Debug, Eq, PartialEq)]
pub struct TriangularRow<T>(BoundedVector<T>);

impl<T> TriangularRow<T> {
    pub(super) fn new(values: BoundedVector<T>) -> Self {
        Self(values)
    }

    /// Deep copy, for the matrix to build new rows from.
    pub(super) fn duplicate(&self) -> Self
        where
            T: Clone,
    {
        Self(self.0.clone())
    }

    /// Mutable reference to the value in column `j`.
    pub fn get_mut(&mut self, j: isize) -> Result<&mut T, LinearAlgebraError> {
        self.0.get_mut(j)
    }

    /// Overwrite the value in column `j`.
    pub fn set(&mut self, j: isize, value: T) -> Result<(), LinearAlgebraError> {
        self.0.set(j, value)
    }

    /// Iterate mutably over the values, starting at the diagonal.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.0.iter_mut()
    }
}

impl<T> Deref for TriangularRow<T> {
    type Target = BoundedVector<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Index<isize> for TriangularRow<T> {
    type Output = T;

    fn index(&self, j: isize) -> &Self::Output {
        &self.0[j]
    }
}

impl<T> IndexMut<isize> for TriangularRow<T> {
    fn index_mut(&mut self, j: isize) -> &mut Self::Output {
        &mut self.0[j]
    }
}
