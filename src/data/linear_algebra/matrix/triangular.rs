//! # Upper triangular matrix
//!
//! Row `i` of a matrix of order `n` only stores the columns `i..n`, as a `BoundedVector` of size
//! `n - i` with start index `i`. A value in column `j` of that row is found at offset `j - i`.
//!
//! The two indices of `matrix[i][j]` are checked separately: `i` against `0..n` by the matrix, `j`
//! against `i..n` by the row. Values below the diagonal are zero and can't be written.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut, Neg};
use std::slice::Iter;

use itertools::Itertools;
use log::{debug, trace};
use num_traits::{One, Zero};

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::matrix::TriangularRow;
use crate::data::linear_algebra::traits::ElementRef;
use crate::data::linear_algebra::vector::BoundedVector;

/// Square matrix of order at most `MAX_MATRIX_SIZE`, storing only values on and above the
/// diagonal.
#[derive(Debug, Eq, PartialEq)]
pub struct TriangularMatrix<T> {
    /// Row `i` has start index `i` and `order - i` values.
    rows: Vec<TriangularRow<T>>,
}

impl<T> TriangularMatrix<T> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `order`: Number of rows and columns, at most `MAX_MATRIX_SIZE`. A matrix of order `0` has
    /// no rows.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the order is too large.
    pub fn new(order: usize) -> Result<Self, LinearAlgebraError>
        where
            T: Zero + Clone,
    {
        if order > MAX_MATRIX_SIZE {
            debug!("Rejecting triangular matrix of order {}", order);
            return Err(LinearAlgebraError::InvalidSize { size: order, maximum: MAX_MATRIX_SIZE, });
        }
        trace!("Allocating triangular matrix of order {}", order);

        let rows = (0..order)
            .map(|i| BoundedVector::with_start_index(order - i, i as isize).map(TriangularRow::new))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }

    /// Create a matrix from the values on and above the diagonal.
    ///
    /// # Arguments
    ///
    /// * `rows`: For each row `i`, the values in columns `i..order`, where `order` is the number of
    /// rows.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if there are too many rows, `SizeMismatch` if row `i` doesn't have exactly
    /// `order - i` values.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinearAlgebraError> {
        let order = rows.len();
        if order > MAX_MATRIX_SIZE {
            debug!("Rejecting triangular matrix of order {}", order);
            return Err(LinearAlgebraError::InvalidSize { size: order, maximum: MAX_MATRIX_SIZE, });
        }

        let rows = rows.into_iter()
            .enumerate()
            .map(|(i, values)| {
                if values.len() != order - i {
                    return Err(LinearAlgebraError::SizeMismatch { left: values.len(), right: order - i, });
                }
                BoundedVector::from_values(values, i as isize).map(TriangularRow::new)
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }

    /// Create an identity matrix.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the order is too large.
    pub fn identity(order: usize) -> Result<Self, LinearAlgebraError>
        where
            T: Zero + One + Clone,
    {
        let mut matrix = Self::new(order)?;
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            row.set(i as isize, T::one())?;
        }

        Ok(matrix)
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Number of values in memory, `order * (order + 1) / 2`.
    pub fn nr_stored_values(&self) -> usize {
        let order = self.order();
        order * (order + 1) / 2
    }

    fn row_offset(&self, i: isize) -> Result<usize, LinearAlgebraError> {
        let range = 0..self.rows.len() as isize;
        if range.contains(&i) {
            Ok(i as usize)
        } else {
            Err(LinearAlgebraError::IndexOutOfRange { index: i, range, })
        }
    }

    /// Row `i`, holding the columns `i..order`.
    pub fn row(&self, i: isize) -> Result<&TriangularRow<T>, LinearAlgebraError> {
        let offset = self.row_offset(i)?;
        Ok(&self.rows[offset])
    }

    /// Mutable reference to row `i`, through which its values can be changed.
    pub fn row_mut(&mut self, i: isize) -> Result<&mut TriangularRow<T>, LinearAlgebraError> {
        let offset = self.row_offset(i)?;
        Ok(&mut self.rows[offset])
    }

    /// Value in row `i`, column `j`, for `j` on or above the diagonal.
    pub fn get(&self, i: isize, j: isize) -> Result<&T, LinearAlgebraError> {
        self.row(i)?.get(j)
    }

    /// Mutable reference to the value in row `i`, column `j`, for `j` on or above the diagonal.
    pub fn get_mut(&mut self, i: isize, j: isize) -> Result<&mut T, LinearAlgebraError> {
        self.row_mut(i)?.get_mut(j)
    }

    /// Overwrite the value in row `i`, column `j`.
    pub fn set(&mut self, i: isize, j: isize, value: T) -> Result<(), LinearAlgebraError> {
        self.row_mut(i)?.set(j, value)
    }

    /// Value in row `i`, column `j`, including the zeros below the diagonal.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if either index lies outside `0..order`.
    pub fn value(&self, i: isize, j: isize) -> Result<T, LinearAlgebraError>
        where
            T: Zero + Clone,
    {
        let row = self.row(i)?;
        if (0..i).contains(&j) {
            Ok(T::zero())
        } else {
            row.get(j).cloned()
        }
    }

    /// Iterate over the rows, from the top.
    pub fn rows(&self) -> Iter<'_, TriangularRow<T>> {
        self.rows.iter()
    }

    /// Make this matrix a copy of `other`, possibly changing its order.
    ///
    /// If cloning a value panics, this matrix is left as it was.
    pub fn assign(&mut self, other: &Self)
        where
            T: Clone,
    {
        if self.order() != other.order() {
            trace!("Reallocating triangular matrix of order {} to order {}", self.order(), other.order());
        }

        // Build the new rows before touching `self`
        let rows = other.rows.iter().map(TriangularRow::duplicate).collect();
        self.rows = rows;
    }

    /// Combine corresponding rows.
    fn zip_rows<F>(&self, other: &Self, mut f: F) -> Result<Self, LinearAlgebraError>
        where
            F: FnMut(&BoundedVector<T>, &BoundedVector<T>) -> Result<BoundedVector<T>, LinearAlgebraError>,
    {
        if self.order() != other.order() {
            return Err(LinearAlgebraError::SizeMismatch { left: self.order(), right: other.order(), });
        }

        let rows = self.rows.iter().zip_eq(&other.rows)
            .map(|(left, right)| f(&**left, &**right).map(TriangularRow::new))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the orders differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinearAlgebraError>
        where
            for<'r> &'r T: ElementRef<T>,
    {
        self.zip_rows(other, |left, right| left.checked_add(right))
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the orders differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, LinearAlgebraError>
        where
            for<'r> &'r T: ElementRef<T>,
    {
        self.zip_rows(other, |left, right| left.checked_sub(right))
    }
}

impl<T: Clone> Clone for TriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.iter().map(TriangularRow::duplicate).collect(), }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source)
    }
}

impl<T> Index<isize> for TriangularMatrix<T> {
    type Output = TriangularRow<T>;

    fn index(&self, i: isize) -> &Self::Output {
        match self.row(i) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<isize> for TriangularMatrix<T> {
    fn index_mut(&mut self, i: isize) -> &mut Self::Output {
        match self.row_mut(i) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> Neg for &TriangularMatrix<T>
where
    for<'r> &'r T: Neg<Output=T>,
{
    type Output = TriangularMatrix<T>;

    fn neg(self) -> Self::Output {
        TriangularMatrix { rows: self.rows.iter().map(|row| TriangularRow::new(-&**row)).collect(), }
    }
}

impl<T> Neg for TriangularMatrix<T>
where
    for<'r> &'r T: Neg<Output=T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Display + Zero> Display for TriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            let zeros = (0..row.start_index()).map(|_| T::zero().to_string());
            let values = row.iter().map(|value| value.to_string());
            writeln!(f, "{}", zeros.chain(values).join(" "))?;
        }

        Ok(())
    }
}
