//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use std::error::Error;

use bounded_triangular::{BoundedVector, LinearAlgebraError, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE, TriangularMatrix};

#[test]
fn limits() {
    assert!(BoundedVector::<i64>::new(1).is_ok());
    assert!(BoundedVector::<i64>::new(MAX_VECTOR_SIZE + 1).is_err());
    assert!(TriangularMatrix::<i64>::new(MAX_MATRIX_SIZE + 1).is_err());
    assert!(TriangularMatrix::<i64>::new(0).is_ok());
}

#[test]
fn errors_propagate() {
    fn sum_of_rows(matrix: &TriangularMatrix<i64>, i: isize, j: isize) -> Result<i64, Box<dyn Error>> {
        let row_sum = matrix.row(i)?.checked_add(matrix.row(j)?)?;
        Ok(row_sum.iter().sum())
    }

    let mut matrix = TriangularMatrix::identity(3).unwrap();
    matrix[0][2] = 4;
    assert!(sum_of_rows(&matrix, 0, 0).is_ok());
    assert_eq!(sum_of_rows(&matrix, 0, 0).unwrap(), 10);

    let error = sum_of_rows(&matrix, 0, 1).unwrap_err();
    assert_eq!(
        error.downcast_ref::<LinearAlgebraError>(),
        Some(&LinearAlgebraError::SizeMismatch { left: 3, right: 2 }),
    );
    assert!(sum_of_rows(&matrix, 3, 0).is_err());
}

#[test]
fn value_semantics() {
    let mut v = BoundedVector::<i64>::with_start_index(3, 10).unwrap();
    v[11] = 5;
    let w = v.clone();
    v[11] = 6;
    assert_eq!(w[11], 5);
    assert_eq!(v.indices(), 10..13);
    assert_ne!(v, w);
}
