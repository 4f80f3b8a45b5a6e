//! Scenarios with `i32` elements.
use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::vector::BoundedVector;

type T = i32;

#[test]
fn scalar_addition() {
    let _ = env_logger::try_init();

    let mut v = BoundedVector::<T>::new(3).unwrap();
    v[1] = 3;
    v = v + 2;

    let mut expected = BoundedVector::new(3).unwrap();
    expected[0] = 2;
    expected[1] = 5;
    expected[2] = 2;
    assert_eq!(v, expected);
}

#[test]
fn matrix_sum() {
    let _ = env_logger::try_init();

    let mut m1 = TriangularMatrix::<T>::new(3).unwrap();
    m1[0][0] = 2;
    m1[0][2] = 7;
    m1[1][1] = 1;
    m1[1][2] = -8;
    m1[2][2] = -2;
    let mut m2 = TriangularMatrix::<T>::new(3).unwrap();
    m2[0][1] = 3;
    m2[0][2] = -7;
    m2[1][1] = 4;
    m2[1][2] = 5;
    m2[2][2] = 2;

    let sum = m1.checked_add(&m2).unwrap();
    assert_eq!(sum.value(0, 0), Ok(2));
    assert_eq!(sum.value(0, 1), Ok(3));
    assert_eq!(sum.value(0, 2), Ok(0));
    assert_eq!(sum.value(1, 1), Ok(5));
    assert_eq!(sum.value(1, 2), Ok(-3));
    assert_eq!(sum.value(2, 2), Ok(0));
    assert_eq!(sum.nr_stored_values(), 6);
}

#[test]
fn dot_product() {
    let v1 = BoundedVector::<T>::from_values(vec![5, 1, 0], 0).unwrap();
    let v2 = BoundedVector::<T>::from_values(vec![3, 10, 0], 0).unwrap();
    assert_eq!(v1.inner_product(&v2), Ok(25));
}

#[test]
fn boundaries() {
    assert!(matches!(
        BoundedVector::<T>::new(MAX_VECTOR_SIZE + 1),
        Err(LinearAlgebraError::InvalidSize { .. }),
    ));
    let v = BoundedVector::<T>::new(7).unwrap();
    assert!(matches!(v.get(-1), Err(LinearAlgebraError::IndexOutOfRange { .. })));
}

#[test]
fn matrix_rows_are_vectors() {
    let mut m = TriangularMatrix::<T>::new(4).unwrap();
    m[1][1] = 2;
    m[1][3] = 6;

    let doubled = m[1].clone() * 2;
    for (value, doubled) in m[1].iter_mut().zip(doubled.iter()) {
        *value = *doubled;
    }
    assert_eq!(m[1].as_slice(), &[4, 0, 12]);
    assert_eq!(m[1].start_index(), 1);

    let dot = m[1].inner_product(&m[1]).unwrap();
    assert_eq!(dot, 16 + 144);
}
