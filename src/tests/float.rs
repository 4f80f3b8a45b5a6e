//! Scenarios with `f64` elements.
use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::data::linear_algebra::vector::BoundedVector;

type T = f64;

#[test]
fn subtract() {
    let mut v1 = BoundedVector::<T>::new(3).unwrap();
    let mut v2 = BoundedVector::<T>::new(3).unwrap();
    v1[0] = 1.0;
    v1[1] = 7.0;
    v2[1] = 4.0;

    let difference = v1.checked_sub(&v2).unwrap();
    assert_eq!(difference.as_slice(), &[1.0, 3.0, 0.0]);
    assert_eq!(-difference, v2.checked_sub(&v1).unwrap());
}

#[test]
fn mismatch() {
    let v1 = BoundedVector::<T>::new(3).unwrap();
    let v2 = BoundedVector::<T>::new(4).unwrap();
    assert!(v1.inner_product(&v2).is_err());
}

#[test]
fn identity() {
    let m = TriangularMatrix::<T>::identity(3).unwrap();
    assert_eq!(m.to_string(), "1 0 0\n0 1 0\n0 0 1\n");
    assert_eq!((-&m).value(2, 2), Ok(-1.0));
}
