//! # Traits for elements of vectors and matrices
//!
//! Arithmetic is done on references to elements, so that element types that are expensive to
//! copy (like big rationals) are only cloned when a new value needs to be stored.
use std::ops::{Add, Mul, Sub};

/// Arithmetic on references to elements, producing owned elements.
///
/// Use as `for<'r> &'r T: ElementRef<T>`.
pub trait ElementRef<T>:
    Add<Self, Output=T> +
    Sub<Self, Output=T> +
    Mul<Self, Output=T> +
    Sized
{
}
impl<R, T> ElementRef<T> for R
where
    R: Add<R, Output=T> + Sub<R, Output=T> + Mul<R, Output=T>,
{
}
