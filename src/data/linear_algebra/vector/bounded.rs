//! # Bounded vector
//!
//! Wrapping a `Vec` such that it has a bounded, nonzero size and is indexed starting from an
//! arbitrary non-negative start index.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Range, Sub};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::traits::ElementRef;

/// Dense vector of at most `MAX_VECTOR_SIZE` elements, indexed from `start_index`.
///
/// A logical index `i` refers to the value stored at offset `i - start_index`. Valid logical
/// indices are `start_index..start_index + size`.
///
/// Two vectors are equal when they have the same size and the same values in the same order; the
/// start index is not part of the comparison.
#[derive(Debug)]
pub struct BoundedVector<T> {
    data: Vec<T>,
    start_index: isize,
}

impl<T> BoundedVector<T> {
    /// Create a vector of `size` zeros, indexed from `0`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `size` is zero or larger than `MAX_VECTOR_SIZE`.
    pub fn new(size: usize) -> Result<Self, LinearAlgebraError>
        where
            T: Zero + Clone,
    {
        Self::with_start_index(size, 0)
    }

    /// Create a vector of `size` zeros, indexed from `start_index`.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of elements, in `1..=MAX_VECTOR_SIZE`.
    /// * `start_index`: Logical index of the first element, non-negative.
    ///
    /// # Errors
    ///
    /// `InvalidSize` or `InvalidStartIndex` when either argument is out of bounds.
    pub fn with_start_index(size: usize, start_index: isize) -> Result<Self, LinearAlgebraError>
        where
            T: Zero + Clone,
    {
        validate(size, start_index)?;
        trace!("Allocating vector of size {} starting at {}", size, start_index);

        Ok(Self { data: vec![T::zero(); size], start_index, })
    }

    /// Wrap existing values in a vector, the first value having logical index `start_index`.
    ///
    /// # Errors
    ///
    /// The same as `with_start_index`, where the size is the number of values.
    pub fn from_values(data: Vec<T>, start_index: isize) -> Result<Self, LinearAlgebraError> {
        validate(data.len(), start_index)?;

        Ok(Self { data, start_index, })
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Logical index of the first element.
    pub fn start_index(&self) -> isize {
        self.start_index
    }

    /// All valid logical indices.
    pub fn indices(&self) -> Range<isize> {
        // Can't overflow, see `validate`
        self.start_index..self.start_index + self.data.len() as isize
    }

    /// Translate a logical index into an offset in `data`.
    fn offset(&self, index: isize) -> Result<usize, LinearAlgebraError> {
        let range = self.indices();
        if range.contains(&index) {
            Ok((index - self.start_index) as usize)
        } else {
            Err(LinearAlgebraError::IndexOutOfRange { index, range, })
        }
    }

    /// Value at logical index `index`.
    pub fn get(&self, index: isize) -> Result<&T, LinearAlgebraError> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Mutable reference to the value at logical index `index`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, LinearAlgebraError> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrite the value at logical index `index`.
    ///
    /// The vector is left unchanged when the index is invalid.
    pub fn set(&mut self, index: isize, value: T) -> Result<(), LinearAlgebraError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Iterate over the values in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the values in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// The values in logical order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Make this vector a copy of `other`.
    ///
    /// Size, start index and values are all taken from `other`. If cloning a value panics, this
    /// vector is left as it was.
    pub fn assign(&mut self, other: &Self)
        where
            T: Clone,
    {
        if self.data.len() != other.data.len() {
            trace!("Reallocating vector of size {} to size {}", self.data.len(), other.data.len());
        }

        // Build the new buffer before touching `self`
        let data = other.data.clone();
        self.data = data;
        self.start_index = other.start_index;
    }

    fn check_size(&self, other: &Self) -> Result<(), LinearAlgebraError> {
        if self.data.len() == other.data.len() {
            Ok(())
        } else {
            Err(LinearAlgebraError::SizeMismatch { left: self.data.len(), right: other.data.len(), })
        }
    }

    /// Combine the values at equal positions, keeping the start index of `self`.
    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self, LinearAlgebraError>
        where
            F: FnMut(&T, &T) -> T,
    {
        self.check_size(other)?;

        Ok(Self {
            data: self.data.iter().zip_eq(&other.data).map(|(left, right)| f(left, right)).collect(),
            start_index: self.start_index,
        })
    }

    /// Element-wise sum.
    ///
    /// Values are paired by position, relative to the start index of each vector. The result has
    /// the start index of `self`.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the vectors don't have the same size.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinearAlgebraError>
        where
            for<'r> &'r T: ElementRef<T>,
    {
        self.zip_with(other, |left, right| left + right)
    }

    /// Element-wise difference, see `checked_add`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, LinearAlgebraError>
        where
            for<'r> &'r T: ElementRef<T>,
    {
        self.zip_with(other, |left, right| left - right)
    }

    /// Calculate the inner product between two vectors.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the vectors don't have the same size.
    pub fn inner_product(&self, other: &Self) -> Result<T, LinearAlgebraError>
        where
            T: Zero,
            for<'r> &'r T: ElementRef<T>,
    {
        self.check_size(other)?;

        Ok(self.data.iter().zip_eq(&other.data)
            .fold(T::zero(), |total, (left, right)| total + left * right))
    }
}

fn validate(size: usize, start_index: isize) -> Result<(), LinearAlgebraError> {
    if size == 0 || size > MAX_VECTOR_SIZE {
        debug!("Rejecting vector of size {}", size);
        return Err(LinearAlgebraError::InvalidSize { size, maximum: MAX_VECTOR_SIZE, });
    }
    // The last logical index needs to be representable as well
    if start_index < 0 || start_index.checked_add(size as isize).is_none() {
        debug!("Rejecting vector starting at {}", start_index);
        return Err(LinearAlgebraError::InvalidStartIndex(start_index));
    }

    Ok(())
}

impl<T: Clone> Clone for BoundedVector<T> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index, }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source)
    }
}

impl<T: PartialEq> PartialEq for BoundedVector<T> {
    fn eq(&self, other: &Self) -> bool {
        // Start indices are not compared
        self.data.len() == other.data.len() && self.data == other.data
    }
}

impl<T: Eq> Eq for BoundedVector<T> {}

impl<T> Index<isize> for BoundedVector<T> {
    type Output = T;

    fn index(&self, index: isize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<isize> for BoundedVector<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Scalar operations, for both borrowed and owned vectors.
///
/// The owned version reuses the buffer of the consumed vector.
macro_rules! scalar_operation {
    ($operation:ident, $method:ident, $operator:tt) => {
        impl<T> $operation<&T> for &BoundedVector<T>
        where
            for<'r> &'r T: ElementRef<T>,
        {
            type Output = BoundedVector<T>;

            fn $method(self, rhs: &T) -> Self::Output {
                BoundedVector {
                    data: self.data.iter().map(|value| value $operator rhs).collect(),
                    start_index: self.start_index,
                }
            }
        }

        impl<T> $operation<T> for BoundedVector<T>
        where
            for<'r> &'r T: ElementRef<T>,
        {
            type Output = Self;

            fn $method(mut self, rhs: T) -> Self::Output {
                for value in &mut self.data {
                    *value = &*value $operator &rhs;
                }

                self
            }
        }
    }
}

scalar_operation!(Add, add, +);
scalar_operation!(Sub, sub, -);
scalar_operation!(Mul, mul, *);

impl<T> Neg for &BoundedVector<T>
where
    for<'r> &'r T: Neg<Output=T>,
{
    type Output = BoundedVector<T>;

    fn neg(self) -> Self::Output {
        BoundedVector {
            data: self.data.iter().map(|value| -value).collect(),
            start_index: self.start_index,
        }
    }
}

impl<T> Neg for BoundedVector<T>
where
    for<'r> &'r T: Neg<Output=T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Display> Display for BoundedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}
