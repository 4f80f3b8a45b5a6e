//! # Error reporting for vector and matrix operations
//!
//! Every violation of a size, start index or index bound is reported to the caller; nothing is
//! clamped or resized to make a bad request succeed.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::ops::Range;

/// A `LinearAlgebraError` is created when a construction, element access or binary operation
/// is requested with arguments the data structure can't accommodate.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// The requested number of elements (or matrix order) is zero where that isn't allowed, or
    /// exceeds the maximum.
    InvalidSize {
        /// Requested size.
        size: usize,
        /// Largest size that would have been accepted.
        maximum: usize,
    },
    /// The requested start index is negative, or so large that the last index overflows.
    InvalidStartIndex(isize),
    /// A logical index falls outside of the range of valid indices.
    ///
    /// For a vector, this range runs from the start index up to (not through) the start index
    /// plus the size. For the rows of a matrix, it is `0..order`.
    IndexOutOfRange {
        /// Index that was requested.
        index: isize,
        /// Indices that would have been accepted.
        range: Range<isize>,
    },
    /// Operands of a binary operation don't have the same size (or order).
    SizeMismatch {
        /// Size of the left hand side.
        left: usize,
        /// Size of the right hand side.
        right: usize,
    },
}

impl Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::InvalidSize { size, maximum } => {
                write!(f, "InvalidSize: size {} is zero or larger than {}", size, maximum)
            },
            LinearAlgebraError::InvalidStartIndex(start_index) => {
                write!(f, "InvalidStartIndex: start index {} is negative or too large", start_index)
            },
            LinearAlgebraError::IndexOutOfRange { index, range } => {
                write!(f, "IndexOutOfRange: index {} is not in {}..{}", index, range.start, range.end)
            },
            LinearAlgebraError::SizeMismatch { left, right } => {
                write!(f, "SizeMismatch: sizes {} and {} differ", left, right)
            },
        }
    }
}

impl Error for LinearAlgebraError {}
