//! Vector error types
//!
//! The two recoverable failures a vector operation can report: operands of
//! different sizes, and checked element access past the end.

use std::fmt;

/// Error type for vector operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Binary operation on dynamic vectors of different sizes
    SizeMismatch {
        /// Size of the left-hand operand
        lhs: usize,
        /// Size of the right-hand operand
        rhs: usize,
    },
    /// Checked element access at `index >= size`
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of elements in the vector
        size: usize,
    },
}

impl VectorError {
    /// Size mismatch between two operands, traced for diagnostics
    pub(crate) fn size_mismatch(lhs: usize, rhs: usize) -> Self {
        log::trace!("vector size mismatch: lhs {} vs rhs {}", lhs, rhs);
        VectorError::SizeMismatch { lhs, rhs }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::SizeMismatch { lhs, rhs } => write!(
                f,
                "vector size mismatch: lhs.size() = {} and rhs.size() = {}",
                lhs, rhs
            ),
            VectorError::OutOfRange { index, size } => write!(
                f,
                "index {} out of range for vector of size {}",
                index, size
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Convenience alias used throughout `vecmath_core`
pub type Result<T> = std::result::Result<T, VectorError>;

/// Checked index into `elements`
pub(crate) fn checked<T>(elements: &[T], index: usize) -> Result<&T> {
    let size = elements.len();
    elements
        .get(index)
        .ok_or(VectorError::OutOfRange { index, size })
}

/// Checked mutable index into `elements`
pub(crate) fn checked_mut<T>(elements: &mut [T], index: usize) -> Result<&mut T> {
    let size = elements.len();
    elements
        .get_mut(index)
        .ok_or(VectorError::OutOfRange { index, size })
}
