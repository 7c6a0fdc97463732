//! Capability contract shared by fixed and dynamic vectors
//!
//! The geometry helpers in [`crate::geometry`] are written once against
//! [`VectorLike`] and work for both vector types.

use crate::dynamic::DynamicVector;
use crate::error::{Result, VectorError};
use crate::fixed::FixedVector;
use crate::scalar::Scalar;

/// Size query, indexed access, subtraction, dot product and magnitude
pub trait VectorLike: Sized {
    type Scalar: Scalar;

    /// Number of elements
    fn size(&self) -> usize;

    /// Bounds-checked element access
    fn at(&self, index: usize) -> Result<&Self::Scalar>;

    /// `self - other`, failing when sizes differ
    fn try_sub(&self, other: &Self) -> Result<Self>;

    /// `self · other`, failing when sizes differ
    fn try_dot(&self, other: &Self) -> Result<Self::Scalar>;

    /// Euclidean length
    fn magnitude(&self) -> Self::Scalar;

    /// Fail with [`VectorError::SizeMismatch`] unless both sizes agree
    fn ensure_same_size(&self, other: &Self) -> Result<()> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(VectorError::size_mismatch(self.size(), other.size()))
        }
    }
}

/// Sizes always agree, so nothing here fails
impl<T: Scalar, const N: usize> VectorLike for FixedVector<T, N> {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> Result<&T> {
        FixedVector::at(self, index)
    }

    #[inline]
    fn try_sub(&self, other: &Self) -> Result<Self> {
        Ok(*self - *other)
    }

    #[inline]
    fn try_dot(&self, other: &Self) -> Result<T> {
        Ok(FixedVector::dot(*self, *other))
    }

    #[inline]
    fn magnitude(&self) -> T {
        FixedVector::magnitude(*self)
    }
}

impl<T: Scalar> VectorLike for DynamicVector<T> {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        DynamicVector::size(self)
    }

    #[inline]
    fn at(&self, index: usize) -> Result<&T> {
        DynamicVector::at(self, index)
    }

    #[inline]
    fn try_sub(&self, other: &Self) -> Result<Self> {
        DynamicVector::try_sub(self, other)
    }

    #[inline]
    fn try_dot(&self, other: &Self) -> Result<T> {
        DynamicVector::dot(self, other)
    }

    #[inline]
    fn magnitude(&self) -> T {
        DynamicVector::magnitude(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Vector3;

    fn first_element<V: VectorLike>(vector: &V) -> Result<V::Scalar> {
        vector.at(0).copied()
    }

    #[test]
    fn test_fixed_contract() {
        let a = Vector3::xyz(1.0, 2.0, 3.0);
        let b = Vector3::xyz(1.0, 1.0, 1.0);
        assert_eq!(VectorLike::size(&a), 3);
        assert_eq!(a.try_sub(&b), Ok(Vector3::xyz(0.0, 1.0, 2.0)));
        assert_eq!(a.try_dot(&b), Ok(6.0));
        assert_eq!(a.ensure_same_size(&b), Ok(()));
        assert_eq!(first_element(&a), Ok(1.0));
        assert!(VectorLike::at(&a, 3).is_err());
    }

    #[test]
    fn test_dynamic_contract() {
        let a = DynamicVector::from([3.0, 4.0]);
        let b = DynamicVector::from([1.0, 2.0, 3.0]);
        assert_eq!(VectorLike::magnitude(&a), 5.0);
        assert_eq!(first_element(&b), Ok(1.0));
        assert!(first_element(&DynamicVector::<f64>::new()).is_err());
        assert_eq!(
            a.ensure_same_size(&b),
            Err(VectorError::SizeMismatch { lhs: 2, rhs: 3 })
        );
        assert!(VectorLike::try_sub(&a, &b).is_err());
        assert!(a.try_dot(&b).is_err());
    }
}
