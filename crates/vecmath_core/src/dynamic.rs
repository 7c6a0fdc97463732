//! Dynamically sized vector type
//!
//! [`DynamicVector`] carries the same arithmetic as
//! [`FixedVector`](crate::FixedVector), but its length is a runtime value,
//! so binary vector operations check sizes and report
//! [`VectorError::SizeMismatch`](crate::VectorError::SizeMismatch) instead of
//! truncating or padding.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{self, Result};
use crate::scalar::{fmt_elements, Scalar};
use crate::traits::VectorLike;

/// Growable vector backed by a contiguous buffer
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct DynamicVector<T> {
    elements: Vec<T>,
}

pub type DVecf = DynamicVector<f32>;
pub type DVecd = DynamicVector<f64>;

impl<T> DynamicVector<T> {
    /// Empty vector
    #[inline]
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Empty vector with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Copy every element out of `source`
    pub fn from_range<I: IntoIterator<Item = T>>(source: I) -> Self {
        source.into_iter().collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append one element
    #[inline]
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Bounds-checked element access
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        error::checked(&self.elements, index)
    }

    /// Bounds-checked mutable element access
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        error::checked_mut(&mut self.elements, index)
    }
}

impl<T: Scalar> DynamicVector<T> {
    /// `size` zero elements
    pub fn with_size(size: usize) -> Self {
        Self::filled(size, T::zero())
    }

    /// `size` copies of `value`
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            elements: vec![value; size],
        }
    }

    /// Elementwise sum; sizes must match
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_size(other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference; sizes must match
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_size(other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// In-place sum. `self` is left untouched on a size mismatch.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        self.ensure_same_size(other)?;
        for (a, &b) in self.elements.iter_mut().zip(other.elements.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// In-place difference. `self` is left untouched on a size mismatch.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        self.ensure_same_size(other)?;
        for (a, &b) in self.elements.iter_mut().zip(other.elements.iter()) {
            *a -= b;
        }
        Ok(())
    }

    /// Dot product; sizes must match
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.ensure_same_size(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Squared Euclidean length (zero for an empty vector)
    pub fn magnitude_squared(&self) -> T {
        self.iter().fold(T::zero(), |acc, &value| acc + value * value)
    }

    /// Euclidean length (zero for an empty vector)
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Same direction, unit length.
    ///
    /// A zero vector divides by zero and yields NaN components.
    pub fn unit(&self) -> Self {
        self / self.magnitude()
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        self.iter().map(|&value| f(value)).collect()
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        self.iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    }
}

impl<T> Default for DynamicVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynamicVector<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const K: usize> From<[T; K]> for DynamicVector<T> {
    fn from(elements: [T; K]) -> Self {
        Self {
            elements: Vec::from(elements),
        }
    }
}

impl<T: Clone> From<&[T]> for DynamicVector<T> {
    fn from(elements: &[T]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }
}

impl<T> From<DynamicVector<T>> for Vec<T> {
    fn from(vector: DynamicVector<T>) -> Self {
        vector.elements
    }
}

impl<T> FromIterator<T> for DynamicVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for DynamicVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T> IntoIterator for DynamicVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

/// Renders `[e0, e1, ...]`; the empty vector renders as `[]`
impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(&self.elements, f)
    }
}

// Vector-vector operators yield a Result since sizes are only known at runtime

impl<T: Scalar> Add for &DynamicVector<T> {
    type Output = Result<DynamicVector<T>>;
    #[inline]
    fn add(self, other: Self) -> Self::Output {
        self.try_add(other)
    }
}

impl<T: Scalar> Add for DynamicVector<T> {
    type Output = Result<DynamicVector<T>>;
    #[inline]
    fn add(mut self, other: Self) -> Self::Output {
        self.try_add_assign(&other)?;
        Ok(self)
    }
}

impl<T: Scalar> Sub for &DynamicVector<T> {
    type Output = Result<DynamicVector<T>>;
    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        self.try_sub(other)
    }
}

impl<T: Scalar> Sub for DynamicVector<T> {
    type Output = Result<DynamicVector<T>>;
    #[inline]
    fn sub(mut self, other: Self) -> Self::Output {
        self.try_sub_assign(&other)?;
        Ok(self)
    }
}

/// Dot product
impl<T: Scalar> Mul for &DynamicVector<T> {
    type Output = Result<T>;
    #[inline]
    fn mul(self, other: Self) -> Self::Output {
        self.dot(other)
    }
}

impl<T: Scalar> Neg for &DynamicVector<T> {
    type Output = DynamicVector<T>;
    #[inline]
    fn neg(self) -> DynamicVector<T> {
        self.map(|value| -value)
    }
}

impl<T: Scalar> Neg for DynamicVector<T> {
    type Output = Self;
    #[inline]
    fn neg(mut self) -> Self {
        for value in self.elements.iter_mut() {
            *value = -*value;
        }
        self
    }
}

/// Elementwise `vector op scalar` for owned and borrowed vectors, plus the
/// compound-assignment form
macro_rules! impl_scalar_ops {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Scalar> $OpAssign<T> for DynamicVector<T> {
            #[inline]
            fn $op_assign(&mut self, scalar: T) {
                for value in self.elements.iter_mut() {
                    $OpAssign::$op_assign(value, scalar);
                }
            }
        }

        impl<T: Scalar> $Op<T> for DynamicVector<T> {
            type Output = Self;
            #[inline]
            fn $op(mut self, scalar: T) -> Self {
                $OpAssign::$op_assign(&mut self, scalar);
                self
            }
        }

        impl<T: Scalar> $Op<T> for &DynamicVector<T> {
            type Output = DynamicVector<T>;
            #[inline]
            fn $op(self, scalar: T) -> DynamicVector<T> {
                self.map(|value| $Op::$op(value, scalar))
            }
        }
    };
}

impl_scalar_ops!(Add, add, AddAssign, add_assign);
impl_scalar_ops!(Sub, sub, SubAssign, sub_assign);
impl_scalar_ops!(Mul, mul, MulAssign, mul_assign);
impl_scalar_ops!(Div, div, DivAssign, div_assign);

/// `scalar op vector` for the concrete float types
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl Add<DynamicVector<$t>> for $t {
            type Output = DynamicVector<$t>;
            #[inline]
            fn add(self, vector: DynamicVector<$t>) -> Self::Output {
                vector + self
            }
        }

        impl Add<&DynamicVector<$t>> for $t {
            type Output = DynamicVector<$t>;
            #[inline]
            fn add(self, vector: &DynamicVector<$t>) -> Self::Output {
                vector + self
            }
        }

        impl Sub<&DynamicVector<$t>> for $t {
            type Output = DynamicVector<$t>;
            #[inline]
            fn sub(self, vector: &DynamicVector<$t>) -> Self::Output {
                vector.map(|value| self - value)
            }
        }

        impl Sub<DynamicVector<$t>> for $t {
            type Output = DynamicVector<$t>;
            #[inline]
            fn sub(self, vector: DynamicVector<$t>) -> Self::Output {
                self - &vector
            }
        }

        impl Mul<DynamicVector<$t>> for $t {
            type Output = DynamicVector<$t>;
            #[inline]
            fn mul(self, vector: DynamicVector<$t>) -> Self::Output {
                vector * self
            }
        }

        impl Mul<&DynamicVector<$t>> for $t {
            type Output = DynamicVector<$t>;
            #[inline]
            fn mul(self, vector: &DynamicVector<$t>) -> Self::Output {
                vector * self
            }
        }
    )*};
}

impl_scalar_lhs_ops!(f32, f64);
