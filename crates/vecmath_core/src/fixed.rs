//! Fixed-dimension vector type

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::error::{self, Result};
use crate::scalar::{fmt_elements, Scalar};

/// Vector with `N` components stored inline.
///
/// The dimension is part of the type, so operations between vectors of
/// different dimension do not compile. `N` must be at least 1; the
/// constructors reject `N == 0` at compile time.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FixedVector<T, const N: usize> {
    elements: [T; N],
}

/// 2D vector
pub type Vector2<T> = FixedVector<T, 2>;
/// 3D vector
pub type Vector3<T> = FixedVector<T, 3>;
/// 4D vector
pub type Vector4<T> = FixedVector<T, 4>;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;

// SAFETY: repr(transparent) over [T; N], which has no padding and is
// Zeroable/Pod exactly when T is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for FixedVector<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for FixedVector<T, N> {}

/// Compile-time check that an `M`-element literal fits an `N`-dimensional vector
struct PrefixFits<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> PrefixFits<M, N> {
    const OK: () = assert!(M <= N, "literal has more elements than the vector has dimensions");
}

impl<T, const N: usize> FixedVector<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "FixedVector needs at least one dimension");

    /// Create a vector from exactly `N` elements
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { elements }
    }

    /// Number of elements (always `N`)
    #[inline]
    pub const fn size(&self) -> usize {
        N
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

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// All-zero vector
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Every element set to `value`
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Create a vector from up to `N` leading elements; the rest are zero.
    ///
    /// Passing more than `N` values fails to compile.
    ///
    /// ```
    /// use vecmath_core::Vector4;
    /// let v = Vector4::from_prefix([1.0, 2.0]);
    /// assert_eq!(v, Vector4::new([1.0, 2.0, 0.0, 0.0]));
    /// ```
    pub fn from_prefix<const M: usize>(values: [T; M]) -> Self {
        let () = PrefixFits::<M, N>::OK;
        let mut vector = Self::zeros();
        vector.elements[..M].copy_from_slice(&values);
        vector
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.iter().zip(other.iter()).fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean length
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Same direction, unit length.
    ///
    /// A zero vector divides by zero and yields NaN components.
    #[inline]
    pub fn unit(self) -> Self {
        self / self.magnitude()
    }

    #[inline]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::new(self.elements.map(f))
    }

    #[inline]
    fn zip_with(mut self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        for (a, &b) in self.elements.iter_mut().zip(other.elements.iter()) {
            *a = f(*a, b);
        }
        self
    }
}

impl<T: Scalar, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<T, const N: usize> From<FixedVector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: FixedVector<T, N>) -> Self {
        vector.elements
    }
}

/// View a batch of vectors as one contiguous run of elements
///
/// ```
/// use vecmath_core::{flatten, Vector2};
/// let points = [Vector2::xy(1.0f32, 2.0), Vector2::xy(3.0, 4.0)];
/// assert_eq!(flatten(&points), &[1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn flatten<T: Pod, const N: usize>(vectors: &[FixedVector<T, N>]) -> &[T] {
    bytemuck::cast_slice(vectors)
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(&self.elements, f)
    }
}

// Operator overloads

impl<T: Scalar, const N: usize> Add for FixedVector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> AddAssign for FixedVector<T, N> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        for (a, &b) in self.elements.iter_mut().zip(other.elements.iter()) {
            *a += b;
        }
    }
}

impl<T: Scalar, const N: usize> Sub for FixedVector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> SubAssign for FixedVector<T, N> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        for (a, &b) in self.elements.iter_mut().zip(other.elements.iter()) {
            *a -= b;
        }
    }
}

/// Dot product
impl<T: Scalar, const N: usize> Mul for FixedVector<T, N> {
    type Output = T;
    #[inline]
    fn mul(self, other: Self) -> T {
        self.dot(other)
    }
}

impl<T: Scalar, const N: usize> Neg for FixedVector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|value| -value)
    }
}

/// Elementwise `vector op scalar` and its compound-assignment form
macro_rules! impl_scalar_ops {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Scalar, const N: usize> $Op<T> for FixedVector<T, N> {
            type Output = Self;
            #[inline]
            fn $op(self, scalar: T) -> Self {
                self.map(|value| $Op::$op(value, scalar))
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<T> for FixedVector<T, N> {
            #[inline]
            fn $op_assign(&mut self, scalar: T) {
                for value in self.elements.iter_mut() {
                    $OpAssign::$op_assign(value, scalar);
                }
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
        impl<const N: usize> Add<FixedVector<$t, N>> for $t {
            type Output = FixedVector<$t, N>;
            #[inline]
            fn add(self, vector: FixedVector<$t, N>) -> Self::Output {
                vector + self
            }
        }

        impl<const N: usize> Sub<FixedVector<$t, N>> for $t {
            type Output = FixedVector<$t, N>;
            #[inline]
            fn sub(self, vector: FixedVector<$t, N>) -> Self::Output {
                vector.map(|value| self - value)
            }
        }

        impl<const N: usize> Mul<FixedVector<$t, N>> for $t {
            type Output = FixedVector<$t, N>;
            #[inline]
            fn mul(self, vector: FixedVector<$t, N>) -> Self::Output {
                vector * self
            }
        }
    )*};
}

impl_scalar_lhs_ops!(f32, f64);
