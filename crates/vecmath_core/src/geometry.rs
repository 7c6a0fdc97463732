//! Distance, cross product and angle helpers
//!
//! `distance`, `angle` and `angle_deg` accept any [`VectorLike`] and return
//! a [`Result`] so dynamic vectors can report a size mismatch; for fixed
//! vectors they always succeed. Degenerate input (a zero-length operand)
//! produces NaN rather than an error.

use num_traits::{clamp, Float, One};

use crate::error::Result;
use crate::fixed::Vector3;
use crate::scalar::Scalar;
use crate::traits::VectorLike;

/// Euclidean distance between two points: `|b - a|`
pub fn distance<V: VectorLike>(a: &V, b: &V) -> Result<V::Scalar> {
    a.ensure_same_size(b)?;
    Ok(b.try_sub(a)?.magnitude())
}

/// Right-handed cross product of two 3D vectors
///
/// ```
/// use vecmath_core::{cross, Vector3};
/// let z = cross(&Vector3::<f64>::unit_x(), &Vector3::unit_y());
/// assert_eq!(z, Vector3::unit_z());
/// ```
pub fn cross<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> Vector3<T> {
    Vector3::xyz(
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    )
}

/// Angle between two vectors in radians, in `[0, π]`
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so rounding on
/// (anti)parallel input cannot produce NaN.
pub fn angle<V: VectorLike>(a: &V, b: &V) -> Result<V::Scalar> {
    let one = V::Scalar::one();
    let cosine = a.try_dot(b)? / (a.magnitude() * b.magnitude());
    Ok(clamp(cosine, -one, one).acos())
}

/// Angle between two vectors in degrees
pub fn angle_deg<V: VectorLike>(a: &V, b: &V) -> Result<V::Scalar> {
    angle(a, b).map(Float::to_degrees)
}
