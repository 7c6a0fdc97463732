//! Numeric Vector Library
//!
//! Two vector types with the same arithmetic, plus geometry helpers that
//! work with either.
//!
//! ## Core Types
//!
//! - [`FixedVector`] - `N` components stored inline, dimension checked by the compiler
//! - [`DynamicVector`] - growable vector, sizes checked at runtime
//! - [`VectorError`] - size mismatch and out-of-range failures
//!
//! ## Geometry
//!
//! - [`distance`], [`angle`], [`angle_deg`] - generic over [`VectorLike`]
//! - [`cross`] - 3D only
//!
//! ```
//! use vecmath_core::{distance, DynamicVector, Vector3};
//!
//! let v = DynamicVector::from([1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(&v * 2.0, DynamicVector::from([2.0, 4.0, 6.0, 8.0]));
//!
//! let d = distance(&Vector3::<f64>::unit_x(), &Vector3::unit_y()).unwrap();
//! assert_eq!(d, 2.0f64.sqrt());
//! ```

mod scalar;
mod error;
mod fixed;
mod named;
mod dynamic;
mod traits;
pub mod geometry;

pub use scalar::Scalar;
pub use error::{Result, VectorError};
pub use fixed::{
    flatten, FixedVector, Vector2, Vector2d, Vector2f, Vector3, Vector3d, Vector3f, Vector4,
    Vector4d, Vector4f,
};
pub use dynamic::{DVecd, DVecf, DynamicVector};
pub use traits::VectorLike;
pub use geometry::{angle, angle_deg, cross, distance};
