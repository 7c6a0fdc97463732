//! Named component access for 2, 3 and 4 dimensional vectors
//!
//! Positional names (`x y z w`) and colour aliases (`r g b a`) map onto
//! fixed indices. Each name gets a getter, a `*_mut` accessor and a `set_*`
//! setter.

use crate::fixed::{FixedVector, Vector2, Vector3, Vector4};
use crate::scalar::Scalar;

macro_rules! named_components {
    ($n:literal => $(($index:literal, $get:ident, $get_mut:ident, $set:ident)),* $(,)?) => {
        impl<T: Scalar> FixedVector<T, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> T {
                    self[$index]
                }

                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self[$index]
                }

                #[inline]
                pub fn $set(&mut self, value: T) {
                    self[$index] = value;
                }
            )*
        }
    };
}

named_components!(2 =>
    (0, x, x_mut, set_x),
    (1, y, y_mut, set_y),
    (0, r, r_mut, set_r),
    (1, g, g_mut, set_g),
);

named_components!(3 =>
    (0, x, x_mut, set_x),
    (1, y, y_mut, set_y),
    (2, z, z_mut, set_z),
    (0, r, r_mut, set_r),
    (1, g, g_mut, set_g),
    (2, b, b_mut, set_b),
);

named_components!(4 =>
    (0, x, x_mut, set_x),
    (1, y, y_mut, set_y),
    (2, z, z_mut, set_z),
    (3, w, w_mut, set_w),
    (0, r, r_mut, set_r),
    (1, g, g_mut, set_g),
    (2, b, b_mut, set_b),
    (3, a, a_mut, set_a),
);

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn xy(x: T, y: T) -> Self {
        Self::new([x, y])
    }

    pub fn unit_x() -> Self {
        Self::xy(T::one(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::xy(T::zero(), T::one())
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }

    pub fn unit_x() -> Self {
        Self::xyz(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::xyz(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::xyz(T::zero(), T::zero(), T::one())
    }
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub fn xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self::new([x, y, z, w])
    }

    pub fn unit_x() -> Self {
        Self::xyzw(T::one(), T::zero(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::xyzw(T::zero(), T::one(), T::zero(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::xyzw(T::zero(), T::zero(), T::one(), T::zero())
    }

    pub fn unit_w() -> Self {
        Self::xyzw(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Drop the `w` component
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::xyz(self.x(), self.y(), self.z())
    }
}
