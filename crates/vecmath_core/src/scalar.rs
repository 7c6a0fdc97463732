//! Numeric element bound shared by every vector type

use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, FloatConst};

/// Element type of [`FixedVector`](crate::FixedVector) and
/// [`DynamicVector`](crate::DynamicVector).
///
/// Blanket-implemented for every floating point type that provides the
/// operations the vectors need (`f32` and `f64` in practice). Magnitude,
/// unit and angle all go through [`Float`], so integer element types are
/// not supported.
pub trait Scalar:
    Float
    + FloatConst
    + Default
    + fmt::Debug
    + fmt::Display
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
}

impl<T> Scalar for T where
    T: Float
        + FloatConst
        + Default
        + fmt::Debug
        + fmt::Display
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + 'static
{
}

/// Write `[e0, e1, ...]`, forwarding the formatter's precision to each element.
pub(crate) fn fmt_elements<T: fmt::Display>(
    elements: &[T],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, value)?,
            None => write!(f, "{}", value)?,
        }
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Show<'a>(&'a [f64]);

    impl fmt::Display for Show<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_elements(self.0, f)
        }
    }

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_float_types_are_scalars() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
    }

    #[test]
    fn test_fmt_elements() {
        assert_eq!(format!("{}", Show(&[1.0, 2.5, -3.0])), "[1, 2.5, -3]");
        assert_eq!(format!("{}", Show(&[4.0])), "[4]");
        assert_eq!(format!("{}", Show(&[])), "[]");
    }

    #[test]
    fn test_fmt_elements_precision() {
        assert_eq!(format!("{:.2}", Show(&[1.0, 0.125])), "[1.00, 0.12]");
    }
}
