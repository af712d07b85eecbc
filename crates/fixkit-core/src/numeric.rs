use std::fmt;

use num_traits::AsPrimitive;

/// Scalar element type accepted by the buffer operations.
///
/// Implemented for every primitive integer and floating-point type. The
/// trait is sealed; the set of element types is fixed by this crate.
///
/// # Examples
///
/// ```
/// use fixkit_core::Numeric;
///
/// assert_eq!(5_u8.checked_span(2), Some(3));
/// assert_eq!(i32::MAX.checked_span(i32::MIN), None);
/// assert_eq!(7_i64.to_f64(), 7.0);
/// ```
pub trait Numeric: Copy + PartialOrd + fmt::Debug + AsPrimitive<f64> + sealed::Sealed {
    /// Returns `self - lower`, or `None` if the difference is not representable.
    ///
    /// Floating-point types never return `None`.
    fn checked_span(self, lower: Self) -> Option<Self>;

    /// Widens the value for floating-point accumulation.
    #[must_use]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_numeric_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                fn checked_span(self, lower: Self) -> Option<Self> {
                    self.checked_sub(lower)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                fn checked_span(self, lower: Self) -> Option<Self> {
                    Some(self - lower)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);
