//! Numeric element capability shared by every kernel.
//!
//! All ordering inside the engine goes through [`Element::is_less`] so that
//! floats get a total preorder: NaN sorts above every other value and all NaNs
//! tie with each other. `-0.0` and `+0.0` tie.
//!
//! Accumulating kernels go through [`Element::add_wrapping`] and
//! [`Element::mul_wrapping`]: integers wrap on overflow, floats use plain IEEE
//! arithmetic.
use std::fmt::Debug;

use num_traits::{Num, NumCast};

pub trait Element: Copy + Debug + PartialOrd + Num + NumCast + Send + Sync + 'static {
    /// Strict "less than" under the crate ordering.
    fn is_less(self, other: Self) -> bool;

    #[inline(always)]
    fn is_greater(self, other: Self) -> bool {
        other.is_less(self)
    }

    /// Neither value orders before the other.
    #[inline(always)]
    fn is_tie(self, other: Self) -> bool {
        !self.is_less(other) && !other.is_less(self)
    }

    fn add_wrapping(self, other: Self) -> Self;

    fn mul_wrapping(self, other: Self) -> Self;
}

macro_rules! int_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline(always)]
                fn is_less(self, other: Self) -> bool {
                    self < other
                }

                #[inline(always)]
                fn add_wrapping(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline(always)]
                fn mul_wrapping(self, other: Self) -> Self {
                    self.wrapping_mul(other)
                }
            }
        )*
    };
}

macro_rules! float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline(always)]
                fn is_less(self, other: Self) -> bool {
                    // NaN is never less; everything else is less than NaN.
                    !self.is_nan() && (other.is_nan() || self < other)
                }

                #[inline(always)]
                fn add_wrapping(self, other: Self) -> Self {
                    self + other
                }

                #[inline(always)]
                fn mul_wrapping(self, other: Self) -> Self {
                    self * other
                }
            }
        )*
    };
}

int_element!(i32, i64);
float_element!(f32, f64);
