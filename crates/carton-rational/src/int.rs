//! Component integer types.

use std::fmt;
use std::hash::Hash;

/// A signed primitive integer usable as a [`Rational`](crate::Rational)
/// component.
///
/// Implemented for `i8`, `i16`, `i32`, `i64` and `isize`. Every value
/// widens losslessly to `i128`, which is wide enough to hold any product
/// or sum of two components exactly.
pub trait RationalInt: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Widen to `i128`.
    fn to_wide(self) -> i128;

    /// Narrow from `i128`, or `None` if `value` is out of range.
    fn from_wide(value: i128) -> Option<Self>;
}

macro_rules! impl_rational_int {
    ($($t:ty),*) => {$(
        impl RationalInt for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn to_wide(self) -> i128 {
                self as i128
            }

            fn from_wide(value: i128) -> Option<Self> {
                Self::try_from(value).ok()
            }
        }
    )*};
}

impl_rational_int!(i8, i16, i32, i64, isize);

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`.
pub(crate) fn gcd(a: i128, b: i128) -> u128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
