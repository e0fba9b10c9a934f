//! The rational value type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use carton_core::RationalError;

use crate::int::{gcd, RationalInt};

/// A rational number `num / den` in lowest terms.
///
/// The denominator is always positive and `gcd(|num|, den) == 1`, so two
/// equal values have identical components and derived equality and
/// hashing are exact.
///
/// # Panics
///
/// The operators `+ - * /`, their assigning forms and unary `-` panic
/// where the matching `checked_*` method returns an error.
///
/// ```
/// use carton_rational::Rational;
///
/// let n = Rational::<i8>::new(94, -64)?;
/// assert_eq!((n.numer(), n.denom()), (-47, 32));
/// assert_eq!(n.to_string(), "-47 / 32");
/// # Ok::<(), carton_rational::RationalError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational<I: RationalInt = i32> {
    num: I,
    den: I,
}

fn overflow(op: &'static str) -> RationalError {
    RationalError::Overflow { op }
}

impl<I: RationalInt> Rational<I> {
    /// Build `num / den` and reduce it.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] if `den` is zero, or
    /// [`RationalError::Overflow`] if the reduced form does not fit in `I`
    /// (e.g. `i8::MIN / -1`).
    pub fn new(num: I, den: I) -> Result<Self, RationalError> {
        Self::reduce(num.to_wide(), den.to_wide(), "normalize")
    }

    /// `0 / 1`.
    pub fn zero() -> Self {
        Self {
            num: I::ZERO,
            den: I::ONE,
        }
    }

    /// `1 / 1`.
    pub fn one() -> Self {
        Self {
            num: I::ONE,
            den: I::ONE,
        }
    }

    /// The numerator; carries the sign.
    pub fn numer(&self) -> I {
        self.num
    }

    /// The denominator; always positive.
    pub fn denom(&self) -> I {
        self.den
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.num == I::ZERO
    }

    /// Nearest `f64` to the quotient.
    pub fn to_f64(&self) -> f64 {
        self.num.to_wide() as f64 / self.den.to_wide() as f64
    }

    /// `den / num`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] for zero, or
    /// [`RationalError::Overflow`] if the result does not fit.
    pub fn recip(self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(division_by_zero());
        }
        Self::reduce(self.den.to_wide(), self.num.to_wide(), "invert")
    }

    /// Exact sum.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the reduced sum does not fit.
    pub fn checked_add(self, rhs: Self) -> Result<Self, RationalError> {
        let (a, b, c, d) = self.widen(rhs);
        let num = a
            .checked_mul(d)
            .zip(c.checked_mul(b))
            .and_then(|(l, r)| l.checked_add(r))
            .ok_or(overflow("add"))?;
        let den = b.checked_mul(d).ok_or(overflow("add"))?;
        Self::reduce(num, den, "add")
    }

    /// Exact difference.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the reduced difference does
    /// not fit.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, RationalError> {
        let (a, b, c, d) = self.widen(rhs);
        let num = a
            .checked_mul(d)
            .zip(c.checked_mul(b))
            .and_then(|(l, r)| l.checked_sub(r))
            .ok_or(overflow("subtract"))?;
        let den = b.checked_mul(d).ok_or(overflow("subtract"))?;
        Self::reduce(num, den, "subtract")
    }

    /// Exact product.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the reduced product does not
    /// fit.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, RationalError> {
        let (a, b, c, d) = self.widen(rhs);
        let num = a.checked_mul(c).ok_or(overflow("multiply"))?;
        let den = b.checked_mul(d).ok_or(overflow("multiply"))?;
        Self::reduce(num, den, "multiply")
    }

    /// Exact quotient.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] if `rhs` is zero, or
    /// [`RationalError::Overflow`] if the reduced quotient does not fit.
    pub fn checked_div(self, rhs: Self) -> Result<Self, RationalError> {
        if rhs.is_zero() {
            return Err(division_by_zero());
        }
        let (a, b, c, d) = self.widen(rhs);
        let num = a.checked_mul(d).ok_or(overflow("divide"))?;
        let den = b.checked_mul(c).ok_or(overflow("divide"))?;
        Self::reduce(num, den, "divide")
    }

    /// Exact negation.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] when the numerator is `I::MIN`.
    pub fn checked_neg(self) -> Result<Self, RationalError> {
        let num = I::from_wide(-self.num.to_wide()).ok_or(overflow("negate"))?;
        Ok(Self { num, den: self.den })
    }

    /// `self + 1`.
    ///
    /// # Errors
    ///
    /// See [`checked_add`](Self::checked_add).
    pub fn succ(self) -> Result<Self, RationalError> {
        self.checked_add(Self::one())
    }

    /// `self - 1`.
    ///
    /// # Errors
    ///
    /// See [`checked_sub`](Self::checked_sub).
    pub fn pred(self) -> Result<Self, RationalError> {
        self.checked_sub(Self::one())
    }

    fn widen(self, rhs: Self) -> (i128, i128, i128, i128) {
        (
            self.num.to_wide(),
            self.den.to_wide(),
            rhs.num.to_wide(),
            rhs.den.to_wide(),
        )
    }

    /// Reduce `num / den` to lowest terms with a positive denominator and
    /// narrow the components to `I`.
    fn reduce(num: i128, den: i128, op: &'static str) -> Result<Self, RationalError> {
        if den == 0 {
            return Err(RationalError::InvalidArgument {
                reason: "denominator can't be 0".into(),
            });
        }
        let g = gcd(num, den);
        let num_abs = i128::try_from(num.unsigned_abs() / g).map_err(|_| overflow(op))?;
        let den_abs = i128::try_from(den.unsigned_abs() / g).map_err(|_| overflow(op))?;
        let signed = if (num < 0) != (den < 0) { -num_abs } else { num_abs };
        Ok(Self {
            num: I::from_wide(signed).ok_or(overflow(op))?,
            den: I::from_wide(den_abs).ok_or(overflow(op))?,
        })
    }
}

fn division_by_zero() -> RationalError {
    RationalError::InvalidArgument {
        reason: "division by zero".into(),
    }
}

fn unwrap_op<I: RationalInt>(result: Result<Rational<I>, RationalError>) -> Rational<I> {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl<I: RationalInt> Default for Rational<I> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<I: RationalInt> From<I> for Rational<I> {
    fn from(value: I) -> Self {
        Self {
            num: value,
            den: I::ONE,
        }
    }
}

impl<I: RationalInt> Ord for Rational<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross multiplication preserves
        // order; i128 holds both products exactly.
        let (a, b, c, d) = self.widen(*other);
        (a * d).cmp(&(c * b))
    }
}

impl<I: RationalInt> PartialOrd for Rational<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Operators panic where the `checked_*` twin returns an error.
macro_rules! impl_op {
    ($trait:ident, $method:ident, $assign:ident, $assign_method:ident, $checked:ident) => {
        impl<I: RationalInt> $trait for Rational<I> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                unwrap_op(self.$checked(rhs))
            }
        }

        impl<I: RationalInt> $assign for Rational<I> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = unwrap_op(self.$checked(rhs));
            }
        }
    };
}

impl_op!(Add, add, AddAssign, add_assign, checked_add);
impl_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_op!(Div, div, DivAssign, div_assign, checked_div);

impl<I: RationalInt> Neg for Rational<I> {
    type Output = Self;

    fn neg(self) -> Self {
        unwrap_op(self.checked_neg())
    }
}

impl<I: RationalInt> fmt::Display for Rational<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.num, self.den)
    }
}

impl<I: RationalInt> fmt::Debug for Rational<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({} / {})", self.num, self.den)
    }
}

/// Parses `"num / den"`, `"num/den"` or a bare integer `"num"`.
impl<I: RationalInt> FromStr for Rational<I> {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, RationalError> {
        let parse = |part: &str| {
            part.trim()
                .parse::<i128>()
                .map_err(|e| RationalError::InvalidArgument {
                    reason: format!("cannot parse {:?} as a rational: {e}", s),
                })
        };
        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (parse(num)?, parse(den)?),
            None => (parse(s)?, 1),
        };
        Self::reduce(num, den, "parse")
    }
}
