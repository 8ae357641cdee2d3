//! Exact arbitrary-precision rational numbers.

mod decimal;
mod parse;

pub use decimal::{decimal_expansion, DecimalExpansion};

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, Zero};

use crate::error::{Error, Result};

/// An exact fraction of arbitrary-precision integers, always stored reduced
/// with a strictly positive denominator (the sign lives in the numerator).
///
/// Every operation returns a new value; a `Rational` is never mutated after
/// construction. Zero is represented as `0/1`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Create a reduced rational from a numerator and denominator.
    ///
    /// Fails with [`Error::DivisionByZero`] when the denominator is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Rational(BigRational::new(numer.into(), denom)))
    }

    /// Create a rational with denominator one.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Rational(BigRational::from_integer(value.into()))
    }

    pub(crate) fn from_ratio(ratio: BigRational) -> Self {
        Rational(ratio)
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Rational(self.0.abs())
    }

    /// Exact division, failing with [`Error::DivisionByZero`] on a zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Rational(&self.0 / &rhs.0))
    }

    /// The multiplicative inverse, failing with [`Error::DivisionByZero`] on zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Rational(self.0.recip()))
    }

    /// Raise to an integer power.
    ///
    /// `0^0` fails with [`Error::UndefinedValue`] and `0^-n` with
    /// [`Error::DivisionByZero`]; any other combination is exact. Powers of a
    /// reduced fraction stay reduced, so the components are raised directly.
    pub fn pow(&self, exp: i32) -> Result<Self> {
        if exp == 0 {
            return if self.is_zero() {
                Err(Error::UndefinedValue)
            } else {
                Ok(Self::one())
            };
        }
        if exp < 0 && self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let n = exp.unsigned_abs();
        let raised = Rational(BigRational::new_raw(
            Pow::pow(self.numer(), n),
            Pow::pow(self.denom(), n),
        ));
        if exp < 0 {
            raised.recip()
        } else {
            Ok(raised)
        }
    }

    /// The mediant `(a+c)/(b+d)` of two fractions `a/b` and `c/d`.
    pub fn mediant(&self, other: &Self) -> Self {
        Rational(BigRational::new(
            self.numer() + other.numer(),
            self.denom() + other.denom(),
        ))
    }
}

macro_rules! impl_rational_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                Rational((self.0).$method(rhs.0))
            }
        }

        impl $imp<&Rational> for &Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: &Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }
    };
}

impl_rational_binop!(impl Add, add);
impl_rational_binop!(impl Sub, sub);
impl_rational_binop!(impl Mul, mul);
// Div panics on a zero divisor like `Ratio` does; use `checked_div` for the
// fallible form.
impl_rational_binop!(impl Div, div);

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Rational(BigRational::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Rational(BigRational::one())
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn creation_test() {
        let r = rat(6, -4);
        assert_eq!(r.numer(), &BigInt::from(-3));
        assert_eq!(r.denom(), &BigInt::from(2));

        assert_eq!(rat(2, 4), rat(1, 2));
        assert_eq!(rat(0, -7), Rational::zero());
        assert_eq!(Rational::new(1, 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn arithmetic_test() {
        assert_eq!(rat(1, 2) + rat(1, 3), rat(5, 6));
        assert_eq!(rat(1, 2) - rat(1, 3), rat(1, 6));
        assert_eq!(rat(2, 3) * rat(3, 4), rat(1, 2));
        assert_eq!(rat(2, 3) / rat(4, 3), rat(1, 2));
        assert_eq!(-rat(2, 3), rat(-2, 3));

        assert_eq!(rat(1, 3).checked_div(&rat(0, 1)), Err(Error::DivisionByZero));
        assert_eq!(rat(-3, 4).recip(), Ok(rat(-4, 3)));
        assert_eq!(Rational::zero().recip(), Err(Error::DivisionByZero));
    }

    #[test]
    fn pow_test() {
        assert_eq!(rat(2, 3).pow(0), Ok(Rational::one()));
        assert_eq!(rat(2, 3).pow(2), Ok(rat(4, 9)));
        assert_eq!(rat(2, 3).pow(-2), Ok(rat(9, 4)));
        assert_eq!(rat(-2, 3).pow(3), Ok(rat(-8, 27)));
        assert_eq!(Rational::zero().pow(0), Err(Error::UndefinedValue));
        assert_eq!(Rational::zero().pow(-1), Err(Error::DivisionByZero));
        assert_eq!(Rational::zero().pow(3), Ok(Rational::zero()));
    }

    #[test]
    fn ordering_test() {
        assert!(rat(1, 3) < rat(1, 2));
        assert!(rat(-1, 2) < rat(-1, 3));
        assert!(rat(7, 3) > rat(2, 1));
        assert_eq!(rat(10, 4), rat(5, 2));
    }

    #[test]
    fn mediant_test() {
        assert_eq!(rat(1, 3).mediant(&rat(1, 2)), rat(2, 5));
        assert_eq!(rat(0, 1).mediant(&rat(1, 1)), rat(1, 2));
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", rat(3, 4)), "3/4");
        assert_eq!(format!("{}", rat(-6, 2)), "-3");
        assert_eq!(format!("{}", Rational::zero()), "0");
    }
}
