//! Closed intervals over [`Rational`] whose arithmetic always returns a
//! guaranteed-containing result: for any `x` in `a` and `y` in `b`, the true
//! combination `x ∘ y` lies within `a ∘ b`.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::rational::Rational;

/// A closed interval `[low, high]` over rationals with `low <= high` always.
///
/// A degenerate interval (`low == high`) is an exactly known point. Immutable;
/// every operation returns a new interval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalInterval {
    low: Rational,
    high: Rational,
}

impl RationalInterval {
    /// Build an interval from two endpoints, swapping them if given in
    /// reverse order.
    pub fn new(a: Rational, b: Rational) -> Self {
        if a <= b {
            RationalInterval { low: a, high: b }
        } else {
            RationalInterval { low: b, high: a }
        }
    }

    /// The degenerate interval holding exactly one value.
    pub fn point(value: Rational) -> Self {
        RationalInterval {
            low: value.clone(),
            high: value,
        }
    }

    #[inline]
    pub fn low(&self) -> &Rational {
        &self.low
    }

    #[inline]
    pub fn high(&self) -> &Rational {
        &self.high
    }

    #[inline]
    pub fn width(&self) -> Rational {
        &self.high - &self.low
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.low == self.high
    }

    #[inline]
    pub fn contains_zero(&self) -> bool {
        !self.low.is_positive() && !self.high.is_negative()
    }

    /// Whether `other` lies entirely inside this interval.
    pub fn contains(&self, other: &Self) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Whether `value` lies inside this interval.
    pub fn contains_value(&self, value: &Rational) -> bool {
        &self.low <= value && value <= &self.high
    }

    /// Closed intervals overlap when they share at least one point, endpoints
    /// included.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// The common part of two intervals, `None` when they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(RationalInterval {
            low: self.low.clone().max(other.low.clone()),
            high: self.high.clone().min(other.high.clone()),
        })
    }

    /// The combined interval, `None` unless the two overlap or touch at a
    /// shared endpoint (anything with a gap is not an interval).
    pub fn union(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(RationalInterval {
            low: self.low.clone().min(other.low.clone()),
            high: self.high.clone().max(other.high.clone()),
        })
    }

    /// The mediant of the two endpoint fractions.
    pub fn mediant(&self) -> Rational {
        self.low.mediant(&self.high)
    }

    pub fn midpoint(&self) -> Rational {
        &(&self.low + &self.high) / &Rational::from(2)
    }

    /// The interval expanded symmetrically by `delta`: `[low - δ, high + δ]`.
    pub fn halo(&self, delta: &Rational) -> Self {
        assert!(!delta.is_negative(), "halo requires a non-negative delta");
        RationalInterval {
            low: &self.low - delta,
            high: &self.high + delta,
        }
    }

    /// `max(|low|, |high|)` — the largest absolute value in the interval.
    pub fn magnitude(&self) -> Rational {
        self.low.abs().max(self.high.abs())
    }

    /// The smallest absolute value in the interval; zero when the interval
    /// contains zero.
    pub fn min_magnitude(&self) -> Rational {
        if self.contains_zero() {
            Rational::zero()
        } else {
            self.low.abs().min(self.high.abs())
        }
    }

    /// Guaranteed-containing division.
    ///
    /// Fails with [`Error::DivisionByZero`] when the divisor is the exact
    /// point zero and with [`Error::IntervalSpansZero`] when it contains zero
    /// anywhere else (the quotient would be unbounded either way).
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        Ok(self * &rhs.recip()?)
    }

    /// The reciprocal interval `[1/high, 1/low]`, with the same zero rules as
    /// [`div`][Self::div].
    pub fn recip(&self) -> Result<Self> {
        if self.is_point() && self.low.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.contains_zero() {
            return Err(Error::IntervalSpansZero);
        }
        Ok(RationalInterval {
            low: self.high.recip()?,
            high: self.low.recip()?,
        })
    }

    /// Raise every value of the interval to an integer power.
    ///
    /// `pow(0)` fails with [`Error::UndefinedValue`] when the interval
    /// contains zero (0^0 is indeterminate), otherwise it is the point `[1, 1]`.
    /// A negative exponent is the reciprocal of the positive power and fails
    /// when the interval contains zero.
    pub fn pow(&self, exp: i32) -> Result<Self> {
        if exp == 0 {
            return if self.contains_zero() {
                Err(Error::UndefinedValue)
            } else {
                Ok(Self::point(Rational::one()))
            };
        }
        let n = exp.unsigned_abs();
        let raised = self.pow_positive(n)?;
        if exp < 0 {
            raised.recip()
        } else {
            Ok(raised)
        }
    }

    fn pow_positive(&self, n: u32) -> Result<Self> {
        let exp = n as i32;
        if n % 2 == 1 {
            // odd powers are monotone over the whole line
            return Ok(RationalInterval {
                low: self.low.pow(exp)?,
                high: self.high.pow(exp)?,
            });
        }
        if self.contains_zero() {
            // the minimum of an even power is at zero
            Ok(RationalInterval {
                low: Rational::zero(),
                high: self.magnitude().pow(exp)?,
            })
        } else if self.high.is_negative() {
            // even powers reverse order on the negatives
            Ok(RationalInterval {
                low: self.high.pow(exp)?,
                high: self.low.pow(exp)?,
            })
        } else {
            Ok(RationalInterval {
                low: self.low.pow(exp)?,
                high: self.high.pow(exp)?,
            })
        }
    }
}

impl From<Rational> for RationalInterval {
    fn from(value: Rational) -> Self {
        Self::point(value)
    }
}

impl Add for &RationalInterval {
    type Output = RationalInterval;

    fn add(self, rhs: &RationalInterval) -> RationalInterval {
        RationalInterval {
            low: &self.low + &rhs.low,
            high: &self.high + &rhs.high,
        }
    }
}

impl Sub for &RationalInterval {
    type Output = RationalInterval;

    fn sub(self, rhs: &RationalInterval) -> RationalInterval {
        RationalInterval {
            low: &self.low - &rhs.high,
            high: &self.high - &rhs.low,
        }
    }
}

impl Mul for &RationalInterval {
    type Output = RationalInterval;

    /// All four corner products; the sign of either operand can flip which
    /// corner is extremal, so the result is their (min, max).
    fn mul(self, rhs: &RationalInterval) -> RationalInterval {
        let corners = [
            &self.low * &rhs.low,
            &self.low * &rhs.high,
            &self.high * &rhs.low,
            &self.high * &rhs.high,
        ];
        let mut min = corners[0].clone();
        let mut max = corners[0].clone();
        for corner in corners.iter().skip(1) {
            if corner < &min {
                min = corner.clone();
            }
            if corner > &max {
                max = corner.clone();
            }
        }
        RationalInterval { low: min, high: max }
    }
}

impl Neg for &RationalInterval {
    type Output = RationalInterval;

    fn neg(self) -> RationalInterval {
        RationalInterval {
            low: -&self.high,
            high: -&self.low,
        }
    }
}

macro_rules! forward_interval_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp for RationalInterval {
            type Output = RationalInterval;

            #[inline]
            fn $method(self, rhs: RationalInterval) -> RationalInterval {
                (&self).$method(&rhs)
            }
        }
    };
}

forward_interval_binop!(impl Add, add);
forward_interval_binop!(impl Sub, sub);
forward_interval_binop!(impl Mul, mul);

impl Neg for RationalInterval {
    type Output = RationalInterval;

    #[inline]
    fn neg(self) -> RationalInterval {
        -&self
    }
}

impl fmt::Display for RationalInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    fn ival(a: i64, b: i64) -> RationalInterval {
        RationalInterval::new(Rational::from(a), Rational::from(b))
    }

    #[test]
    fn ordering_test() {
        let i = RationalInterval::new(Rational::from(3), Rational::from(-1));
        assert_eq!(i, ival(-1, 3));
        assert!(ival(2, 2).is_point());
        assert_eq!(ival(1, 4).width(), rat(3, 1));
    }

    #[test]
    fn add_sub_test() {
        assert_eq!(ival(1, 2) + ival(3, 5), ival(4, 7));
        assert_eq!(ival(1, 2) - ival(3, 5), ival(-4, -1));
        assert_eq!(-ival(1, 2), ival(-2, -1));
    }

    #[test]
    fn mul_corner_test() {
        assert_eq!(ival(2, 3) * ival(-1, 1), ival(-3, 3));
        assert_eq!(ival(-2, 3) * ival(-1, 4), ival(-8, 12));
        assert_eq!(ival(-3, -1) * ival(2, 4), ival(-12, -2));
        assert_eq!(ival(1, 3) * ival(2, 4), ival(2, 12));
    }

    #[test]
    fn div_test() {
        assert_eq!(ival(1, 2).div(&ival(2, 4)), Ok(RationalInterval::new(rat(1, 4), rat(1, 1))));
        assert_eq!(ival(1, 2).div(&ival(-1, 1)), Err(Error::IntervalSpansZero));
        assert_eq!(ival(1, 2).div(&ival(0, 3)), Err(Error::IntervalSpansZero));
        assert_eq!(
            ival(1, 2).div(&RationalInterval::point(Rational::zero())),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            ival(-4, -2).div(&ival(-2, -1)),
            Ok(ival(1, 4))
        );
    }

    #[test]
    fn pow_test() {
        assert_eq!(ival(-2, -1).pow(2), Ok(ival(1, 4)));
        assert_eq!(ival(-1, 2).pow(2), Ok(ival(0, 4)));
        assert_eq!(ival(-2, 1).pow(3), Ok(ival(-8, 1)));
        assert_eq!(ival(2, 3).pow(0), Ok(ival(1, 1)));
        assert_eq!(ival(-1, 1).pow(0), Err(Error::UndefinedValue));
        assert_eq!(ival(1, 2).pow(-1), Ok(RationalInterval::new(rat(1, 2), rat(1, 1))));
        assert_eq!(ival(-1, 2).pow(-2), Err(Error::IntervalSpansZero));
    }

    #[test]
    fn set_relations_test() {
        assert!(ival(-1, 1).contains_zero());
        assert!(ival(0, 2).contains_zero());
        assert!(!ival(1, 2).contains_zero());

        assert!(ival(0, 10).contains(&ival(2, 3)));
        assert!(!ival(0, 10).contains(&ival(8, 12)));

        assert!(ival(0, 2).overlaps(&ival(2, 4)));
        assert!(!ival(0, 1).overlaps(&ival(2, 3)));

        assert_eq!(ival(0, 3).intersection(&ival(2, 5)), Some(ival(2, 3)));
        assert_eq!(ival(0, 1).intersection(&ival(2, 3)), None);

        assert_eq!(ival(0, 2).union(&ival(2, 4)), Some(ival(0, 4)));
        assert_eq!(ival(0, 1).union(&ival(2, 3)), None);
    }

    #[test]
    fn helper_test() {
        assert_eq!(ival(1, 2).midpoint(), rat(3, 2));
        assert_eq!(
            RationalInterval::new(rat(1, 3), rat(1, 2)).mediant(),
            rat(2, 5)
        );
        assert_eq!(ival(1, 2).halo(&rat(1, 2)), RationalInterval::new(rat(1, 2), rat(5, 2)));
        assert_eq!(ival(-3, 2).magnitude(), rat(3, 1));
        assert_eq!(ival(-3, 2).min_magnitude(), rat(0, 1));
        assert_eq!(ival(-3, -2).min_magnitude(), rat(2, 1));
    }
}
