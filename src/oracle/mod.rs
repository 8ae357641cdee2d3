//! Refinable guaranteed bounds on unknown real numbers.
//!
//! An [`Oracle`] holds the current best interval known to contain one real
//! value (its `yes`-interval) and a strategy to replace it with a tighter one
//! on demand. Compound oracles derive their interval from their operands'
//! intervals and narrow the operands recursively, splitting the requested
//! precision across them.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>

mod arithmetic;
mod cont_frac;
mod newton;
mod node;
mod stream;

pub use node::Narrowed;
pub use stream::{TermCursor, TermSource, TermStream};

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use num_traits::Zero;

use self::arithmetic::{safe_denominator, DifferenceOp, NegateOp, ProductOp, QuotientOp, SumOp};
use self::cont_frac::ContinuedFractionOp;
use self::newton::NewtonRootOp;
use self::node::{ExactOp, NarrowOp, OracleNode};
use crate::error::{Error, Result};
use crate::interval::RationalInterval;
use crate::rational::Rational;

/// Three-way answer of [`Oracle::classify`], each carrying the interval the
/// decision was made against.
///
/// `Unknown` is the honest result when the available precision does not
/// resolve the comparison; a two-valued answer over an unrefined
/// approximation would be wrong near the boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The value is provably within the halo of the target interval.
    Match(RationalInterval),
    /// The value is provably outside the target interval.
    NoMatch(RationalInterval),
    /// Neither could be established at the requested precision.
    Unknown(RationalInterval),
}

/// A handle to partial knowledge of one real number.
///
/// Cloning shares the underlying state: all clones observe the same
/// `yes`-interval and queue on the same refinement gate.
#[derive(Clone)]
pub struct Oracle {
    node: Arc<OracleNode>,
}

impl Oracle {
    fn with_op(initial: RationalInterval, op: impl NarrowOp + 'static) -> Self {
        Oracle {
            node: Arc::new(OracleNode::new(initial, Box::new(op))),
        }
    }

    /// An oracle whose value is exactly the given rational; narrowing is a
    /// no-op.
    pub fn from_rational(value: impl Into<Rational>) -> Self {
        Self::with_op(RationalInterval::point(value.into()), ExactOp)
    }

    /// An oracle whose knowledge is fixed to the given interval forever.
    ///
    /// Narrowing below the interval's own width is unreachable and reports
    /// [`Narrowed::PrecisionUnreachable`].
    pub fn from_interval(interval: RationalInterval) -> Self {
        Self::with_op(interval, ExactOp)
    }

    /// The n-th root of `value`, refined by Newton iteration from
    /// `initial_guess`.
    ///
    /// Degree zero and even-degree roots of negative values fail with
    /// [`Error::UndefinedValue`]; a zero guess fails with
    /// [`Error::DivisionByZero`]. Odd-degree roots of negative values are
    /// composed as the negated root of the absolute value.
    pub fn nth_root(
        value: impl Into<Rational>,
        initial_guess: impl Into<Rational>,
        degree: u32,
    ) -> Result<Self> {
        let value = value.into();
        if degree == 0 {
            return Err(Error::UndefinedValue);
        }
        if value.is_zero() {
            return Ok(Self::from_rational(Rational::zero()));
        }
        if value.is_negative() {
            if degree % 2 == 0 {
                return Err(Error::UndefinedValue);
            }
            return Ok(Self::nth_root(-value, initial_guess, degree)?.negate());
        }
        if degree == 1 {
            return Ok(Self::from_rational(value));
        }
        let guess = initial_guess.into();
        if guess.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (op, initial) = NewtonRootOp::new(value, guess.abs(), degree)?;
        Ok(Self::with_op(initial, op))
    }

    /// The value described by a continued fraction term stream, bracketed
    /// between consecutive convergents.
    ///
    /// Panics when the stream yields no terms at all.
    pub fn from_continued_fraction(stream: &TermStream) -> Self {
        let (op, initial) = ContinuedFractionOp::new(stream);
        Self::with_op(initial, op)
    }

    /// Non-blocking read of the current `yes`-interval.
    pub fn current_yes(&self) -> RationalInterval {
        self.node.current()
    }

    /// Refine the `yes`-interval toward the requested absolute precision.
    ///
    /// Requests against the same oracle are serialized in FIFO order; the
    /// returned interval is the newly installed `yes`.
    pub fn narrow(&self, precision: &Rational) -> Result<Narrowed> {
        self.node.narrow(precision)
    }

    /// Decide whether the oracle's value lies within `precision` of `target`.
    ///
    /// The current `yes` is consulted first; only when it neither rules the
    /// target out nor confirms it does the oracle narrow itself and re-test.
    pub fn classify(
        &self,
        target: &RationalInterval,
        precision: &Rational,
    ) -> Result<Classification> {
        let yes = self.current_yes();
        if let Some(decided) = Self::decide(target, precision, &yes) {
            return Ok(decided);
        }
        let refined = self.narrow(precision)?.into_interval();
        match Self::decide(target, precision, &refined) {
            Some(decided) => Ok(decided),
            None => Ok(Classification::Unknown(refined)),
        }
    }

    fn decide(
        target: &RationalInterval,
        precision: &Rational,
        yes: &RationalInterval,
    ) -> Option<Classification> {
        if !target.overlaps(yes) {
            return Some(Classification::NoMatch(yes.clone()));
        }
        if target.halo(precision).contains(yes) {
            return Some(Classification::Match(yes.clone()));
        }
        None
    }

    /// The negated value; narrowing passes the precision through unchanged.
    pub fn negate(&self) -> Self {
        let initial = -self.current_yes();
        Self::with_op(initial, NegateOp { inner: self.clone() })
    }

    /// The sum of two oracle values; each operand receives half the
    /// precision budget.
    pub fn add(&self, rhs: impl Into<Oracle>) -> Self {
        let rhs = rhs.into();
        let initial = self.current_yes() + rhs.current_yes();
        Self::with_op(
            initial,
            SumOp {
                left: self.clone(),
                right: rhs,
            },
        )
    }

    /// The difference of two oracle values; each operand receives half the
    /// precision budget.
    pub fn subtract(&self, rhs: impl Into<Oracle>) -> Self {
        let rhs = rhs.into();
        let initial = self.current_yes() - rhs.current_yes();
        Self::with_op(
            initial,
            DifferenceOp {
                left: self.clone(),
                right: rhs,
            },
        )
    }

    /// The product of two oracle values; the precision budget is scaled down
    /// by the operands' magnitude.
    pub fn multiply(&self, rhs: impl Into<Oracle>) -> Self {
        let rhs = rhs.into();
        let initial = &self.current_yes() * &rhs.current_yes();
        Self::with_op(
            initial,
            ProductOp {
                left: self.clone(),
                right: rhs,
            },
        )
    }

    /// The quotient of two oracle values.
    ///
    /// Fails immediately with [`Error::DivisionByZero`] when the divisor's
    /// `yes` is exactly the point zero. A divisor interval merely containing
    /// zero is admitted: its initial `yes` is computed against a
    /// conservatively shrunk denominator, and narrowing either separates the
    /// denominator from zero or fails with [`Error::DivisionSingularity`].
    pub fn divide(&self, rhs: impl Into<Oracle>) -> Result<Self> {
        let rhs = rhs.into();
        let denom_yes = rhs.current_yes();
        if denom_yes.is_point() && denom_yes.low().is_zero() {
            return Err(Error::DivisionByZero);
        }
        let initial = self.current_yes().div(&safe_denominator(&denom_yes))?;
        Ok(Self::with_op(
            initial,
            QuotientOp {
                numer: self.clone(),
                denom: rhs,
            },
        ))
    }
}

impl From<Rational> for Oracle {
    fn from(value: Rational) -> Self {
        Self::from_rational(value)
    }
}

impl From<RationalInterval> for Oracle {
    fn from(interval: RationalInterval) -> Self {
        Self::from_interval(interval)
    }
}

impl From<i64> for Oracle {
    fn from(value: i64) -> Self {
        Self::from_rational(Rational::from(value))
    }
}

impl Neg for &Oracle {
    type Output = Oracle;

    fn neg(self) -> Oracle {
        self.negate()
    }
}

impl Neg for Oracle {
    type Output = Oracle;

    fn neg(self) -> Oracle {
        self.negate()
    }
}

impl Add for Oracle {
    type Output = Oracle;

    fn add(self, rhs: Oracle) -> Oracle {
        Oracle::add(&self, rhs)
    }
}

impl Sub for Oracle {
    type Output = Oracle;

    fn sub(self, rhs: Oracle) -> Oracle {
        Oracle::subtract(&self, rhs)
    }
}

impl Mul for Oracle {
    type Output = Oracle;

    fn mul(self, rhs: Oracle) -> Oracle {
        Oracle::multiply(&self, rhs)
    }
}

impl fmt::Debug for Oracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Oracle").field(&self.current_yes()).finish()
    }
}
