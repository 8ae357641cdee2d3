//! Arithmetic combinator strategies.
//!
//! Each strategy narrows its operand oracles to a precision budget derived
//! from the requested one, then recombines their `yes` intervals with
//! guaranteed-containing interval arithmetic. The two operands of a binary
//! combinator are narrowed concurrently; both branches always run to
//! completion before an error from either is propagated.

use std::thread;

use num_traits::{One, Zero};

use super::node::{NarrowOp, Narrowed};
use super::Oracle;
use crate::error::{Error, Result};
use crate::interval::RationalInterval;
use crate::rational::Rational;

pub(super) struct NegateOp {
    pub inner: Oracle,
}

impl NarrowOp for NegateOp {
    fn narrow(&self, _current: &RationalInterval, precision: &Rational) -> Result<RationalInterval> {
        let inner = self.inner.narrow(precision)?.into_interval();
        Ok(-inner)
    }
}

pub(super) struct SumOp {
    pub left: Oracle,
    pub right: Oracle,
}

impl NarrowOp for SumOp {
    fn narrow(&self, _current: &RationalInterval, precision: &Rational) -> Result<RationalInterval> {
        let half = precision / &Rational::from(2);
        let (left, right) = narrow_both(&self.left, &self.right, &half)?;
        Ok(left + right)
    }
}

pub(super) struct DifferenceOp {
    pub left: Oracle,
    pub right: Oracle,
}

impl NarrowOp for DifferenceOp {
    fn narrow(&self, _current: &RationalInterval, precision: &Rational) -> Result<RationalInterval> {
        let half = precision / &Rational::from(2);
        let (left, right) = narrow_both(&self.left, &self.right, &half)?;
        Ok(left - right)
    }
}

pub(super) struct ProductOp {
    pub left: Oracle,
    pub right: Oracle,
}

impl NarrowOp for ProductOp {
    fn narrow(&self, _current: &RationalInterval, precision: &Rational) -> Result<RationalInterval> {
        // an operand error of delta moves the product by up to delta * M
        let magnitude = self
            .left
            .current_yes()
            .magnitude()
            .max(self.right.current_yes().magnitude());
        let twice = &Rational::from(2) * &magnitude;
        let sub = if twice < Rational::one() {
            precision.clone()
        } else {
            precision / &twice
        };
        let (left, right) = narrow_both(&self.left, &self.right, &sub)?;
        Ok(&left * &right)
    }
}

pub(super) struct QuotientOp {
    pub numer: Oracle,
    pub denom: Oracle,
}

impl NarrowOp for QuotientOp {
    fn narrow(&self, _current: &RationalInterval, precision: &Rational) -> Result<RationalInterval> {
        // the quotient error blows up as the denominator approaches zero, so
        // the budget is scaled by the smallest denominator magnitude; a small
        // denominator is pre-narrowed to get a usable estimate of it first
        let mut denom_min = self.denom.current_yes().min_magnitude();
        if denom_min < Rational::one() {
            denom_min = self.denom.narrow(precision)?.into_interval().min_magnitude();
        }
        let sub = if denom_min.is_zero() {
            precision / &Rational::from(4)
        } else {
            let numer_magnitude = self.numer.current_yes().magnitude();
            let scaled = precision * &(&denom_min * &denom_min);
            &scaled / &(&denom_min + &numer_magnitude)
        };

        let (numer, denom) = narrow_both(&self.numer, &self.denom, &sub)?;
        if denom.contains_zero() {
            return Err(Error::DivisionSingularity);
        }
        numer.div(&denom)
    }
}

/// The denominator interval a quotient's initial `yes` is computed from.
///
/// A zero-spanning denominator cannot be divided by, so it is shrunk away
/// from zero on its larger-magnitude side by a conservative offset; narrowing
/// later either separates the denominator from zero properly or fails with
/// [`Error::DivisionSingularity`]. The caller has already rejected the exact
/// zero point.
pub(super) fn safe_denominator(denom: &RationalInterval) -> RationalInterval {
    if !denom.contains_zero() {
        return denom.clone();
    }
    let offset = &denom.magnitude() / &Rational::from(1024);
    if denom.high().abs() >= denom.low().abs() {
        RationalInterval::new(offset, denom.high().clone())
    } else {
        RationalInterval::new(denom.low().clone(), -offset)
    }
}

/// Narrow two distinct oracles concurrently and join both results.
fn narrow_both(
    left: &Oracle,
    right: &Oracle,
    precision: &Rational,
) -> Result<(RationalInterval, RationalInterval)> {
    let (left, right) = thread::scope(|scope| {
        let left_handle = scope.spawn(|| left.narrow(precision));
        let right_handle = scope.spawn(|| right.narrow(precision));
        (join(left_handle), join(right_handle))
    });
    Ok((left?.into_interval(), right?.into_interval()))
}

fn join(handle: thread::ScopedJoinHandle<'_, Result<Narrowed>>) -> Result<Narrowed> {
    match handle.join() {
        Ok(outcome) => outcome,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
