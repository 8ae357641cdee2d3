//! Exact arithmetic over arbitrary-precision rationals, closed rational
//! intervals with guaranteed-containing arithmetic, and lazily refinable
//! bounds ("oracles") on real numbers.
//!
//! The three layers build on each other:
//! 1. [Rational] is an exact reduced fraction of big integers.
//! 2. [RationalInterval] is a closed interval over [Rational] whose
//!    arithmetic always returns an interval containing every pointwise
//!    combination of its operands.
//! 3. [Oracle] is a handle to an unknown real number that holds a
//!    guaranteed-containing interval and refines it on demand, with
//!    combinators for oracle arithmetic, Newton n-th roots and continued
//!    fraction constants.

mod error;
mod interval;
mod oracle;
mod rational;

pub use error::Error;
pub use interval::RationalInterval;
pub use oracle::{Classification, Narrowed, Oracle, TermCursor, TermSource, TermStream};
pub use rational::{decimal_expansion, DecimalExpansion, Rational};

#[cfg(test)]
mod proptests;
