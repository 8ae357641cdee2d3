//! Continued fraction oracles: the value is bracketed between consecutive
//! convergents, which alternate sides of it, so deepening the expansion
//! tightens the bracket.

use std::mem;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use parking_lot::Mutex;

use super::node::NarrowOp;
use super::stream::{TermCursor, TermStream};
use crate::error::Result;
use crate::interval::RationalInterval;
use crate::rational::Rational;

/// Total expansion depth cap; narrowing past it reports the cap instead of
/// requesting more terms.
const MAX_DEPTH: usize = 10_000;

/// Sliding window over the convergent recurrence `h_k = a_k h_{k-1} + h_{k-2}`
/// (and the same for `k_k`). The method is described in
/// <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone)]
struct ConvergentWindow {
    hm1: BigInt, // h_(k-1)
    hm2: BigInt, // h_(k-2)
    km1: BigInt, // k_(k-1)
    km2: BigInt, // k_(k-2)
}

impl ConvergentWindow {
    fn identity() -> Self {
        ConvergentWindow {
            hm1: BigInt::one(),
            hm2: BigInt::zero(),
            km1: BigInt::zero(),
            km2: BigInt::one(),
        }
    }

    /// Push the next term and return the convergent it produces.
    fn push(&mut self, a: &BigInt) -> Rational {
        let h = a * &self.hm1 + &self.hm2;
        let k = a * &self.km1 + &self.km2;
        self.hm2 = mem::replace(&mut self.hm1, h.clone());
        self.km2 = mem::replace(&mut self.km1, k.clone());
        // k is a positive combination of positive terms, never zero
        Rational::from_ratio(BigRational::new(h, k))
    }
}

pub(super) struct ContinuedFractionOp {
    state: Mutex<CfState>,
}

struct CfState {
    terms: TermCursor,
    window: ConvergentWindow,
    last: Rational,
    bracket: RationalInterval,
    depth: usize,
    exhausted: bool,
}

impl CfState {
    /// Consume one more term, replacing the bracket with the one between the
    /// two latest convergents. An exhausted stream pins the bracket to the
    /// final convergent, which is then the exact value.
    fn advance(&mut self) {
        match self.terms.next() {
            Some(a) => {
                let convergent = self.window.push(&a);
                self.bracket = RationalInterval::new(self.last.clone(), convergent.clone());
                self.last = convergent;
                self.depth += 1;
            }
            None => {
                self.exhausted = true;
                self.bracket = RationalInterval::point(self.last.clone());
            }
        }
    }
}

impl ContinuedFractionOp {
    /// Build the strategy and the initial bracket from the first two
    /// convergents.
    ///
    /// Panics when the stream yields no terms at all.
    pub fn new(stream: &TermStream) -> (Self, RationalInterval) {
        let mut terms = stream.cursor();
        let mut window = ConvergentWindow::identity();
        let first = match terms.next() {
            Some(a) => a,
            None => panic!("at least one term is required!"),
        };
        let last = window.push(&first);
        let mut state = CfState {
            terms,
            window,
            bracket: RationalInterval::point(last.clone()),
            last,
            depth: 1,
            exhausted: false,
        };
        state.advance();

        let initial = state.bracket.clone();
        (
            ContinuedFractionOp {
                state: Mutex::new(state),
            },
            initial,
        )
    }
}

impl NarrowOp for ContinuedFractionOp {
    fn narrow(&self, _current: &RationalInterval, precision: &Rational) -> Result<RationalInterval> {
        let mut state = self.state.lock();
        while !state.exhausted && state.bracket.width() > *precision && state.depth < MAX_DEPTH {
            state.advance();
        }
        Ok(state.bracket.clone())
    }
}
