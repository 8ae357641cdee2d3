//! Newton iteration oracles for n-th roots.
//!
//! Solving `g^n = q` for positive `q`, the guess `g` and its partner
//! `p = q / g^(n-1)` always straddle the root (for `g` above the root the
//! partner falls below it and vice versa), so `[min(g, p), max(g, p)]` is a
//! valid bracket at every step and the iteration only ever tightens it.

use parking_lot::Mutex;

use super::node::NarrowOp;
use crate::error::Result;
use crate::interval::RationalInterval;
use crate::rational::Rational;

/// Cap on Newton steps for a single narrowing request.
const MAX_NEWTON_STEPS: usize = 100;

pub(super) struct NewtonRootOp {
    target: Rational,
    degree: u32,
    state: Mutex<NewtonState>,
}

struct NewtonState {
    guess: Rational,
    partner: Rational,
}

impl NewtonRootOp {
    /// Build the strategy and its initial bracket. `target` and `guess` must
    /// be strictly positive and `degree` at least two; the callers in
    /// [`Oracle::nth_root`][super::Oracle::nth_root] normalize to that form.
    pub fn new(target: Rational, guess: Rational, degree: u32) -> Result<(Self, RationalInterval)> {
        let partner = partner_of(&target, &guess, degree)?;
        let bracket = RationalInterval::new(guess.clone(), partner.clone());
        Ok((
            NewtonRootOp {
                target,
                degree,
                state: Mutex::new(NewtonState { guess, partner }),
            },
            bracket,
        ))
    }
}

fn partner_of(target: &Rational, guess: &Rational, degree: u32) -> Result<Rational> {
    target.checked_div(&guess.pow(degree as i32 - 1)?)
}

impl NarrowOp for NewtonRootOp {
    fn narrow(&self, _current: &RationalInterval, precision: &Rational) -> Result<RationalInterval> {
        let mut state = self.state.lock();
        let degree = Rational::from(i64::from(self.degree));
        let degree_less_one = Rational::from(i64::from(self.degree) - 1);

        for _ in 0..MAX_NEWTON_STEPS {
            if (&state.guess - &state.partner).abs() <= *precision {
                break;
            }
            let next = &(&(&state.guess * &degree_less_one) + &state.partner) / &degree;
            state.partner = partner_of(&self.target, &next, self.degree)?;
            state.guess = next;
        }

        Ok(RationalInterval::new(
            state.guess.clone(),
            state.partner.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn initial_bracket_straddles_root() {
        let (_, bracket) = NewtonRootOp::new(rat(2, 1), rat(1, 1), 2).unwrap();
        // g = 1, p = 2/1 = 2; sqrt(2) is between them
        assert_eq!(bracket, RationalInterval::new(rat(1, 1), rat(2, 1)));
    }

    #[test]
    fn sqrt_two_converges() {
        let delta = rat(1, 1_000_000);
        let (op, initial) = NewtonRootOp::new(rat(2, 1), rat(1, 1), 2).unwrap();
        let refined = op.narrow(&initial, &delta).unwrap();

        assert!(refined.width() <= delta);
        // the bracket still contains sqrt(2): low^2 <= 2 <= high^2
        assert!(refined.low().pow(2).unwrap() <= rat(2, 1));
        assert!(refined.high().pow(2).unwrap() >= rat(2, 1));
        // and it is consistent with the decimal bracket 1.41421 < sqrt(2) < 1.41422
        assert!(*refined.low() <= rat(141_422, 100_000));
        assert!(*refined.high() >= rat(141_421, 100_000));
    }

    #[test]
    fn cube_root_converges() {
        let delta = rat(1, 1_000_000);
        let (op, initial) = NewtonRootOp::new(rat(27, 1), rat(2, 1), 3).unwrap();
        let refined = op.narrow(&initial, &delta).unwrap();

        assert!(refined.width() <= delta);
        assert!(refined.contains_value(&rat(3, 1)));
    }

    #[test]
    fn repeated_narrowing_resumes_state() {
        let (op, initial) = NewtonRootOp::new(rat(2, 1), rat(1, 1), 2).unwrap();
        let coarse = op.narrow(&initial, &rat(1, 10)).unwrap();
        let fine = op.narrow(&coarse, &rat(1, 1_000_000)).unwrap();
        assert!(fine.width() <= rat(1, 1_000_000));
        assert!(coarse.contains(&fine));
    }
}
