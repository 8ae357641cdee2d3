//! The shared state of one oracle: its `yes`-interval, the gate serializing
//! refinement, and the narrowing strategy behind it.

use parking_lot::{FairMutex, RwLock};

use crate::error::Result;
use crate::interval::RationalInterval;
use crate::rational::Rational;

/// Outcome of a narrowing request.
///
/// Hitting an iteration or depth cap is not a failure: the caller still
/// receives the best interval achieved, tagged as `PrecisionUnreachable`, and
/// may accept it or retry with a relaxed precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Narrowed {
    /// The interval width meets the requested precision.
    Within(RationalInterval),
    /// The narrowing strategy ran out of iterations or depth before reaching
    /// the requested precision.
    PrecisionUnreachable(RationalInterval),
}

impl Narrowed {
    #[inline]
    pub fn interval(&self) -> &RationalInterval {
        match self {
            Narrowed::Within(interval) | Narrowed::PrecisionUnreachable(interval) => interval,
        }
    }

    #[inline]
    pub fn into_interval(self) -> RationalInterval {
        match self {
            Narrowed::Within(interval) | Narrowed::PrecisionUnreachable(interval) => interval,
        }
    }

    #[inline]
    pub fn precision_met(&self) -> bool {
        matches!(self, Narrowed::Within(_))
    }
}

/// A narrowing strategy: given the oracle's current interval and a requested
/// absolute precision, produce a tighter-or-equal interval that still
/// contains the value.
pub(super) trait NarrowOp: Send + Sync {
    fn narrow(&self, current: &RationalInterval, precision: &Rational) -> Result<RationalInterval>;
}

/// Strategy of oracles whose value is already exactly described by their
/// interval; narrowing cannot improve it.
pub(super) struct ExactOp;

impl NarrowOp for ExactOp {
    fn narrow(&self, current: &RationalInterval, _precision: &Rational) -> Result<RationalInterval> {
        Ok(current.clone())
    }
}

/// One oracle's state. The `yes` interval is the only persisted knowledge;
/// the gate admits one narrowing at a time in FIFO order, so `yes` is never
/// read mid-update and concurrent requests queue behind the one in flight.
pub(super) struct OracleNode {
    yes: RwLock<RationalInterval>,
    gate: FairMutex<()>,
    op: Box<dyn NarrowOp>,
}

impl OracleNode {
    pub fn new(initial: RationalInterval, op: Box<dyn NarrowOp>) -> Self {
        OracleNode {
            yes: RwLock::new(initial),
            gate: FairMutex::new(()),
            op,
        }
    }

    /// Non-blocking read of the latest knowledge.
    pub fn current(&self) -> RationalInterval {
        self.yes.read().clone()
    }

    /// Run one serialized narrowing request and install the result.
    pub fn narrow(&self, precision: &Rational) -> Result<Narrowed> {
        assert!(!precision.is_negative(), "precision must be non-negative");
        let _gate = self.gate.lock();

        let current = self.current();
        if current.width() <= *precision {
            return Ok(Narrowed::Within(current));
        }

        let refined = self.op.narrow(&current, precision)?;
        let installed = self.install(refined);
        Ok(if installed.width() <= *precision {
            Narrowed::Within(installed)
        } else {
            Narrowed::PrecisionUnreachable(installed)
        })
    }

    /// Replace `yes` with the tighter of the refined interval and the overlap
    /// with the previous one. Both contain the true value, so their
    /// intersection does too and is never looser than either.
    fn install(&self, refined: RationalInterval) -> RationalInterval {
        let mut yes = self.yes.write();
        let tightened = match refined.intersection(&yes) {
            Some(overlap) => overlap,
            None => {
                debug_assert!(false, "narrowing produced an interval disjoint from the previous bound");
                refined
            }
        };
        *yes = tightened.clone();
        tightened
    }
}
