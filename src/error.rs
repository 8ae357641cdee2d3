//! Error types shared by the rational, interval and oracle layers.

use thiserror::Error;

/// Errors surfaced by exact arithmetic and oracle construction/refinement.
///
/// Hitting an iteration or depth cap during narrowing is *not* an error: the
/// caller still receives the best interval achieved, tagged as
/// [`Narrowed::PrecisionUnreachable`][crate::Narrowed::PrecisionUnreachable].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Textual input does not match any accepted number grammar.
    #[error("invalid number format: {0:?}")]
    InvalidFormat(String),

    /// A divisor (or denominator) is exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An interval divisor contains zero without being exactly zero, so the
    /// quotient would be unbounded.
    #[error("interval divisor spans zero")]
    IntervalSpansZero,

    /// An indeterminate form such as 0^0.
    #[error("undefined value")]
    UndefinedValue,

    /// An oracle's denominator could not be narrowed away from zero within
    /// the requested precision.
    #[error("denominator cannot be separated from zero at the requested precision")]
    DivisionSingularity,
}

pub type Result<T> = core::result::Result<T, Error>;
