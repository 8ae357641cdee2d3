//! Decimal digit expansion of a rational, with detection of the repeating
//! tail.
//!
//! This is a pure function over its inputs; callers that need the expansion
//! repeatedly are expected to memoize it themselves.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use super::Rational;

/// Digit data of a rational number in base ten.
///
/// The value is `±(whole . initial_digits period_digits period_digits ...)`.
/// An empty `period_digits` together with `terminating == false` means the
/// digit budget ran out before the expansion resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalExpansion {
    pub negative: bool,
    pub whole: BigInt,
    pub initial_digits: Vec<u8>,
    pub period_digits: Vec<u8>,
    pub terminating: bool,
}

impl DecimalExpansion {
    #[inline]
    pub fn period_len(&self) -> usize {
        self.period_digits.len()
    }
}

/// Expand `value` by long division, stopping at a terminating remainder, a
/// repeated remainder (start of the period) or after `max_digits` fractional
/// digits.
pub fn decimal_expansion(value: &Rational, max_digits: usize) -> DecimalExpansion {
    let negative = value.is_negative();
    let denom = value.denom().clone();
    let (whole, mut rem) = value.numer().abs().div_rem(&denom);

    let ten = BigInt::from(10);
    let mut digits: Vec<u8> = Vec::new();
    let mut seen: HashMap<BigInt, usize> = HashMap::new();
    let mut period_start = None;

    while !rem.is_zero() && digits.len() < max_digits {
        if let Some(&at) = seen.get(&rem) {
            period_start = Some(at);
            break;
        }
        seen.insert(rem.clone(), digits.len());
        let (digit, next) = (&rem * &ten).div_rem(&denom);
        digits.push(digit.to_u8().unwrap());
        rem = next;
    }

    match period_start {
        Some(at) => DecimalExpansion {
            negative,
            whole,
            initial_digits: digits[..at].to_vec(),
            period_digits: digits[at..].to_vec(),
            terminating: false,
        },
        None => DecimalExpansion {
            negative,
            whole,
            initial_digits: digits,
            period_digits: Vec::new(),
            terminating: rem.is_zero(),
        },
    }
}
