//! Parsing of the textual rational forms: integer, fraction, decimal and
//! mixed number.

use core::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Pow, Zero};

use super::Rational;
use crate::error::{Error, Result};

impl FromStr for Rational {
    type Err = Error;

    /// Parse one of four forms, each with an optional leading sign:
    /// integer (`-3`), fraction (`22/7`), decimal (`1.25`) and mixed number
    /// (`1..2/3`, meaning `1 + 2/3`; the sign applies to the whole value).
    fn from_str(input: &str) -> Result<Self> {
        let s = input.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if body.is_empty() {
            return Err(invalid(input));
        }

        let value = if let Some((whole, fraction)) = body.split_once("..") {
            let (numer, denom) = fraction.split_once('/').ok_or_else(|| invalid(input))?;
            let whole = parse_digits(whole, input)?;
            let numer = parse_digits(numer, input)?;
            let denom = nonzero(parse_digits(denom, input)?)?;
            BigRational::from_integer(whole) + BigRational::new(numer, denom)
        } else if let Some((numer, denom)) = body.split_once('/') {
            let numer = parse_digits(numer, input)?;
            let denom = nonzero(parse_digits(denom, input)?)?;
            BigRational::new(numer, denom)
        } else if let Some((whole, fraction)) = body.split_once('.') {
            let whole = parse_digits(whole, input)?;
            let scale: BigInt = Pow::pow(&BigInt::from(10), fraction.len());
            let fraction = parse_digits(fraction, input)?;
            BigRational::new(whole * &scale + fraction, scale)
        } else {
            BigRational::from_integer(parse_digits(body, input)?)
        };

        Ok(Rational(if negative { -value } else { value }))
    }
}

fn invalid(input: &str) -> Error {
    Error::InvalidFormat(input.to_owned())
}

fn nonzero(denom: BigInt) -> Result<BigInt> {
    if denom.is_zero() {
        Err(Error::DivisionByZero)
    } else {
        Ok(denom)
    }
}

/// A non-empty run of ASCII digits; signs are only accepted at the front of
/// the whole input.
fn parse_digits(part: &str, input: &str) -> Result<BigInt> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input));
    }
    BigInt::parse_bytes(part.as_bytes(), 10).ok_or_else(|| invalid(input))
}
