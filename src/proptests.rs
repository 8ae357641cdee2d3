//! Property-based tests for the exact arithmetic layers.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use proptest::prelude::*;

use crate::{Rational, RationalInterval};

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn rational() -> impl Strategy<Value = Rational> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn non_zero_rational() -> impl Strategy<Value = Rational> {
    (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn interval() -> impl Strategy<Value = RationalInterval> {
    (rational(), rational()).prop_map(|(a, b)| RationalInterval::new(a, b))
}

/// Endpoints and midpoint, the extremal and a generic inner sample.
fn samples(interval: &RationalInterval) -> Vec<Rational> {
    vec![
        interval.low().clone(),
        interval.midpoint(),
        interval.high().clone(),
    ]
}

proptest! {
    #[test]
    fn rational_is_reduced(n in small_int(), d in non_zero_int()) {
        let r = Rational::new(n, d).unwrap();
        prop_assert!(r.denom().is_positive());
        prop_assert_eq!(r.numer().gcd(r.denom()), BigInt::one());
    }

    #[test]
    fn rational_scaling_equivalence(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
        prop_assert_eq!(
            Rational::new(n, d).unwrap(),
            Rational::new(n * k, d * k).unwrap()
        );
    }

    #[test]
    fn rational_div_mul_round_trip(a in rational(), b in non_zero_rational()) {
        let quotient = a.checked_div(&b).unwrap();
        prop_assert_eq!(quotient * b, a);
    }

    #[test]
    fn rational_ordering_is_total(a in rational(), b in rational()) {
        let by_cross = (a.numer() * b.denom()).cmp(&(b.numer() * a.denom()));
        prop_assert_eq!(a.cmp(&b), by_cross);
    }

    #[test]
    fn interval_add_sub_contain_pointwise(a in interval(), b in interval()) {
        let sum = &a + &b;
        let difference = &a - &b;
        for x in samples(&a) {
            for y in samples(&b) {
                prop_assert!(sum.contains_value(&(&x + &y)));
                prop_assert!(difference.contains_value(&(&x - &y)));
            }
        }
    }

    #[test]
    fn interval_mul_contains_pointwise(a in interval(), b in interval()) {
        let product = &a * &b;
        for x in samples(&a) {
            for y in samples(&b) {
                prop_assert!(product.contains_value(&(&x * &y)));
            }
        }
    }

    #[test]
    fn interval_div_contains_pointwise(a in interval(), b in interval()) {
        prop_assume!(!b.contains_zero());
        let quotient = a.div(&b).unwrap();
        for x in samples(&a) {
            for y in samples(&b) {
                prop_assert!(quotient.contains_value(&x.checked_div(&y).unwrap()));
            }
        }
    }

    #[test]
    fn interval_pow_contains_pointwise(a in interval(), exp in 1i32..5) {
        let raised = a.pow(exp).unwrap();
        for x in samples(&a) {
            prop_assert!(raised.contains_value(&x.pow(exp).unwrap()));
        }
    }
}
