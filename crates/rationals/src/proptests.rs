//! Property-based tests for canonical rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::{Integer, Rational, RationalError, RationalRange};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn hash_of(r: &Rational) -> u64 {
        let mut hasher = DefaultHasher::new();
        r.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_canonical(
            n in any::<i64>(),
            d in any::<i64>().prop_filter("non-zero", |d| *d != 0)
        ) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(r.denominator().signum(), 1);
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
            prop_assert_eq!(r.signum(), Integer::new(n).signum() * Integer::new(d).signum());
        }

        #[test]
        fn zero_denominator_rejected(n in any::<i64>()) {
            prop_assert_eq!(Rational::from_i64(n, 0), Err(RationalError::DivisionByZero));
        }

        #[test]
        fn scaling_preserves_value(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            let scaled = Rational::from_i64(n * k, d * k).unwrap();
            prop_assert_eq!(r.numerator(), scaled.numerator());
            prop_assert_eq!(r.denominator(), scaled.denominator());
        }

        // Field laws

        #[test]
        fn add_identity(a in rational()) {
            prop_assert_eq!(a.add(&Rational::zero()), a);
        }

        #[test]
        fn mul_identity(a in rational()) {
            prop_assert_eq!(a.multiply(&Rational::one()), a);
        }

        #[test]
        fn additive_inverse(a in rational()) {
            prop_assert!(a.add(&a.negate()).is_zero());
        }

        #[test]
        fn multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::from_i64(n, d).unwrap();
            prop_assert!(a.multiply(&a.recip().unwrap()).is_one());
        }

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn divide_undoes_multiply(a in rational(), n in non_zero_int(), d in non_zero_int()) {
            let b = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(a.multiply(&b).divide(&b).unwrap(), a);
        }

        #[test]
        fn subtract_is_add_negate(a in rational(), b in rational()) {
            prop_assert_eq!(a.subtract(&b), a.add(&b.negate()));
        }

        // Formatting

        #[test]
        fn format_parse_round_trip(a in rational()) {
            let parsed: Rational = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed.numerator(), a.numerator());
            prop_assert_eq!(parsed.denominator(), a.denominator());
        }

        #[test]
        fn whole_numbers_format_without_denominator(n in any::<i64>()) {
            prop_assert_eq!(Rational::from(n).to_string(), n.to_string());
        }

        // Ordering

        #[test]
        fn trichotomy(a in rational(), b in rational()) {
            let holds = [a < b, a == b, a > b];
            prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        }

        #[test]
        fn ordering_matches_cross_multiplication(a in rational(), b in rational()) {
            let lhs = a.numerator() * b.denominator();
            let rhs = b.numerator() * a.denominator();
            prop_assert_eq!(a.compare(&b), lhs.cmp(&rhs));
        }

        #[test]
        fn equal_values_hash_equally(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            let a = Rational::from_i64(n, d).unwrap();
            let b = Rational::from_i64(n * k, d * k).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }

        // Ranges

        #[test]
        fn range_contains_endpoints_and_midpoint(a in rational(), b in rational()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let mid = (&lo + &hi) * Rational::from_i64(1, 2).unwrap();
            let range = RationalRange::new(lo.clone(), hi.clone()).unwrap();
            prop_assert!(range.contains(&lo));
            prop_assert!(range.contains(&hi));
            prop_assert!(range.contains(&mid));
            prop_assert!(!range.contains(&(&hi + &Rational::one())));
        }

        #[test]
        fn reversed_range_rejected(a in rational(), b in rational()) {
            let result = RationalRange::new(a.clone(), b.clone());
            match a.compare(&b) {
                Ordering::Greater => {
                    let is_invalid = matches!(result, Err(RationalError::InvalidRange { .. }));
                    prop_assert!(is_invalid);
                }
                _ => {
                    prop_assert!(result.is_ok());
                }
            }
        }
    }
}
