//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating integers far outside the machine word range
    fn huge_int() -> impl Strategy<Value = Integer> {
        ("-?[1-9][0-9]{40,80}").prop_map(|s| s.parse::<Integer>().unwrap())
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in huge_int(), b in huge_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_mul_associative(a in huge_int(), b in huge_int(), c in huge_int()) {
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn integer_distributive(a in huge_int(), b in huge_int(), c in huge_int()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn integer_additive_inverse(a in huge_int()) {
            let neg_a = -&a;
            prop_assert!((a + neg_a).is_zero());
        }

        // Mixed i64 operands agree with promoting the literal first

        #[test]
        fn mixed_ops_match_promoted(a in huge_int(), k in small_int()) {
            let promoted = Integer::new(k);
            prop_assert_eq!(&a + k, &a + &promoted);
            prop_assert_eq!(&a - k, &a - &promoted);
            prop_assert_eq!(k * &a, &promoted * &a);
            prop_assert_eq!(k - &a, &promoted - &a);
        }

        #[test]
        fn small_ops_match_i64(a in small_int(), b in small_int()) {
            prop_assert_eq!((Integer::new(a) * b).to_i64(), Some(a * b));
            prop_assert_eq!((Integer::new(a) - b).to_i64(), Some(a - b));
        }

        // Powers

        #[test]
        fn pow_is_repeated_multiplication(a in huge_int(), exp in 0u32..6) {
            let mut expected = Integer::new(1);
            for _ in 0..exp {
                expected = expected * &a;
            }
            prop_assert_eq!(a.pow(exp), expected);
        }

        #[test]
        fn square_is_never_negative(a in huge_int()) {
            prop_assert!(!a.square().is_negative());
        }

        // Text form

        #[test]
        fn display_parse_round_trip(a in huge_int()) {
            let text = a.to_string();
            prop_assert_eq!(text.parse::<Integer>(), Ok(a));
        }

        #[test]
        fn signum_matches_i64(a in small_int()) {
            prop_assert_eq!(i64::from(Integer::new(a).signum()), a.signum());
        }
    }
}
