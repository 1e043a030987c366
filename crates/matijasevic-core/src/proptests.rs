//! Property-based tests for evaluation, conversion and generation.

#[cfg(test)]
mod tests {
    use matijasevic_integers::Integer;
    use num_traits::Zero;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::inputs::parse_clamped;
    use crate::{
        convert_inputs_to_parameters, convert_parameters_to_inputs, evaluate_polynomial,
        generate_random_parameters_with, ParameterKey, ParameterValues, RandomRange, ValueStatus,
        PARAMETER_CONDITION_TOTALS,
    };

    // Strategy for natural-number assignments of modest size
    fn small_values() -> impl Strategy<Value = ParameterValues> {
        proptest::collection::vec(0i64..20, ParameterKey::COUNT).prop_map(|v| {
            ParameterValues::from_fn(|key| Integer::new(v[key.index()]))
        })
    }

    // Strategy for integers with more than 50 digits, either sign
    fn huge_int() -> impl Strategy<Value = Integer> {
        ("-?[1-9][0-9]{50,70}").prop_map(|s| s.parse::<Integer>().unwrap())
    }

    fn huge_values() -> impl Strategy<Value = ParameterValues> {
        proptest::collection::vec(huge_int(), ParameterKey::COUNT).prop_map(|v| {
            ParameterValues::from_fn(|key| v[key.index()].clone())
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn evaluation_is_idempotent(values in small_values()) {
            prop_assert_eq!(evaluate_polynomial(&values), evaluate_polynomial(&values));
        }

        #[test]
        fn evaluation_is_idempotent_for_huge_inputs(values in huge_values()) {
            prop_assert_eq!(evaluate_polynomial(&values), evaluate_polynomial(&values));
        }

        #[test]
        fn aggregate_sign_law(values in small_values()) {
            let result = evaluate_polynomial(&values);
            let k = &values[ParameterKey::K];
            if result.partials.iter().all(|p| p.value.is_zero()) {
                prop_assert_eq!(&result.final_value.value, &(k + 2));
                prop_assert_eq!(result.final_value.status, ValueStatus::Positive);
            } else {
                prop_assert_ne!(result.final_value.status, ValueStatus::Positive);
            }
        }

        #[test]
        fn aggregate_matches_formula(values in small_values()) {
            let result = evaluate_polynomial(&values);
            let sum: Integer = result.partials.iter().map(|p| p.value.square()).sum();
            let expected = (&values[ParameterKey::K] + 2) * (1 - sum);
            prop_assert_eq!(result.final_value.value, expected);
        }

        #[test]
        fn statuses_match_values(values in small_values()) {
            let result = evaluate_polynomial(&values);
            for partial in &result.partials {
                prop_assert_eq!(partial.status, ValueStatus::of(&partial.value));
            }
        }

        #[test]
        fn tally_is_bounded_and_consistent(values in small_values()) {
            let result = evaluate_polynomial(&values);
            for (key, satisfied) in result.parameter_conditions.iter() {
                prop_assert!(satisfied <= PARAMETER_CONDITION_TOTALS[key]);
                let expected = result
                    .partials
                    .iter()
                    .filter(|p| p.is_satisfied() && p.parameters.contains(&key))
                    .count();
                prop_assert_eq!(satisfied as usize, expected);
            }
        }

        #[test]
        fn negative_text_clamps_to_zero(n in 1u64..u64::MAX, pad in "[ \t]{0,3}") {
            let text = format!("{pad}-{n}{pad}");
            prop_assert_eq!(parse_clamped(&text), Integer::zero());
        }

        #[test]
        fn unparsable_text_clamps_to_zero(text in "[1-9][0-9]{0,4}[a-z.,_/*][0-9a-z]{0,5}") {
            prop_assert_eq!(parse_clamped(&text), Integer::zero());
        }

        #[test]
        fn text_round_trip(values in huge_values()) {
            let back = convert_inputs_to_parameters(&convert_parameters_to_inputs(&values));
            // Lenient conversion clamps negatives, so compare against the clamped form.
            let clamped = ParameterValues::from_fn(|key| {
                let v = &values[key];
                if v.is_negative() { Integer::zero() } else { v.clone() }
            });
            prop_assert_eq!(back, clamped);

            let texts = convert_parameters_to_inputs(&values);
            for (key, text) in texts.iter() {
                prop_assert_eq!(text.map(|t| t.parse::<Integer>()), Some(Ok(values[key].clone())));
            }
        }

        #[test]
        fn random_values_respect_clamped_bounds(
            min in -1_000i64..1_000,
            max in -1_000i64..1_000,
            seed in any::<u64>()
        ) {
            let range = RandomRange::new(min, max);
            let (lo, hi) = range.effective_bounds();
            prop_assert!(lo >= 0 && hi >= lo);

            let values = generate_random_parameters_with(&mut ChaCha8Rng::seed_from_u64(seed), range);
            for (_, value) in values.iter() {
                prop_assert!(range.contains(value));
            }
        }
    }
}
