//! Property tests for the batch validation engine.

use proptest::prelude::*;

use rowval_model::{FieldRule, Record, RuleSet, Scalar};
use rowval_validate::validate_batch;

const FIELDS: &[&str] = &["a", "b", "c", "d"];

/// Catalog names plus an unrecognized one, so Unknown dispatch is exercised.
const KIND_NAMES: &[&str] = &[
    "int",
    "int_gt",
    "int_gte",
    "int_lt",
    "int_lte",
    "int_positive",
    "int_non_negative",
    "int_multiple_of",
    "string",
    "email",
    "url",
    "uuid",
    "ipv4",
    "base64",
    "iso_date",
    "iso_datetime",
    "bogus_kind",
];

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<i64>().prop_map(Scalar::Int),
        "[a-z0-9@. -]{0,16}".prop_map(Scalar::Str),
        any::<bool>().prop_map(Scalar::Bool),
        (-1000.0f64..1000.0).prop_map(Scalar::Float),
    ]
}

fn record_strategy() -> impl Strategy<Value = Record> {
    proptest::collection::btree_map(
        proptest::sample::select(FIELDS).prop_map(str::to_string),
        scalar_strategy(),
        0..=FIELDS.len(),
    )
    .prop_map(|fields| fields.into_iter().collect())
}

fn rule_strategy() -> impl Strategy<Value = FieldRule> {
    (
        proptest::sample::select(KIND_NAMES),
        any::<i16>(),
        any::<i16>(),
    )
        .prop_map(|(kind, param1, param2)| {
            FieldRule::with_params(kind, i64::from(param1), i64::from(param2))
        })
}

fn rules_vec_strategy() -> impl Strategy<Value = Vec<(String, FieldRule)>> {
    proptest::collection::btree_map(
        proptest::sample::select(FIELDS).prop_map(str::to_string),
        rule_strategy(),
        0..=FIELDS.len(),
    )
    .prop_map(|rules| rules.into_iter().collect())
}

proptest! {
    /// Permuting rule evaluation order never changes any record's outcome,
    /// only which rule short-circuits it.
    #[test]
    fn outcomes_are_invariant_under_rule_order(
        records in proptest::collection::vec(record_strategy(), 0..8),
        (original, shuffled) in rules_vec_strategy().prop_flat_map(|rules| {
            let original = rules.clone();
            Just(rules)
                .prop_shuffle()
                .prop_map(move |shuffled| (original.clone(), shuffled))
        }),
    ) {
        let rules: RuleSet = original.into_iter().collect();
        let permuted: RuleSet = shuffled.into_iter().collect();

        let result = validate_batch(&records, &rules).unwrap();
        let permuted_result = validate_batch(&records, &permuted).unwrap();

        prop_assert_eq!(result.outcomes(), permuted_result.outcomes());
        prop_assert_eq!(result.valid_count(), permuted_result.valid_count());
    }

    /// The valid count is always the number of true outcomes.
    #[test]
    fn valid_count_matches_true_outcomes(
        records in proptest::collection::vec(record_strategy(), 0..8),
        rules_vec in rules_vec_strategy(),
    ) {
        let rules: RuleSet = rules_vec.into_iter().collect();
        let result = validate_batch(&records, &rules).unwrap();
        let true_count = result.outcomes().iter().filter(|outcome| **outcome).count();
        prop_assert_eq!(result.valid_count(), true_count);
        prop_assert_eq!(result.outcomes().len(), records.len());
    }

    /// Repeated calls over the same inputs return the same result.
    #[test]
    fn validation_is_deterministic(
        records in proptest::collection::vec(record_strategy(), 0..8),
        rules_vec in rules_vec_strategy(),
    ) {
        let rules: RuleSet = rules_vec.into_iter().collect();
        let first = validate_batch(&records, &rules).unwrap();
        let second = validate_batch(&records, &rules).unwrap();
        prop_assert_eq!(first, second);
    }

    /// An unknown-kind rule on an always-present field never flips a
    /// record that provides the field.
    #[test]
    fn unknown_rule_is_a_no_op_for_present_fields(
        records in proptest::collection::vec(record_strategy(), 0..8),
        rules_vec in rules_vec_strategy(),
    ) {
        // Restrict to records that carry every field, so the extra rule's
        // field lookup always succeeds.
        let full_records: Vec<Record> = records
            .into_iter()
            .filter(|record| FIELDS.iter().all(|field| record.contains(field)))
            .collect();

        let rules: RuleSet = rules_vec.clone().into_iter().collect();
        let mut with_unknown: RuleSet = rules_vec.into_iter().collect();
        with_unknown.insert("a", FieldRule::new("definitely_not_a_kind"));

        // Replacing field "a"'s rule with an unknown kind can only keep or
        // improve outcomes, never fail a record that was passing.
        let base = validate_batch(&full_records, &rules).unwrap();
        let lenient = validate_batch(&full_records, &with_unknown).unwrap();
        for (before, after) in base.outcomes().iter().zip(lenient.outcomes()) {
            prop_assert!(!before || *after);
        }
    }
}
